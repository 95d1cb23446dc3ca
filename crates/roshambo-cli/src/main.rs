//! CLI frontend for the roshambo game engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "roshambo",
    about = "Rock, Paper, Scissors, Lizard, Spock against the computer",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive match against the computer
    Play {
        /// Win target: a number ("3") or a named mode ("best_of_3")
        #[arg(short, long, default_value = "1")]
        mode: String,

        /// RNG seed for reproducible opponent draws
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON file overriding entries of the built-in message catalog
        #[arg(long)]
        messages: Option<PathBuf>,
    },

    /// Show the win table and shorthand codes
    Rules,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            mode,
            seed,
            messages,
        } => commands::play::run(&mode, seed, messages.as_deref()),
        Commands::Rules => commands::rules::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
