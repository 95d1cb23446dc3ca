use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use colored::Colorize;

use roshambo_core::{
    Choice, GameConfig, GameError, GameMode, MatchSession, MessageCatalog, RoundOutcome,
    SessionResult,
};

use super::{boxed, prompt};

pub fn run(mode: &str, seed: u64, messages: Option<&Path>) -> Result<(), String> {
    let mode = GameMode::parse(mode).map_err(|e| e.to_string())?;
    let catalog = load_catalog(messages)?;
    let config = GameConfig::default().with_mode(mode).with_seed(seed);
    let mut session = MatchSession::new(config);

    let choices = Choice::ALL
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ");

    println!("{}", say(&catalog, "welcome", &[])?.bold());
    println!("  Mode: {mode} | Seed: {seed}");
    println!("  Type 'quit' to leave at any time.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        prompt(&say(&catalog, "choose_prompt", &[("choices", &choices)])?);

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match session.play(input) {
            Ok(report) => {
                let challenger = report.challenger.name();
                let opponent = report.opponent.name();
                prompt(&say(&catalog, "user_choice", &[("challenger_choice", challenger)])?);
                prompt(&say(&catalog, "computer_choice", &[("opponent_choice", opponent)])?);

                let result_key = match report.outcome {
                    RoundOutcome::Win => "user_wins",
                    RoundOutcome::Loss => "user_loses",
                    RoundOutcome::Draw => "result_draw",
                };
                boxed(&say(
                    &catalog,
                    result_key,
                    &[
                        ("challenger_choice", challenger),
                        ("opponent_choice", opponent),
                    ],
                )?);

                let challenger_score = report.score.challenger().to_string();
                let opponent_score = report.score.opponent().to_string();
                if mode.target() > 1 {
                    prompt(&say(
                        &catalog,
                        "score",
                        &[
                            ("challenger_score", &challenger_score),
                            ("opponent_score", &opponent_score),
                        ],
                    )?);
                }

                if let Some(result) = report.session_result {
                    let winner = match result {
                        SessionResult::ChallengerWon => "You",
                        SessionResult::OpponentWon => "The computer",
                    };
                    boxed(&say(
                        &catalog,
                        "grand_winner",
                        &[
                            ("winner", winner),
                            ("challenger_score", &challenger_score),
                            ("opponent_score", &opponent_score),
                        ],
                    )?);

                    prompt(&say(&catalog, "continue_playing", &[])?);
                    line.clear();
                    match reader.read_line(&mut line) {
                        Ok(0) => break,
                        Err(e) => return Err(e.to_string()),
                        _ => {}
                    }
                    let answer = line.trim().to_lowercase();
                    if answer == "y" || answer == "yes" {
                        session.reset();
                        println!();
                    } else {
                        break;
                    }
                }
            }
            Err(GameError::InvalidChoice(_)) => {
                println!("{}", say(&catalog, "error_invalid", &[])?.yellow());
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    prompt(&say(&catalog, "thanks_for_playing", &[])?);
    Ok(())
}

/// Render a catalog entry, mapping engine errors to CLI errors.
fn say(catalog: &MessageCatalog, key: &str, args: &[(&str, &str)]) -> Result<String, String> {
    catalog.render(key, args).map_err(|e| e.to_string())
}

/// The built-in catalog, with entries from a user-supplied JSON file
/// layered on top.
fn load_catalog(path: Option<&Path>) -> Result<MessageCatalog, String> {
    let mut catalog = MessageCatalog::default();
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let custom = MessageCatalog::from_json_str(&text).map_err(|e| e.to_string())?;
        catalog.merge(custom);
    }
    Ok(catalog)
}
