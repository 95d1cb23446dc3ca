use comfy_table::{ContentArrangement, Table};

use roshambo_core::{Choice, Ruleset, ShorthandTable};

pub fn run() -> Result<(), String> {
    let rules = Ruleset::standard();
    let shorthand = ShorthandTable::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Choice", "Shorthand", "Defeats"]);

    for choice in Choice::ALL {
        let code = shorthand.code_for(choice).unwrap_or("-");
        let defeats = rules
            .defeats(choice)
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![choice.name(), code, defeats.as_str()]);
    }

    println!("{table}");
    println!();
    println!("  Matching choices draw; a match ends when either side reaches the win target.");

    Ok(())
}
