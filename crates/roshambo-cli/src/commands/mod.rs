pub mod play;
pub mod rules;

/// Print a message with the standard `==> ` prompt prefix.
pub fn prompt(message: &str) {
    println!("==> {message}");
}

/// Print a message framed in a `+---+` box to set it apart from prompts.
pub fn boxed(message: &str) {
    let border = format!("+{}+", "-".repeat(message.len() + 2));
    println!("{border}");
    println!("| {message} |");
    println!("{border}");
}
