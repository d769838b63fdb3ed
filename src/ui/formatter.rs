//! Pure formatting functions for UI output.
//!
//! Colors come from `console`, which drops them automatically when the
//! stream is not a terminal.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Lines describing a pending bump, shown before asking for confirmation.
pub fn bump_plan_lines(current: &str, bump: &str, next: &str, message: &str) -> Vec<String> {
    vec![
        format!("Current version: {}", current),
        format!("Creating {} release: {}", bump, next),
        format!("Message: {}", message),
    ]
}

/// Display the pending bump.
pub fn display_bump_plan(current: &str, bump: &str, next: &str, message: &str) {
    for line in bump_plan_lines(current, bump, next, message) {
        println!("{}", line);
    }
}

/// Display manual push instruction for a tag created locally only.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}
