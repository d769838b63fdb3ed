//! User interface module - interaction (prompts) and formatting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

pub use formatter::{
    display_bump_plan, display_error, display_manual_push_instruction, display_status,
    display_success,
};

/// Prompts user on the terminal to confirm an action with a yes/no prompt.
///
/// See [`confirm_with`] for the accepted answers.
pub fn confirm_action(prompt: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    confirm_with(prompt, &mut stdin.lock(), &mut stdout)
}

/// Asks `prompt` on `output` and reads a single answer line from `input`.
///
/// Accepts "y" or "yes" (case-insensitive, surrounding whitespace ignored) as
/// confirmation. Default is "no", including on end of input.
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, or "n"/"no")
/// * `Err` - If reading or writing fails
pub fn confirm_with<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    write!(output, "{} (y/N): ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    let response = answer.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
