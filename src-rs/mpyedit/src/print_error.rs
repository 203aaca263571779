//! Error message formatting and display functionality

use anstream::eprintln;
use owo_colors::OwoColorize;

use crate::stylesheet;

/// Prints a formatted error message to standard error
pub fn print(message: &str) {
    let message_line = get_error_message_line(message);
    eprintln!("{message_line}");
}

/// Formats the main error message line
fn get_error_message_line(message: &str) -> String {
    // error: <message>
    let kind = stylesheet::ERROR_COLOR.style("error");
    let message_line = format!("{kind}: {message}");

    message_line.bold().to_string()
}
