use colored::Colorize;

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "Error:".bold().red(), message.red());
}
