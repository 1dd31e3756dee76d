use crate::application::services::Logger;
use colored::Colorize;

/// Level-tagged, coloured lines on stderr
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        eprintln!("{} {}", "INFO".cyan().bold(), message.cyan());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "ERROR".red().bold(), message.red());
    }
}
