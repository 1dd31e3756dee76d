use clap::Parser;
use perm_todo::application::services::{Logger, PermutationService};
use perm_todo::infrastructure::line_source::FileLineSource;
use perm_todo::infrastructure::logger::ConsoleLogger;
use perm_todo::presentation::cli::PermuteCli;

/// Prints the sorted, deduplicated permutations of every non-blank line of a
/// file, one comma-separated line each. An unreadable file is logged and
/// produces no output.
fn main() {
    let cli = PermuteCli::parse();
    let service = PermutationService::new(Box::new(FileLineSource), Box::new(ConsoleLogger));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = cli.run(&service, &mut out) {
        ConsoleLogger.error(&format!("{:#}", err));
        std::process::exit(1);
    }
}
