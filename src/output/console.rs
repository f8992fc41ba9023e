//! Console output utilities.

use console::style;

use crate::download::RunStats;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    println!(
        "{}",
        style("twitter-imagedl - timeline image downloader").cyan().bold()
    );
}

/// Print the end-of-run summary.
pub fn print_run_summary(stats: &RunStats) {
    println!();
    println!("{}", style("Run summary:").bold());
    println!("  Image URLs found: {}", stats.urls_found);
    println!("  Downloaded: {}", style(stats.downloaded).green());
    if stats.failed > 0 {
        println!("  Failed: {}", style(stats.failed).red());
    }
    println!();
}
