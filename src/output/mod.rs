//! Console output module.

pub mod console;
pub mod progress;

pub use console::{print_banner, print_error, print_info, print_run_summary, print_warning};
pub use progress::download_progress_bar;
