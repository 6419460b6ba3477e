//! Progress bar helpers using indicatif

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for batch resolution.
///
/// Hidden when stderr is not a terminal so piped runs stay clean.
pub fn create_progress_bar(len: u64, message: &str) -> ProgressBar {
    if !Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(message.to_string());
    pb
}

/// Finish a progress bar with a success message
pub fn finish_with_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✅ {}", message));
}
