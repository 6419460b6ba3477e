//! Terminal styling for status lines written to stderr

use console::{style, Emoji};

pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!(
        "    {} {}",
        style("✓").green().bold().for_stderr(),
        style(message).green().for_stderr()
    );
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("    {} {}", WARN, style(message).yellow().for_stderr());
}

/// Print how many inputs produced a path
pub fn print_resolve_summary(resolved: usize, total: usize) {
    let unresolved = total - resolved;
    if unresolved == 0 {
        print_success(&format!("Resolved all {} name(s)", total));
    } else {
        print_warning(&format!(
            "Resolved {} of {} name(s), {} could not be resolved",
            style(resolved).bold().for_stderr(),
            total,
            style(unresolved).yellow().bold().for_stderr()
        ));
    }
}
