//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// Section title, styled unless colour is disabled.
#[must_use]
pub fn section(text: &str) -> String {
    if is_color_disabled() {
        format!("== {text} ==")
    } else {
        style(format!("== {text} ==")).bold().cyan().to_string()
    }
}

/// Emphasised inline value.
#[must_use]
pub fn highlight(text: &str) -> String {
    if is_color_disabled() {
        text.to_string()
    } else {
        style(text).bold().to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
