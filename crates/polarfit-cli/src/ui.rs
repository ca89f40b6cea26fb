//! Terminal styling for polar reports.

use console::{style, Color};

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// A section title underlined to its own width.
fn section_heading(title: &str) -> String {
    let width = title.chars().count().max(1);
    format!("{title}\n{}", "-".repeat(width))
}

/// Stderr line tagged with a severity marker, e.g. `warning: polar opens upward`.
fn tagged(tag: &str, color: Color, text: &str) -> String {
    if is_color_disabled() {
        format!("{tag}: {text}")
    } else {
        format!("{}: {text}", style(tag).fg(color).bold())
    }
}

/// Print a report section heading.
pub fn print_header(title: &str) {
    let heading = section_heading(title);
    if is_color_disabled() {
        println!("{heading}");
    } else {
        println!("{}", style(heading).bold().cyan());
    }
}

/// Print a warning about the fitted polar to stderr.
pub fn print_warning(text: &str) {
    eprintln!("{}", tagged("warning", Color::Yellow, text));
}

/// Print a failed fit or bad option to stderr.
pub fn print_error(text: &str) {
    eprintln!("{}", tagged("error", Color::Red, text));
}
