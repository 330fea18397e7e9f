//! Styled terminal messages. Honors `NO_COLOR`.

use console::style;

/// Whether color output is disabled via the `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

#[must_use]
pub fn header_line(text: &str) -> String {
    if is_color_disabled() {
        format!("--- {text} ---")
    } else {
        style(format!("--- {text} ---")).bold().cyan().to_string()
    }
}

/// Tag marking a calculator row as succeeded or failed.
#[must_use]
pub fn status_tag(ok: bool) -> String {
    match (ok, is_color_disabled()) {
        (true, true) => "[OK]".to_string(),
        (false, true) => "[FAILED]".to_string(),
        (true, false) => style("[OK]").green().bold().to_string(),
        (false, false) => style("[FAILED]").red().bold().to_string(),
    }
}

/// An error message with its styled `Error:` label.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        format!("Error: {text}")
    } else {
        format!("{} {text}", style("Error:").red().bold())
    }
}
