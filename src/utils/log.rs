//! Terminal logging with colored module prefixes.
//!
//! ```ignore
//! log!("build"; "wrote {} pages", count);
//! log!("warn"; "no thumbnail found for example \"{}\"", slug);
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Columns assumed when the terminal size can't be queried (pipes, CI).
const FALLBACK_WIDTH: u16 = 120;

/// "[" + "]" + trailing space
const PREFIX_OVERHEAD: usize = 3;

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::utils::log::log($module, &format!($($arg)*))
    }};
}

fn terminal_width() -> usize {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(FALLBACK_WIDTH)) as usize
}

/// Write `[module] message` to stdout.
///
/// Progress lines are truncated to the terminal width; `warn` and `error`
/// lines are always printed whole.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let message = fit_message(module, message, terminal_width());

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

fn colorize_prefix(module: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "error" => prefix.bright_red().bold(),
        "warn" => prefix.bright_magenta().bold(),
        "init" | "check" => prefix.bright_blue().bold(),
        "build" => prefix.bright_green().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

fn fit_message<'a>(module: &str, message: &'a str, width: usize) -> &'a str {
    if is_diagnostic(module) {
        return message;
    }
    truncate_str(message, width.saturating_sub(module.len() + PREFIX_OVERHEAD))
}

fn is_diagnostic(module: &str) -> bool {
    module.eq_ignore_ascii_case("warn") || module.eq_ignore_ascii_case("error")
}

/// Cut `s` to at most `max_len` bytes without splitting a UTF-8 sequence.
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_fits() {
        assert_eq!(truncate_str("page", 10), "page");
        assert_eq!(truncate_str("page", 4), "page");
    }

    #[test]
    fn test_truncate_str_cuts() {
        assert_eq!(truncate_str("no thumbnail found", 12), "no thumbnail");
        assert_eq!(truncate_str("anything", 0), "");
    }

    #[test]
    fn test_truncate_str_respects_char_boundary() {
        // "é" is 2 bytes; cutting inside it backs off to the previous boundary
        assert_eq!(truncate_str("caté", 4), "cat");
        assert_eq!(truncate_str("caté", 5), "caté");
    }

    #[test]
    fn test_fit_message_truncates_progress() {
        let message = "a_long_example.py -> a-long-example.md";
        assert_eq!(fit_message("page", message, 20), "a_long_exampl");
        assert_eq!(fit_message("page", "short", 80), "short");
    }

    #[test]
    fn test_fit_message_keeps_warnings_whole() {
        let message = format!("no thumbnail found for example \"{}\"", "x".repeat(200));
        assert_eq!(fit_message("warn", &message, 80), message);
        assert_eq!(fit_message("error", &message, 10), message);
        assert_eq!(fit_message("WARN", &message, 0), message);
    }

    #[test]
    fn test_colorize_prefix_wraps_module_name() {
        colored::control::set_override(false);
        assert_eq!(colorize_prefix("warn").to_string(), "[warn]");
        assert_eq!(colorize_prefix("Build").to_string(), "[Build]");
    }
}
