// Rust guideline compliant 2026-02-06

//! Terminal UI utilities for the prready binaries.
//!
//! This module provides color support detection and colored status lines.
//! Status lines go to stderr, so color detection looks at stderr too.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// Terminal bell.
pub const BELL: &str = "\x07";

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    color_enabled(
        env::var_os("NO_COLOR").is_some(),
        atty::is(atty::Stream::Stderr),
    )
}

/// Color is used only on a terminal and only without `NO_COLOR`.
pub fn color_enabled(no_color: bool, stderr_is_tty: bool) -> bool {
    !no_color && stderr_is_tty
}

/// Maps the color decision onto a termcolor choice.
pub fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Writes a status line with a colored prefix, then resets the color.
///
/// # Arguments
/// * `out` - Destination stream
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn write_status(out: &mut dyn WriteColor, prefix: &str, prefix_color: Color, message: &str) {
    let _ = out.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(out, "{} ", prefix);
    let _ = out.reset();
    let _ = writeln!(out, "{}", message);
}

/// Writes a success message.
pub fn write_success(out: &mut dyn WriteColor, message: &str) {
    write_status(out, "✓", Color::Green, message);
}

/// Writes an error message.
pub fn write_error(out: &mut dyn WriteColor, message: &str) {
    write_status(out, "✗", Color::Red, message);
}

/// Writes a warning message.
pub fn write_warning(out: &mut dyn WriteColor, message: &str) {
    write_status(out, "⚠", Color::Yellow, message);
}

/// Writes an info message.
pub fn write_info(out: &mut dyn WriteColor, message: &str) {
    write_status(out, "ℹ", Color::Cyan, message);
}

/// Rings the terminal bell and resets any lingering formatting.
pub fn ring_bell(out: &mut dyn WriteColor) {
    let _ = out.reset();
    let _ = write!(out, "{}", BELL);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    #[test]
    fn test_color_enabled() {
        assert!(color_enabled(false, true));
        assert!(!color_enabled(true, true));
        assert!(!color_enabled(false, false));
    }

    #[test]
    fn test_should_use_color_follows_stderr() {
        if env::var_os("NO_COLOR").is_none() {
            assert_eq!(should_use_color(), atty::is(atty::Stream::Stderr));
        } else {
            assert!(!should_use_color());
        }
    }

    #[test]
    fn test_color_choice_never_when_disabled() {
        assert_eq!(color_choice(false), ColorChoice::Never);
    }

    #[test]
    fn test_write_status_plain() {
        let mut buffer = Buffer::no_color();
        write_success(&mut buffer, "Build passed");
        assert_eq!(String::from_utf8_lossy(buffer.as_slice()), "✓ Build passed\n");
    }

    #[test]
    fn test_write_status_colored_resets() {
        let mut buffer = Buffer::ansi();
        write_error(&mut buffer, "Build failed");
        let out = String::from_utf8_lossy(buffer.as_slice()).to_string();
        assert!(out.contains("\x1b[0m"));
        assert!(out.ends_with("Build failed\n"));
    }

    #[test]
    fn test_ring_bell() {
        let mut buffer = Buffer::no_color();
        ring_bell(&mut buffer);
        assert_eq!(buffer.as_slice(), BELL.as_bytes());
    }
}
