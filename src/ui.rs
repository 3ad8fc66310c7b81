//! Centralized UI formatting and color utilities
//!
//! Status symbols and color helpers shared by the ugrid-check commands.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("UGRID_CHECK_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Colored verdict for one file: ✓ PASS (green) or ✗ FAIL (red).
pub fn verdict(passed: bool) -> ColoredString {
    if passed {
        "✓ PASS".green()
    } else {
        "✗ FAIL".red()
    }
}

/// Color scheme for text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (paths, check names)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }
}
