//! Terminal styling for route and range listings.

use std::io::IsTerminal;

/// ANSI escape codes used by the text renderers.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    // Tag colors (bold reverse video)
    /// Bold reverse green for STRT tags.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse yellow for JUMP tags.
    pub const TAG_JUMP: &str = "\x1b[1;7;33m";
    /// Bold reverse magenta for GOAL tags.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";

    /// Bright bold white for star names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for ids and decorations.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for distances.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for stars held by another player.
    pub const RED: &str = "\x1b[31m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_jump: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_jump: colors::TAG_JUMP,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_jump: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
            green: "",
            red: "",
        }
    }

    /// `colored()` when stdout is a color-capable terminal, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check whether ANSI colors should be written to stdout.
///
/// Honours `NO_COLOR` (https://no-color.org/) and `TERM=dumb`, and never
/// colors output that is piped or redirected.
#[must_use]
pub fn supports_color() -> bool {
    let term = std::env::var("TERM").ok();
    color_allowed(
        std::env::var_os("NO_COLOR").is_some(),
        term.as_deref(),
        std::io::stdout().is_terminal(),
    )
}

fn color_allowed(no_color: bool, term: Option<&str>, is_terminal: bool) -> bool {
    if no_color || !is_terminal {
        return false;
    }
    !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}

/// Format a light-year figure with two decimals, e.g. `12.00 ly`.
#[must_use]
pub fn format_light_years(light_years: f64) -> String {
    format!("{light_years:.2} ly")
}
