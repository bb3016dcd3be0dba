//! Design tokens for the flowdeploy terminal UI
//!
//! Five semantic colors, and one glyph table per output mode. Every icon
//! and border character the UI prints comes from a [`Glyphs`] table.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Corner and edge characters of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    /// Step finished
    pub done: &'static str,
    /// Step failed and stopped the run
    pub failed: &'static str,
    /// Tolerated failure or preflight warning
    pub warning: &'static str,
    pub running: &'static str,
    pub skipped: &'static str,
    /// Prefix for commands and hints nested under a step
    pub nested: &'static str,
    pub run: &'static str,
    pub plan: &'static str,
    pub check: &'static str,
    pub frame: Frame,
}

pub const UNICODE: Glyphs = Glyphs {
    done: "✓",
    failed: "✗",
    warning: "⚠",
    running: "●",
    skipped: "○",
    nested: "↳",
    run: "🚀",
    plan: "📋",
    check: "🔍",
    frame: Frame {
        top_left: "╭",
        top_right: "╮",
        bottom_left: "╰",
        bottom_right: "╯",
        horizontal: "─",
        vertical: "│",
    },
};

/// Used when the locale is not UTF-8; integration tests match on these
pub const ASCII: Glyphs = Glyphs {
    done: "[OK]",
    failed: "[FAIL]",
    warning: "[WARN]",
    running: "[..]",
    skipped: "[SKIP]",
    nested: "[>]",
    run: "[DEPLOY]",
    plan: "[PLAN]",
    check: "[CHECK]",
    frame: Frame {
        top_left: "+",
        top_right: "+",
        bottom_left: "+",
        bottom_right: "+",
        horizontal: "-",
        vertical: "|",
    },
};

pub fn glyphs(supports_unicode: bool) -> &'static Glyphs {
    if supports_unicode {
        &UNICODE
    } else {
        &ASCII
    }
}
