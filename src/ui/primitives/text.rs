use crossterm::style::{Color, Stylize};

use crate::ui::theme::colors;

/// Wraps `text` in ANSI color codes, or returns it untouched when color is off
pub fn paint(text: &str, color: Color, supports_color: bool) -> String {
    if supports_color {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

/// A span of log text in one of the theme colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Color,
    bold: bool,
}

macro_rules! semantic_constructors {
    ($($name:ident => $color:expr),* $(,)?) => {
        $(
            pub fn $name(text: impl Into<String>) -> Self {
                Self {
                    text: text.into(),
                    color: $color,
                    bold: false,
                }
            }
        )*
    };
}

impl ColoredText {
    semantic_constructors! {
        success => colors::SUCCESS,
        error => colors::ERROR,
        warning => colors::WARNING,
        info => colors::INFO,
        dim => colors::DIM,
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || !self.bold {
            return paint(&self.text, self.color, supports_color);
        }
        self.text.as_str().with(self.color).bold().to_string()
    }
}
