use crate::ui::primitives::text::paint;
use crate::ui::theme::{self, Glyphs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Skipped,
    Arrow,
    Deploy,
    Plan,
    Check,
}

impl Icon {
    fn pick(self, g: &'static Glyphs) -> &'static str {
        match self {
            Icon::Success => g.done,
            Icon::Error => g.failed,
            Icon::Warning => g.warning,
            Icon::Progress => g.running,
            Icon::Skipped => g.skipped,
            Icon::Arrow => g.nested,
            Icon::Deploy => g.run,
            Icon::Plan => g.plan,
            Icon::Check => g.check,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        self.pick(theme::glyphs(supports_unicode))
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Skipped | Icon::Arrow => theme::colors::DIM,
            Icon::Deploy | Icon::Plan | Icon::Check => theme::colors::INFO,
        };
        paint(self.render(supports_unicode), color, supports_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_mode_uses_bracketed_tags() {
        assert_eq!(Icon::Success.render(false), "[OK]");
        assert_eq!(Icon::Skipped.render(false), "[SKIP]");
        assert_eq!(Icon::Deploy.render(false), "[DEPLOY]");
    }

    #[test]
    fn unicode_mode_reads_the_unicode_table() {
        assert_eq!(Icon::Warning.render(true), theme::UNICODE.warning);
    }

    #[test]
    fn colored_icon_is_plain_without_color_support() {
        assert_eq!(Icon::Error.colored(false, false), "[FAIL]");
        assert!(Icon::Error.colored(true, true).contains("\u{1b}["));
    }
}
