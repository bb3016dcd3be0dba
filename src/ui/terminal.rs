//! What the attached terminal can display

use is_terminal::IsTerminal;

/// Variables whose presence marks a CI runner or a hosted build
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "RENDER",
];

/// Checked in order; the first non-empty one decides the encoding
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    pub github_actions: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    pub fn from_env(lookup: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let dumb = lookup("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

        let utf8_locale = LOCALE_VARS
            .iter()
            .find_map(|key| lookup(key).filter(|v| !v.is_empty()))
            .map(|locale| {
                let locale = locale.to_lowercase();
                locale.contains("utf-8") || locale.contains("utf8")
            })
            // nothing set: assume a modern terminal
            .unwrap_or(true);

        Self {
            supports_color: stdout_is_tty && !dumb && lookup("NO_COLOR").is_none(),
            supports_unicode: !dumb && utf8_locale,
            is_ci: CI_MARKERS.iter().any(|key| lookup(key).is_some()),
            github_actions: lookup("GITHUB_ACTIONS").as_deref() == Some("true"),
        }
    }
}
