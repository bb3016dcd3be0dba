#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// Render a GitHub Actions workflow command (`::warning title=..::message`)
pub fn github_actions_annotation(level: AnnotationLevel, message: &str, title: Option<&str>) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let prop_str = title
        .map(|t| format!(" title={}", escape_property(t)))
        .unwrap_or_default();

    format!("::{}{}::{}", level_str, prop_str, escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_actions_annotation_escapes_newlines() {
        let rendered = github_actions_annotation(AnnotationLevel::Error, "Line1\nLine2", None);
        assert_eq!(rendered, "::error::Line1%0ALine2");
    }

    #[test]
    fn github_actions_annotation_with_title() {
        let rendered = github_actions_annotation(
            AnnotationLevel::Warning,
            "deployment readiness check failed: 100% broken",
            Some("flowdeploy: self-check"),
        );
        assert_eq!(
            rendered,
            "::warning title=flowdeploy%3A self-check::deployment readiness check failed: 100%25 broken"
        );
    }
}
