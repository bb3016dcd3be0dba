//! Environment preflight service
//!
//! Checks the runtime variables the deployed application needs. Values are
//! inspected but never reported, since most of them are secrets.

use serde::Serialize;

/// Minimum length for a production secret key
pub const MIN_SECRET_KEY_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreflightItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
}

impl PreflightItem {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PreflightReport {
    pub items: Vec<PreflightItem>,
}

impl PreflightReport {
    fn count(&self, status: CheckStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }
}

/// Check each required variable through `lookup`.
///
/// `domain` is the production domain, used to verify `ALLOWED_HOSTS`.
pub fn check_environment(
    required: &[String],
    domain: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PreflightReport {
    let items = required
        .iter()
        .map(|name| match lookup(name).filter(|v| !v.trim().is_empty()) {
            None => PreflightItem::new(name, CheckStatus::Error, "not set"),
            Some(value) => check_value(name, &value, domain),
        })
        .collect();

    PreflightReport { items }
}

fn check_value(name: &str, value: &str, domain: Option<&str>) -> PreflightItem {
    match name {
        "SECRET_KEY" if value.chars().count() < MIN_SECRET_KEY_LEN => PreflightItem::new(
            name,
            CheckStatus::Warning,
            format!("set, but shorter than {} characters", MIN_SECRET_KEY_LEN),
        ),
        "ALLOWED_HOSTS" => match domain {
            Some(domain) if !host_allowed(value, domain) => PreflightItem::new(
                name,
                CheckStatus::Warning,
                format!("set, but does not include {}", domain),
            ),
            _ => PreflightItem::new(name, CheckStatus::Pass, "set"),
        },
        _ => PreflightItem::new(name, CheckStatus::Pass, "set"),
    }
}

/// Host matching in the framework's style: exact, `*`, or `.suffix` wildcard
fn host_allowed(allowed_hosts: &str, domain: &str) -> bool {
    let domain = domain.to_ascii_lowercase();
    allowed_hosts
        .split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .filter(|h| !h.is_empty())
        .any(|pattern| {
            pattern == "*"
                || pattern == domain
                || (pattern.starts_with('.')
                    && (domain.ends_with(&pattern) || domain == pattern[1..]))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn required() -> Vec<String> {
        ["SECRET_KEY", "ENCRYPTION_SALT", "ALLOWED_HOSTS", "EMAIL_HOST_PASSWORD"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn all_missing_are_errors() {
        let report = check_environment(&required(), None, lookup(&[]));
        assert_eq!(report.errors(), 4);
        assert!(!report.is_success());
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let report = check_environment(
            &["EMAIL_HOST_PASSWORD".to_string()],
            None,
            lookup(&[("EMAIL_HOST_PASSWORD", "  ")]),
        );
        assert_eq!(report.items[0].status, CheckStatus::Error);
    }

    #[test]
    fn complete_environment_passes() {
        let key = "k".repeat(64);
        let report = check_environment(
            &required(),
            Some("invoices.example.com"),
            lookup(&[
                ("SECRET_KEY", key.as_str()),
                ("ENCRYPTION_SALT", "salt"),
                ("ALLOWED_HOSTS", "localhost,invoices.example.com"),
                ("EMAIL_HOST_PASSWORD", "hunter2"),
            ]),
        );
        assert_eq!(report.passes(), 4);
        assert!(report.is_success());
    }

    #[test]
    fn short_secret_key_warns_without_leaking_value() {
        let report = check_environment(
            &["SECRET_KEY".to_string()],
            None,
            lookup(&[("SECRET_KEY", "tooshort")]),
        );
        assert_eq!(report.warnings(), 1);
        assert!(report.is_success());
        assert!(!report.items[0].message.contains("tooshort"));
    }

    #[test]
    fn allowed_hosts_must_cover_domain() {
        let report = check_environment(
            &["ALLOWED_HOSTS".to_string()],
            Some("invoices.example.com"),
            lookup(&[("ALLOWED_HOSTS", "localhost")]),
        );
        assert_eq!(report.items[0].status, CheckStatus::Warning);
    }

    #[test]
    fn host_patterns() {
        assert!(host_allowed("*", "a.example.com"));
        assert!(host_allowed(".example.com", "a.example.com"));
        assert!(host_allowed(".example.com", "example.com"));
        assert!(host_allowed(" A.Example.com ,b", "a.example.com"));
        assert!(!host_allowed("example.com", "a.example.com"));
        assert!(!host_allowed("", "a.example.com"));
    }
}
