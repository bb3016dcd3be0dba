//! Deploy environment value object
//!
//! The variables the sequencer exports to every command it runs. Passed
//! explicitly into each invocation instead of being written into the
//! sequencer's own process environment.

use serde::Serialize;

pub const PRODUCTION_DOMAIN: &str = "PRODUCTION_DOMAIN";
pub const PRODUCTION_URL: &str = "PRODUCTION_URL";

/// Ordered set of exported environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeployEnvironment {
    vars: Vec<(String, String)>,
}

impl DeployEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment carrying the production domain and URL
    pub fn for_domain(domain: impl Into<String>, url: impl Into<String>) -> Self {
        let mut env = Self::new();
        env.set(PRODUCTION_DOMAIN, domain);
        env.set(PRODUCTION_URL, url);
        env
    }

    /// Set a variable, replacing an earlier value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn domain(&self) -> Option<&str> {
        self.get(PRODUCTION_DOMAIN)
    }

    pub fn url(&self) -> Option<&str> {
        self.get(PRODUCTION_URL)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
