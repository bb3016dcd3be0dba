use flowdeploy::domain::services::{CheckStatus, PreflightItem};

use crate::ui::primitives::icon::Icon;

/// One preflight variable as a listing row, with a fix-up hint underneath
/// when the variable needs attention
#[derive(Debug, Clone, Copy)]
pub struct CheckLine<'a> {
    item: &'a PreflightItem,
}

impl<'a> CheckLine<'a> {
    pub fn new(item: &'a PreflightItem) -> Self {
        Self { item }
    }

    fn icon(&self) -> Icon {
        match self.item.status {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Warning => Icon::Warning,
            CheckStatus::Error => Icon::Error,
        }
    }

    fn hint(&self) -> Option<String> {
        let name = self.item.name.as_str();
        match self.item.status {
            CheckStatus::Pass => None,
            CheckStatus::Error => Some(format!("Set {} in the service environment", name)),
            CheckStatus::Warning => match name {
                "SECRET_KEY" => Some("Use a long random value for production".to_string()),
                "ALLOWED_HOSTS" => Some("Add the production domain to ALLOWED_HOSTS".to_string()),
                _ => None,
            },
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "  {} {} - {}\n",
            self.icon().colored(supports_color, supports_unicode),
            self.item.name,
            self.item.message
        );
        if let Some(hint) = self.hint() {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                hint
            ));
        }
        out
    }
}
