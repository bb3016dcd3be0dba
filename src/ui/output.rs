use flowdeploy::config::{ConfigWarning, ConfigWarningKind};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Print config warnings to stderr, keeping stdout clean for `--json`
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    eprint!("{}", format_config_warnings(warnings, ui.unicode));
}

fn format_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) -> String {
    let icon = Icon::Warning.render(supports_unicode);
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };

        match w.kind {
            ConfigWarningKind::UnknownKey => {
                out.push_str(&format!(
                    "{} Unknown config key '{}' in {}\n",
                    icon, w.path, location
                ));
                if let Some(suggestion) = &w.suggestion {
                    out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
                }
            }
            ConfigWarningKind::ReservedVariable => {
                out.push_str(&format!(
                    "{} Ignoring '{}' in {}: {} is always set by flowdeploy\n",
                    icon, w.path, location, w.key
                ));
                if let Some(key) = &w.suggestion {
                    out.push_str(&format!("   Set `{}` under [deploy] instead\n", key));
                }
            }
        }
    }
    out
}
