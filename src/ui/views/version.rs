use flowdeploy::StepKind;

use crate::ui::widgets::panel::{Panel, PanelStyle};

pub fn render_version(version: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut panel = Panel::with_style(PanelStyle::Info);
    panel.add_line(format!("flowdeploy v{}", version));
    panel.add_empty();
    panel.add_line("Steps:");
    for step in StepKind::ALL {
        let policy = if step.policy().is_fatal() {
            "fatal"
        } else {
            "tolerated"
        };
        panel.add_line(format!("  {}. {:<16} {}", step.position(), step.id(), policy));
    }
    panel.render(supports_color, supports_unicode)
}
