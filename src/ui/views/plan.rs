//! Console rendering for `flowdeploy plan`

use std::path::Path;

use flowdeploy::{SequencePlan, StepKind};

use crate::ui::blocks::header::{CommandHeader, HeaderKind};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_plan(
    plan: &SequencePlan,
    project_dir: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (c, u) = (supports_color, supports_unicode);

    let exported: Vec<&str> = plan.environment.iter().map(|(k, _)| k).collect();
    let mut out = CommandHeader::new(HeaderKind::Plan)
        .field("Project", project_dir.display().to_string())
        .field_opt("Domain", plan.environment.domain())
        .field_opt("URL", plan.environment.url())
        .field("Exports", exported.join(", "))
        .render(c, u);
    out.push('\n');

    for step in &plan.steps {
        let counter = format!("[{}/{}]", step.kind.position(), StepKind::ALL.len());
        match step.skip_reason() {
            Some(reason) => {
                out.push_str(&format!(
                    "{} {} {} ({})\n",
                    Icon::Skipped.colored(c, u),
                    counter,
                    ColoredText::dim(format!("{} skipped", step.kind)).render(c),
                    reason
                ));
            }
            None => {
                let tolerance = if step.kind.policy().is_fatal() {
                    ""
                } else {
                    " (failure tolerated)"
                };
                out.push_str(&format!(
                    "{} {} {}{}\n",
                    Icon::Progress.colored(c, u),
                    counter,
                    ColoredText::info(step.kind.id()).bold().render(c),
                    tolerance
                ));
                for command in &step.commands {
                    out.push_str(&format!(
                        "  {} {}\n",
                        Icon::Arrow.colored(c, u),
                        command.display()
                    ));
                }
            }
        }
    }

    out
}

/// Machine-readable plan; exported variable values are omitted
pub fn plan_json(plan: &SequencePlan, project_dir: &Path) -> serde_json::Value {
    let exports: Vec<&str> = plan.environment.iter().map(|(k, _)| k).collect();
    serde_json::json!({
        "event": "plan",
        "command": "plan",
        "project_dir": project_dir.display().to_string(),
        "domain": plan.environment.domain(),
        "url": plan.environment.url(),
        "exports": exports,
        "steps": plan
            .steps
            .iter()
            .map(|step| {
                let mut value = serde_json::to_value(step).unwrap_or_default();
                value["fatal"] = serde_json::Value::Bool(step.kind.policy().is_fatal());
                value
            })
            .collect::<Vec<_>>(),
    })
}
