use anyhow::Result;
use flowdeploy::StepKind;

use crate::ui::terminal::TerminalCapabilities;
use crate::ui::views::version::render_version;

pub fn cmd_version(json: bool) -> Result<i32> {
    let version = env!("CARGO_PKG_VERSION");

    if json {
        let steps: Vec<_> = StepKind::ALL
            .iter()
            .map(|step| {
                serde_json::json!({
                    "id": step.id(),
                    "fatal": step.policy().is_fatal(),
                })
            })
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "version",
            "version": version,
            "steps": steps,
        }))?;
    } else {
        let caps = TerminalCapabilities::detect();
        print!(
            "{}",
            render_version(version, caps.supports_color, caps.supports_unicode)
        );
    }

    Ok(0)
}
