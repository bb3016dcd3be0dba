use flowdeploy::FlowdeployError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::terminal::TerminalCapabilities;

/// Follow-up hint for errors the operator can fix directly
fn hint(err: &FlowdeployError) -> Option<&'static str> {
    match err {
        FlowdeployError::InvalidConfig { .. } => {
            Some("Fix the config file, then run `flowdeploy plan` to confirm it parses")
        }
        FlowdeployError::ConfigNotFound { .. } => Some("Check the path passed to --config"),
        FlowdeployError::AlreadyRunning { .. } => {
            Some("Wait for the other deployment to finish before starting a new one")
        }
        FlowdeployError::ProjectNotFound { .. } => {
            Some("Pass the application directory with -C/--project-dir")
        }
        FlowdeployError::MissingDomain | FlowdeployError::Io(_) => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("[ERROR] {:#}\n", err);
    if let Some(hint) = err.downcast_ref::<FlowdeployError>().and_then(hint) {
        out.push_str(&format!("        {}\n", hint));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    if TerminalCapabilities::detect().github_actions {
        println!(
            "{}",
            github_actions_annotation(AnnotationLevel::Error, &format!("{:#}", err), Some("flowdeploy"))
        );
    }

    eprint!("{}", format_error(err));
}
