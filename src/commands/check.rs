use anyhow::Result;
use flowdeploy::check_environment;
use flowdeploy::domain::services::CheckStatus;

use super::{GlobalOptions, Session};
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::json;

pub fn cmd_check(global: &GlobalOptions, strict_warnings: bool) -> Result<i32> {
    let session = Session::open(global)?;
    let config = &session.loaded.config;
    let ui = session.ui;

    // The domain is optional here; without one ALLOWED_HOSTS is only checked for presence
    let domain = config
        .deploy_environment(|key| std::env::var(key).ok())
        .ok()
        .and_then(|env| env.domain().map(str::to_string));

    let report = check_environment(&config.preflight.required, domain.as_deref(), |key| {
        std::env::var(key).ok()
    });

    let has_issues = if strict_warnings {
        report.errors() > 0 || report.warnings() > 0
    } else {
        report.errors() > 0
    };

    if ui.json {
        let mut out = std::io::stdout().lock();
        for item in &report.items {
            let event = json::event(
                "check",
                "check",
                serde_json::json!({
                    "name": item.name,
                    "status": item.status,
                    "message": item.message,
                }),
            );
            json::write_event(&mut out, &event)?;
        }
        let complete = json::event(
            "complete",
            "check",
            serde_json::json!({
                "strict_warnings": strict_warnings,
                "passes": report.passes(),
                "warnings": report.warnings(),
                "errors": report.errors(),
                "success": !has_issues,
            }),
        );
        json::write_event(&mut out, &complete)?;
    } else {
        print!(
            "{}",
            crate::ui::views::check::render_check_header(
                domain.as_deref(),
                strict_warnings,
                ui.color,
                ui.unicode
            )
        );
        println!();
        print!(
            "{}",
            crate::ui::views::check::render_check_report(&report, ui.color, ui.unicode)
        );
        print!(
            "\n{}",
            crate::ui::views::check::render_check_summary(&report, has_issues, ui.color, ui.unicode)
        );

        if ui.caps.github_actions {
            for item in &report.items {
                let level = match item.status {
                    CheckStatus::Pass => continue,
                    CheckStatus::Warning => AnnotationLevel::Warning,
                    CheckStatus::Error => AnnotationLevel::Error,
                };
                let title = format!("flowdeploy check {}", item.name);
                println!(
                    "{}",
                    github_actions_annotation(level, &item.message, Some(&title))
                );
            }
        }
    }

    Ok(if has_issues { 1 } else { 0 })
}
