//! Console rendering for `flowdeploy check`

use flowdeploy::domain::services::PreflightReport;

use crate::ui::blocks::check_item::CheckLine;
use crate::ui::blocks::header::{CommandHeader, HeaderKind};
use crate::ui::blocks::summary::ResultSummary;

pub fn render_check_header(
    domain: Option<&str>,
    strict_warnings: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let header = CommandHeader::new(HeaderKind::Check)
        .field("Domain", domain.unwrap_or("(not configured)"));
    let header = if strict_warnings {
        header.field("Strict", "failing on warnings")
    } else {
        header
    };
    header.render(supports_color, supports_unicode)
}

pub fn render_check_report(
    report: &PreflightReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    report
        .items
        .iter()
        .map(|item| CheckLine::new(item).render(supports_color, supports_unicode))
        .collect()
}

pub fn render_check_summary(
    report: &PreflightReport,
    has_issues: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if has_issues {
        ResultSummary::failure("Check FAILED")
    } else if report.warnings() > 0 {
        ResultSummary::partial("Check passed with warnings")
    } else {
        ResultSummary::success("All checks passed")
    };

    summary.add_stat("passed", report.passes());
    summary.add_stat("warnings", report.warnings());
    summary.add_stat("errors", report.errors());
    if !has_issues {
        summary.with_next_step("Run `flowdeploy run` to deploy");
    }

    summary.render(supports_color, supports_unicode)
}
