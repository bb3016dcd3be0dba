//! Console rendering for `flowdeploy run`
//!
//! The step log is streamed as events arrive so it interleaves correctly
//! with the output of the commands themselves. The closing summary is
//! rendered from the finished `SequenceResult`.

use std::cell::RefCell;
use std::io::{self, Write};
use std::time::Duration;

use flowdeploy::application::{SequenceResult, StepOutcome};
use flowdeploy::domain::ports::{SequenceEvent, SequenceEventSink};
use flowdeploy::StepKind;

use crate::ui::blocks::header::{CommandHeader, HeaderKind};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Human-readable step log
pub struct ConsoleEventSink {
    ui: UiContext,
    out: RefCell<Box<dyn Write>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            out: RefCell::new(Box::new(writer)),
        }
    }
}

impl SequenceEventSink for ConsoleEventSink {
    fn on_event(&self, event: SequenceEvent) {
        let rendered = render_event(&event, &self.ui);
        if rendered.is_empty() {
            return;
        }
        let mut out = self.out.borrow_mut();
        let _ = out.write_all(rendered.as_bytes());
        let _ = out.flush();
    }
}

fn counter(step: StepKind) -> String {
    format!("[{}/{}]", step.position(), StepKind::ALL.len())
}

fn format_duration(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f64())
}

/// Render one event as zero or more log lines
pub fn render_event(event: &SequenceEvent, ui: &UiContext) -> String {
    let (c, u) = (ui.color, ui.unicode);

    match event {
        SequenceEvent::Started {
            project_dir,
            domain,
            dry_run,
            ..
        } => {
            if ui.quiet {
                return String::new();
            }
            let header = CommandHeader::new(HeaderKind::Run { dry_run: *dry_run })
                .field("Project", project_dir.display().to_string())
                .field("Domain", domain.as_str());
            format!("{}\n", header.render(c, u))
        }

        SequenceEvent::StepStarted { step } => {
            if ui.quiet {
                return String::new();
            }
            format!(
                "{} {} {}\n",
                Icon::Progress.colored(c, u),
                counter(*step),
                ColoredText::info(step.title()).bold().render(c)
            )
        }

        SequenceEvent::CommandStarted { command, .. } => {
            if ui.quiet {
                return String::new();
            }
            format!(
                "  {} {}\n",
                Icon::Arrow.colored(c, u),
                ColoredText::dim(command.display()).render(c)
            )
        }

        SequenceEvent::StepSkipped { step, reason } => {
            if ui.quiet {
                return String::new();
            }
            format!(
                "{} {} {} ({})\n",
                Icon::Skipped.colored(c, u),
                counter(*step),
                ColoredText::dim(format!("{} skipped", step.title())).render(c),
                reason
            )
        }

        SequenceEvent::StepSucceeded { step, duration } => {
            if ui.quiet {
                return String::new();
            }
            let timing = if ui.verbose > 0 {
                format!(" in {}", format_duration(*duration))
            } else {
                String::new()
            };
            format!("{} {} completed{}\n", Icon::Success.colored(c, u), step, timing)
        }

        SequenceEvent::StepFailed {
            step,
            fatal,
            message,
            ..
        } => {
            if *fatal {
                format!(
                    "{} {} failed: {}\n",
                    Icon::Error.colored(c, u),
                    step,
                    ColoredText::error(message.as_str()).render(c)
                )
            } else {
                format!(
                    "{} {} failed, continuing: {}\n",
                    Icon::Warning.colored(c, u),
                    step,
                    ColoredText::warning(message.as_str()).render(c)
                )
            }
        }

        SequenceEvent::Warning { step, message } => {
            if ui.caps.github_actions {
                let title = format!("flowdeploy {}", step);
                format!(
                    "{}\n",
                    github_actions_annotation(AnnotationLevel::Warning, message, Some(&title))
                )
            } else {
                String::new()
            }
        }

        SequenceEvent::Completed { .. } => String::new(),
    }
}

/// Closing summary box for a finished run
pub fn render_sequence_summary(result: &SequenceResult, ui: &UiContext) -> String {
    let count = |pred: fn(&StepOutcome) -> bool| {
        result.steps.iter().filter(|r| pred(&r.outcome)).count()
    };
    let succeeded = count(|o| matches!(o, StepOutcome::Succeeded { .. }));
    let skipped = count(|o| matches!(o, StepOutcome::Skipped { .. }));
    let not_run = count(|o| matches!(o, StepOutcome::NotRun));

    let mut summary = match result.aborted_at {
        Some(step) => {
            let mut s = ResultSummary::failure(format!("Deployment aborted at {}", step));
            s.with_next_step(format!(
                "Fix the failure above and re-run; exiting with code {}",
                result.exit_code()
            ));
            s
        }
        None if result.dry_run => {
            let mut s = ResultSummary::success("Dry run complete");
            s.with_next_step("Run `flowdeploy run` to execute these commands");
            s
        }
        None if !result.warnings().is_empty() => {
            ResultSummary::partial("Deployment complete with warnings")
        }
        None => ResultSummary::success("Deployment complete"),
    };

    summary.add_stat(if result.dry_run { "steps planned" } else { "steps succeeded" }, succeeded);
    summary.add_stat("skipped", skipped);
    if not_run > 0 {
        summary.add_stat("not run", not_run);
    }
    for warning in result.warnings() {
        summary.add_warning(warning.as_str());
    }

    let mut out = String::from("\n");
    out.push_str(&summary.render(ui.color, ui.unicode));

    if ui.verbose > 0 {
        for record in &result.steps {
            out.push_str(&format!("  {:<16} {}\n", record.kind.id(), record.outcome.label()));
        }
        out.push_str(&format!("  total time {}\n", format_duration(result.duration)));
    }

    out
}
