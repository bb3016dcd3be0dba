//! JSON Event Sink
//!
//! Outputs sequence events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SequenceEvent, SequenceEventSink};
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

impl SequenceEventSink for JsonEventSink {
    fn on_event(&self, event: SequenceEvent) {
        let json = match event {
            SequenceEvent::Started {
                project_dir,
                domain,
                step_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "run",
                    "project_dir": project_dir.display().to_string(),
                    "domain": domain,
                    "step_count": step_count,
                    "dry_run": dry_run,
                    "timestamp": timestamp(),
                })
            }

            SequenceEvent::StepStarted { step } => {
                serde_json::json!({
                    "event": "step_start",
                    "command": "run",
                    "step": step.id(),
                    "title": step.title(),
                })
            }

            SequenceEvent::CommandStarted { step, command } => {
                serde_json::json!({
                    "event": "command",
                    "command": "run",
                    "step": step.id(),
                    "program": command.program,
                    "args": command.args,
                })
            }

            SequenceEvent::StepSkipped { step, reason } => {
                serde_json::json!({
                    "event": "step_skipped",
                    "command": "run",
                    "step": step.id(),
                    "reason": reason,
                })
            }

            SequenceEvent::StepSucceeded { step, duration } => {
                serde_json::json!({
                    "event": "step_succeeded",
                    "command": "run",
                    "step": step.id(),
                    "duration_ms": millis(duration),
                })
            }

            SequenceEvent::StepFailed {
                step,
                category,
                exit_code,
                fatal,
                message,
            } => {
                serde_json::json!({
                    "event": "step_failed",
                    "command": "run",
                    "step": step.id(),
                    "category": category.description(),
                    "exit_code": exit_code,
                    "fatal": fatal,
                    "message": message,
                })
            }

            SequenceEvent::Warning { step, message } => {
                serde_json::json!({
                    "event": "warning",
                    "command": "run",
                    "step": step.id(),
                    "message": message,
                })
            }

            SequenceEvent::Completed {
                success,
                exit_code,
                aborted_at,
                warning_count,
                duration,
            } => {
                let status = match (success, warning_count) {
                    (false, _) => "failed",
                    (true, 0) => "success",
                    (true, _) => "success_with_warnings",
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "run",
                    "status": status,
                    "exit_code": exit_code,
                    "aborted_at": aborted_at.map(|s| s.id()),
                    "warnings": warning_count,
                    "duration_ms": millis(duration),
                    "timestamp": timestamp(),
                })
            }
        };

        self.write_event(json);
    }
}
