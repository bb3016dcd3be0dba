//! Sequence Use Case
//!
//! Runs a resolved plan step by step:
//! 1. Skipped steps are reported and passed over
//! 2. Each command of a step runs in order; the first failure fails the step
//! 3. The step's failure policy decides: fatal aborts, warn records and continues
//! 4. Once aborted, every remaining step is recorded as not run
//!
//! The exported environment is handed to each command through its context.

use std::time::Instant;

use crate::domain::entities::{PlannedStep, SequencePlan};
use crate::domain::ports::{
    CommandContext, CommandRunner, NoopEventSink, SequenceEvent, SequenceEventSink,
};

use super::options::SequenceOptions;
use super::result::{SequenceResult, StepOutcome};

/// Why a step failed
#[derive(Debug)]
struct StepFailure {
    exit_code: i32,
    message: String,
}

pub struct SequenceUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> SequenceUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Run the plan silently
    pub fn execute(&self, plan: &SequencePlan, options: &SequenceOptions) -> SequenceResult {
        self.execute_with_events(plan, options, &NoopEventSink)
    }

    /// Run the plan, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        plan: &SequencePlan,
        options: &SequenceOptions,
        events: &dyn SequenceEventSink,
    ) -> SequenceResult {
        let started = Instant::now();
        let mut result = SequenceResult::new();
        result.dry_run = options.dry_run;

        events.on_event(SequenceEvent::Started {
            project_dir: options.project_dir.clone(),
            domain: plan.environment.domain().unwrap_or_default().to_string(),
            step_count: plan.runnable_count(),
            dry_run: options.dry_run,
        });

        let context = CommandContext::new(&options.project_dir, plan.environment.clone())
            .with_output(options.output);

        for step in &plan.steps {
            if result.aborted_at.is_some() {
                result.record(step.kind, StepOutcome::NotRun);
                continue;
            }

            if let Some(reason) = step.skip_reason() {
                events.on_event(SequenceEvent::StepSkipped {
                    step: step.kind,
                    reason: reason.to_string(),
                });
                result.record(
                    step.kind,
                    StepOutcome::Skipped {
                        reason: reason.to_string(),
                    },
                );
                continue;
            }

            events.on_event(SequenceEvent::StepStarted { step: step.kind });
            let step_started = Instant::now();

            match self.run_step(step, &context, options.dry_run, events) {
                Ok(()) => {
                    let duration = step_started.elapsed();
                    events.on_event(SequenceEvent::StepSucceeded {
                        step: step.kind,
                        duration,
                    });
                    result.record(step.kind, StepOutcome::Succeeded { duration });
                }
                Err(failure) => {
                    let fatal = step.kind.policy().is_fatal();
                    let category = step.kind.category();

                    events.on_event(SequenceEvent::StepFailed {
                        step: step.kind,
                        category,
                        exit_code: failure.exit_code,
                        fatal,
                        message: failure.message.clone(),
                    });

                    if fatal {
                        result.aborted_at = Some(step.kind);
                        result.exit_code = failure.exit_code;
                    } else {
                        let warning = format!("{}: {}", category, failure.message);
                        events.on_event(SequenceEvent::Warning {
                            step: step.kind,
                            message: warning.clone(),
                        });
                        result.warnings.push(warning);
                    }

                    result.record(
                        step.kind,
                        StepOutcome::Failed {
                            category,
                            exit_code: failure.exit_code,
                            fatal,
                            message: failure.message,
                        },
                    );
                }
            }
        }

        result.duration = started.elapsed();
        events.on_event(SequenceEvent::Completed {
            success: result.is_success(),
            exit_code: result.exit_code,
            aborted_at: result.aborted_at,
            warning_count: result.warnings.len(),
            duration: result.duration,
        });

        result
    }

    fn run_step(
        &self,
        step: &PlannedStep,
        context: &CommandContext,
        dry_run: bool,
        events: &dyn SequenceEventSink,
    ) -> Result<(), StepFailure> {
        for command in &step.commands {
            events.on_event(SequenceEvent::CommandStarted {
                step: step.kind,
                command: command.clone(),
            });

            if dry_run {
                continue;
            }

            match self.runner.run(command, context) {
                Ok(status) if status.success() => {}
                Ok(status) => {
                    let message = match status.code {
                        Some(code) => format!("`{}` exited with code {}", command, code),
                        None => format!("`{}` was terminated by a signal", command),
                    };
                    return Err(StepFailure {
                        exit_code: status.exit_code(),
                        message,
                    });
                }
                Err(err) => {
                    return Err(StepFailure {
                        exit_code: err.exit_code(),
                        message: err.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
