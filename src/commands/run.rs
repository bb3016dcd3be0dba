use anyhow::Result;
use flowdeploy::domain::ports::OutputMode;
use flowdeploy::{
    JsonEventSink, LocalFs, Planner, ProcessRunner, RunLock, SequenceOptions, SequenceUseCase,
    StepKind,
};

use super::{GlobalOptions, Session};
use crate::ui::views::sequence::{render_sequence_summary, ConsoleEventSink};

pub fn cmd_run(global: &GlobalOptions, dry_run: bool, skip: &[StepKind]) -> Result<i32> {
    let session = Session::open(global)?;
    let config = &session.loaded.config;

    let environment = config.deploy_environment(|key| std::env::var(key).ok())?;
    let plan = Planner::new(config, LocalFs::new()).plan(&session.project_dir, environment, skip);

    let _lock = if dry_run {
        None
    } else {
        Some(RunLock::acquire(&session.project_dir)?)
    };

    let output = if session.ui.json {
        OutputMode::StderrOnly
    } else {
        OutputMode::Inherit
    };
    let options = SequenceOptions::new(&session.project_dir)
        .with_dry_run(dry_run)
        .with_output(output);

    let use_case = SequenceUseCase::new(ProcessRunner::new());

    let result = if session.ui.json {
        use_case.execute_with_events(&plan, &options, &JsonEventSink::stdout())
    } else {
        let sink = ConsoleEventSink::stdout(session.ui);
        let result = use_case.execute_with_events(&plan, &options, &sink);
        print!("{}", render_sequence_summary(&result, &session.ui));
        result
    };

    Ok(result.exit_code())
}
