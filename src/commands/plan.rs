use anyhow::Result;
use flowdeploy::{LocalFs, Planner, StepKind};

use super::{GlobalOptions, Session};
use crate::ui::views::plan::{plan_json, render_plan};

pub fn cmd_plan(global: &GlobalOptions, skip: &[StepKind]) -> Result<i32> {
    let session = Session::open(global)?;
    let config = &session.loaded.config;

    let environment = config.deploy_environment(|key| std::env::var(key).ok())?;
    let plan = Planner::new(config, LocalFs::new()).plan(&session.project_dir, environment, skip);

    if session.ui.json {
        crate::ui::json::emit(plan_json(&plan, &session.project_dir))?;
    } else {
        print!(
            "{}",
            render_plan(&plan, &session.project_dir, session.ui.color, session.ui.unicode)
        );
    }

    Ok(0)
}
