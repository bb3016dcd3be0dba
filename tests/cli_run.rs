//! Integration tests for `flowdeploy run`
//!
//! Every step is a small `sh -c` script, so the ordering, fail-fast and
//! exit-code behavior is exercised through the real binary.

#![cfg(unix)]

mod common;

use common::*;

fn project(scripts: &[(&str, &str)], with_frontend: bool) -> TestEnv {
    let env = TestEnv::with_config(&scripted_config(scripts));
    if with_frontend {
        env.write_project_file("package.json", "{}");
    }
    env
}

#[test]
fn test_run_executes_every_step_in_order() {
    let env = project(&[], true);

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_step_log!(
        env,
        [
            "install-backend",
            "build-frontend",
            "migrate",
            "provision-cache",
            "collect-static",
            "self-check"
        ]
    );
    assert_output_contains!(result, "Deployment complete");
}

#[test]
fn test_bare_invocation_runs_the_sequence() {
    let env = project(&[], true);

    let result = env.run(&["--domain", DOMAIN]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(env.step_log().len(), 6);
}

#[test]
fn test_frontend_is_skipped_without_package_json() {
    let env = project(&[], false);

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_step_log!(
        env,
        [
            "install-backend",
            "migrate",
            "provision-cache",
            "collect-static",
            "self-check"
        ]
    );
    assert_output_contains!(result, "[SKIP] [2/6]");
    assert_output_contains!(result, "package.json not found");
}

#[test]
fn test_install_failure_stops_before_migrate() {
    let script = failing_script("install-backend", 1);
    let env = project(&[("install-backend", script.as_str())], true);

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert_eq!(result.exit_code, 1);
    assert_step_log!(env, ["install-backend"]);
    assert_output_contains!(result, "[FAIL] install-backend failed");
    assert_output_contains!(result, "Deployment aborted at install-backend");
}

#[test]
fn test_failing_step_exit_code_is_propagated() {
    let script = failing_script("collect-static", 3);
    let env = project(&[("collect-static", script.as_str())], true);

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert_eq!(result.exit_code, 3);
    assert_step_log!(
        env,
        [
            "install-backend",
            "build-frontend",
            "migrate",
            "provision-cache",
            "collect-static"
        ]
    );
}

#[test]
fn test_self_check_failure_only_warns() {
    let script = failing_script("self-check", 1);
    let env = project(&[("self-check", script.as_str())], true);

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert_eq!(env.step_log().len(), 6);
    assert_output_contains!(result, "[WARN] self-check failed, continuing");
    assert_output_contains!(result, "Deployment complete with warnings");
}

#[test]
fn test_production_variables_reach_every_step() {
    let record = "echo \"$PRODUCTION_DOMAIN $PRODUCTION_URL\" >> env.log";
    let scripts: Vec<(&str, &str)> = STEP_IDS.iter().map(|id| (*id, record)).collect();
    let env = project(&scripts, true);

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    let lines: Vec<String> = env
        .read_project_file("env.log")
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(lines.len(), 6);
    for line in lines {
        assert_eq!(line, "invoices.example.com https://invoices.example.com");
    }
}

#[test]
fn test_explicit_url_and_extra_env_are_exported() {
    let mut config = scripted_config(&[(
        "migrate",
        "echo \"$PRODUCTION_URL $WEB_CONCURRENCY\" >> env.log",
    )]);
    config.push_str(
        "[deploy]\ndomain = \"invoices.example.com\"\nurl = \"https://app.invoices.example.com\"\n\n\
         [deploy.env]\nWEB_CONCURRENCY = \"4\"\n",
    );
    let env = TestEnv::with_config(&config);

    let result = env.run(&["run"]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        env.read_project_file("env.log").trim(),
        "https://app.invoices.example.com 4"
    );
}

#[test]
fn test_domain_falls_back_to_platform_hostname() {
    let env = project(&[("migrate", "echo $PRODUCTION_DOMAIN >> env.log")], false);

    let result = env.run_with_env(
        &["run"],
        &[("RENDER_EXTERNAL_HOSTNAME", "invoiceflow.onrender.com")],
    );

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        env.read_project_file("env.log").trim(),
        "invoiceflow.onrender.com"
    );
}

#[test]
fn test_domain_taken_from_exported_production_variables() {
    let env = project(
        &[(
            "migrate",
            "echo \"$PRODUCTION_DOMAIN $PRODUCTION_URL\" >> env.log",
        )],
        false,
    );

    let result = env.run_with_env(
        &["run"],
        &[
            ("PRODUCTION_DOMAIN", "invoices.example.com"),
            ("PRODUCTION_URL", "https://invoices.example.com"),
        ],
    );

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(result.exit_code, 0);
    assert_eq!(
        env.read_project_file("env.log").trim(),
        "invoices.example.com https://invoices.example.com"
    );
}

#[test]
fn test_missing_domain_runs_nothing() {
    let env = project(&[], true);

    let result = env.run(&["run"]);

    assert_eq!(result.exit_code, 1);
    assert!(env.step_log().is_empty());
    assert!(
        result.stderr.contains("[ERROR] no production domain configured"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_missing_program_exits_127() {
    let env = TestEnv::with_config(
        "[steps.install-backend]\ncommands = [{ program = \"flowdeploy-no-such-program\" }]\n",
    );

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert_eq!(result.exit_code, 127);
    assert_output_contains!(result, "install-backend failed");
}

#[test]
fn test_signal_termination_exits_1() {
    let env = project(&[("migrate", "kill -TERM $$")], false);

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert_eq!(result.exit_code, 1);
    assert_step_log!(env, ["install-backend"]);
}

#[test]
fn test_skip_flag_skips_steps() {
    let env = project(&[], true);

    let result = env.run(&[
        "run",
        "--domain",
        DOMAIN,
        "--skip",
        "build-frontend",
        "--skip",
        "self-check",
    ]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_step_log!(
        env,
        ["install-backend", "migrate", "provision-cache", "collect-static"]
    );
    assert_output_contains!(result, "skipped by operator");
}

#[test]
fn test_dry_run_executes_nothing() {
    let env = project(&[], true);

    let result = env.run(&["run", "--dry-run", "--domain", DOMAIN]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(env.step_log().is_empty());
    assert!(!env.project_path(".flowdeploy.lock").exists());
    assert_output_contains!(result, "Dry run complete");
    assert_output_contains!(result, "[>] sh -c");
}

#[test]
fn test_quiet_config_hides_step_log() {
    let mut config = scripted_config(&[]);
    config.push_str("[output]\nverbosity = \"quiet\"\n");
    let env = TestEnv::with_config(&config);

    let result = env.run(&["run", "--domain", DOMAIN]);

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(!result.stdout.contains("[..]"), "stdout:\n{}", result.stdout);
}

#[test]
fn test_rerun_is_stable() {
    let env = project(&[], false);

    let first = env.run(&["run", "--domain", DOMAIN]);
    let second = env.run(&["run", "--domain", DOMAIN]);

    assert!(first.success && second.success);
    assert_eq!(env.step_log().len(), 10);
}
