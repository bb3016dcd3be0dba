//! Integration tests for `flowdeploy check`

mod common;

use common::*;

const LONG_KEY: &str = "k3y-0123456789-abcdefghijklmnopqrstuvwxyz-0123456789";

fn complete_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SECRET_KEY", LONG_KEY),
        ("ENCRYPTION_SALT", "salt"),
        ("ALLOWED_HOSTS", "invoices.example.com,.onrender.com"),
        ("EMAIL_HOST_PASSWORD", "hunter2"),
    ]
}

#[test]
fn test_check_passes_with_complete_environment() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["check", "--domain", DOMAIN], &complete_env());

    assert!(result.success, "stdout:\n{}", result.stdout);
    assert_output_contains!(result, "All checks passed");
    assert!(!result.stdout.contains(LONG_KEY), "secret values must not be printed");
}

#[test]
fn test_check_fails_on_missing_variable() {
    let env = TestEnv::new();
    let vars: Vec<_> = complete_env()
        .into_iter()
        .filter(|(k, _)| *k != "EMAIL_HOST_PASSWORD")
        .collect();

    let result = env.run_with_env(&["check"], &vars);

    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "EMAIL_HOST_PASSWORD - not set");
    assert_output_contains!(result, "Check FAILED");
}

#[test]
fn test_check_warnings_fail_only_in_strict_mode() {
    let env = TestEnv::new();
    let mut vars = complete_env();
    vars[0] = ("SECRET_KEY", "short");

    let lenient = env.run_with_env(&["check"], &vars);
    assert_eq!(lenient.exit_code, 0, "stdout:\n{}", lenient.stdout);
    assert_output_contains!(lenient, "Check passed with warnings");

    let strict = env.run_with_env(&["check", "--strict-warnings"], &vars);
    assert_eq!(strict.exit_code, 1);
}

#[test]
fn test_check_flags_domain_missing_from_allowed_hosts() {
    let env = TestEnv::new();

    let result = env.run_with_env(
        &["check", "--domain", "billing.example.org"],
        &complete_env(),
    );

    assert!(result.success);
    assert_output_contains!(result, "ALLOWED_HOSTS - set, but does not include billing.example.org");
}

#[test]
fn test_check_uses_configured_variable_list() {
    let env = TestEnv::with_config("[preflight]\nrequired = [\"REDIS_URL\"]\n");

    let result = env.run_with_env(&["check"], &[("REDIS_URL", "redis://cache:6379")]);

    assert!(result.success, "stdout:\n{}", result.stdout);
    assert!(!result.stdout.contains("SECRET_KEY"));
}

#[test]
fn test_check_json_emits_ndjson_event_stream() {
    let env = TestEnv::new();

    let result = env.run_with_env(&["check", "--json"], &[("SECRET_KEY", LONG_KEY)]);

    assert_eq!(result.exit_code, 1);
    let events = result.events();
    assert_eq!(events.len(), 5);
    assert!(events[..4].iter().all(|e| e["event"] == "check"));
    assert_eq!(events[0]["name"], "SECRET_KEY");
    assert_eq!(events[0]["status"], "pass");
    assert_eq!(events[1]["status"], "error");

    let last = &events[4];
    assert_eq!(last["event"], "complete");
    assert_eq!(last["command"], "check");
    assert_eq!(last["errors"], 3);
    assert_eq!(last["success"], false);
}
