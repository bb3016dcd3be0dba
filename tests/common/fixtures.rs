//! Config fixtures.
//!
//! Every step is replaced by `sh -c` scripts that append the step id to
//! `steps.log`, so tests observe ordering without a Python toolchain.

pub const STEP_IDS: [&str; 6] = [
    "install-backend",
    "build-frontend",
    "migrate",
    "provision-cache",
    "collect-static",
    "self-check",
];

pub const DOMAIN: &str = "invoices.example.com";

/// Config whose steps log their id and succeed, except where `scripts`
/// supplies a replacement script for a step id.
pub fn scripted_config(scripts: &[(&str, &str)]) -> String {
    let mut config = String::new();
    for id in STEP_IDS {
        let script = scripts
            .iter()
            .find(|(step, _)| *step == id)
            .map(|(_, script)| script.to_string())
            .unwrap_or_else(|| format!("echo {id} >> steps.log"));
        config.push_str(&format!(
            "[steps.{id}]\ncommands = [{{ program = \"sh\", args = [\"-c\", {}] }}]\n\n",
            toml_string(&script)
        ));
    }
    config
}

/// Log the step id, then exit with `code`
pub fn failing_script(id: &str, code: i32) -> String {
    format!("echo {id} >> steps.log; exit {code}")
}

fn toml_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
