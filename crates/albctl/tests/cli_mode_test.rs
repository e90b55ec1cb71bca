use std::process::{Command, Output};

fn albctl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_albctl"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to start albctl binary")
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn types_lists_registered_objects() {
    let output = albctl(&["types"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let types: Vec<&str> = stdout.lines().collect();
    assert!(types.contains(&"pool"));
    assert!(types.contains(&"gslb"));
    let mut sorted = types.clone();
    sorted.sort_unstable();
    assert_eq!(types, sorted);
}

#[test]
fn validate_accepts_well_formed_pool() {
    let output = albctl(&["validate", "pool", &fixture("pool.json")]);
    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let normalized: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("validate prints JSON");
    assert_eq!(normalized["name"], "web-pool");
    assert_eq!(normalized["servers"].as_array().map(Vec::len), Some(2));
}

#[test]
fn validate_rejects_missing_required_field() {
    let output = albctl(&["validate", "pool", &fixture("pool_missing_name.yaml")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("name"), "stderr: {stderr}");
}

#[test]
fn validate_rejects_unknown_type() {
    let output = albctl(&["validate", "no-such-object", &fixture("pool.json")]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown object type"));
}

#[test]
fn validate_prints_yaml_on_request() {
    let output = albctl(&["--output", "yaml", "validate", "pool", &fixture("pool.json")]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("name: web-pool"));
}
