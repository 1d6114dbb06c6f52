//! Integration tests for `adgen generate`, `params` and `describe`
//!
//! These run the built binary in an empty temp directory with HOME pointed at
//! it, so no user or project config leaks in.

use std::path::Path;
use std::process::{Command, Output};

/// Run adgen in `dir` with a whitespace-separated argument list.
fn run_adgen(dir: &Path, args: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_adgen"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("ADGEN_PRESETS_FILE", dir.join("presets.json"))
        .args(args.split_whitespace())
        .output()
        .expect("Failed to execute adgen")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "adgen failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be valid JSON")
}

#[test]
fn test_generate_defaults_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_adgen(temp_dir.path(), "generate --json");
    let requests = stdout_json(&output);

    let requests = requests.as_array().expect("expected an array");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["width"], 300);
    assert_eq!(requests[0]["height"], 250);
    assert_eq!(
        requests[0]["url"],
        "https://ads.eskimi.com/getad/?tag=97cc83bb9917a07bdf3d53e8507157b2&w=300&h=250&audit=1\
         &domain=demo.eskimi.com&page=https%3A%2F%2Fdemo.eskimi.com%2Fpublisher%2F"
    );
}

#[test]
fn test_generate_placements_and_override() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = "generate -n 3 -W 320 -H 50 -p bidfloor=0.5 --json";
    let requests = stdout_json(&run_adgen(temp_dir.path(), args));
    let requests = requests.as_array().unwrap();

    assert_eq!(requests.len(), 3);
    for request in requests {
        assert_eq!(request, &requests[0]);
        assert_eq!(request["width"], 320);
        assert_eq!(request["height"], 50);
    }
    let url = requests[0]["url"].as_str().unwrap();
    assert!(url.contains("w=320&h=50&audit=1"));
    assert!(url.ends_with("&bidfloor=0.5"));
}

#[test]
fn test_generate_reports_all_invalid_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_adgen(temp_dir.path(), "generate -n 21 -W abc -H 0");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    for expected in [
        "Invalid placement_count: must be at most 20",
        "Invalid width: 'abc' is not a number",
        "Invalid height: must be at least 1",
    ] {
        assert!(stderr.contains(expected), "stderr: {stderr}");
    }
}

#[test]
fn test_generate_rejects_malformed_param() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_adgen(temp_dir.path(), "generate -p noequals");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("KEY=VALUE"), "stderr: {}", stderr);
}

#[test]
fn test_generate_page_flag() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = "generate --page https://example.com/ --json";
    let requests = stdout_json(&run_adgen(temp_dir.path(), args));

    let url = requests[0]["url"].as_str().unwrap();
    assert!(
        url.contains("&page=https%3A%2F%2Fexample.com%2F"),
        "url: {}",
        url
    );
}

#[test]
fn test_generate_is_deterministic() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = "generate -n 2 -p ua=Mozilla/5.0;X11 -p test=1";
    let first = run_adgen(temp_dir.path(), args);
    let second = run_adgen(temp_dir.path(), args);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_describe_unknown_key_is_allowed() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_adgen(temp_dir.path(), "describe x_custom");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("still be used"), "stdout: {}", stdout);
}

#[test]
fn test_params_json_grouped() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = run_adgen(temp_dir.path(), "params --group imp --json");
    let groups = stdout_json(&output);

    let groups = groups.as_object().expect("expected an object");
    assert_eq!(groups.len(), 1);
    let keys: Vec<&str> = groups["imp"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["key"].as_str().unwrap())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert!(keys.contains(&"bidfloor"));
}
