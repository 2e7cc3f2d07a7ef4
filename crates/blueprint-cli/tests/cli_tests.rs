use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing.
///
/// The config home points into `temp_dir` so a real user configuration is
/// never picked up.
fn bp_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bp").expect("Failed to find bp binary");
    cmd.env("XDG_CONFIG_HOME", temp_dir.path());
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_no_subcommand_prints_help() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("synth"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_cli_synth_markdown() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .args(["synth", "A social media platform for pet owners"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Plan: A social media platform for pet owners",
        ))
        .stdout(predicate::str::contains("- Features: Web App, Social"))
        .stdout(predicate::str::contains("## Phase 1: Foundation"))
        .stdout(predicate::str::contains("`deployment-pipeline`"))
        .stdout(predicate::str::contains("`mobile-development`").not());
}

#[test]
fn test_cli_synth_with_description() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .args([
            "synth",
            "A recipe website",
            "--description",
            "Share family recipes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Share family recipes"));
}

#[test]
fn test_cli_synth_json() {
    let temp_dir = create_cli_test_environment();

    let output = bp_cmd(&temp_dir)
        .args(["synth", "AI-powered mobile app for language learning", "--json"])
        .output()
        .expect("Failed to run bp");
    assert!(output.status.success());

    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Failed to parse plan JSON");
    assert_eq!(plan["nodes"].as_array().unwrap().len(), 11);
    assert_eq!(plan["tags"]["is_mobile_app"], true);
    assert_eq!(plan["tags"]["is_ai"], true);
    assert_eq!(plan["phases"][0]["name"], "Foundation");
}

#[test]
fn test_cli_synth_blank_idea_fails() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .args(["synth", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("idea_text"));
}

#[test]
fn test_cli_classify() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .args(["classify", "marketplace for handmade ecommerce goods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] Web App"))
        .stdout(predicate::str::contains("- [x] E-commerce"))
        .stdout(predicate::str::contains("- [ ] AI"));
}

#[test]
fn test_cli_classify_json() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .args(["classify", "Organize recipes", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_web_app": false"#))
        .stdout(predicate::str::contains(r#""is_ai": false"#));
}

#[test]
fn test_cli_prompt() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .args(["prompt", "A recipe website", "api-development"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Prompts for `api-development`"))
        .stdout(predicate::str::contains("A recipe website"))
        .stdout(predicate::str::contains("{idea}").not());
}

#[test]
fn test_cli_prompt_unknown_node_fails() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .args(["prompt", "A recipe website", "ai-integration"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ai-integration"));
}

#[test]
fn test_cli_catalog() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Node Catalog"))
        .stdout(predicate::str::contains("`system-architecture`"))
        .stdout(predicate::str::contains("`ai-integration`").not());

    bp_cmd(&temp_dir)
        .args(["catalog", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`ai-integration`"))
        .stdout(predicate::str::contains("`mobile-development`"));
}

#[test]
fn test_cli_config_file() {
    let temp_dir = create_cli_test_environment();
    let config_path = temp_dir.path().join("custom.json");
    std::fs::write(
        &config_path,
        r#"{"phase_names": ["Discovery", "Delivery"], "budget_estimate": "$10,000"}"#,
    )
    .expect("Failed to write config");

    bp_cmd(&temp_dir)
        .args([
            "--config-file",
            config_path.to_str().unwrap(),
            "synth",
            "A recipe website",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Phase 1: Discovery"))
        .stdout(predicate::str::contains("## Phase 2: Delivery"))
        .stdout(predicate::str::contains("$10,000"))
        .stdout(predicate::str::contains("Phase 3").not());
}

#[test]
fn test_cli_missing_config_file_fails() {
    let temp_dir = create_cli_test_environment();
    let config_path = temp_dir.path().join("missing.json");

    bp_cmd(&temp_dir)
        .args([
            "--config-file",
            config_path.to_str().unwrap(),
            "catalog",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize synthesizer"));
}

#[test]
fn test_cli_config_init_then_show() {
    let temp_dir = create_cli_test_environment();

    bp_cmd(&temp_dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));

    let written = temp_dir.path().join("blueprint").join("config.json");
    assert!(written.exists());

    bp_cmd(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""timeline_estimate": "3-6 months""#));
}
