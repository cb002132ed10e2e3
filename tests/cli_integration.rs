use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use indoc::indoc;
use tempfile::TempDir;

const PROJECT: &str = indoc! {r#"
    {
        "id": "cli-1",
        "title": "Payments pilot",
        "sector": "fintech",
        "stage": "seed",
        "success_probability": 22,
        "budget": 150000,
        "team_size": 3,
        "market_demand": 25,
        "hypothesis_validation_rate": 0.22,
        "rat_completion_rate": 0.18
    }
"#};

const SCENARIOS: &str = indoc! {r#"
    [
        {"name": "Raise", "modifications": {"budget": "+350000"}},
        {"name": "Typo", "modifications": {"budget": "+plenty"}},
        {"modifications": {"team_size": "+50%"}}
    ]
"#};

fn pitchmap(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pitchmap"));
    cmd.current_dir(dir).env_remove("PITCHMAP_CONFIG");
    cmd
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("project.json"), PROJECT).unwrap();
    fs::write(dir.path().join("scenarios.json"), SCENARIOS).unwrap();
    dir
}

#[test]
fn analyze_writes_json_report() {
    let dir = workspace();
    let output = pitchmap(dir.path())
        .args(["analyze", "project.json", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["project"]["id"], "cli-1");
    assert_eq!(report["attribution_source"], "fallback");
    assert!(report["investor_readiness"]["irl_score"].is_number());
}

#[test]
fn analyze_writes_terminal_report_to_file() {
    let dir = workspace();
    pitchmap(dir.path())
        .args(["analyze", "project.json", "-o", "report.txt"])
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(text.contains("PITCHMAP STRATEGIC REPORT"));
    assert!(text.contains("Payments pilot"));
    assert!(!text.contains("\u{1b}["));
}

#[test]
fn analyze_reports_missing_project() {
    let dir = workspace();
    pitchmap(dir.path())
        .args(["analyze", "nowhere.json"])
        .assert()
        .failure();
}

#[test]
fn whatif_ranks_scenarios() {
    let dir = workspace();
    let output = pitchmap(dir.path())
        .args([
            "whatif",
            "project.json",
            "--scenarios",
            "scenarios.json",
            "--format",
            "json",
            "--jobs",
            "2",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let outcomes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let outcomes = outcomes.as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[2]["scenario_name"], "Typo");
    assert!(outcomes[2]["error"].is_string());
    assert!(outcomes
        .iter()
        .any(|o| o["scenario_name"] == "Scenario 3"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    pitchmap(dir.path()).arg("init").assert().success();
    assert!(dir.path().join(".pitchmap.toml").exists());

    pitchmap(dir.path()).arg("init").assert().failure();
    pitchmap(dir.path()).args(["init", "--force"]).assert().success();
}
