use std::fs;

use indoc::indoc;
use pitchmap::config::loader::find_config_from;
use pitchmap::config::{load_config_from, IciWeights, CONFIG_FILE_NAME};
use pitchmap::core::FeatureVector;
use pitchmap::{KnowledgeBase, Pipeline, PitchmapConfig, ProjectInput};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_project() -> ProjectInput {
    let features: FeatureVector = [
        ("budget", 400_000.0),
        ("team_size", 4.0),
        ("market_demand", 55.0),
        ("technical_feasibility", 80.0),
        ("hypothesis_validation_rate", 0.5),
    ]
    .into_iter()
    .collect();
    ProjectInput::new(features).with_success_probability(40.0)
}

#[test]
fn explicit_file_overrides_weights() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        indoc! {r#"
            [ici_weights]
            success_probability = 1.0
            investor_readiness = 0.0
            market_fit = 0.0
            execution_readiness = 0.0
            financial_sustainability = 0.0
        "#},
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    let report = Pipeline::new(KnowledgeBase::standard(), &config).analyze(&sample_project());

    // all weight on the supplied probability
    assert!((report.strategic_dashboard.ici_score.value() - 40.0).abs() < 1e-9);
}

#[test]
fn slightly_off_weights_are_normalized() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [ici_weights]
            success_probability = 0.3004
            investor_readiness = 0.25
            market_fit = 0.20
            execution_readiness = 0.15
            financial_sustainability = 0.10
        "#},
    )
    .unwrap();

    let weights = load_config_from(&path).unwrap().ici_weights;
    let sum = weights.success_probability
        + weights.investor_readiness
        + weights.market_fit
        + weights.execution_readiness
        + weights.financial_sustainability;
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn out_of_range_weights_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [ici_weights]
            success_probability = 2.0

            [heuristics]
            max_insights = 2
        "#},
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.ici_weights, IciWeights::default());
    assert_eq!(config.heuristics.max_insights, 2);
}

#[test]
fn default_config_matches_missing_file() {
    let dir = TempDir::new().unwrap();
    assert!(find_config_from(dir.path().to_path_buf()).is_none());

    let config = PitchmapConfig::default();
    let baseline = Pipeline::new(KnowledgeBase::standard(), &config).analyze(&sample_project());
    fs::write(dir.path().join(CONFIG_FILE_NAME), pitchmap::config::DEFAULT_CONFIG_TOML).unwrap();

    let loaded = find_config_from(dir.path().to_path_buf()).unwrap();
    let report = Pipeline::new(KnowledgeBase::standard(), &loaded).analyze(&sample_project());
    assert_eq!(
        serde_json::to_value(&baseline).unwrap(),
        serde_json::to_value(&report).unwrap()
    );
}

#[test]
fn malformed_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[ici_weights\nmarket_fit = ").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}
