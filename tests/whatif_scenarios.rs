use pitchmap::config::ParallelConfig;
use pitchmap::core::FeatureVector;
use pitchmap::whatif::{ScenarioImpact, ScenarioOutcome};
use pitchmap::{KnowledgeBase, Pipeline, PitchmapConfig, ProjectInput, Scenario, ScenarioEngine};

fn reference_project() -> ProjectInput {
    let features: FeatureVector = [
        ("budget", 500_000.0),
        ("team_size", 5.0),
        ("market_demand", 65.0),
        ("technical_feasibility", 75.0),
        ("hypothesis_validation_rate", 0.6),
        ("rat_completion_rate", 0.55),
        ("user_count", 2000.0),
        ("revenue_growth", 0.15),
        ("user_engagement", 60.0),
        ("market_share", 0.02),
        ("roi", 0.10),
    ]
    .into_iter()
    .collect();
    ProjectInput::new(features)
        .with_sector("fintech")
        .with_organization("startup")
        .with_stage("seed")
        .with_success_probability(65.0)
}

fn change<'a>(outcome: &'a ScenarioOutcome, dimension: &str) -> &'a pitchmap::whatif::DimensionChange {
    outcome
        .comparison
        .as_ref()
        .expect("scenario applied")
        .dimension_changes
        .iter()
        .find(|c| c.dimension == dimension)
        .expect("dimension present")
}

#[test]
fn capital_injection_improves_financial_health_only() {
    let config = PitchmapConfig::default();
    let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config));
    let outcome = engine.run(
        &reference_project(),
        &Scenario::new("Seed extension").with("budget", "+350000"),
    );

    let comparison = outcome.comparison.as_ref().unwrap();
    assert!((comparison.baseline.irl - 57.94).abs() < 0.01);

    let financial = change(&outcome, "financial_health");
    assert!(financial.change > 0.0, "{financial:?}");
    // 17 months of runway instead of 10 at the pinned burn
    assert!((financial.modified - 59.53).abs() < 0.01, "{financial:?}");

    assert!(change(&outcome, "traction").change >= 0.0);
    assert!(change(&outcome, "team_quality").change >= 0.0);
    assert!(comparison.ici_improvement > 0.0);
}

#[test]
fn zero_deltas_change_nothing() {
    let config = PitchmapConfig::default();
    let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config));
    let outcome = engine.run(
        &reference_project(),
        &Scenario::new("No-op")
            .with("budget", "+0")
            .with("team_size", "+0%")
            .with("market_demand", "-0"),
    );

    let comparison = outcome.comparison.unwrap();
    assert_eq!(comparison.ici_improvement, 0.0);
    assert_eq!(comparison.irl_improvement, 0.0);
    assert_eq!(comparison.success_improvement, 0.0);
    assert!(comparison.dimension_changes.iter().all(|c| c.change == 0.0));
    assert_eq!(comparison.impact, ScenarioImpact::Negligible);
    assert_eq!(
        comparison.recommendation,
        "Negligible impact - no significant benefit"
    );
}

#[test]
fn malformed_scenario_does_not_sink_the_batch() {
    let config = PitchmapConfig::default();
    let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config));
    let scenarios = vec![
        Scenario::new("Broken").with("budget", "+a lot"),
        Scenario::new("Hire").with("team_size", "+3"),
    ];

    let outcomes = engine.run_batch(&reference_project(), &scenarios);

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].scenario_name, "Hire");
    assert!(outcomes[0].is_ok());
    assert_eq!(outcomes[1].scenario_name, "Broken");
    assert!(outcomes[1]
        .error
        .as_deref()
        .unwrap()
        .contains("Malformed modification"));
}

#[test]
fn batches_rank_by_ici_improvement() {
    let config = PitchmapConfig::default();
    let engine = ScenarioEngine::new(Pipeline::new(KnowledgeBase::standard(), &config));
    let scenarios = vec![
        Scenario::new("Lose demand").with("market_demand", "-30"),
        Scenario::new("Nothing").with("budget", "+0"),
        Scenario::new("Validate").with("hypothesis_validation_rate", 0.9),
        Scenario::new("Ignored").with("churn", "+5"),
    ];

    let outcomes = engine.run_batch(&reference_project(), &scenarios);
    let improvements: Vec<f64> = outcomes.iter().filter_map(|o| o.ici_improvement()).collect();
    assert!(improvements.windows(2).all(|w| w[0] >= w[1]));

    assert_eq!(outcomes[0].scenario_name, "Validate");
    assert_eq!(outcomes.last().unwrap().scenario_name, "Lose demand");

    let ignored = outcomes.iter().find(|o| o.scenario_name == "Ignored").unwrap();
    assert_eq!(ignored.ignored_modifications, vec!["churn".to_string()]);
}

#[test]
fn parallel_and_sequential_batches_agree() {
    let config = PitchmapConfig::default();
    let scenarios: Vec<Scenario> = (1..=8)
        .map(|i| Scenario::new(format!("Budget +{i}0%")).with("budget", format!("+{i}0%").as_str()))
        .collect();

    let pipeline = Pipeline::new(KnowledgeBase::standard(), &config);
    let sequential = ScenarioEngine::new(pipeline)
        .with_parallel(ParallelConfig::sequential())
        .run_batch(&reference_project(), &scenarios);
    let parallel = ScenarioEngine::new(pipeline)
        .with_parallel(ParallelConfig {
            enabled: true,
            max_concurrency: Some(3),
        })
        .run_batch(&reference_project(), &scenarios);

    assert_eq!(sequential, parallel);
}
