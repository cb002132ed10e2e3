use pitchmap::core::{coerce_text, ConfidenceLevel, FeatureVector, IrlGrade, ProjectInput};
use pitchmap::{KnowledgeBase, Pipeline, PitchmapConfig};
use proptest::prelude::*;

fn project(values: [f64; 12], success_probability: f64) -> ProjectInput {
    let keys = [
        "budget",
        "team_size",
        "market_demand",
        "technical_feasibility",
        "hypothesis_validation_rate",
        "rat_completion_rate",
        "user_count",
        "revenue_growth",
        "user_engagement",
        "market_share",
        "roi",
        "competitive_advantage",
    ];
    let features: FeatureVector = keys.into_iter().zip(values).collect();
    ProjectInput::new(features).with_success_probability(success_probability)
}

fn in_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

proptest! {
    #[test]
    fn scores_stay_on_scale(
        values in prop::array::uniform12(-1.0e7..1.0e7f64),
        sp in -50.0..150.0f64,
    ) {
        let config = PitchmapConfig::default();
        let report = Pipeline::new(KnowledgeBase::standard(), &config).analyze(&project(values, sp));

        prop_assert!(in_range(report.strategic_dashboard.ici_score.value()));
        prop_assert!(in_range(report.investor_readiness.irl_score.value()));
        for (_, score) in report.investor_readiness.readiness_breakdown.iter() {
            prop_assert!(in_range(score.value()));
        }
        prop_assert!(!report.investor_readiness.recommended_investor_types.is_empty());
    }

    #[test]
    fn analysis_is_deterministic(values in prop::array::uniform12(0.0..2.0e6f64)) {
        let config = PitchmapConfig::default();
        let pipeline = Pipeline::new(KnowledgeBase::standard(), &config);
        let input = project(values, 50.0);

        let first = serde_json::to_string(&pipeline.analyze(&input)).unwrap();
        let second = serde_json::to_string(&pipeline.analyze(&input)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn more_budget_never_hurts_financial_health(
        budget in 0.0..5.0e6f64,
        extra in 0.0..5.0e6f64,
    ) {
        let config = PitchmapConfig::default();
        let pipeline = Pipeline::new(KnowledgeBase::standard(), &config);
        let with_burn = |b: f64| {
            let mut features = FeatureVector::new();
            features.insert("budget", b);
            features.insert("monthly_burn", 25_000.0);
            ProjectInput::new(features)
        };

        let before = pipeline.analyze(&with_burn(budget));
        let after = pipeline.analyze(&with_burn(budget + extra));
        prop_assert!(
            after.investor_readiness.readiness_breakdown.financial_health
                >= before.investor_readiness.readiness_breakdown.financial_health
        );
    }

    #[test]
    fn lenient_parsing_never_panics(raw in ".{0,24}") {
        let value = coerce_text(&raw).value();
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }

    #[test]
    fn grades_are_monotonic(a in 0.0..100.0f64, b in 0.0..100.0f64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        // variants are declared best first
        prop_assert!(IrlGrade::from_score(high) as u8 <= IrlGrade::from_score(low) as u8);
    }
}

#[test]
fn grade_breakpoints_are_exact() {
    assert_eq!(IrlGrade::from_score(89.999), IrlGrade::A);
    assert_eq!(IrlGrade::from_score(90.0), IrlGrade::APlus);
    assert_eq!(IrlGrade::from_score(49.999), IrlGrade::D);
    assert_eq!(IrlGrade::from_score(50.0), IrlGrade::CMinus);
}

#[test]
fn confidence_breakpoints_are_exact() {
    assert_eq!(ConfidenceLevel::from_score(84.999), ConfidenceLevel::High);
    assert_eq!(ConfidenceLevel::from_score(85.0), ConfidenceLevel::VeryHigh);
    assert_eq!(ConfidenceLevel::from_score(29.999), ConfidenceLevel::VeryLow);
    assert_eq!(ConfidenceLevel::from_score(30.0), ConfidenceLevel::Low);
}
