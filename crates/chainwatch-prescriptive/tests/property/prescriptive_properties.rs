use chainwatch_core::config::{EstimationConfig, Objective, OptimizationConfig};
use chainwatch_core::models::Event;
use chainwatch_prescriptive::{priority, RecommendationGenerator, SeededEstimator};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

fn objective() -> impl Strategy<Value = Objective> {
    proptest::sample::select(Objective::ALL.to_vec())
}

fn event() -> impl Strategy<Value = Event> {
    (
        "[A-Za-z ]{0,20}",
        0.0f64..=1.0,
        proptest::option::of(1u8..=10),
    )
        .prop_map(|(event_type, confidence, intensity)| {
            let mut event = Event::new("event-1", event_type, confidence);
            event.intensity = intensity;
            event
        })
}

fn generator(seed: u64, share: f64) -> RecommendationGenerator<SeededEstimator> {
    let estimation = EstimationConfig {
        base_cost_budget_share: share,
        ..EstimationConfig::default()
    };
    RecommendationGenerator::new(SeededEstimator::from_seed(seed), estimation).unwrap()
}

proptest! {
    #[test]
    fn cost_never_exceeds_budget(
        seed in any::<u64>(),
        share in 0.01f64..=1.0,
        budget in 1.0f64..10_000_000.0,
        objective in objective(),
        event in event(),
    ) {
        let config = OptimizationConfig::new(objective, budget, 0.0);
        let rec = generator(seed, share).generate(&event, &config).unwrap().unwrap();
        prop_assert!(rec.estimated_cost > 0.0);
        prop_assert!(rec.estimated_cost <= budget);
    }

    #[test]
    fn time_stays_within_scaled_hour_bounds(
        seed in any::<u64>(),
        objective in objective(),
        event in event(),
    ) {
        let config = OptimizationConfig::new(objective, 50_000.0, 0.0);
        let rec = generator(seed, 0.4).generate(&event, &config).unwrap().unwrap();
        let factor = match objective {
            Objective::MinimizeCost => 1.2,
            Objective::MinimizeTime => 0.6,
            Objective::MaximizeSatisfaction => 0.8,
        };
        prop_assert!(rec.estimated_time >= 1.0 * factor - 1e-9);
        prop_assert!(rec.estimated_time <= 48.0 * factor + 1e-9);
    }

    #[test]
    fn gate_rejects_everything_below_threshold(
        seed in any::<u64>(),
        threshold in 0.0f64..=1.0,
        event in event(),
    ) {
        let config = OptimizationConfig::new(Objective::MinimizeCost, 50_000.0, threshold);
        let result = generator(seed, 0.4).generate(&event, &config).unwrap();
        prop_assert_eq!(result.is_some(), event.confidence >= threshold);
    }

    #[test]
    fn seeded_generation_is_deterministic(
        seed in any::<u64>(),
        objective in objective(),
        event in event(),
    ) {
        let now = Utc.with_ymd_and_hms(2024, 7, 14, 12, 0, 0).unwrap();
        let config = OptimizationConfig::new(objective, 50_000.0, 0.0);
        let a = generator(seed, 0.4).generate_at(&event, &config, now).unwrap();
        let b = generator(seed, 0.4).generate_at(&event, &config, now).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn priority_matches_classification(seed in any::<u64>(), event in event()) {
        let config = OptimizationConfig::new(Objective::MinimizeCost, 50_000.0, 0.0);
        let rec = generator(seed, 0.4).generate(&event, &config).unwrap().unwrap();
        prop_assert_eq!(
            rec.priority,
            priority::classify(event.confidence, event.effective_intensity())
        );
    }
}
