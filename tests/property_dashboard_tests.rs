use oee_core::api::{DashboardEngine, DashboardPhase};
use oee_core::core::{LineId, RawInputs, RawValue};
use proptest::prelude::*;

fn any_line() -> impl Strategy<Value = LineId> {
    prop_oneof![
        Just(LineId::Line1),
        Just(LineId::Line2),
        Just(LineId::Line3),
    ]
}

fn computable_inputs() -> impl Strategy<Value = RawInputs> {
    (
        0.1f64..1_000.0,
        0.0f64..100.0,
        0.1f64..100_000.0,
        0.1f64..100_000.0,
        0.0f64..100_000.0,
    )
        .prop_map(|(total, downtime, actual, max, good)| {
            RawInputs::from_numbers(total, downtime, actual, max, good)
        })
}

proptest! {
    #[test]
    fn running_maximum_is_monotone_and_exact(
        line in any_line(),
        batches in prop::collection::vec(computable_inputs(), 1..12)
    ) {
        let mut engine = DashboardEngine::new();
        engine.select(Some(line));

        let mut best = 0.0f64;
        for raw in batches {
            let update = engine.recompute(raw);
            prop_assert_eq!(update.phase, DashboardPhase::Computed);
            let oee = update.breakdown.expect("computed breakdown").oee;
            best = best.max(oee);

            let observed = engine.store().max_oee_observed(line);
            prop_assert!((observed - best).abs() <= f64::EPSILON * best.abs().max(1.0));
        }
    }

    #[test]
    fn save_then_reload_returns_the_entered_values(
        line in any_line(),
        raw in computable_inputs()
    ) {
        let mut engine = DashboardEngine::new();
        engine.select(Some(line));
        let update = engine.recompute(raw);
        prop_assert_eq!(update.phase, DashboardPhase::Computed);

        let reloaded = engine.select(Some(line)).expect("stored inputs");
        prop_assert_eq!(RawInputs::from(reloaded), raw);
    }

    #[test]
    fn idle_and_invalid_events_never_mutate_the_store(
        line in any_line(),
        raw in computable_inputs(),
        poison_index in 0usize..5,
        poison in prop_oneof![Just(RawValue::Missing), Just(RawValue::Invalid)]
    ) {
        let mut engine = DashboardEngine::new();
        engine.select(Some(line));
        engine.recompute(raw);
        let lines_before = engine.snapshot().lines;

        let mut poisoned = raw;
        match poison_index {
            0 => poisoned.total_time = poison,
            1 => poisoned.downtime_errors = poison,
            2 => poisoned.actual_output = poison,
            3 => poisoned.max_output = poison,
            _ => poisoned.good_units = poison,
        }

        let update = engine.recompute(poisoned);
        prop_assert!(matches!(
            update.phase,
            DashboardPhase::AwaitingInputs | DashboardPhase::InvalidInput
        ));
        prop_assert_eq!(engine.snapshot().lines, lines_before);
    }

    #[test]
    fn only_the_selected_slot_is_ever_populated(
        line in any_line(),
        raw in computable_inputs()
    ) {
        let mut engine = DashboardEngine::new();
        engine.select(Some(line));
        let update = engine.recompute(raw);

        for other in LineId::ALL {
            if other == line {
                prop_assert!(!update.slot(other).is_blank());
            } else {
                prop_assert!(update.slot(other).is_blank());
            }
        }
    }
}
