use plotgrid::core::{MonospaceMeasure, TickPlanner, ViewportTransform};
use proptest::prelude::*;

proptest! {
    #[test]
    fn major_spacing_snaps_to_a_round_leading_digit(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        length in 300.0f64..4_000.0
    ) {
        let plan = TickPlanner::default()
            .plan_range(min, min + span, length, true, &MonospaceMeasure::default())
            .expect("plan");

        let spacing = plan.major_spacing;
        prop_assert!(spacing > 0.0 && spacing.is_finite());
        let digit = spacing / 10_f64.powf(spacing.log10().floor());
        let is_round = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .any(|round| (digit - round).abs() <= 1e-6 * round);
        prop_assert!(is_round, "spacing {} has leading digit {}", spacing, digit);
    }

    #[test]
    fn majors_are_uniform_multiples_of_the_spacing(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        length in 300.0f64..4_000.0
    ) {
        let plan = TickPlanner::default()
            .plan_range(min, min + span, length, true, &MonospaceMeasure::default())
            .expect("plan");

        prop_assert!(!plan.majors.is_empty());
        for tick in &plan.majors {
            let ratio = tick.value / plan.major_spacing;
            prop_assert!((ratio - ratio.round()).abs() <= 1e-4);
        }
        for pair in plan.majors.windows(2) {
            let delta = pair[1].value - pair[0].value;
            prop_assert!((delta - plan.major_spacing).abs() <= 1e-4 * plan.major_spacing);
        }
    }

    #[test]
    fn tick_pixels_stay_inside_the_run(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        start in -2_000.0f64..2_000.0,
        length in 300.0f64..4_000.0,
        reversed in proptest::bool::ANY
    ) {
        let transform = ViewportTransform::new(min, min + span, start, length, reversed)
            .expect("valid transform");
        let plan = TickPlanner::default()
            .plan(&transform, true, &MonospaceMeasure::default())
            .expect("plan");

        for tick in plan.majors.iter() {
            prop_assert!(tick.pixel >= start - 0.5 && tick.pixel <= start + length + 0.5);
        }
        for minor in plan.minors.iter() {
            prop_assert!(minor.pixel >= start - 0.5 && minor.pixel <= start + length + 0.5);
        }
    }

    #[test]
    fn major_density_tracks_the_pixel_run(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        length in 300.0f64..4_000.0
    ) {
        let plan = TickPlanner::default()
            .plan_range(min, min + span, length, true, &MonospaceMeasure::default())
            .expect("plan");

        // Spacing snaps to between 100 and 250 raw units per major, so the
        // major count is bounded by the run length alone.
        let count = plan.majors.len();
        prop_assert!(count >= 1);
        prop_assert!(count <= (length / 100.0) as usize + 2, "{} majors", count);
    }

    #[test]
    fn minor_spacing_is_a_tenth_of_major_spacing(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        length in 300.0f64..4_000.0
    ) {
        let plan = TickPlanner::default()
            .plan_range(min, min + span, length, true, &MonospaceMeasure::default())
            .expect("plan");

        prop_assert!((plan.minor_spacing - plan.major_spacing / 10.0).abs()
            <= 1e-9 * plan.major_spacing);
        for minor in plan.minors.iter() {
            let ratio = minor.value / plan.minor_spacing;
            prop_assert!((ratio - ratio.round()).abs() <= 1e-3);
        }
    }

    #[test]
    fn every_major_gets_a_label(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        length in 300.0f64..4_000.0
    ) {
        let plan = TickPlanner::default()
            .plan_range(min, min + span, length, true, &MonospaceMeasure::default())
            .expect("plan");

        for tick in plan.majors.iter() {
            prop_assert!(
                plan.labels
                    .iter()
                    .any(|label| (label.pixel - tick.pixel).abs() <= 1e-6),
                "major at {} has no label",
                tick.value
            );
        }
        // Any extra labels sit on half-major midpoints.
        for label in plan.labels.iter() {
            let ratio = label.value / (plan.major_spacing / 2.0);
            prop_assert!((ratio - ratio.round()).abs() <= 1e-3);
        }
    }

    #[test]
    fn planning_is_deterministic(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        length in 300.0f64..4_000.0
    ) {
        let measure = MonospaceMeasure::default();
        let a = TickPlanner::default()
            .plan_range(min, min + span, length, true, &measure)
            .expect("plan");
        let b = TickPlanner::default()
            .plan_range(min, min + span, length, true, &measure)
            .expect("plan");
        prop_assert_eq!(a, b);
    }
}
