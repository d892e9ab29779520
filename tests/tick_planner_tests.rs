use approx::assert_relative_eq;
use plotgrid::PlotError;
use plotgrid::core::{MonospaceMeasure, TickConfig, TickPlanner, ViewportTransform};

fn default_planner() -> TickPlanner {
    TickPlanner::default()
}

#[test]
fn plan_over_hundred_units_uses_spacing_of_twenty() {
    let plan = default_planner()
        .plan_range(0.0, 100.0, 500.0, true, &MonospaceMeasure::default())
        .expect("plan");

    assert_relative_eq!(plan.major_spacing, 20.0, max_relative = 1e-9);
    assert_relative_eq!(plan.minor_spacing, 2.0, max_relative = 1e-9);

    let values: Vec<f64> = plan.majors.iter().map(|tick| tick.value).collect();
    assert_eq!(values.len(), 6);
    for (value, expected) in values.iter().zip([0.0, 20.0, 40.0, 60.0, 80.0, 100.0]) {
        assert_relative_eq!(*value, expected, epsilon = 1e-9);
    }

    let pixels: Vec<f64> = plan.majors.iter().map(|tick| tick.pixel).collect();
    for (pixel, expected) in pixels.iter().zip([0.0, 100.0, 200.0, 300.0, 400.0, 500.0]) {
        assert_relative_eq!(*pixel, expected, epsilon = 1e-6);
    }
}

#[test]
fn major_ticks_are_evenly_spaced_and_ascending() {
    let plan = default_planner()
        .plan_range(-3.7, 12.9, 640.0, true, &MonospaceMeasure::default())
        .expect("plan");

    assert!(plan.majors.len() >= 2);
    for pair in plan.majors.windows(2) {
        let delta = pair[1].value - pair[0].value;
        assert!(delta > 0.0);
        assert_relative_eq!(delta, plan.major_spacing, max_relative = 1e-9);
    }
}

#[test]
fn major_spacing_has_round_leading_digit() {
    for (min, max, length) in [
        (0.0, 100.0, 500.0),
        (-250.0, 370.0, 800.0),
        (0.001, 0.002, 300.0),
        (1.0e6, 9.9e6, 1920.0),
        (-1.0, 1.0, 123.0),
    ] {
        let plan = default_planner()
            .plan_range(min, max, length, true, &MonospaceMeasure::default())
            .expect("plan");

        let spacing = plan.major_spacing;
        let digit = spacing / 10_f64.powf(spacing.log10().floor());
        let is_round = [1.0, 2.0, 5.0]
            .iter()
            .any(|round| (digit - round).abs() <= 1e-6 * round);
        assert!(is_round, "spacing {spacing} has leading digit {digit}");
    }
}

#[test]
fn minor_ticks_mark_half_major_midpoints() {
    let plan = default_planner()
        .plan_range(0.0, 100.0, 500.0, true, &MonospaceMeasure::default())
        .expect("plan");

    let midpoints: Vec<f64> = plan
        .minors
        .iter()
        .filter(|minor| minor.midpoint)
        .map(|minor| minor.value)
        .collect();
    assert!(!midpoints.is_empty());
    for value in &midpoints {
        // Half-major marks sit an odd multiple of half the spacing from zero.
        let ratio = value / (plan.major_spacing / 2.0);
        assert_relative_eq!(ratio.round(), ratio, epsilon = 1e-6);
        assert_eq!(ratio.round() as i64 % 2, 1);
    }
}

#[test]
fn half_major_labels_are_placed_when_they_fit() {
    let plan = default_planner()
        .plan_range(0.0, 100.0, 500.0, true, &MonospaceMeasure::default())
        .expect("plan");

    // Major pixel spacing is 100px; a default-measure "10.00" label is 35px,
    // well under the crowding threshold.
    assert!(
        plan.labels
            .iter()
            .any(|label| (label.value - 10.0).abs() < 1e-9)
    );
}

#[test]
fn crowded_half_major_labels_are_suppressed() {
    let wide = MonospaceMeasure {
        char_width: 20.0,
        line_height: 14.0,
    };
    let plan = default_planner()
        .plan_range(0.0, 100.0, 500.0, true, &wide)
        .expect("plan");

    // Only the 6 major labels survive.
    assert_eq!(plan.labels.len(), plan.majors.len());
    assert!(
        !plan
            .labels
            .iter()
            .any(|label| (label.value - 10.0).abs() < 1e-9)
    );
}

#[test]
fn reversed_run_produces_descending_pixels() {
    let transform = ViewportTransform::new(0.0, 100.0, 0.0, 500.0, true).expect("valid transform");
    let plan = default_planner()
        .plan(&transform, true, &MonospaceMeasure::default())
        .expect("plan");

    assert!(plan.majors.len() >= 2);
    for pair in plan.majors.windows(2) {
        assert!(pair[1].value > pair[0].value);
        assert!(pair[1].pixel < pair[0].pixel);
    }
}

#[test]
fn empty_range_fails_planning() {
    let result = default_planner().plan_range(5.0, 5.0, 500.0, true, &MonospaceMeasure::default());
    assert!(matches!(result, Err(PlotError::InvalidRange { .. })));
}

#[test]
fn zero_pixel_length_fails_planning() {
    let result = default_planner().plan_range(0.0, 100.0, 0.0, true, &MonospaceMeasure::default());
    assert!(matches!(result, Err(PlotError::InvalidPixelSpan { .. })));
}

#[test]
fn subnormal_spacing_is_guarded() {
    let result =
        default_planner().plan_range(0.0, 1.0e-306, 500.0, true, &MonospaceMeasure::default());
    assert!(matches!(result, Err(PlotError::InvalidRange { .. })));
}

#[test]
fn invalid_config_is_rejected() {
    assert!(
        TickPlanner::new(TickConfig {
            coarse_ratio: 0.0,
            ..TickConfig::default()
        })
        .is_err()
    );
    assert!(
        TickPlanner::new(TickConfig {
            label_fit_ratio: f64::NAN,
            ..TickConfig::default()
        })
        .is_err()
    );
}

#[test]
fn coarse_ratio_of_one_yields_dense_ticks() {
    let planner = TickPlanner::new(TickConfig {
        coarse_ratio: 1.0,
        ..TickConfig::default()
    })
    .expect("valid config");

    let plan = planner
        .plan_range(0.0, 100.0, 500.0, true, &MonospaceMeasure::default())
        .expect("plan");

    // Snapped spacing without coarsening: 0.2 units per major.
    assert_relative_eq!(plan.major_spacing, 0.2, max_relative = 1e-9);
    assert!(plan.majors.len() > 100);
}
