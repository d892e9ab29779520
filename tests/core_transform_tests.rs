use approx::assert_relative_eq;
use plotgrid::PlotError;
use plotgrid::core::{Axis, AxisDirection, AxisPosition, ViewportTransform};

#[test]
fn forward_transform_maps_midpoint() {
    let transform = ViewportTransform::new(0.0, 100.0, 0.0, 500.0, false).expect("valid transform");

    assert_relative_eq!(transform.value_to_pixel(50.0).expect("to pixel"), 250.0);
    assert_relative_eq!(transform.value_to_pixel(0.0).expect("to pixel"), 0.0);
    assert_relative_eq!(transform.value_to_pixel(100.0).expect("to pixel"), 500.0);
}

#[test]
fn round_trip_within_tolerance() {
    let transform = ViewportTransform::new(10.0, 110.0, 40.0, 960.0, false).expect("valid transform");

    let original = 42.5;
    let px = transform.value_to_pixel(original).expect("to pixel");
    let recovered = transform.pixel_to_value(px).expect("from pixel");

    assert_relative_eq!(recovered, original, max_relative = 1e-9);
}

#[test]
fn reversed_transform_swaps_endpoints() {
    let transform = ViewportTransform::new(0.0, 100.0, 20.0, 500.0, true).expect("valid transform");

    assert_relative_eq!(transform.value_to_pixel(0.0).expect("min pixel"), 520.0);
    assert_relative_eq!(transform.value_to_pixel(100.0).expect("max pixel"), 20.0);
}

#[test]
fn reversed_round_trip_within_tolerance() {
    let transform = ViewportTransform::new(-5.0, 35.0, 0.0, 777.0, true).expect("valid transform");

    let original = 12.25;
    let px = transform.value_to_pixel(original).expect("to pixel");
    let recovered = transform.pixel_to_value(px).expect("from pixel");

    assert_relative_eq!(recovered, original, max_relative = 1e-9);
}

#[test]
fn vertical_forward_axis_runs_bottom_to_top() {
    // Pixel Y grows downward, so a vertical Forward axis maps its minimum to
    // the bottom of the run.
    let axis = Axis::new(AxisPosition::Left).with_range(0.0, 10.0);
    let transform = ViewportTransform::for_axis(&axis, 0.0, 100.0).expect("valid transform");

    assert_relative_eq!(transform.value_to_pixel(0.0).expect("min pixel"), 100.0);
    assert_relative_eq!(transform.value_to_pixel(10.0).expect("max pixel"), 0.0);
}

#[test]
fn vertical_reversed_axis_runs_top_to_bottom() {
    let axis = Axis::new(AxisPosition::Left)
        .with_range(0.0, 10.0)
        .with_direction(AxisDirection::Reversed);
    let transform = ViewportTransform::for_axis(&axis, 0.0, 100.0).expect("valid transform");

    assert_relative_eq!(transform.value_to_pixel(0.0).expect("min pixel"), 0.0);
    assert_relative_eq!(transform.value_to_pixel(10.0).expect("max pixel"), 100.0);
}

#[test]
fn empty_range_is_rejected() {
    let result = ViewportTransform::new(5.0, 5.0, 0.0, 500.0, false);
    assert!(matches!(result, Err(PlotError::InvalidRange { .. })));
}

#[test]
fn inverted_range_is_rejected() {
    let result = ViewportTransform::new(10.0, 0.0, 0.0, 500.0, false);
    assert!(matches!(result, Err(PlotError::InvalidRange { .. })));
}

#[test]
fn non_finite_range_is_rejected() {
    let result = ViewportTransform::new(f64::NAN, 1.0, 0.0, 500.0, false);
    assert!(matches!(result, Err(PlotError::InvalidRange { .. })));
}

#[test]
fn zero_pixel_length_is_rejected() {
    let result = ViewportTransform::new(0.0, 1.0, 0.0, 0.0, false);
    assert!(matches!(result, Err(PlotError::InvalidPixelSpan { .. })));
}

#[test]
fn non_finite_value_is_rejected() {
    let transform = ViewportTransform::new(0.0, 1.0, 0.0, 100.0, false).expect("valid transform");
    assert!(transform.value_to_pixel(f64::INFINITY).is_err());
    assert!(transform.pixel_to_value(f64::NAN).is_err());
}
