// File: crates/chartkit-core/tests/scale.rs
// Purpose: Value scale fractions, headroom padding and saturating division.

use chartkit_core::scale::{height_fraction, DEGENERATE_FRACTION};
use chartkit_core::{safe_div, Domain, ValueScale};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn safe_div_yields_zero_for_zero_divisor() {
    assert_eq!(safe_div(5.0, 0.0), 0.0);
    assert_eq!(safe_div(0.0, 0.0), 0.0);
    assert_eq!(safe_div(6.0, 3.0), 2.0);
}

#[test]
fn zero_based_scale_divides_by_max() {
    assert!(approx(height_fraction(5.0, 0.0, 10.0, false), 0.5));
    assert_eq!(height_fraction(0.0, 0.0, 10.0, false), 0.0);
    // domain max of zero never produces NaN
    assert_eq!(height_fraction(5.0, 0.0, 0.0, false), 0.0);
}

#[test]
fn range_scale_pads_domain() {
    let scale = ValueScale::new(Domain::from_values([10.0, 20.0]), true);
    // padded to [9.5, 22.0]
    assert!(approx(scale.height_fraction(20.0), 10.5 / 12.5));
    assert!(approx(scale.height_fraction(9.5), 0.0));
}

#[test]
fn degenerate_range_domain_sits_mid_height() {
    let scale = ValueScale::new(Domain::from_values([7.0, 7.0]), true);
    assert_eq!(scale.height_fraction(7.0), DEGENERATE_FRACTION);
    assert_eq!(DEGENERATE_FRACTION, 0.5);
}

#[test]
fn negative_values_stay_in_unit_interval() {
    let scale = ValueScale::new(Domain::from_values([-10.0, -5.0]), true);
    for v in [-10.0, -7.5, -5.0] {
        let f = scale.height_fraction(v);
        assert!((0.0..=1.0).contains(&f), "{v} -> {f}");
    }
    let zero_based = ValueScale::new(Domain::from_values([-10.0, -5.0]), false);
    assert_eq!(zero_based.height_fraction(-5.0), 1.0);
    assert_eq!(zero_based.height_fraction(-10.0), 1.0);
}

#[test]
fn missing_domain_and_nan_map_to_zero() {
    assert!(Domain::from_values(Vec::<f64>::new()).is_none());
    assert!(Domain::from_values([f64::NAN]).is_none());
    assert_eq!(ValueScale::new(None, true).height_fraction(3.0), 0.0);
    let scale = ValueScale::new(Domain::from_values([1.0, 2.0]), true);
    assert_eq!(scale.height_fraction(f64::NAN), 0.0);
}

#[test]
fn to_px_flips_the_axis() {
    let scale = ValueScale::new(Domain::from_values([0.0, 10.0]), false);
    assert_eq!(scale.to_px(5.0, 0.0, 100.0), 50.0);
    assert_eq!(scale.to_px(10.0, 0.0, 100.0), 0.0);
    assert_eq!(scale.to_px(0.0, 0.0, 100.0), 100.0);
}
