//! Tests for temperature conversion

use rstest::rstest;

use mathbox::domain::units::{convert, TempUnit};
use mathbox::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case(TempUnit::Celsius, TempUnit::Fahrenheit, 293.0)]
#[case(TempUnit::Celsius, TempUnit::Kelvin, 418.15)]
#[case(TempUnit::Fahrenheit, TempUnit::Celsius, 62.78)]
#[case(TempUnit::Fahrenheit, TempUnit::Kelvin, 335.93)]
#[case(TempUnit::Kelvin, TempUnit::Celsius, -128.15)]
#[case(TempUnit::Kelvin, TempUnit::Fahrenheit, -198.67)]
fn given_145_degrees_when_converting_then_reference_result(
    #[case] from: TempUnit,
    #[case] to: TempUnit,
    #[case] expected: f64,
) {
    let result = convert(from, to, 145.0);
    assert!(
        (result - expected).abs() < 1e-9,
        "{} -> {}: got {}, want {}",
        from,
        to,
        result,
        expected
    );
}

#[rstest]
#[case(TempUnit::Celsius, TempUnit::Fahrenheit, 0.0, 32.0)]
#[case(TempUnit::Celsius, TempUnit::Fahrenheit, 100.0, 212.0)]
#[case(TempUnit::Celsius, TempUnit::Fahrenheit, -40.0, -40.0)]
#[case(TempUnit::Kelvin, TempUnit::Celsius, 0.0, -273.15)]
#[case(TempUnit::Fahrenheit, TempUnit::Kelvin, -459.67, 0.0)]
fn given_landmark_temperatures_when_converting_then_textbook_result(
    #[case] from: TempUnit,
    #[case] to: TempUnit,
    #[case] value: f64,
    #[case] expected: f64,
) {
    assert!((convert(from, to, value) - expected).abs() < 1e-9);
}

#[test]
fn given_absolute_zero_when_converting_then_floors_line_up() {
    // each unit's coldest point maps onto the other units' coldest points
    let c = TempUnit::Celsius.absolute_zero();
    let f = TempUnit::Fahrenheit.absolute_zero();
    let k = TempUnit::Kelvin.absolute_zero();

    assert!((convert(TempUnit::Celsius, TempUnit::Fahrenheit, c) - f).abs() < 1e-9);
    assert!((convert(TempUnit::Celsius, TempUnit::Kelvin, c) - k).abs() < 1e-9);
    assert!((convert(TempUnit::Kelvin, TempUnit::Fahrenheit, k) - f).abs() < 1e-9);
}

#[rstest]
#[case(TempUnit::Celsius, TempUnit::Fahrenheit)]
#[case(TempUnit::Celsius, TempUnit::Kelvin)]
#[case(TempUnit::Fahrenheit, TempUnit::Celsius)]
#[case(TempUnit::Fahrenheit, TempUnit::Kelvin)]
#[case(TempUnit::Kelvin, TempUnit::Celsius)]
#[case(TempUnit::Kelvin, TempUnit::Fahrenheit)]
fn given_round_trip_when_converting_then_within_rounding_tolerance(
    #[case] from: TempUnit,
    #[case] to: TempUnit,
) {
    for value in [-40.0, 0.0, 36.6, 100.0, 145.0, 451.0] {
        if value < from.absolute_zero() {
            continue;
        }
        let back = convert(to, from, convert(from, to, value));
        // two independent roundings, each off by at most half a cent
        assert!(
            (back - value).abs() <= 0.011,
            "{} -> {} -> {}: {} came back as {}",
            from,
            to,
            from,
            value,
            back
        );
    }
}

#[test]
fn given_results_when_converting_then_rounded_to_two_decimals() {
    // 37 C = 98.6 F exactly; 36.6 C = 97.88 F
    assert_eq!(convert(TempUnit::Celsius, TempUnit::Fahrenheit, 37.0), 98.6);
    assert_eq!(
        convert(TempUnit::Celsius, TempUnit::Fahrenheit, 36.6),
        97.88
    );
}

#[test]
fn given_unit_labels_when_displayed_then_full_names() {
    assert_eq!(TempUnit::Celsius.to_string(), "Celsius");
    assert_eq!(TempUnit::Fahrenheit.to_string(), "Fahrenheit");
    assert_eq!(TempUnit::Kelvin.to_string(), "Kelvin");
}
