use chrono::{Days, NaiveDate};
use nof1_burden::scores::trend::fit_trend;
use nof1_burden::{CoreError, Measurement, normalize};

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 5, 1).unwrap()
}

fn series_from(points: &[(u64, f64)]) -> nof1_burden::NormalizedSeries {
    let ms: Vec<Measurement> = points
        .iter()
        .map(|&(day, v)| Measurement::new(origin() + Days::new(day), v))
        .collect();
    normalize(&ms).unwrap()
}

#[test]
fn exact_linear_series_recovers_coefficients() {
    let a = 42.5;
    let b = 0.25;
    let pts: Vec<(u64, f64)> = [0u64, 14, 30, 61, 200]
        .iter()
        .map(|&x| (x, a + b * x as f64))
        .collect();
    let m = fit_trend(&series_from(&pts)).unwrap();
    assert!((m.slope - b).abs() < 1e-9);
    assert!((m.intercept - a).abs() < 1e-9);
}

#[test]
fn decreasing_series_has_negative_slope() {
    let m = fit_trend(&series_from(&[(0, 100.0), (10, 80.0), (20, 60.0)])).unwrap();
    assert!((m.slope + 2.0).abs() < 1e-9);
    assert!((m.intercept - 100.0).abs() < 1e-9);
}

#[test]
fn flat_values_give_zero_slope() {
    let m = fit_trend(&series_from(&[(0, 50.0), (30, 50.0), (90, 50.0)])).unwrap();
    assert_eq!(m.slope, 0.0);
    assert!((m.intercept - 50.0).abs() < 1e-12);
}

#[test]
fn single_point_is_insufficient() {
    let err = fit_trend(&series_from(&[(0, 10.0)])).unwrap_err();
    assert_eq!(err, CoreError::InsufficientData { distinct_offsets: 1 });
}

#[test]
fn shared_offset_is_insufficient() {
    let err = fit_trend(&series_from(&[(0, 10.0), (0, 12.0), (0, 14.0)])).unwrap_err();
    assert_eq!(err, CoreError::InsufficientData { distinct_offsets: 1 });
}

#[test]
fn repeated_offsets_with_spread_still_fit() {
    let m = fit_trend(&series_from(&[(0, 10.0), (0, 12.0), (10, 21.0)])).unwrap();
    assert!((m.slope - 1.0).abs() < 1e-9);
    assert!((m.intercept - 11.0).abs() < 1e-9);
}

#[test]
fn fit_is_deterministic() {
    let s = series_from(&[(0, 182.0), (102, 79.0), (139, 79.0), (497, 520.0), (1328, 510.0)]);
    let a = fit_trend(&s).unwrap();
    let b = fit_trend(&s).unwrap();
    assert_eq!(a.slope.to_bits(), b.slope.to_bits());
    assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
}

#[test]
fn overflowing_values_fail_instead_of_nan() {
    let err = fit_trend(&series_from(&[(0, 1e308), (1, 1.7e308)])).unwrap_err();
    assert_eq!(err, CoreError::NumericOverflow);
}

#[test]
fn overflowing_values_fail_through_fit_and_forecast() {
    let s = series_from(&[(0, 1e308), (1, 1.7e308)]);
    let err = nof1_burden::fit_and_forecast(&s, &[30]).unwrap_err();
    assert_eq!(err, CoreError::NumericOverflow);
}
