use chrono::NaiveDate;
use nof1_burden::input::demo_measurements;
use nof1_burden::{CoreError, Measurement, TrendLabel, fit_and_forecast, normalize};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn scenario_a_reference_patient() {
    let series = normalize(&demo_measurements()).unwrap();
    assert_eq!(series.origin(), d("2022-03-17"));
    let offsets: Vec<i64> = series.points().iter().map(|p| p.day_offset).collect();
    assert_eq!(offsets, vec![0, 102, 139, 497, 1328]);

    let p = fit_and_forecast(&series, &[30, 90, 180]).unwrap();
    assert!((p.model.slope - 0.327_540_595_904_358_5).abs() < 1e-9);
    assert!((p.model.intercept - 138.660_225_772_319_1).abs() < 1e-6);

    let dates: Vec<NaiveDate> = p.forecasts.iter().map(|f| f.predicted_date).collect();
    assert_eq!(dates, vec![d("2022-04-16"), d("2022-06-15"), d("2022-09-13")]);
    assert!((p.forecasts[0].predicted_value - 148.486_443_649_5).abs() < 1e-6);
    assert!((p.forecasts[2].predicted_value - 197.617_533_035_1).abs() < 1e-6);

    assert!((p.risk.percent - 82.754_059_590_4).abs() < 1e-6);
    assert_eq!(p.trend_label, TrendLabel::Growing);
}

#[test]
fn scenario_b_single_measurement() {
    let series = normalize(&[Measurement::new(d("2022-03-17"), 182.0)]).unwrap();
    let err = fit_and_forecast(&series, &[30]).unwrap_err();
    assert!(matches!(err, CoreError::InsufficientData { .. }));
}

#[test]
fn scenario_c_empty_list() {
    assert_eq!(normalize(&[]).unwrap_err(), CoreError::EmptySeries);
}

#[test]
fn scenario_d_same_timestamp() {
    let ms = vec![
        Measurement::new(d("2022-03-17"), 182.0),
        Measurement::new(d("2022-03-17"), 79.0),
        Measurement::new(d("2022-03-17"), 520.0),
    ];
    let series = normalize(&ms).unwrap();
    let err = fit_and_forecast(&series, &[30, 90]).unwrap_err();
    assert_eq!(err, CoreError::InsufficientData { distinct_offsets: 1 });
}

#[test]
fn scenario_e_no_horizons() {
    let series = normalize(&demo_measurements()).unwrap();
    let p = fit_and_forecast(&series, &[]).unwrap();
    assert!(p.forecasts.is_empty());
}

#[test]
fn repeated_runs_are_bit_identical() {
    let series = normalize(&demo_measurements()).unwrap();
    let a = fit_and_forecast(&series, &[30, 90, 90, 180]).unwrap();
    let b = fit_and_forecast(&series, &[30, 90, 90, 180]).unwrap();
    assert_eq!(a.model.slope.to_bits(), b.model.slope.to_bits());
    assert_eq!(a.model.intercept.to_bits(), b.model.intercept.to_bits());
    for (x, y) in a.forecasts.iter().zip(&b.forecasts) {
        assert_eq!(x.predicted_value.to_bits(), y.predicted_value.to_bits());
    }
    assert_eq!(a, b);
}

#[test]
fn forecasts_are_consistent_with_model() {
    let series = normalize(&demo_measurements()).unwrap();
    let p = fit_and_forecast(&series, &[1, 45, 360, 45]).unwrap();
    let horizons: Vec<u32> = p.forecasts.iter().map(|f| f.horizon_days).collect();
    assert_eq!(horizons, vec![1, 45, 360, 45]);
    for f in &p.forecasts {
        assert_eq!(
            f.predicted_value,
            p.model.intercept + p.model.slope * f.horizon_days as f64
        );
    }
}
