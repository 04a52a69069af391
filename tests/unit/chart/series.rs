use serde_json::json;

use super::*;

#[test]
fn axis_labels_step_and_keep_end() {
    assert_eq!(
        chart_axis_labels(1950, 2100),
        ["1950", "1980", "2010", "2040", "2070", "2100"]
    );
    assert_eq!(
        chart_axis_labels(1950, 2007),
        ["1950", "1962", "1974", "1986", "1998", "2007"]
    );
    assert_eq!(chart_axis_labels(2000, 2000), ["2000"]);
    assert!(chart_axis_labels(2001, 2000).is_empty());
}

#[test]
fn window_prefers_custom_then_period() {
    assert_eq!(
        YearWindow::select(Some((1960, 1970)), Some("mid")),
        YearWindow::Range(1960, 1970)
    );
    assert_eq!(
        YearWindow::select(None, Some("end")),
        YearWindow::Range(2080, 2099)
    );
    assert_eq!(YearWindow::select(None, Some("other")), YearWindow::All);
    assert_eq!(YearWindow::select(None, None), YearWindow::All);
}

#[test]
fn object_years_are_sorted_and_windowed() {
    let years = json!({
        "2041": [2.0, 1.0, 3.0],
        "2040": [1.0, 0.5, 1.5],
        "1999": [9.0, 9.0, 9.0],
        "note": "ignored"
    });
    let s = ChartSeries::from_years(&years, YearWindow::Range(2040, 2060)).unwrap();
    assert_eq!(s.labels, ["2040", "2041"]);
    assert_eq!(s.mean, [Some(1.0), Some(2.0)]);
    assert_eq!(s.min, [Some(0.5), Some(1.0)]);
    assert_eq!(s.max, [Some(1.5), Some(3.0)]);
}

#[test]
fn scalar_object_years_fill_mean_only() {
    let years = json!({"2001": 4.0, "2000": 3.0});
    let s = ChartSeries::from_years(&years, YearWindow::All).unwrap();
    assert_eq!(s.labels, ["2000", "2001"]);
    assert_eq!(s.mean, [Some(3.0), Some(4.0)]);
    assert!(s.min.is_empty() && s.max.is_empty());
    assert!(!s.has_min());
}

#[test]
fn array_years_start_at_1950_and_clamp() {
    let years = json!([[1.0, 2.0, 3.0, 4.0], [0.0, 1.0, 2.0, 3.0], [2.0, 3.0, 4.0, 5.0]]);

    let all = ChartSeries::from_years(&years, YearWindow::All).unwrap();
    assert_eq!(all.labels, ["1950", "1951", "1952", "1953"]);

    let s = ChartSeries::from_years(&years, YearWindow::Range(1952, 2100)).unwrap();
    assert_eq!(s.labels, ["1952", "1953"]);
    assert_eq!(s.mean, [Some(3.0), Some(4.0)]);
    assert_eq!(s.max, [Some(4.0), Some(5.0)]);

    let past_end = ChartSeries::from_years(&years, YearWindow::Range(2080, 2099)).unwrap();
    assert!(past_end.labels.is_empty());
    assert!(past_end.mean.is_empty());
}

#[test]
fn array_years_clamp_extreme_ranges() {
    let years = json!([[1.0, 2.0, 3.0], [0.0, 1.0, 2.0], [2.0, 3.0, 4.0]]);

    let low = ChartSeries::from_years(&years, YearWindow::Range(i32::MIN, 1951)).unwrap();
    assert_eq!(low.labels, ["1950", "1951"]);
    assert_eq!(low.mean, [Some(1.0), Some(2.0)]);

    let high = ChartSeries::from_years(&years, YearWindow::Range(1951, i32::MAX)).unwrap();
    assert_eq!(high.labels, ["1951", "1952"]);
    assert_eq!(high.min, [Some(1.0), Some(2.0)]);

    let whole = ChartSeries::from_years(&years, YearWindow::Range(i32::MIN, i32::MAX)).unwrap();
    assert_eq!(whole.labels.len(), 3);

    let inverted = ChartSeries::from_years(&years, YearWindow::Range(i32::MAX, i32::MIN)).unwrap();
    assert!(inverted.labels.is_empty());
}

#[test]
fn unsupported_shapes_give_nothing() {
    assert!(ChartSeries::from_years(&json!(3.0), YearWindow::All).is_none());
    assert!(ChartSeries::from_years(&json!([[1.0]]), YearWindow::All).is_none());
}

#[test]
fn compact_drops_missing_means() {
    let s = ChartSeries {
        labels: vec!["a".into(), "b".into(), "c".into()],
        mean: vec![Some(1.0), None, Some(f64::NAN)],
        min: vec![None, Some(0.0), Some(0.0)],
        max: vec![],
    };
    let c = s.compact();
    assert_eq!(c.labels, ["a"]);
    assert_eq!(c.mean, [Some(1.0)]);
    assert_eq!(c.min, [None]);
    assert_eq!(c.max, [None]);
}

#[test]
fn value_range_pads_ten_percent() {
    let s = ChartSeries {
        labels: vec!["a".into(), "b".into()],
        mean: vec![Some(10.0), Some(20.0)],
        min: vec![Some(0.0), None],
        max: vec![None, Some(30.0)],
    };
    let (lo, hi) = s.value_range();
    assert!((lo + 3.0).abs() < 1e-9);
    assert!((hi - 33.0).abs() < 1e-9);

    assert_eq!(ChartSeries::default().value_range(), (0.0, 100.0));
}
