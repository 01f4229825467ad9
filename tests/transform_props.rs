use covid19_plotter::Transform;
use covid19_plotter::models::DateColumn;
use covid19_plotter::transform::{MOVING_AVERAGE_WINDOW, daily_values, moving_average, starting_index};

fn dates(n: usize) -> Vec<DateColumn> {
    (0..n)
        .map(|i| DateColumn::parse(&format!("2/{}/20", i + 1)).unwrap())
        .collect()
}

#[test]
fn daily_series_reconstructs_totals() {
    let totals = [0, 3, 3, 10, 9, 15, 40, 41];
    let daily = daily_values(&totals);
    let mut acc = 0;
    let rebuilt: Vec<i64> = daily.iter().map(|d| { acc += d; acc }).collect();
    assert_eq!(rebuilt, totals);
}

#[test]
fn moving_average_needs_a_full_window() {
    let values: Vec<i64> = (1..=10).collect();
    let avg = moving_average(&values, MOVING_AVERAGE_WINDOW);
    assert_eq!(avg.len(), values.len());
    assert_eq!(avg.iter().filter(|v| v.is_none()).count(), MOVING_AVERAGE_WINDOW - 1);
    assert_eq!(avg[6], Some(4.0));
    assert_eq!(avg[9], Some(7.0));
    assert!(moving_average(&values[..6], MOVING_AVERAGE_WINDOW).iter().all(Option::is_none));
}

#[test]
fn starting_day_skips_negligible_prefix() {
    assert_eq!(starting_index(&[0, 0, 1, 5, 100, 1000]), 4);
    assert_eq!(starting_index(&[0, 0, 0]), 0);
    assert_eq!(starting_index(&[]), 0);
}

#[test]
fn total_and_daily_labels_align_with_values() {
    let totals = [0, 0, 5, 9, 20, 20, 31, 70, 71, 90];
    for t in [Transform::Total, Transform::Daily] {
        let s = t.apply(&dates(totals.len()), &totals);
        assert_eq!(s.labels.len(), s.values.len());
        assert!(!s.is_empty());
        if let Some(avg) = &s.moving_average {
            assert_eq!(avg.len(), s.values.len());
        }
    }
    let daily = Transform::Daily.apply(&dates(totals.len()), &totals);
    assert_eq!(daily.labels[0], "2/3/20");
    assert_eq!(daily.values, vec![5, 4, 11, 0, 11, 39, 1, 19]);
}
