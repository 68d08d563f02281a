use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};

use timezone_overlap::overlap::*;
use timezone_overlap::types::*;
use timezone_overlap::{default_cities, find_city, Error, Selection};

static JANUARY: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap());

fn city(name: &str) -> City {
    find_city(name).unwrap()
}

fn window(from: u32, to: u32) -> AwakeWindow {
    AwakeWindow::new(from, to).unwrap()
}

fn set(hours: &[u32]) -> HourSet {
    hours.iter().copied().collect()
}

// ── Awake window ──

#[test]
fn test_window_rejects_invalid_hours() {
    assert!(matches!(AwakeWindow::new(24, 5), Err(Error::InvalidHour(24))));
    assert!(matches!(AwakeWindow::new(5, 30), Err(Error::InvalidHour(30))));
    let night = window(22, 6);
    assert_eq!((night.from_hour(), night.to_hour()), (22, 6));
    assert!(night.wraps());
    assert!(!window(6, 22).wraps());
}

#[test]
fn test_default_window_matches_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.awake_window().unwrap(), AwakeWindow::default());
    assert_eq!((settings.wakeup_from, settings.wakeup_to), (7, 23));
    assert_eq!(settings.time_format, TimeFormat::TwelveHour);
}

// ── overlap_hours ──

#[test]
fn test_empty_cities_have_no_overlap() {
    for (from, to) in [(0, 23), (9, 17), (22, 6)] {
        let hours = overlap_hours_at(&[], window(from, to), *JANUARY).unwrap();
        assert!(hours.is_empty());
    }
}

#[test]
fn test_single_city_overlap_is_its_window() {
    let hours = overlap_hours_at(&[city("London")], window(9, 17), *JANUARY).unwrap();
    assert_eq!(hours, (9..=17).collect::<HourSet>());
}

#[test]
fn test_london_singapore_office_hours() {
    let cities = [city("London"), city("Singapore")];
    let hours = overlap_hours_at(&cities, window(9, 17), *JANUARY).unwrap();
    assert!(hours.contains(&9));
    assert!(!hours.contains(&10));
    assert_eq!(hours, set(&[9]));
}

#[test]
fn test_overlap_is_expressed_in_reference_time() {
    let cities = [city("Singapore"), city("London")];
    let hours = overlap_hours_at(&cities, window(9, 17), *JANUARY).unwrap();
    assert_eq!(hours, set(&[17]));
}

#[test]
fn test_no_overlap_for_far_apart_office_hours() {
    let cities = [city("Tokyo"), city("London")];
    let hours = overlap_hours_at(&cities, window(9, 17), *JANUARY).unwrap();
    assert!(hours.is_empty());
}

#[test]
fn test_wrapping_window_overlap() {
    // Night owls in London and New York, 22:00 to 06:00 local.
    let cities = [city("London"), city("New York")];
    let hours = overlap_hours_at(&cities, window(22, 6), *JANUARY).unwrap();
    assert_eq!(hours, set(&[3, 4, 5, 6]));
}

#[test]
fn test_unknown_timezone_propagates() {
    let bogus = City::new("Atlantis", "Ocean/Atlantis", "XX");
    let err = overlap_hours_at(&[city("London"), bogus], window(9, 17), *JANUARY).unwrap_err();
    assert!(matches!(err, Error::UnknownTimezone { .. }));
}

#[test]
fn test_overlap_now_for_fixed_zones() {
    let cities = [city("Tokyo"), city("Seoul")];
    let hours = overlap_hours(&cities, window(9, 17)).unwrap();
    assert_eq!(hours, (9..=17).collect::<HourSet>());
}

// ── compute_overlap ──

fn default_selection() -> Selection {
    Selection::from(default_cities())
}

#[test]
fn test_meeting_mode_shares_one_set() {
    let result =
        compute_overlap_at(&default_selection(), window(7, 23), OverlapMode::Meeting, *JANUARY)
            .unwrap();
    assert_eq!(result.mode, OverlapMode::Meeting);
    assert_eq!(result.per_city.len(), 3);
    let expected = set(&[7, 22, 23]);
    for hours in &result.per_city {
        assert_eq!(hours, &expected);
    }
}

#[test]
fn test_base_mode_is_pairwise_with_reference() {
    let result =
        compute_overlap_at(&default_selection(), window(7, 23), OverlapMode::Base, *JANUARY)
            .unwrap();
    assert_eq!(result.mode, OverlapMode::Base);
    assert!(result.per_city[0].is_empty());

    let mut denpasar = set(&[7]);
    denpasar.extend(15..=23);
    assert_eq!(result.per_city[1], denpasar);

    let mut geneva: HourSet = (7..=14).collect();
    geneva.extend([22, 23]);
    assert_eq!(result.per_city[2], geneva);
}

#[test]
fn test_meeting_set_is_intersection_of_base_sets() {
    let selection = default_selection();
    let meeting =
        compute_overlap_at(&selection, window(7, 23), OverlapMode::Meeting, *JANUARY).unwrap();
    let base = compute_overlap_at(&selection, window(7, 23), OverlapMode::Base, *JANUARY).unwrap();
    let intersection: HourSet = base.per_city[1]
        .intersection(&base.per_city[2])
        .copied()
        .collect();
    assert_eq!(meeting.per_city[0], intersection);
}

#[test]
fn test_empty_selection_result() {
    let result =
        compute_overlap_at(&Selection::new(), window(7, 23), OverlapMode::Base, *JANUARY).unwrap();
    assert!(result.per_city.is_empty());
    assert!(!result.contains(0, 7));
}

#[test]
fn test_overlap_sets_stay_within_day() {
    let selection = Selection::from(timezone_overlap::catalog());
    for mode in [OverlapMode::Meeting, OverlapMode::Base] {
        let result = compute_overlap_at(&selection, window(0, 23), mode, *JANUARY).unwrap();
        for hours in &result.per_city {
            assert!(hours.iter().all(|&h| h < 24));
        }
    }
}

// ── Grid rows ──

#[test]
fn test_city_hours_follow_reference_clock() {
    let hours = city_hours_at("Europe/London", "Asia/Singapore", *JANUARY).unwrap();
    assert_eq!(hours.len(), 24);
    assert_eq!(hours[0], 8);
    assert_eq!(hours[16], 0);
    assert_eq!(hours[23], 7);
}

#[test]
fn test_rows_mark_cell_states() {
    let selection = Selection::from(vec![city("London"), city("Singapore")]);
    let w = window(9, 17);
    let result = compute_overlap_at(&selection, w, OverlapMode::Meeting, *JANUARY).unwrap();
    let rows = city_rows_at(&selection, w, &result, *JANUARY).unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows[0].is_reference);
    assert!(!rows[1].is_reference);
    assert_eq!(rows[1].utc_offset, 8.0);

    let london = &rows[0].cells;
    assert_eq!(london[9].state, CellState::Overlap);
    assert_eq!(london[10].state, CellState::Awake);
    assert_eq!(london[3].state, CellState::Asleep);

    let singapore = &rows[1].cells;
    assert_eq!(singapore[9].local_hour, 17);
    assert_eq!(singapore[9].state, CellState::Overlap);
    assert_eq!(singapore[1].local_hour, 9);
    assert_eq!(singapore[1].state, CellState::Awake);
    assert_eq!(singapore[10].state, CellState::Asleep);
}

#[test]
fn test_rows_for_empty_selection() {
    let result = OverlapResult::empty(OverlapMode::Meeting);
    let rows = city_rows_at(&Selection::new(), window(7, 23), &result, *JANUARY).unwrap();
    assert!(rows.is_empty());
}

// ── Summary ──

#[test]
fn test_summary_needs_two_cities() {
    let selection = Selection::from(vec![city("London")]);
    let result =
        compute_overlap_at(&selection, window(9, 17), OverlapMode::Meeting, *JANUARY).unwrap();
    assert!(summarize(&selection, &result).is_none());
}

#[test]
fn test_meeting_summary() {
    let selection = default_selection();
    let result =
        compute_overlap_at(&selection, window(7, 23), OverlapMode::Meeting, *JANUARY).unwrap();
    match summarize(&selection, &result) {
        Some(OverlapSummary::Meeting {
            reference,
            total_hours,
            ranges,
        }) => {
            assert_eq!(reference.name, "San Francisco");
            assert_eq!(total_hours, 3);
            assert_eq!(
                ranges,
                vec![HourRange { start: 7, end: 7 }, HourRange { start: 22, end: 23 }]
            );
        }
        other => panic!("unexpected summary: {other:?}"),
    }
}

#[test]
fn test_base_summary_reports_empty_pairs() {
    let selection = Selection::from(vec![city("Tokyo"), city("London"), city("Seoul")]);
    let result = compute_overlap_at(&selection, window(9, 17), OverlapMode::Base, *JANUARY).unwrap();
    match summarize(&selection, &result) {
        Some(OverlapSummary::Base { reference, cities }) => {
            assert_eq!(reference.name, "Tokyo");
            assert_eq!(cities.len(), 2);
            assert_eq!(cities[0].city.name, "London");
            assert_eq!(cities[0].total_hours, 0);
            assert!(cities[0].ranges.is_empty());
            assert_eq!(cities[1].city.name, "Seoul");
            assert_eq!(cities[1].total_hours, 9);
            assert_eq!(cities[1].ranges, vec![HourRange { start: 9, end: 17 }]);
        }
        other => panic!("unexpected summary: {other:?}"),
    }
}
