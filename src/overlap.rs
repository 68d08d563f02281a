use chrono::{DateTime, Utc};
use tracing::debug;

use crate::offsets::{self, offset_seconds_at, parse_timezone, shift_hour};
use crate::selection::Selection;
use crate::types::{
    AwakeWindow, CellState, City, CityOverlap, CityRow, HourCell, HourSet, OverlapMode,
    OverlapResult, OverlapSummary, HOURS_PER_DAY,
};

fn offset_diffs_at(cities: &[City], instant: DateTime<Utc>) -> crate::Result<Vec<i64>> {
    let offsets = cities
        .iter()
        .map(|c| -> crate::Result<i64> {
            Ok(offset_seconds_at(parse_timezone(&c.timezone)?, instant) as i64)
        })
        .collect::<crate::Result<Vec<i64>>>()?;
    let Some(&reference) = offsets.first() else {
        return Ok(Vec::new());
    };
    Ok(offsets.into_iter().map(|o| o - reference).collect())
}

fn joint_hours(diffs: &[i64], window: AwakeWindow) -> HourSet {
    if diffs.is_empty() {
        return HourSet::new();
    }
    (0..HOURS_PER_DAY)
        .filter(|&h| diffs.iter().all(|&d| window.contains(shift_hour(h, d))))
        .collect()
}

pub fn overlap_hours(cities: &[City], window: AwakeWindow) -> crate::Result<HourSet> {
    overlap_hours_at(cities, window, Utc::now())
}

pub fn overlap_hours_at(
    cities: &[City],
    window: AwakeWindow,
    instant: DateTime<Utc>,
) -> crate::Result<HourSet> {
    let diffs = offset_diffs_at(cities, instant)?;
    Ok(joint_hours(&diffs, window))
}

pub fn compute_overlap(
    selection: &Selection,
    window: AwakeWindow,
    mode: OverlapMode,
) -> crate::Result<OverlapResult> {
    compute_overlap_at(selection, window, mode, Utc::now())
}

pub fn compute_overlap_at(
    selection: &Selection,
    window: AwakeWindow,
    mode: OverlapMode,
    instant: DateTime<Utc>,
) -> crate::Result<OverlapResult> {
    let cities = selection.cities();
    if cities.is_empty() {
        return Ok(OverlapResult::empty(mode));
    }
    let diffs = offset_diffs_at(cities, instant)?;

    let per_city = match mode {
        OverlapMode::Meeting => {
            let group = joint_hours(&diffs, window);
            vec![group; cities.len()]
        }
        OverlapMode::Base => diffs
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                if i == 0 {
                    HourSet::new()
                } else {
                    joint_hours(&[0, d], window)
                }
            })
            .collect(),
    };

    debug!(
        ?mode,
        cities = cities.len(),
        from = window.from_hour(),
        to = window.to_hour(),
        "overlap recomputed"
    );
    Ok(OverlapResult { mode, per_city })
}

pub fn city_hours_at(
    reference_tz: &str,
    city_tz: &str,
    instant: DateTime<Utc>,
) -> crate::Result<Vec<u32>> {
    let reference = offset_seconds_at(parse_timezone(reference_tz)?, instant);
    let target = offset_seconds_at(parse_timezone(city_tz)?, instant);
    let diff = (target - reference) as i64;
    Ok((0..HOURS_PER_DAY).map(|h| shift_hour(h, diff)).collect())
}

pub fn city_rows_at(
    selection: &Selection,
    window: AwakeWindow,
    result: &OverlapResult,
    instant: DateTime<Utc>,
) -> crate::Result<Vec<CityRow>> {
    let Some(reference) = selection.reference() else {
        return Ok(Vec::new());
    };

    selection
        .cities()
        .iter()
        .enumerate()
        .map(|(i, city)| -> crate::Result<CityRow> {
            let hours = city_hours_at(&reference.timezone, &city.timezone, instant)?;
            let cells = hours
                .into_iter()
                .zip(0..HOURS_PER_DAY)
                .map(|(local_hour, reference_hour)| {
                    let state = if !window.contains(local_hour) {
                        CellState::Asleep
                    } else if result.contains(i, reference_hour) {
                        CellState::Overlap
                    } else {
                        CellState::Awake
                    };
                    HourCell {
                        reference_hour,
                        local_hour,
                        state,
                    }
                })
                .collect();
            Ok(CityRow {
                city: city.clone(),
                is_reference: i == 0,
                utc_offset: offsets::utc_offset_hours_at(&city.timezone, instant)?,
                cells,
            })
        })
        .collect()
}

pub fn summarize(selection: &Selection, result: &OverlapResult) -> Option<OverlapSummary> {
    if selection.len() < 2 {
        return None;
    }
    let reference = selection.reference()?.clone();

    match result.mode {
        OverlapMode::Meeting => {
            let hours = result.for_city(0)?;
            Some(OverlapSummary::Meeting {
                reference,
                total_hours: hours.len(),
                ranges: offsets::to_ranges(hours.iter().copied()),
            })
        }
        OverlapMode::Base => {
            let cities = selection
                .cities()
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, city)| {
                    let hours = result.for_city(i).cloned().unwrap_or_default();
                    CityOverlap {
                        city: city.clone(),
                        total_hours: hours.len(),
                        ranges: offsets::to_ranges(hours),
                    }
                })
                .collect();
            Some(OverlapSummary::Base { reference, cities })
        }
    }
}
