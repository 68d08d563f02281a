use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};
use crate::types::{check_hour, HourRange, HourSet, TimeFormat, HOURS_PER_DAY};

pub const SECONDS_PER_HOUR: i64 = 3600;
pub const SECONDS_PER_DAY: i64 = SECONDS_PER_HOUR * HOURS_PER_DAY as i64;

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>().map_err(|e| Error::UnknownTimezone {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

pub fn offset_seconds_at(tz: Tz, instant: DateTime<Utc>) -> i32 {
    tz.offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc()
}

pub fn utc_offset_hours(timezone: &str) -> Result<f64> {
    utc_offset_hours_at(timezone, Utc::now())
}

pub fn utc_offset_hours_at(timezone: &str, instant: DateTime<Utc>) -> Result<f64> {
    let tz = parse_timezone(timezone)?;
    Ok(offset_seconds_at(tz, instant) as f64 / SECONDS_PER_HOUR as f64)
}

/// Moves `reference_hour` by `diff_seconds` and floors the result onto the
/// 24-slot grid. Half-hour zones land on the hour they fall inside.
pub fn shift_hour(reference_hour: u32, diff_seconds: i64) -> u32 {
    let shifted =
        (reference_hour as i64 * SECONDS_PER_HOUR + diff_seconds).rem_euclid(SECONDS_PER_DAY);
    (shifted / SECONDS_PER_HOUR) as u32
}

pub fn hour_in_target_timezone(
    reference_tz: &str,
    target_tz: &str,
    reference_hour: u32,
) -> Result<u32> {
    hour_in_target_timezone_at(reference_tz, target_tz, reference_hour, Utc::now())
}

pub fn hour_in_target_timezone_at(
    reference_tz: &str,
    target_tz: &str,
    reference_hour: u32,
    instant: DateTime<Utc>,
) -> Result<u32> {
    check_hour(reference_hour)?;
    let reference = offset_seconds_at(parse_timezone(reference_tz)?, instant);
    let target = offset_seconds_at(parse_timezone(target_tz)?, instant);
    Ok(shift_hour(reference_hour, (target - reference) as i64))
}

pub fn is_awake(hour: u32, from: u32, to: u32) -> bool {
    if from <= to {
        hour >= from && hour <= to
    } else {
        hour >= from || hour <= to
    }
}

/// Compresses hours into sorted closed ranges. 23 and 0 are never joined.
pub fn to_ranges<I: IntoIterator<Item = u32>>(hours: I) -> Vec<HourRange> {
    let mut sorted: Vec<u32> = hours.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return ranges;
    };
    let mut current = HourRange {
        start: first,
        end: first,
    };
    for hour in iter {
        if hour == current.end + 1 {
            current.end = hour;
        } else {
            ranges.push(current);
            current = HourRange {
                start: hour,
                end: hour,
            };
        }
    }
    ranges.push(current);
    ranges
}

pub fn expand_ranges(ranges: &[HourRange]) -> HourSet {
    ranges.iter().flat_map(HourRange::hours).collect()
}

pub fn format_hour(hour: u32, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwentyFourHour => format!("{:02}h", hour),
        TimeFormat::TwelveHour => match hour {
            0 => "12am".to_string(),
            12 => "12pm".to_string(),
            h if h < 12 => format!("{}am", h),
            h => format!("{}pm", h - 12),
        },
    }
}

pub fn format_utc_offset(offset_hours: f64) -> String {
    let sign = if offset_hours >= 0.0 { '+' } else { '-' };
    let total_minutes = (offset_hours.abs() * 60.0).round() as i64;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    if minutes == 0 {
        format!("UTC{}{}", sign, hours)
    } else {
        format!("UTC{}{}:{:02}", sign, hours, minutes)
    }
}

pub fn format_range(range: &HourRange, format: TimeFormat) -> String {
    format!(
        "{} — {}",
        format_hour(range.start, format),
        format_hour((range.end + 1) % HOURS_PER_DAY, format)
    )
}
