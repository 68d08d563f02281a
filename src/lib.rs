pub mod catalog;
pub mod checker;
pub mod error;
pub mod offsets;
pub mod overlap;
pub mod selection;
pub mod store;
pub mod types;

pub use catalog::{catalog, default_cities, find_city, search_cities, DEFAULT_CITY_NAMES};

pub use checker::TimezoneChecker;

pub use error::{Error, Result};

pub use offsets::{
    expand_ranges, format_hour, format_range, format_utc_offset, hour_in_target_timezone,
    hour_in_target_timezone_at, is_awake, offset_seconds_at, parse_timezone, shift_hour,
    to_ranges, utc_offset_hours, utc_offset_hours_at, SECONDS_PER_DAY, SECONDS_PER_HOUR,
};

pub use overlap::{
    city_hours_at, city_rows_at, compute_overlap, compute_overlap_at, overlap_hours,
    overlap_hours_at, summarize,
};

pub use selection::Selection;

pub use store::{
    load_or, save, JsonFileStore, KeyValueStore, MemoryStore, CITIES_KEY, MODE_KEY, SETTINGS_KEY,
};

pub use types::{
    AwakeWindow, CellState, City, CityOverlap, CityRow, HourCell, HourRange, HourSet,
    OverlapMode, OverlapResult, OverlapSummary, Settings, SettingsUpdate, TimeFormat,
    HOURS_PER_DAY,
};
