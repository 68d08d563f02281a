use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const HOURS_PER_DAY: u32 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub timezone: String,
    pub country: String,
}

impl City {
    pub fn new(name: &str, timezone: &str, country: &str) -> Self {
        Self {
            name: name.to_string(),
            timezone: timezone.to_string(),
            country: country.to_string(),
        }
    }

    pub fn same_entry(&self, other: &City) -> bool {
        self.name == other.name && self.timezone == other.timezone
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwakeWindow {
    from: u32,
    to: u32,
}

impl AwakeWindow {
    pub fn new(from: u32, to: u32) -> Result<Self> {
        check_hour(from)?;
        check_hour(to)?;
        Ok(Self { from, to })
    }

    pub fn from_hour(&self) -> u32 {
        self.from
    }

    pub fn to_hour(&self) -> u32 {
        self.to
    }

    pub fn wraps(&self) -> bool {
        self.from > self.to
    }

    pub fn contains(&self, hour: u32) -> bool {
        crate::offsets::is_awake(hour, self.from, self.to)
    }
}

impl Default for AwakeWindow {
    fn default() -> Self {
        Self { from: 7, to: 23 }
    }
}

pub(crate) fn check_hour(hour: u32) -> Result<u32> {
    if hour < HOURS_PER_DAY {
        Ok(hour)
    } else {
        Err(Error::InvalidHour(hour))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapMode {
    #[default]
    Meeting,
    Base,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub wakeup_from: u32,
    pub wakeup_to: u32,
    pub time_format: TimeFormat,
}

impl Default for Settings {
    fn default() -> Self {
        let window = AwakeWindow::default();
        Self {
            wakeup_from: window.from_hour(),
            wakeup_to: window.to_hour(),
            time_format: TimeFormat::TwelveHour,
        }
    }
}

impl Settings {
    pub fn awake_window(&self) -> Result<AwakeWindow> {
        AwakeWindow::new(self.wakeup_from, self.wakeup_to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsUpdate {
    pub wakeup_from: Option<u32>,
    pub wakeup_to: Option<u32>,
    pub time_format: Option<TimeFormat>,
}

pub type HourSet = BTreeSet<u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub fn hour_count(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn hours(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapResult {
    pub mode: OverlapMode,
    pub per_city: Vec<HourSet>,
}

impl OverlapResult {
    pub fn empty(mode: OverlapMode) -> Self {
        Self {
            mode,
            per_city: Vec::new(),
        }
    }

    pub fn for_city(&self, index: usize) -> Option<&HourSet> {
        self.per_city.get(index)
    }

    pub fn contains(&self, index: usize, reference_hour: u32) -> bool {
        self.per_city
            .get(index)
            .is_some_and(|set| set.contains(&reference_hour))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Asleep,
    Awake,
    Overlap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourCell {
    pub reference_hour: u32,
    pub local_hour: u32,
    pub state: CellState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CityRow {
    pub city: City,
    pub is_reference: bool,
    pub utc_offset: f64,
    pub cells: Vec<HourCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityOverlap {
    pub city: City,
    pub total_hours: usize,
    pub ranges: Vec<HourRange>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlapSummary {
    Meeting {
        reference: City,
        total_hours: usize,
        ranges: Vec<HourRange>,
    },
    Base {
        reference: City,
        cities: Vec<CityOverlap>,
    },
}
