use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::catalog;
use crate::error::Result;
use crate::overlap;
use crate::selection::Selection;
use crate::store::{self, KeyValueStore, CITIES_KEY, MODE_KEY, SETTINGS_KEY};
use crate::types::{
    City, CityRow, OverlapMode, OverlapResult, OverlapSummary, Settings, SettingsUpdate,
};

#[derive(Debug)]
pub struct TimezoneChecker<S: KeyValueStore> {
    store: S,
    selection: Selection,
    settings: Settings,
    mode: OverlapMode,
}

impl<S: KeyValueStore> TimezoneChecker<S> {
    pub fn load(store: S) -> Self {
        let selection =
            store::load_or(&store, CITIES_KEY, Selection::from(catalog::default_cities()));
        let mut settings = store::load_or(&store, SETTINGS_KEY, Settings::default());
        if let Err(e) = settings.awake_window() {
            warn!(
                key = SETTINGS_KEY,
                error = %e,
                "ignoring stored settings with invalid hours"
            );
            settings = Settings::default();
        }
        let mode = store::load_or(&store, MODE_KEY, OverlapMode::default());
        debug!(cities = selection.len(), ?mode, "checker state loaded");
        Self {
            store,
            selection,
            settings,
            mode,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> OverlapMode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn add_city(&mut self, city: City) -> Result<bool> {
        let mut next = self.selection.clone();
        if !next.add(city) {
            return Ok(false);
        }
        self.commit_selection(next)?;
        Ok(true)
    }

    pub fn remove_city(&mut self, index: usize) -> Result<City> {
        let mut next = self.selection.clone();
        let city = next.remove(index)?;
        self.commit_selection(next)?;
        Ok(city)
    }

    pub fn set_reference(&mut self, index: usize) -> Result<()> {
        let mut next = self.selection.clone();
        next.set_reference(index)?;
        self.commit_selection(next)
    }

    pub fn update_settings(&mut self, update: SettingsUpdate) -> Result<()> {
        let next = Settings {
            wakeup_from: update.wakeup_from.unwrap_or(self.settings.wakeup_from),
            wakeup_to: update.wakeup_to.unwrap_or(self.settings.wakeup_to),
            time_format: update.time_format.unwrap_or(self.settings.time_format),
        };
        next.awake_window()?;
        store::save(&mut self.store, SETTINGS_KEY, &next)?;
        self.settings = next;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: OverlapMode) -> Result<()> {
        store::save(&mut self.store, MODE_KEY, &mode)?;
        self.mode = mode;
        Ok(())
    }

    pub fn available_cities(&self, query: &str) -> Vec<City> {
        catalog::search_cities(query, self.selection.cities())
    }

    pub fn overlap(&self) -> Result<OverlapResult> {
        self.overlap_at(Utc::now())
    }

    pub fn overlap_at(&self, instant: DateTime<Utc>) -> Result<OverlapResult> {
        let window = self.settings.awake_window()?;
        overlap::compute_overlap_at(&self.selection, window, self.mode, instant)
    }

    pub fn rows_at(&self, instant: DateTime<Utc>) -> Result<Vec<CityRow>> {
        let window = self.settings.awake_window()?;
        let result = overlap::compute_overlap_at(&self.selection, window, self.mode, instant)?;
        overlap::city_rows_at(&self.selection, window, &result, instant)
    }

    pub fn summary_at(&self, instant: DateTime<Utc>) -> Result<Option<OverlapSummary>> {
        let result = self.overlap_at(instant)?;
        Ok(overlap::summarize(&self.selection, &result))
    }

    fn commit_selection(&mut self, next: Selection) -> Result<()> {
        store::save(&mut self.store, CITIES_KEY, &next)?;
        self.selection = next;
        Ok(())
    }
}
