//! Application state management.
//!
//! The root `AppState` is the single owner of every parameter the
//! visualization fans out to its children; the UI reads from it and
//! reports changes back as events.

mod settings;
mod url_state;
mod viz;

pub use settings::DisplaySettings;
pub use url_state::{parse_from_url, push_to_url, UrlParams};
pub use viz::{AggregationType, BoundaryLevel, Viewport, VizState};

use crate::config::ExplorerConfig;
use crate::data::{self, MetricTable};
use chrono::NaiveDate;

/// Root application state containing all sub-states.
pub struct AppState {
    /// Visualization selections and viewport
    pub viz_state: VizState,

    /// Selectable dates, oldest first (empty until config loads)
    pub dates: Vec<NaiveDate>,

    /// Country-level metric data
    pub country_data: MetricTable,

    /// Region-level metric data
    pub region_data: MetricTable,

    /// Loaded configuration; `None` until the async load completes
    pub config: Option<ExplorerConfig>,

    /// Application status message displayed in the top bar
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            viz_state: VizState::default(),
            dates: Vec::new(),
            country_data: MetricTable::new(),
            region_data: MetricTable::new(),
            config: None,
            status_message: "Loading configuration...".to_string(),
        }
    }

    /// Readiness gate for the map view.
    pub fn config_loaded(&self) -> bool {
        self.config.is_some()
    }

    /// Installs a loaded configuration: derives the date range, validates
    /// the current selections against the catalog, and provisions the
    /// data tables for both boundary levels.
    pub fn apply_config(&mut self, config: ExplorerConfig) {
        let dates = config.dates();

        if config.indicator(&self.viz_state.indicator).is_none() {
            self.viz_state.indicator = config.default_indicator.clone();
        }
        if let Some(last) = dates.last() {
            if !dates.contains(&self.viz_state.active_date) {
                self.viz_state.active_date = *last;
            }
        }

        self.country_data =
            data::generate_sample_table(data::COUNTRIES, &config.indicators, &dates);
        self.region_data = data::generate_sample_table(data::REGIONS, &config.indicators, &dates);
        self.dates = dates;
        self.config = Some(config);
        self.status_message = "Ready".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_config_provisions_state() {
        let config = ExplorerConfig::from_json(
            r#"{
                "indicators": [
                    {"id": "cases", "label": "Cases", "unit": "cases"},
                    {"id": "deaths", "label": "Deaths", "unit": "deaths", "scale": 0.02}
                ],
                "start_date": "2020-03-01",
                "end_date": "2020-03-10",
                "default_indicator": "cases"
            }"#,
        )
        .unwrap();

        let mut state = AppState::new();
        assert!(!state.config_loaded());

        state.apply_config(config);

        assert!(state.config_loaded());
        assert_eq!(state.dates.len(), 10);
        // Out-of-range default active date snaps to the newest date
        assert_eq!(state.viz_state.active_date, *state.dates.last().unwrap());
        assert_eq!(state.country_data.len(), data::COUNTRIES.len());
        assert_eq!(state.region_data.len(), data::REGIONS.len());
        assert_eq!(state.status_message, "Ready");
    }

    #[test]
    fn test_apply_config_replaces_unknown_indicator() {
        let config = ExplorerConfig::from_json(
            r#"{
                "indicators": [{"id": "deaths", "label": "Deaths", "unit": "deaths"}],
                "start_date": "2020-03-01",
                "end_date": "2020-03-02"
            }"#,
        )
        .unwrap();

        let mut state = AppState::new();
        state.viz_state.indicator = "cases".to_string();
        state.apply_config(config);

        assert_eq!(state.viz_state.indicator, "deaths");
    }
}
