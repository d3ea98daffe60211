//! Application configuration: the indicator catalog and selectable date
//! range.
//!
//! Configuration is loaded asynchronously through a channel so the UI can
//! render a loading state until the catalog is ready; the map view gates
//! on the resulting readiness flag. Native builds check for an on-disk
//! override before falling back to the embedded default.

use chrono::NaiveDate;
use eframe::egui;
use serde::Deserialize;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Embedded default configuration.
static DEFAULT_CONFIG_JSON: &str = include_str!("../assets/config/indicators.json");

/// Override file checked in the working directory on native builds.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_OVERRIDE_PATH: &str = "indicator-config.json";

/// A selectable indicator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndicatorDef {
    /// Stable identifier used in data tables and URLs.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Unit shown in the legend.
    pub unit: String,
    /// Magnitude relative to daily cases; drives the sample generator.
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

/// Raw on-disk shape; dates stay strings until validated.
#[derive(Debug, Deserialize)]
struct RawConfig {
    indicators: Vec<IndicatorDef>,
    start_date: String,
    end_date: String,
    default_indicator: Option<String>,
}

/// Parsed and validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub indicators: Vec<IndicatorDef>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub default_indicator: String,
}

impl ExplorerConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let raw: RawConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid config JSON: {e}"))?;

        if raw.indicators.is_empty() {
            return Err("config lists no indicators".to_string());
        }

        let start_date = parse_date(&raw.start_date)?;
        let end_date = parse_date(&raw.end_date)?;
        if end_date < start_date {
            return Err(format!(
                "end date {end_date} precedes start date {start_date}"
            ));
        }

        let default_indicator = match raw.default_indicator {
            Some(id) => {
                if !raw.indicators.iter().any(|i| i.id == id) {
                    return Err(format!("default indicator {id:?} is not in the catalog"));
                }
                id
            }
            None => raw.indicators[0].id.clone(),
        };

        Ok(Self {
            indicators: raw.indicators,
            start_date,
            end_date,
            default_indicator,
        })
    }

    /// Every selectable date, oldest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
            .collect()
    }

    /// Looks up an indicator definition by id.
    pub fn indicator(&self, id: &str) -> Option<&IndicatorDef> {
        self.indicators.iter().find(|i| i.id == id)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date {s:?}: {e}"))
}

/// Result of an async configuration load.
pub enum ConfigLoadResult {
    Loaded(ExplorerConfig),
    Error(String),
}

/// Channel bridging the async config load with egui's synchronous
/// update loop, in the same shape as the data download channels.
pub struct ConfigLoadChannel {
    sender: Sender<ConfigLoadResult>,
    receiver: Receiver<ConfigLoadResult>,
}

impl Default for ConfigLoadChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoadChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns the configuration load and requests a repaint on completion.
    #[cfg(target_arch = "wasm32")]
    pub fn load(&self, ctx: egui::Context) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = match ExplorerConfig::from_json(DEFAULT_CONFIG_JSON) {
                Ok(config) => ConfigLoadResult::Loaded(config),
                Err(e) => ConfigLoadResult::Error(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Spawns the configuration load and requests a repaint on completion.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(&self, ctx: egui::Context) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let _ = sender.send(load_native());
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed load.
    pub fn try_recv(&self) -> Option<ConfigLoadResult> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_native() -> ConfigLoadResult {
    match std::fs::read_to_string(CONFIG_OVERRIDE_PATH) {
        Ok(json) => match ExplorerConfig::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config override from {}", CONFIG_OVERRIDE_PATH);
                return ConfigLoadResult::Loaded(config);
            }
            Err(e) => log::warn!("Ignoring config override: {}", e),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Failed to read {}: {}", CONFIG_OVERRIDE_PATH, e),
    }

    match ExplorerConfig::from_json(DEFAULT_CONFIG_JSON) {
        Ok(config) => ConfigLoadResult::Loaded(config),
        Err(e) => ConfigLoadResult::Error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config = ExplorerConfig::from_json(DEFAULT_CONFIG_JSON).unwrap();
        assert_eq!(config.default_indicator, "cases");
        assert!(config.indicator("deaths").is_some());
        assert!(config.start_date < config.end_date);
    }

    #[test]
    fn test_dates_cover_full_range() {
        let config = ExplorerConfig::from_json(
            r#"{
                "indicators": [{"id": "cases", "label": "Cases", "unit": "cases"}],
                "start_date": "2020-01-01",
                "end_date": "2020-01-10"
            }"#,
        )
        .unwrap();

        let dates = config.dates();
        assert_eq!(dates.len(), 10);
        assert_eq!(dates.first(), Some(&config.start_date));
        assert_eq!(dates.last(), Some(&config.end_date));
        // Omitted default falls back to the first indicator
        assert_eq!(config.default_indicator, "cases");
        // Omitted scale defaults to 1.0
        assert_eq!(config.indicators[0].scale, 1.0);
    }

    #[test]
    fn test_rejects_bad_configs() {
        assert!(ExplorerConfig::from_json("not json").is_err());
        assert!(ExplorerConfig::from_json(
            r#"{"indicators": [], "start_date": "2020-01-01", "end_date": "2020-01-02"}"#
        )
        .is_err());
        assert!(ExplorerConfig::from_json(
            r#"{
                "indicators": [{"id": "cases", "label": "Cases", "unit": "cases"}],
                "start_date": "2020-02-01",
                "end_date": "2020-01-01"
            }"#
        )
        .is_err());
        assert!(ExplorerConfig::from_json(
            r#"{
                "indicators": [{"id": "cases", "label": "Cases", "unit": "cases"}],
                "start_date": "2020-01-01",
                "end_date": "2020-01-02",
                "default_indicator": "unknown"
            }"#
        )
        .is_err());
    }
}
