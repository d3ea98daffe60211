//! Display settings persisted across sessions.
//!
//! Settings are saved to localStorage on WASM so they survive page
//! reloads; native builds keep defaults.

use super::viz::{AggregationType, BoundaryLevel};
use serde::{Deserialize, Serialize};

/// User display preferences that outlive a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub agg_type: AggregationType,
    pub bound_level: BoundaryLevel,
    pub use_per_capita: bool,
}

impl DisplaySettings {
    /// localStorage key for persisting settings.
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "indicator_explorer_display_settings";

    /// Load settings from localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };

        let storage = match window.local_storage() {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        let json = match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded display settings from localStorage");
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse display settings: {}", e);
                Self::default()
            }
        }
    }

    /// Defaults on native builds.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Save settings to localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        let storage = match window.local_storage() {
            Ok(Some(s)) => s,
            _ => return,
        };

        let json = match serde_json::to_string(self) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to serialize display settings: {}", e);
                return;
            }
        };

        if let Err(e) = storage.set_item(Self::STORAGE_KEY, &json) {
            log::warn!("Failed to save display settings: {:?}", e);
        }
    }

    /// No-op on native builds.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}
}
