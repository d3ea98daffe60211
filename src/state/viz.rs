//! Visualization state (selections, active date, map viewport).

use chrono::NaiveDate;
use eframe::egui::Vec2;
use serde::{Deserialize, Serialize};

// ============================================================================
// Display Mode Selection
// ============================================================================

/// How raw per-date values are combined for display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregationType {
    /// Value reported on the active date.
    #[default]
    Daily,
    /// Mean over the 7 days ending on the active date.
    RollingAverage,
    /// Running total up to and including the active date.
    Cumulative,
}

impl AggregationType {
    pub fn label(&self) -> &'static str {
        match self {
            AggregationType::Daily => "Daily",
            AggregationType::RollingAverage => "7-day Average",
            AggregationType::Cumulative => "Cumulative",
        }
    }

    pub fn all() -> &'static [AggregationType] {
        &[
            AggregationType::Daily,
            AggregationType::RollingAverage,
            AggregationType::Cumulative,
        ]
    }
}

/// Granularity of the geographic boundaries shown on the map.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryLevel {
    #[default]
    Country,
    Region,
}

impl BoundaryLevel {
    pub fn label(&self) -> &'static str {
        match self {
            BoundaryLevel::Country => "Countries",
            BoundaryLevel::Region => "Regions",
        }
    }

    pub fn all() -> &'static [BoundaryLevel] {
        &[BoundaryLevel::Country, BoundaryLevel::Region]
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Parent-owned map viewport (zoom/pan/center). The map view mutates it
/// through a borrow during interaction handling.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Current zoom level (1.0 = world view)
    pub zoom: f32,
    /// Current pan offset from center, in screen pixels
    pub pan_offset: Vec2,
    /// Geographic center latitude
    pub center_lat: f64,
    /// Geographic center longitude
    pub center_lon: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            center_lat: 20.0,
            center_lon: 0.0,
        }
    }
}

impl Viewport {
    /// Resets zoom and pan to the home view.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_offset = Vec2::ZERO;
    }
}

/// Visualization selections owned by the application.
pub struct VizState {
    /// Selected indicator id
    pub indicator: String,

    /// Aggregation mode for displayed values
    pub agg_type: AggregationType,

    /// Boundary granularity shown on the map
    pub bound_level: BoundaryLevel,

    /// Normalize displayed values per 100k population
    pub use_per_capita: bool,

    /// Currently selected date
    pub active_date: NaiveDate,

    /// Map viewport
    pub viewport: Viewport,
}

impl Default for VizState {
    fn default() -> Self {
        Self {
            indicator: "cases".to_string(),
            agg_type: AggregationType::default(),
            bound_level: BoundaryLevel::default(),
            use_per_capita: false,
            active_date: NaiveDate::from_ymd_opt(2020, 12, 31).expect("valid date"),
            viewport: Viewport::default(),
        }
    }
}
