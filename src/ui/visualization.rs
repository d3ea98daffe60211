//! Visualization composition: the options bar over the map view.
//!
//! This is pure prop-forwarding glue. The parent owns every input; this
//! module projects the flat parameter set onto explicit typed prop structs
//! for the two child regions (options first, map second) and forwards date
//! selections from the options child back upward as events. No field is
//! computed, transformed, or mutated on the way through.

use super::{map_view, options_bar};
use crate::data::MetricTable;
use crate::state::{AggregationType, BoundaryLevel, Viewport};
use chrono::NaiveDate;
use eframe::egui;

/// Flat parameter set owned by the parent and fanned out to the children.
#[derive(Debug, Clone, Copy)]
pub struct VisualizationParams<'a> {
    /// Aggregation mode, opaque here
    pub agg_type: AggregationType,
    /// Per-capita display toggle
    pub use_per_capita: bool,
    /// Geographic boundary granularity
    pub bound_level: BoundaryLevel,
    /// Selected indicator id
    pub indicator: &'a str,
    /// Currently selected date
    pub active_date: NaiveDate,
    /// Country-level metric data, opaque payload
    pub country_data: &'a MetricTable,
    /// Region-level metric data, opaque payload
    pub region_data: &'a MetricTable,
    /// Available dates, oldest first
    pub dates: &'a [NaiveDate],
    /// Readiness gate for the map region
    pub config_loaded: bool,
}

/// Props for the options bar child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionsBarProps<'a> {
    pub indicator: &'a str,
    pub active_date: NaiveDate,
    pub dates: &'a [NaiveDate],
}

/// Props for the map view child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewProps<'a> {
    pub country_data: &'a MetricTable,
    pub region_data: &'a MetricTable,
    pub dates: &'a [NaiveDate],
    pub agg_type: AggregationType,
    pub active_date: NaiveDate,
    pub indicator: &'a str,
    pub bound_level: BoundaryLevel,
    pub use_per_capita: bool,
    pub config_loaded: bool,
}

/// Composed layout: exactly two child regions, options before map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizationLayout<'a> {
    pub options: OptionsBarProps<'a>,
    pub map: MapViewProps<'a>,
}

/// Events reported upward to the state owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualizationEvent {
    /// The user selected a new date in the options bar.
    ActiveDateChanged(NaiveDate),
}

/// Projects the flat parameter set onto the two child prop structs.
/// Field mapping only; payloads are forwarded by reference.
pub fn compose<'a>(params: &VisualizationParams<'a>) -> VisualizationLayout<'a> {
    VisualizationLayout {
        options: OptionsBarProps {
            indicator: params.indicator,
            active_date: params.active_date,
            dates: params.dates,
        },
        map: MapViewProps {
            country_data: params.country_data,
            region_data: params.region_data,
            dates: params.dates,
            agg_type: params.agg_type,
            active_date: params.active_date,
            indicator: params.indicator,
            bound_level: params.bound_level,
            use_per_capita: params.use_per_capita,
            config_loaded: params.config_loaded,
        },
    }
}

/// Forwards a date selection from the options child upward unchanged,
/// exactly one event per selection.
fn forward_date_event(selected: Option<NaiveDate>) -> Option<VisualizationEvent> {
    selected.map(VisualizationEvent::ActiveDateChanged)
}

/// Renders the composition: the options row first, then the map filling
/// the remaining space. Returns the event to apply to the owner's state,
/// if any.
pub fn render_visualization(
    ui: &mut egui::Ui,
    params: &VisualizationParams<'_>,
    viewport: &mut Viewport,
) -> Option<VisualizationEvent> {
    let layout = compose(params);

    let selected = options_bar::render_options_bar(ui, &layout.options);
    ui.separator();
    map_view::render_map_view(ui, &layout.map, viewport);

    forward_date_event(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PlaceSeries;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_table(place: &str, value: f64) -> MetricTable {
        let mut series = PlaceSeries::default();
        series
            .values
            .insert("cases".to_string(), [(date(2020, 3, 1), value)].into());
        let mut table = MetricTable::new();
        table.insert(place.to_string(), series);
        table
    }

    fn sample_params<'a>(
        country_data: &'a MetricTable,
        region_data: &'a MetricTable,
        dates: &'a [NaiveDate],
    ) -> VisualizationParams<'a> {
        VisualizationParams {
            agg_type: AggregationType::RollingAverage,
            use_per_capita: true,
            bound_level: BoundaryLevel::Region,
            indicator: "cases",
            active_date: date(2020, 3, 1),
            country_data,
            region_data,
            dates,
            config_loaded: true,
        }
    }

    #[test]
    fn test_options_region_receives_exact_fields() {
        let country_data = sample_table("USA", 10.0);
        let region_data = sample_table("US-CA", 4.0);
        let dates = vec![date(2020, 3, 1), date(2020, 3, 2)];
        let params = sample_params(&country_data, &region_data, &dates);

        let layout = compose(&params);

        assert_eq!(layout.options.indicator, "cases");
        assert_eq!(layout.options.active_date, date(2020, 3, 1));
        // Same slice, not a copy
        assert!(std::ptr::eq(layout.options.dates, params.dates));
    }

    #[test]
    fn test_map_region_receives_exact_fields() {
        let country_data = sample_table("USA", 10.0);
        let region_data = sample_table("US-CA", 4.0);
        let dates = vec![date(2020, 3, 1), date(2020, 3, 2)];
        let params = sample_params(&country_data, &region_data, &dates);

        let layout = compose(&params);

        assert!(std::ptr::eq(layout.map.country_data, params.country_data));
        assert!(std::ptr::eq(layout.map.region_data, params.region_data));
        assert!(std::ptr::eq(layout.map.dates, params.dates));
        assert_eq!(layout.map.agg_type, AggregationType::RollingAverage);
        assert_eq!(layout.map.active_date, date(2020, 3, 1));
        assert_eq!(layout.map.indicator, "cases");
        assert_eq!(layout.map.bound_level, BoundaryLevel::Region);
        assert!(layout.map.use_per_capita);
        assert!(layout.map.config_loaded);
    }

    #[test]
    fn test_unready_config_passes_through() {
        // Inputs before configuration has loaded: empty payloads,
        // readiness flag down
        let country_data = MetricTable::new();
        let region_data = MetricTable::new();
        let dates = vec![date(2019, 1, 1), date(2020, 1, 1)];
        let params = VisualizationParams {
            agg_type: AggregationType::Daily,
            use_per_capita: false,
            bound_level: BoundaryLevel::Country,
            indicator: "mortality",
            active_date: date(2020, 1, 1),
            country_data: &country_data,
            region_data: &region_data,
            dates: &dates,
            config_loaded: false,
        };

        let layout = compose(&params);

        assert!(!layout.map.config_loaded);
        assert!(layout.map.country_data.is_empty());
        assert_eq!(layout.options.dates.len(), 2);
        assert_eq!(layout.options.indicator, "mortality");
    }

    #[test]
    fn test_compose_is_idempotent() {
        let country_data = sample_table("USA", 10.0);
        let region_data = sample_table("US-CA", 4.0);
        let dates = vec![date(2020, 3, 1)];
        let params = sample_params(&country_data, &region_data, &dates);

        assert_eq!(compose(&params), compose(&params));
    }

    #[test]
    fn test_date_event_forwarded_unchanged() {
        let picked = date(2020, 6, 15);
        assert_eq!(
            forward_date_event(Some(picked)),
            Some(VisualizationEvent::ActiveDateChanged(picked))
        );
        assert_eq!(forward_date_event(None), None);
    }
}
