//! Map view UI: choropleth rendering of the selected indicator.

use super::colors;
use super::visualization::MapViewProps;
use crate::data::{self, MetricTable, Place};
use crate::geo::MapProjection;
use crate::state::{BoundaryLevel, Viewport};
use eframe::egui::{
    self, Align2, FontId, Painter, Pos2, Rect, RichText, Sense, Shape, Stroke, Vec2,
};
use geo_types::Coord;

/// Renders the map region from its props and the parent-owned viewport.
pub fn render_map_view(ui: &mut egui::Ui, props: &MapViewProps<'_>, viewport: &mut Viewport) {
    let available_size = ui.available_size();
    let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
    let rect = response.rect;

    painter.rect_filled(rect, 0.0, colors::map::BACKGROUND);

    // Readiness gate: nothing to draw until configuration has loaded
    if !props.config_loaded {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Loading configuration...",
            FontId::proportional(14.0),
            colors::ui::LABEL,
        );
        return;
    }

    let mut projection = MapProjection::new(viewport.center_lat, viewport.center_lon);
    projection.update(viewport.zoom, viewport.pan_offset, rect);

    let (places, table): (&[Place], &MetricTable) = match props.bound_level {
        BoundaryLevel::Country => (data::COUNTRIES, props.country_data),
        BoundaryLevel::Region => (data::REGIONS, props.region_data),
    };

    let values: Vec<Option<f64>> = places
        .iter()
        .map(|place| display_value(place, table, props))
        .collect();
    let range = value_range(&values);

    for (place, value) in places.iter().zip(values.iter()) {
        render_place(&painter, &projection, place, *value, range, viewport.zoom);
    }

    if let Some((min, max)) = range {
        draw_legend(&painter, &rect, min, max);
    }

    draw_overlay_info(ui, &rect, props);
    handle_map_interaction(&response, &rect, viewport);
}

/// Displayed value for one place: aggregated series value, optionally
/// normalized per 100k population.
fn display_value(place: &Place, table: &MetricTable, props: &MapViewProps<'_>) -> Option<f64> {
    let series = table.get(place.id)?;
    let value = data::aggregate(series, props.indicator, props.agg_type, props.active_date)?;
    Some(if props.use_per_capita {
        data::per_capita(value, place.population)
    } else {
        value
    })
}

/// Min/max over places that have a value; `None` when no place has data.
fn value_range(values: &[Option<f64>]) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for value in values.iter().flatten() {
        range = Some(match range {
            None => (*value, *value),
            Some((min, max)) => (min.min(*value), max.max(*value)),
        });
    }
    range
}

/// Maps a value into `[0, 1]` within the range; degenerate ranges map to 1.
fn normalize(value: f64, min: f64, max: f64) -> f32 {
    if max <= min {
        return 1.0;
    }
    ((value - min) / (max - min)) as f32
}

fn render_place(
    painter: &Painter,
    projection: &MapProjection,
    place: &Place,
    value: Option<f64>,
    range: Option<(f64, f64)>,
    zoom: f32,
) {
    // Cull places entirely off-screen
    let (min_lon, min_lat, max_lon, max_lat) = outline_bbox(place);
    if !projection.bbox_visible(min_lon, min_lat, max_lon, max_lat) {
        return;
    }

    let screen_points: Vec<Pos2> = place
        .outline
        .iter()
        .map(|&(lon, lat)| projection.geo_to_screen(Coord { x: lon, y: lat }))
        .collect();

    if screen_points.len() < 3 {
        return;
    }

    let fill = match (value, range) {
        (Some(v), Some((min, max))) => colors::map::ramp(normalize(v, min, max)),
        _ => colors::map::NO_DATA,
    };

    painter.add(Shape::convex_polygon(
        screen_points.clone(),
        fill,
        Stroke::NONE,
    ));

    // Outline
    let mut stroke_points = screen_points.clone();
    stroke_points.push(screen_points[0]);
    for pair in stroke_points.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(1.0, colors::map::BORDER));
    }

    // Label with value, once zoomed in enough to read it
    if zoom >= 1.0 {
        let anchor = projection.geo_to_screen(Coord {
            x: place.lon,
            y: place.lat,
        });
        let text = match value {
            Some(v) => format!("{}  {}", place.name, format_value(v)),
            None => place.name.to_string(),
        };
        painter.text(
            anchor,
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(11.0),
            colors::map::LABEL,
        );
    }
}

/// Bounding box of a place outline as (min_lon, min_lat, max_lon, max_lat).
fn outline_bbox(place: &Place) -> (f64, f64, f64, f64) {
    let mut bbox = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
    for &(lon, lat) in place.outline {
        bbox.0 = bbox.0.min(lon);
        bbox.1 = bbox.1.min(lat);
        bbox.2 = bbox.2.max(lon);
        bbox.3 = bbox.3.max(lat);
    }
    bbox
}

/// Compact value formatting for labels and the legend.
fn format_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if abs >= 10.0 || abs == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Gradient legend in the bottom-left corner.
fn draw_legend(painter: &Painter, rect: &Rect, min: f64, max: f64) {
    const STEPS: usize = 24;
    const BAR_WIDTH: f32 = 120.0;
    const BAR_HEIGHT: f32 = 10.0;

    let origin = rect.left_bottom() + Vec2::new(12.0, -28.0);
    let step_width = BAR_WIDTH / STEPS as f32;

    for i in 0..STEPS {
        let t = i as f32 / (STEPS - 1) as f32;
        let step_rect = Rect::from_min_size(
            origin + Vec2::new(i as f32 * step_width, 0.0),
            Vec2::new(step_width + 0.5, BAR_HEIGHT),
        );
        painter.rect_filled(step_rect, 0.0, colors::map::ramp(t));
    }

    let font = FontId::proportional(10.0);
    painter.text(
        origin + Vec2::new(0.0, BAR_HEIGHT + 2.0),
        Align2::LEFT_TOP,
        format_value(min),
        font.clone(),
        colors::ui::VALUE,
    );
    painter.text(
        origin + Vec2::new(BAR_WIDTH, BAR_HEIGHT + 2.0),
        Align2::RIGHT_TOP,
        format_value(max),
        font,
        colors::ui::VALUE,
    );
}

/// Overlay readout in the top-left corner.
fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, props: &MapViewProps<'_>) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(220.0, 80.0));

    let day_of = props
        .dates
        .iter()
        .position(|d| *d == props.active_date)
        .map(|i| format!("Day {} of {}", i + 1, props.dates.len()))
        .unwrap_or_else(|| "Out of range".to_string());

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!("Indicator: {}", props.indicator))
                    .monospace()
                    .size(12.0)
                    .color(colors::ui::VALUE),
            );
            ui.label(
                RichText::new(format!(
                    "Date: {}  ({})",
                    props.active_date.format("%Y-%m-%d"),
                    day_of
                ))
                .monospace()
                .size(12.0)
                .color(colors::ui::VALUE),
            );
            ui.label(
                RichText::new(format!("Mode: {}", props.agg_type.label()))
                    .monospace()
                    .size(12.0)
                    .color(colors::ui::VALUE),
            );
            if props.use_per_capita {
                ui.label(
                    RichText::new("Per 100k population")
                        .monospace()
                        .size(12.0)
                        .color(colors::ui::ACTIVE),
                );
            }
        });
    });
}

fn handle_map_interaction(response: &egui::Response, rect: &Rect, viewport: &mut Viewport) {
    // Handle dragging for panning
    if response.dragged() {
        viewport.pan_offset += response.drag_delta();
    }

    // Handle scroll for zooming relative to cursor position
    if response.hovered() {
        let scroll_delta = response.ctx.input(|i| i.raw_scroll_delta);
        if scroll_delta.y != 0.0 {
            let zoom_factor = 1.0 + scroll_delta.y * 0.001;
            let old_zoom = viewport.zoom;
            let new_zoom = (old_zoom * zoom_factor).clamp(0.5, 40.0);

            // Keep the point under the cursor stationary
            if let Some(cursor_pos) = response.hover_pos() {
                let cursor_rel = cursor_pos - rect.center();
                let ratio = new_zoom / old_zoom;
                viewport.pan_offset = cursor_rel * (1.0 - ratio) + viewport.pan_offset * ratio;
            }

            viewport.zoom = new_zoom;
        }
    }

    // Reset view on double-click
    if response.double_clicked() {
        viewport.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range() {
        assert_eq!(value_range(&[]), None);
        assert_eq!(value_range(&[None, None]), None);
        assert_eq!(
            value_range(&[Some(3.0), None, Some(-1.0), Some(7.5)]),
            Some((-1.0, 7.5))
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(5.0, 0.0, 10.0), 0.5);
        assert_eq!(normalize(0.0, 0.0, 10.0), 0.0);
        // Degenerate range saturates
        assert_eq!(normalize(4.0, 4.0, 4.0), 1.0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(3.456), "3.46");
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(1_500.0), "1.5K");
        assert_eq!(format_value(25_000.0), "25K");
        assert_eq!(format_value(3_200_000.0), "3.2M");
    }

    #[test]
    fn test_outline_bbox() {
        let place = &crate::data::COUNTRIES[0];
        let (min_lon, min_lat, max_lon, max_lat) = outline_bbox(place);
        assert!(min_lon < max_lon);
        assert!(min_lat < max_lat);
        assert!(place.lon > min_lon && place.lon < max_lon);
        assert!(place.lat > min_lat && place.lat < max_lat);
    }
}
