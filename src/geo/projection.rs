//! Map projection and coordinate transformation.
//!
//! Converts between geographic coordinates (lat/lon) and screen
//! coordinates for the choropleth canvas.

use eframe::egui::{Pos2, Rect, Vec2};
use geo_types::Coord;

/// Map projection for converting geographic to screen coordinates.
#[derive(Debug, Clone)]
pub struct MapProjection {
    /// Center latitude of the view
    pub center_lat: f64,
    /// Center longitude of the view
    pub center_lon: f64,
    /// Visible range in degrees at zoom 1.0
    pub range_deg: f64,
    /// Current zoom level
    pub zoom: f32,
    /// Pan offset in screen pixels
    pub pan_offset: Vec2,
    /// Screen rectangle for the canvas
    pub screen_rect: Rect,
}

impl Default for MapProjection {
    fn default() -> Self {
        Self {
            // Whole-world framing, biased toward the northern landmasses
            center_lat: 20.0,
            center_lon: 0.0,
            range_deg: 110.0,
            zoom: 1.0,
            pan_offset: Vec2::ZERO,
            screen_rect: Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0)),
        }
    }
}

impl MapProjection {
    /// Creates a new projection centered on the given point.
    pub fn new(center_lat: f64, center_lon: f64) -> Self {
        Self {
            center_lat,
            center_lon,
            ..Default::default()
        }
    }

    /// Updates the projection with current view state.
    pub fn update(&mut self, zoom: f32, pan_offset: Vec2, screen_rect: Rect) {
        self.zoom = zoom;
        self.pan_offset = pan_offset;
        self.screen_rect = screen_rect;
    }

    /// Converts geographic coordinates (lon, lat) to screen position.
    ///
    /// Equirectangular with a cosine latitude correction; adequate for a
    /// world-scale overview choropleth.
    pub fn geo_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        let effective_range = self.range_deg / self.zoom as f64;

        let rel_lon = coord.x - self.center_lon;
        let rel_lat = coord.y - self.center_lat;

        let lat_correction = self.center_lat.to_radians().cos();
        let corrected_lon = rel_lon * lat_correction;

        let norm_x = corrected_lon / effective_range;
        let norm_y = -rel_lat / effective_range; // Screen Y increases downward

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.size().min_elem() / 2.0;

        Pos2::new(
            center.x + (norm_x as f32) * half_size,
            center.y + (norm_y as f32) * half_size,
        )
    }

    /// Converts screen position to geographic coordinates (lon, lat).
    pub fn screen_to_geo(&self, pos: Pos2) -> Coord<f64> {
        let effective_range = self.range_deg / self.zoom as f64;

        let center = self.screen_rect.center() + self.pan_offset;
        let half_size = self.screen_rect.size().min_elem() / 2.0;

        let norm_x = (pos.x - center.x) / half_size;
        let norm_y = (pos.y - center.y) / half_size;

        let lat_correction = self.center_lat.to_radians().cos();
        let rel_lon = (norm_x as f64) * effective_range / lat_correction;
        let rel_lat = -(norm_y as f64) * effective_range;

        Coord {
            x: self.center_lon + rel_lon,
            y: self.center_lat + rel_lat,
        }
    }

    /// Returns the visible geographic bounds as (min_lon, min_lat, max_lon, max_lat).
    pub fn visible_bounds(&self) -> (f64, f64, f64, f64) {
        let top_left = self.screen_to_geo(self.screen_rect.left_top());
        let bottom_right = self.screen_to_geo(self.screen_rect.right_bottom());

        (
            top_left.x.min(bottom_right.x),
            top_left.y.min(bottom_right.y),
            top_left.x.max(bottom_right.x),
            top_left.y.max(bottom_right.y),
        )
    }

    /// Checks if a bounding box intersects the visible bounds.
    pub fn bbox_visible(&self, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> bool {
        let (vis_min_lon, vis_min_lat, vis_max_lon, vis_max_lat) = self.visible_bounds();

        let margin = 2.0;
        !(max_lon < vis_min_lon - margin
            || min_lon > vis_max_lon + margin
            || max_lat < vis_min_lat - margin
            || min_lat > vis_max_lat + margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_canvas_center() {
        let projection = MapProjection::new(20.0, 0.0);
        let pos = projection.geo_to_screen(Coord { x: 0.0, y: 20.0 });
        assert_eq!(pos, projection.screen_rect.center());
    }

    #[test]
    fn test_inverse_maps_back() {
        let mut projection = MapProjection::new(20.0, 0.0);
        projection.update(
            2.5,
            Vec2::new(40.0, -15.0),
            Rect::from_min_size(Pos2::ZERO, Vec2::new(1024.0, 640.0)),
        );

        let coord = Coord { x: -98.6, y: 39.8 };
        let round_trip = projection.screen_to_geo(projection.geo_to_screen(coord));
        assert!((round_trip.x - coord.x).abs() < 1e-3);
        assert!((round_trip.y - coord.y).abs() < 1e-3);
    }

    #[test]
    fn test_bbox_visibility() {
        let projection = MapProjection::default();
        // Continental-scale box around the view center
        assert!(projection.bbox_visible(-30.0, 0.0, 30.0, 40.0));
        // Far outside any plausible view
        assert!(!projection.bbox_visible(500.0, 300.0, 510.0, 310.0));
    }
}
