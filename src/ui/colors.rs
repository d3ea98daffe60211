//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for labels.
    pub const LABEL: Color32 = Color32::from_rgb(140, 140, 155);
    /// Slightly brighter for values.
    pub const VALUE: Color32 = Color32::from_rgb(200, 200, 220);
    /// Emphasized color for active states.
    pub const ACTIVE: Color32 = Color32::from_rgb(100, 180, 255);
}

/// Colors for the map canvas.
pub mod map {
    use super::Color32;

    /// Canvas background.
    pub const BACKGROUND: Color32 = Color32::from_rgb(20, 20, 35);
    /// Place boundary stroke.
    pub const BORDER: Color32 = Color32::from_rgb(90, 100, 120);
    /// Place label text.
    pub const LABEL: Color32 = Color32::from_rgb(220, 220, 240);
    /// Fill for places with no data at the active date.
    pub const NO_DATA: Color32 = Color32::from_rgb(55, 58, 70);

    /// Low end of the choropleth ramp.
    const RAMP_LOW: Color32 = Color32::from_rgb(255, 245, 170);
    /// High end of the choropleth ramp.
    const RAMP_HIGH: Color32 = Color32::from_rgb(165, 15, 45);

    /// Sequential color ramp for normalized values in `[0, 1]`.
    /// Out-of-range inputs are clamped.
    pub fn ramp(t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round() as u8 };
        Color32::from_rgb(
            lerp(RAMP_LOW.r(), RAMP_HIGH.r()),
            lerp(RAMP_LOW.g(), RAMP_HIGH.g()),
            lerp(RAMP_LOW.b(), RAMP_HIGH.b()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(map::ramp(0.0), Color32::from_rgb(255, 245, 170));
        assert_eq!(map::ramp(1.0), Color32::from_rgb(165, 15, 45));
    }

    #[test]
    fn test_ramp_clamps() {
        assert_eq!(map::ramp(-1.0), map::ramp(0.0));
        assert_eq!(map::ramp(2.0), map::ramp(1.0));
    }
}
