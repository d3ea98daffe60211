//! UI modules for the Indicator Explorer application.
//!
//! The UI is split into distinct panels:
//! - Top bar: title and status
//! - Controls panel: indicator and display mode selection
//! - Central visualization: the options bar over the choropleth map

mod colors;
mod controls_panel;
mod map_view;
mod options_bar;
mod top_bar;
pub mod visualization;

pub use controls_panel::render_controls_panel;
pub use top_bar::render_top_bar;
pub use visualization::render_visualization;
