//! Geographic projection for the map canvas.

mod projection;

pub use projection::MapProjection;
