//! Sphere grid: golden-spiral cell points, per-cell payload slots, and nearest-cell lookup.

mod bands;
mod error;
mod grid;
mod lat_lng;
mod nearest;
mod planet;
mod spiral;

pub use bands::LatitudeBands;
pub use error::GridError;
pub use grid::SphereGrid;
pub use lat_lng::{LatLng, angular_distance};
pub use nearest::{AUTO_BAND_THRESHOLD, NearestStrategy, nearest_linear};
pub use planet::Planet;
pub use spiral::{GOLDEN_ANGLE, spiral_lat_lng, spiral_point, spiral_points};
