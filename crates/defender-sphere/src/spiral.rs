//! Golden-spiral point distribution on the unit sphere.
//!
//! Cell `i` of an `n`-cell grid sits at
//!
//! ```text
//! y   = 1 - 2·i / (n - 1)
//! lat = asin(y)
//! lng = GOLDEN_ANGLE · i
//! ```
//!
//! so the vertical coordinate is linearly spaced from the north pole
//! (`i = 0`) to the south pole (`i = n - 1`) while each step rotates by the
//! golden angle. A one-cell grid places its only point on the north pole.

use glam::DVec3;

use crate::{GridError, LatLng};

/// `π·(3 − √5)`, the per-index longitude step (≈ 2.39996 rad).
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Latitude/longitude of cell `index` in a grid of `cell_count` cells.
///
/// # Errors
///
/// [`GridError::IndexOutOfRange`] when `index >= cell_count`, which covers
/// every index of an empty grid.
pub fn spiral_lat_lng(index: usize, cell_count: usize) -> Result<LatLng, GridError> {
    if index >= cell_count {
        return Err(GridError::IndexOutOfRange {
            index,
            size: cell_count,
        });
    }
    Ok(spiral_lat_lng_unchecked(index, cell_count))
}

/// Unit-sphere point of cell `index` in a grid of `cell_count` cells.
///
/// # Errors
///
/// [`GridError::IndexOutOfRange`] when `index >= cell_count`.
pub fn spiral_point(index: usize, cell_count: usize) -> Result<DVec3, GridError> {
    spiral_lat_lng(index, cell_count).map(LatLng::to_unit_vector)
}

/// All `cell_count` unit-sphere points in index order.
#[must_use]
pub fn spiral_points(cell_count: usize) -> Vec<DVec3> {
    (0..cell_count)
        .map(|i| spiral_lat_lng_unchecked(i, cell_count).to_unit_vector())
        .collect()
}

/// Caller guarantees `index < cell_count`.
pub(crate) fn spiral_lat_lng_unchecked(index: usize, cell_count: usize) -> LatLng {
    debug_assert!(index < cell_count, "index {index} >= {cell_count}");
    if cell_count == 1 {
        return LatLng::NORTH_POLE;
    }
    let y = 1.0 - 2.0 * index as f64 / (cell_count - 1) as f64;
    LatLng {
        lat: y.clamp(-1.0, 1.0).asin(),
        lng: GOLDEN_ANGLE * index as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_golden_angle_value() {
        let derived = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
        assert!(
            (GOLDEN_ANGLE - derived).abs() < EPSILON,
            "constant {GOLDEN_ANGLE} differs from π(3 - √5) = {derived}"
        );
    }

    #[test]
    fn test_points_on_unit_sphere() {
        for n in [2, 3, 17, 500, 4096] {
            for (i, p) in spiral_points(n).iter().enumerate() {
                assert!(
                    (p.length() - 1.0).abs() < EPSILON,
                    "point {i} of {n} not unit length: {}",
                    p.length()
                );
            }
        }
    }

    #[test]
    fn test_first_and_last_are_poles() {
        let n = 100;
        let first = spiral_point(0, n).unwrap();
        let last = spiral_point(n - 1, n).unwrap();
        assert!((first - DVec3::Y).length() < 1e-9, "first = {first:?}");
        assert!((last - DVec3::NEG_Y).length() < 1e-9, "last = {last:?}");
    }

    #[test]
    fn test_vertical_coordinate_is_linear() {
        let n = 11;
        for i in 0..n {
            let p = spiral_point(i, n).unwrap();
            let expected = 1.0 - 0.2 * i as f64;
            assert!((p.y - expected).abs() < 1e-12, "y of {i}: {}", p.y);
        }
    }

    #[test]
    fn test_longitude_steps_by_golden_angle() {
        let a = spiral_lat_lng(3, 50).unwrap();
        let b = spiral_lat_lng(4, 50).unwrap();
        assert!((b.lng - a.lng - GOLDEN_ANGLE).abs() < EPSILON);
    }

    #[test]
    fn test_single_cell_is_north_pole() {
        let ll = spiral_lat_lng(0, 1).unwrap();
        assert_eq!(ll.lat, FRAC_PI_2);
        assert_eq!(ll.lng, 0.0);
        let p = spiral_point(0, 1).unwrap();
        assert!(p.is_finite());
        assert!((p - DVec3::Y).length() < EPSILON);
    }

    #[test]
    fn test_empty_grid_has_no_points() {
        assert!(spiral_points(0).is_empty());
        assert_eq!(
            spiral_point(0, 0),
            Err(GridError::IndexOutOfRange { index: 0, size: 0 })
        );
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(
            spiral_lat_lng(10, 10),
            Err(GridError::IndexOutOfRange { index: 10, size: 10 })
        );
    }

    #[test]
    fn test_deterministic() {
        for i in [0, 1, 42, 999] {
            let a = spiral_point(i, 1000).unwrap();
            let b = spiral_point(i, 1000).unwrap();
            assert_eq!(a.to_array(), b.to_array());
        }
        assert_eq!(spiral_points(64), spiral_points(64));
    }

    #[test]
    fn test_points_match_single_lookup() {
        let all = spiral_points(37);
        for (i, p) in all.iter().enumerate() {
            assert_eq!(*p, spiral_point(i, 37).unwrap());
        }
    }
}
