//! Geographic coordinates on the unit sphere (Y-up convention).

use std::f64::consts::{FRAC_PI_2, TAU};

use glam::DVec3;

/// A latitude/longitude pair in radians.
///
/// Latitude is measured from the XZ plane toward `+Y` and lies in
/// `[-π/2, π/2]`. Longitude is measured in the XZ plane from `+X` toward
/// `+Z` and is left unbounded; use [`LatLng::wrapped_lng`] when a value in
/// `[0, 2π)` is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    /// Latitude in radians.
    pub lat: f64,
    /// Longitude in radians, unbounded.
    pub lng: f64,
}

impl LatLng {
    /// The north pole (`+Y`).
    pub const NORTH_POLE: LatLng = LatLng {
        lat: FRAC_PI_2,
        lng: 0.0,
    };

    /// Construct a `LatLng`, clamping latitude to `[-π/2, π/2]`.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: lat.clamp(-FRAC_PI_2, FRAC_PI_2),
            lng,
        }
    }

    /// Unit vector for this coordinate:
    /// `(cos(lat)·cos(lng), sin(lat), cos(lat)·sin(lng))`.
    #[inline]
    #[must_use]
    pub fn to_unit_vector(self) -> DVec3 {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lng, cos_lng) = self.lng.sin_cos();
        DVec3::new(cos_lat * cos_lng, sin_lat, cos_lat * sin_lng)
    }

    /// Recover latitude/longitude from a direction of any length.
    ///
    /// Returns `None` for a zero or non-finite vector. Longitude comes back
    /// in `(-π, π]` as produced by `atan2`.
    #[must_use]
    pub fn from_direction(dir: DVec3) -> Option<Self> {
        let unit = unit_direction(dir)?;
        Some(Self {
            lat: unit.y.clamp(-1.0, 1.0).asin(),
            lng: unit.z.atan2(unit.x),
        })
    }

    /// Longitude reduced into `[0, 2π)`.
    #[must_use]
    pub fn wrapped_lng(self) -> f64 {
        let wrapped = self.lng.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        if wrapped >= TAU { 0.0 } else { wrapped }
    }

    /// Great-circle angle between two coordinates, in radians.
    #[must_use]
    pub fn angular_distance(self, other: LatLng) -> f64 {
        angular_distance(self.to_unit_vector(), other.to_unit_vector())
    }
}

/// Angle between two unit vectors, in `[0, π]`.
///
/// Uses `atan2(|a × b|, a · b)`, which keeps full precision near `0` and `π`
/// where `acos` of the dot product does not.
#[inline]
#[must_use]
pub fn angular_distance(a: DVec3, b: DVec3) -> f64 {
    a.cross(b).length().atan2(a.dot(b))
}

/// Unit vector along `dir`, or `None` for a zero or non-finite vector.
///
/// The vector is divided by its largest component before normalizing, so
/// lengths whose square would overflow or underflow still resolve.
pub(crate) fn unit_direction(dir: DVec3) -> Option<DVec3> {
    if !dir.is_finite() || dir == DVec3::ZERO {
        return None;
    }
    Some((dir / dir.abs().max_element()).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_north_pole_is_positive_y() {
        let v = LatLng::NORTH_POLE.to_unit_vector();
        assert!((v - DVec3::Y).length() < EPSILON, "got {v:?}");
    }

    #[test]
    fn test_equator_axes() {
        let x = LatLng::new(0.0, 0.0).to_unit_vector();
        let z = LatLng::new(0.0, PI / 2.0).to_unit_vector();
        assert!((x - DVec3::X).length() < EPSILON);
        assert!((z - DVec3::Z).length() < EPSILON);
    }

    #[test]
    fn test_latitude_is_clamped() {
        let ll = LatLng::new(4.0, 1.0);
        assert_eq!(ll.lat, FRAC_PI_2);
    }

    #[test]
    fn test_from_direction_roundtrip() {
        for lat_step in -4..=4 {
            for lng_step in -5..=5 {
                let original = LatLng::new(lat_step as f64 * 0.35, lng_step as f64 * 0.6);
                let dir = original.to_unit_vector() * 3.5;
                let recovered = LatLng::from_direction(dir).unwrap();
                assert!(
                    original.angular_distance(recovered) < EPSILON,
                    "roundtrip drifted for {original:?}: got {recovered:?}"
                );
            }
        }
    }

    #[test]
    fn test_from_direction_rejects_degenerate() {
        assert!(LatLng::from_direction(DVec3::ZERO).is_none());
        assert!(LatLng::from_direction(DVec3::new(f64::NAN, 0.0, 1.0)).is_none());
        assert!(LatLng::from_direction(DVec3::new(f64::INFINITY, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_from_direction_extreme_magnitudes() {
        let original = LatLng::new(-0.35, -3.0);
        for scale in [1e300, 1e-170, 1e-300] {
            let recovered = LatLng::from_direction(original.to_unit_vector() * scale)
                .unwrap_or_else(|| panic!("rejected direction scaled by {scale}"));
            assert!(
                original.angular_distance(recovered) < 1e-6,
                "scale {scale}: got {recovered:?}"
            );
        }
    }

    #[test]
    fn test_unit_direction_scales_safely() {
        let huge = unit_direction(DVec3::new(1e300, 1e300, 0.0)).unwrap();
        assert!((huge.length() - 1.0).abs() < EPSILON);
        let tiny = unit_direction(DVec3::new(0.0, 0.0, -5e-324)).unwrap();
        assert_eq!(tiny, DVec3::NEG_Z);
        assert!(unit_direction(DVec3::ZERO).is_none());
        assert!(unit_direction(DVec3::new(f64::INFINITY, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_angular_distance_precise_near_zero() {
        let a = LatLng::new(-0.35, -3.0);
        assert_eq!(a.angular_distance(a), 0.0);
        let b = LatLng::new(-0.35, -3.0 + 1e-10);
        let d = a.angular_distance(b);
        let expected = 1e-10 * (-0.35_f64).cos();
        assert!((d - expected).abs() < 1e-14, "got {d}, expected {expected}");
    }

    #[test]
    fn test_wrapped_lng_range() {
        for lng in [-10.0, -TAU, -0.1, 0.0, 3.0, TAU, 25.0] {
            let w = LatLng::new(0.0, lng).wrapped_lng();
            assert!((0.0..TAU).contains(&w), "{lng} wrapped to {w}");
        }
        assert!((LatLng::new(0.0, TAU + 1.0).wrapped_lng() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_angular_distance_antipodes() {
        let d = angular_distance(DVec3::Y, DVec3::NEG_Y);
        assert!((d - PI).abs() < EPSILON);
        assert_eq!(angular_distance(DVec3::X, DVec3::X), 0.0);
    }
}
