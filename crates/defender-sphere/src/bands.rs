//! Latitude-band index for nearest-cell lookups on large grids.
//!
//! Points are bucketed into equal-height latitude bands. A query scans its
//! own band, then walks outward band by band in both directions. The
//! latitude difference between two points never exceeds their angular
//! distance, so a band whose latitude gap to the query is already larger
//! than the best angle found so far cannot contain a closer point and ends
//! the walk in that direction.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec3;

use crate::nearest::Candidate;

/// Slack on the pruning test so rounding in `asin` never discards a band
/// that holds the true nearest point.
const PRUNE_SLACK: f64 = 1e-9;

/// Bucketed cell indices by latitude band, south to north.
#[derive(Clone, Debug)]
pub struct LatitudeBands {
    bands: Vec<Vec<usize>>,
    band_height: f64,
}

impl LatitudeBands {
    /// Build the index over `points` using `ceil(√n)` bands.
    #[must_use]
    pub fn build(points: &[DVec3]) -> Self {
        let band_count = (points.len() as f64).sqrt().ceil().max(1.0) as usize;
        Self::with_band_count(points, band_count)
    }

    /// Build the index with an explicit band count (at least one).
    #[must_use]
    pub fn with_band_count(points: &[DVec3], band_count: usize) -> Self {
        let band_count = band_count.max(1);
        let band_height = PI / band_count as f64;
        let mut bands = vec![Vec::new(); band_count];
        for (index, p) in points.iter().enumerate() {
            let lat = p.y.clamp(-1.0, 1.0).asin();
            bands[band_of(lat, band_height, band_count)].push(index);
        }
        tracing::trace!(
            points = points.len(),
            band_count,
            "built latitude band index"
        );
        Self { bands, band_height }
    }

    /// Number of bands.
    #[must_use]
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    /// Cell indices stored in `band` (0 is the southernmost).
    #[must_use]
    pub fn band(&self, band: usize) -> &[usize] {
        self.bands.get(band).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nearest point to the unit vector `query` among `points`, which must be
    /// the slice the index was built from. Returns `None` when `points` is
    /// empty.
    #[must_use]
    pub fn nearest(&self, points: &[DVec3], query: DVec3) -> Option<usize> {
        let band_count = self.bands.len();
        let lat = query.y.clamp(-1.0, 1.0).asin();
        let home = band_of(lat, self.band_height, band_count);

        let mut best: Option<Candidate> = None;
        self.scan_band(home, points, query, &mut best);

        let mut south = home.checked_sub(1);
        let mut north = (home + 1 < band_count).then_some(home + 1);
        while south.is_some() || north.is_some() {
            if let Some(band) = south {
                // Top edge of a southern band is the closest it gets.
                let gap = lat - self.band_top(band);
                if self.prunes(gap, best) {
                    south = None;
                } else {
                    self.scan_band(band, points, query, &mut best);
                    south = band.checked_sub(1);
                }
            }
            if let Some(band) = north {
                let gap = self.band_bottom(band) - lat;
                if self.prunes(gap, best) {
                    north = None;
                } else {
                    self.scan_band(band, points, query, &mut best);
                    north = (band + 1 < band_count).then_some(band + 1);
                }
            }
        }

        best.map(|c| c.index)
    }

    fn scan_band(&self, band: usize, points: &[DVec3], query: DVec3, best: &mut Option<Candidate>) {
        for &index in &self.bands[band] {
            let candidate = Candidate {
                index,
                dot: points[index].dot(query),
            };
            if best.is_none_or(|b| candidate.beats(&b)) {
                *best = Some(candidate);
            }
        }
    }

    fn prunes(&self, gap: f64, best: Option<Candidate>) -> bool {
        match best {
            Some(b) => gap > b.angle() + PRUNE_SLACK,
            None => false,
        }
    }

    fn band_bottom(&self, band: usize) -> f64 {
        -FRAC_PI_2 + band as f64 * self.band_height
    }

    fn band_top(&self, band: usize) -> f64 {
        self.band_bottom(band) + self.band_height
    }
}

fn band_of(lat: f64, band_height: f64, band_count: usize) -> usize {
    let band = ((lat + FRAC_PI_2) / band_height).floor();
    (band.max(0.0) as usize).min(band_count - 1)
}
