//! Nearest-cell lookup strategies.

use glam::DVec3;

/// Cell count at which [`NearestStrategy::Auto`] switches from a linear scan
/// to the latitude-band index.
pub const AUTO_BAND_THRESHOLD: usize = 2048;

/// Selects how [`SphereGrid::nearest_cell`](crate::SphereGrid::nearest_cell)
/// searches for the closest cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NearestStrategy {
    /// Compare the query against every cell. O(n), no extra memory.
    LinearScan,
    /// Walk a latitude-band index built at construction time.
    LatitudeBands,
    /// Linear scan below [`AUTO_BAND_THRESHOLD`] cells, bands at or above.
    #[default]
    Auto,
}

impl NearestStrategy {
    /// Resolve [`NearestStrategy::Auto`] for a concrete cell count.
    #[must_use]
    pub fn resolve(self, cell_count: usize) -> NearestStrategy {
        match self {
            NearestStrategy::Auto if cell_count >= AUTO_BAND_THRESHOLD => {
                NearestStrategy::LatitudeBands
            }
            NearestStrategy::Auto => NearestStrategy::LinearScan,
            other => other,
        }
    }
}

/// A scored cell during a nearest search.
///
/// A larger dot product means a smaller angular distance; equal dot
/// products go to the lower index so every strategy agrees on ties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Candidate {
    pub index: usize,
    pub dot: f64,
}

impl Candidate {
    pub fn beats(&self, other: &Candidate) -> bool {
        self.dot > other.dot || (self.dot == other.dot && self.index < other.index)
    }

    pub fn angle(&self) -> f64 {
        self.dot.clamp(-1.0, 1.0).acos()
    }
}

/// Index of the point in `points` closest to the unit vector `query`, by
/// angular distance. Ties resolve to the lower index. Returns `None` for an
/// empty slice.
#[must_use]
pub fn nearest_linear(points: &[DVec3], query: DVec3) -> Option<usize> {
    let mut best: Option<Candidate> = None;
    for (index, p) in points.iter().enumerate() {
        let candidate = Candidate {
            index,
            dot: p.dot(query),
        };
        if best.is_none_or(|b| candidate.beats(&b)) {
            best = Some(candidate);
        }
    }
    best.map(|c| c.index)
}
