//! Fixed-size sphere grid: one golden-spiral point and one payload slot per cell.

use glam::DVec3;

use crate::GridError;
use crate::bands::LatitudeBands;
use crate::lat_lng::unit_direction;
use crate::nearest::{NearestStrategy, nearest_linear};
use crate::spiral::spiral_points;

/// A fixed set of cells tiling the unit sphere.
///
/// Cell `i` is tied to [`spiral_point(i, size)`](crate::spiral_point) for
/// the grid's whole lifetime. Each cell carries an optional payload handle
/// of type `P` and a `u32` state word.
///
/// `P` is meant to be a non-owning handle (an id into a store the caller
/// owns, a `Weak<T>`, ...). The grid records and hands back exactly what it
/// was given and never creates or destroys the objects behind it.
#[derive(Clone, Debug)]
pub struct SphereGrid<P> {
    points: Vec<DVec3>,
    cells: Vec<Option<P>>,
    values: Vec<u32>,
    bands: Option<LatitudeBands>,
}

impl<P> SphereGrid<P> {
    /// Build a grid with `cell_count` empty cells and the default
    /// ([`NearestStrategy::Auto`]) lookup strategy.
    #[must_use]
    pub fn new(cell_count: usize) -> Self {
        Self::with_strategy(cell_count, NearestStrategy::default())
    }

    /// Build a grid with an explicit nearest-cell strategy.
    #[must_use]
    pub fn with_strategy(cell_count: usize, strategy: NearestStrategy) -> Self {
        let points = spiral_points(cell_count);
        let strategy = strategy.resolve(cell_count);
        let bands = match strategy {
            NearestStrategy::LatitudeBands => Some(LatitudeBands::build(&points)),
            _ => None,
        };
        tracing::debug!(cell_count, ?strategy, "built sphere grid");
        Self {
            points,
            cells: std::iter::repeat_with(|| None).take(cell_count).collect(),
            values: vec![0; cell_count],
            bands,
        }
    }

    /// Build a grid from a signed cell count.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] when `cell_count` is negative or does
    /// not fit in `usize`.
    pub fn try_from_count(cell_count: i64, strategy: NearestStrategy) -> Result<Self, GridError> {
        let count = usize::try_from(cell_count)
            .map_err(|_| GridError::invalid(format!("cell count must be >= 0, got {cell_count}")))?;
        Ok(Self::with_strategy(count, strategy))
    }

    /// Number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// True for a zero-cell grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The strategy nearest-cell queries use on this grid (never `Auto`).
    #[must_use]
    pub fn strategy(&self) -> NearestStrategy {
        if self.bands.is_some() {
            NearestStrategy::LatitudeBands
        } else {
            NearestStrategy::LinearScan
        }
    }

    /// Unit-sphere point of cell `index`.
    pub fn point(&self, index: usize) -> Result<DVec3, GridError> {
        self.check(index)?;
        Ok(self.points[index])
    }

    /// All unit-sphere points in index order.
    #[must_use]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Attach `payload` to cell `index`, returning the handle it replaced.
    pub fn set_cell_object(&mut self, index: usize, payload: P) -> Result<Option<P>, GridError> {
        self.check(index)?;
        Ok(self.cells[index].replace(payload))
    }

    /// The handle attached to cell `index`, or `None` if nothing was attached.
    pub fn get_cell_object(&self, index: usize) -> Result<Option<&P>, GridError> {
        self.check(index)?;
        Ok(self.cells[index].as_ref())
    }

    /// Iterate over `(index, handle)` for every cell that has one.
    pub fn cell_objects(&self) -> impl Iterator<Item = (usize, &P)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|p| (i, p)))
    }

    /// The payload slots as a fixed-length slice.
    ///
    /// The slice never reallocates, so it can be split (`split_at_mut`,
    /// `chunks_mut`) to fill disjoint cells from several threads. Writing
    /// the same slot from two places still has to be serialized by the
    /// caller.
    pub fn cell_slots_mut(&mut self) -> &mut [Option<P>] {
        &mut self.cells
    }

    pub(crate) fn slots_with_points_mut(
        &mut self,
    ) -> impl Iterator<Item = (usize, DVec3, &mut Option<P>)> {
        self.points
            .iter()
            .copied()
            .zip(self.cells.iter_mut())
            .enumerate()
            .map(|(i, (point, slot))| (i, point, slot))
    }

    /// The state word of cell `index`.
    pub fn value(&self, index: usize) -> Result<u32, GridError> {
        self.check(index)?;
        Ok(self.values[index])
    }

    /// Overwrite the state word of cell `index`.
    pub fn set_value(&mut self, index: usize, value: u32) -> Result<(), GridError> {
        self.check(index)?;
        self.values[index] = value;
        Ok(())
    }

    /// Index of the cell whose point is angularly closest to `direction`.
    ///
    /// Only the direction of the input matters; its length is ignored.
    /// Equal distances resolve to the lower index.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] for a zero-length or non-finite
    /// vector, or when the grid is empty.
    pub fn nearest_cell(&self, direction: DVec3) -> Result<usize, GridError> {
        if self.is_empty() {
            return Err(GridError::invalid("nearest-cell query on an empty grid"));
        }
        if !direction.is_finite() {
            return Err(GridError::invalid(format!(
                "query vector must be finite, got {direction:?}"
            )));
        }
        let query =
            unit_direction(direction).ok_or_else(|| GridError::invalid("query vector is zero"))?;

        let found = match &self.bands {
            Some(bands) => bands.nearest(&self.points, query),
            None => nearest_linear(&self.points, query),
        };
        found.ok_or_else(|| GridError::invalid("nearest-cell query on an empty grid"))
    }

    fn check(&self, index: usize) -> Result<(), GridError> {
        if index < self.size() {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                index,
                size: self.size(),
            })
        }
    }
}
