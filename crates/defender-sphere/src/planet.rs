//! The planet a grid is wrapped around: world-space center, radius and cells.
//!
//! A `Planet` is an ordinary value. Systems that need the planet (camera,
//! player movement, cell picking) receive a reference to it instead of
//! reaching for a global.

use glam::DVec3;

use crate::lat_lng::unit_direction;
use crate::{GridError, NearestStrategy, SphereGrid};

/// A sphere in world space tiled with a [`SphereGrid`].
#[derive(Clone, Debug)]
pub struct Planet<P> {
    center: DVec3,
    radius: f64,
    grid: SphereGrid<P>,
}

impl<P> Planet<P> {
    /// Construct a planet and its grid.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `radius` is not a positive finite
    /// number or `center` is not finite.
    pub fn new(
        center: DVec3,
        radius: f64,
        cell_count: usize,
        strategy: NearestStrategy,
    ) -> Result<Self, GridError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GridError::invalid(format!(
                "planet radius must be positive and finite, got {radius}"
            )));
        }
        if !center.is_finite() {
            return Err(GridError::invalid(format!(
                "planet center must be finite, got {center:?}"
            )));
        }
        let grid = SphereGrid::with_strategy(cell_count, strategy);
        tracing::debug!(?center, radius, cell_count, "created planet");
        Ok(Self {
            center,
            radius,
            grid,
        })
    }

    /// World-space center.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Surface radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The cell grid.
    #[must_use]
    pub fn grid(&self) -> &SphereGrid<P> {
        &self.grid
    }

    /// Mutable access to the cell grid for attaching payloads.
    pub fn grid_mut(&mut self) -> &mut SphereGrid<P> {
        &mut self.grid
    }

    /// World-space position of cell `index` on the surface.
    pub fn cell_world_position(&self, index: usize) -> Result<DVec3, GridError> {
        Ok(self.center + self.grid.point(index)? * self.radius)
    }

    /// Index of the cell closest to `world_pos`.
    ///
    /// `world_pos` does not need to lie on the surface; only its direction
    /// from the center is used.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `world_pos` is the center itself or
    /// the grid has no cells.
    pub fn closest_grid_cell(&self, world_pos: DVec3) -> Result<usize, GridError> {
        self.grid.nearest_cell(world_pos - self.center)
    }

    /// Attach `factory(index, world_position)` to every cell, in index order.
    ///
    /// Any handle already attached to a cell is replaced.
    pub fn build_cells<F>(&mut self, mut factory: F)
    where
        F: FnMut(usize, DVec3) -> P,
    {
        let center = self.center;
        let radius = self.radius;
        for (index, point, slot) in self.grid.slots_with_points_mut() {
            *slot = Some(factory(index, center + point * radius));
        }
        tracing::debug!(cells = self.grid.size(), "attached cell objects");
    }

    /// Unit vector from `world_pos` toward the center.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] when `world_pos` coincides with the
    /// center or is not finite.
    pub fn gravity_direction(&self, world_pos: DVec3) -> Result<DVec3, GridError> {
        unit_direction(self.center - world_pos).ok_or_else(|| {
            GridError::invalid(format!(
                "no defined direction from {world_pos:?} to the planet center"
            ))
        })
    }

    /// Project `world_pos` radially onto the surface.
    ///
    /// # Errors
    ///
    /// Same as [`Planet::gravity_direction`].
    pub fn snap_to_surface(&self, world_pos: DVec3) -> Result<DVec3, GridError> {
        let down = self.gravity_direction(world_pos)?;
        Ok(self.center - down * self.radius)
    }

    /// Whether `world_pos` is inside or on the surface sphere.
    #[must_use]
    pub fn contains(&self, world_pos: DVec3) -> bool {
        world_pos.distance_squared(self.center) <= self.radius * self.radius
    }

    /// Surface area of the sphere.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        4.0 * std::f64::consts::PI * self.radius * self.radius
    }

    /// Circumference of a great circle.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        std::f64::consts::TAU * self.radius
    }
}
