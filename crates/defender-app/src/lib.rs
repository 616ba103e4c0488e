//! Builds a planet grid from configuration, populates its cells with markers,
//! and answers which cell a world position falls in.

mod markers;

use defender_config::{Config, ConfigError, GridLookup};
use defender_sphere::{GridError, NearestStrategy, Planet, angular_distance};
use defender_util::{UtilError, choose_weighted};
use glam::DVec3;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use thiserror::Error;
use tracing::info;

pub use markers::{CellMarker, MarkerId, MarkerKind};

/// Errors surfaced by the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is out of range.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A grid operation rejected its input.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Marker weights were unusable.
    #[error(transparent)]
    Util(#[from] UtilError),
}

/// The planet plus the markers its cells refer to.
///
/// The world owns the markers; the grid only stores [`MarkerId`] handles.
#[derive(Debug)]
pub struct World {
    /// The planet and its cell grid.
    pub planet: Planet<MarkerId>,
    /// Markers indexed by [`MarkerId`].
    pub markers: Vec<CellMarker>,
}

/// Answer to a "which cell is this?" query.
#[derive(Clone, Debug, PartialEq)]
pub struct CellHit<'a> {
    /// Cell index.
    pub cell: usize,
    /// World-space position of the cell.
    pub cell_position: DVec3,
    /// Angle between the query direction and the cell, in radians.
    pub angle: f64,
    /// Marker on the cell, if any.
    pub marker: Option<&'a CellMarker>,
}

impl World {
    /// Build the planet described by `config` and place one marker per cell.
    pub fn build(config: &Config) -> Result<Self, AppError> {
        config.validate()?;

        let center = DVec3::from_array(config.planet.center);
        let cell_count = config.grid.cell_count as usize;
        let mut planet = Planet::new(
            center,
            config.planet.radius,
            cell_count,
            strategy_for(config.grid.lookup),
        )?;

        let mut rng = Xoshiro256StarStar::seed_from_u64(config.grid.seed);
        let mut markers = Vec::with_capacity(cell_count);
        for cell in 0..cell_count {
            let kind = *choose_weighted(&MarkerKind::ALL, &config.grid.marker_weights, &mut rng)?;
            markers.push(CellMarker {
                id: MarkerId(markers.len()),
                cell,
                kind,
                position: planet.cell_world_position(cell)?,
            });
        }
        planet.build_cells(|cell, _| markers[cell].id);

        info!(
            cells = cell_count,
            radius = config.planet.radius,
            strategy = ?planet.grid().strategy(),
            "Built planet grid"
        );
        Ok(Self { planet, markers })
    }

    /// Marker behind a handle.
    pub fn marker(&self, id: MarkerId) -> Option<&CellMarker> {
        self.markers.get(id.0)
    }

    /// Number of markers of each kind, in [`MarkerKind::ALL`] order.
    pub fn kind_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for m in &self.markers {
            counts[m.kind as usize] += 1;
        }
        counts
    }

    /// Find the cell closest to `world_pos`.
    pub fn locate(&self, world_pos: DVec3) -> Result<CellHit<'_>, AppError> {
        let cell = self.planet.closest_grid_cell(world_pos)?;
        let cell_position = self.planet.cell_world_position(cell)?;
        let center = self.planet.center();
        let angle = angular_distance(
            (world_pos - center).normalize(),
            (cell_position - center).normalize(),
        );
        let marker = self
            .planet
            .grid()
            .get_cell_object(cell)?
            .and_then(|id| self.marker(*id));
        Ok(CellHit {
            cell,
            cell_position,
            angle,
            marker,
        })
    }
}

/// Map the configured lookup onto a grid strategy.
pub fn strategy_for(lookup: GridLookup) -> NearestStrategy {
    match lookup {
        GridLookup::Auto => NearestStrategy::Auto,
        GridLookup::LinearScan => NearestStrategy::LinearScan,
        GridLookup::LatitudeBands => NearestStrategy::LatitudeBands,
    }
}

/// Parse `"x,y,z"` into a vector.
pub fn parse_vec3(s: &str) -> Result<DVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got `{s}`"));
    };
    let parse = |v: &str| {
        v.parse::<f64>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    Ok(DVec3::new(parse(*x)?, parse(*y)?, parse(*z)?))
}

/// Build the world and log the cell for each query position.
pub fn run(config: &Config, queries: &[DVec3]) -> Result<(), AppError> {
    let world = World::build(config)?;
    let [ground, rock, crystal] = world.kind_counts();
    info!(ground, rock, crystal, "Placed cell markers");

    for &pos in queries {
        let hit = world.locate(pos)?;
        info!(
            query = ?pos,
            cell = hit.cell,
            cell_position = ?hit.cell_position,
            angle_deg = hit.angle.to_degrees(),
            marker = ?hit.marker.map(|m| m.kind),
            "Located cell"
        );
    }
    Ok(())
}
