//! Cell markers: the objects a planet's cells point at.

use glam::DVec3;

/// Handle stored in a grid cell; indexes [`World::markers`](crate::World::markers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MarkerId(pub usize);

/// What occupies a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Open ground a defender can build on.
    Ground,
    /// Impassable rock.
    Rock,
    /// Harvestable crystal.
    Crystal,
}

impl MarkerKind {
    /// All kinds, in the order `grid.marker_weights` refers to them.
    pub const ALL: [MarkerKind; 3] = [MarkerKind::Ground, MarkerKind::Rock, MarkerKind::Crystal];
}

/// A marker placed on one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellMarker {
    /// This marker's handle.
    pub id: MarkerId,
    /// Cell the marker sits on.
    pub cell: usize,
    /// What the marker is.
    pub kind: MarkerKind,
    /// World-space position of the cell.
    pub position: DVec3,
}
