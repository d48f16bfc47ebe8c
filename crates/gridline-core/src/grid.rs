//! Line generation for 3D wireframe grids.
//!
//! A grid is made of three families of axis-parallel lines. The family parallel
//! to axis `a` is indexed by the two remaining axes, taken in cyclic order
//! (`a+1` for the outer loop, `a+2` for the inner loop). Every family spans
//! the full extent of the grid along its own axis.

use glam::{IVec3, UVec2, Vec3};

use crate::error::Result;
use crate::params::GridParameters;

const AXIS_NAMES: [char; 3] = ['x', 'y', 'z'];

/// A family of lines parallel to one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineFamily {
    /// Lines parallel to the X axis, indexed by (y, z).
    XParallel,
    /// Lines parallel to the Y axis, indexed by (z, x).
    YParallel,
    /// Lines parallel to the Z axis, indexed by (x, y).
    ZParallel,
}

impl LineFamily {
    /// All families, in emission order.
    pub const ALL: [LineFamily; 3] = [Self::XParallel, Self::YParallel, Self::ZParallel];

    /// Index of the axis the lines run along.
    pub fn axis(self) -> usize {
        match self {
            Self::XParallel => 0,
            Self::YParallel => 1,
            Self::ZParallel => 2,
        }
    }

    /// The (outer, inner) index axes of this family.
    pub fn index_axes(self) -> (usize, usize) {
        let axis = self.axis();
        ((axis + 1) % 3, (axis + 2) % 3)
    }

    /// Number of lines this family contributes for the given grid size.
    pub fn line_count(self, size: IVec3) -> usize {
        let (outer, inner) = self.index_axes();
        node_count(size[outer]) * node_count(size[inner])
    }

    /// Deterministic name of the line at the given indices, e.g. `Line_y1_z0`.
    pub fn line_name(self, outer_index: u32, inner_index: u32) -> String {
        let (outer, inner) = self.index_axes();
        format!(
            "Line_{}{outer_index}_{}{inner_index}",
            AXIS_NAMES[outer], AXIS_NAMES[inner]
        )
    }
}

fn node_count(cells: i32) -> usize {
    usize::try_from(cells).map_or(0, |n| n + 1)
}

/// A single generated line, in the container's local space.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    /// Deterministic name derived from the family and indices.
    pub name: String,
    /// The family this line belongs to.
    pub family: LineFamily,
    /// Grid indices along the family's (outer, inner) axes.
    pub indices: UVec2,
    /// Start point; lies on the min face of the grid along the family axis.
    pub start: Vec3,
    /// End point; lies on the max face of the grid along the family axis.
    pub end: Vec3,
}

impl LineSegment {
    /// Returns the length of the line.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Returns the lines of one family, in loop order (outer index, then inner).
///
/// The size is not validated here; negative components yield no lines.
pub fn family_lines(
    family: LineFamily,
    corner: Vec3,
    size: IVec3,
    spacing: Vec3,
) -> impl Iterator<Item = LineSegment> {
    let axis = family.axis();
    let (outer, inner) = family.index_axes();
    let outer_nodes = node_count(size[outer]) as u32;
    let inner_nodes = node_count(size[inner]) as u32;
    let axis_start = corner[axis];
    let axis_end = corner[axis] + size[axis] as f32 * spacing[axis];

    (0..outer_nodes).flat_map(move |i| {
        (0..inner_nodes).map(move |j| {
            let mut start = Vec3::ZERO;
            start[outer] = corner[outer] + i as f32 * spacing[outer];
            start[inner] = corner[inner] + j as f32 * spacing[inner];
            let mut end = start;
            start[axis] = axis_start;
            end[axis] = axis_end;
            LineSegment {
                name: family.line_name(i, j),
                family,
                indices: UVec2::new(i, j),
                start,
                end,
            }
        })
    })
}

/// Generates every line of the grid described by `params`.
///
/// Families are emitted in X, Y, Z order; disabled families are skipped.
pub fn generate_lines(params: &GridParameters) -> Result<Vec<LineSegment>> {
    params.validate()?;

    let corner = params.corner();
    let mut lines = Vec::with_capacity(params.line_count());
    for family in LineFamily::ALL {
        if params.is_family_disabled(family) {
            continue;
        }
        lines.extend(family_lines(family, corner, params.size, params.spacing));
    }
    Ok(lines)
}
