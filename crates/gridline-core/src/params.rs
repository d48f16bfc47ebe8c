//! Grid parameters and their validation.
//!
//! [`GridParameters`] is the serialized state of a grid-line component. It is
//! edited by the parameter panel and consumed by the grid builder.

use std::fmt;

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::grid::LineFamily;

/// An opaque reference to a host material, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialRef(String);

impl MaterialRef {
    /// Creates a material reference from a host material name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the material name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaterialRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters describing a 3D wireframe grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParameters {
    /// Number of cells along each axis. Components must be non-negative.
    pub size: IVec3,

    /// Distance between adjacent grid lines along each axis.
    pub spacing: Vec3,

    /// Normalized anchor of the grid origin (0 = min corner, 1 = max corner).
    ///
    /// Not clamped when stored; the panel presents it as `[0, 1]` sliders.
    pub pivot: Vec3,

    /// Material assigned to every line, if any.
    pub line_material: Option<MaterialRef>,

    /// Width of every line. Must be strictly positive.
    pub line_width: f32,

    /// Skip the family of lines parallel to X.
    pub disable_x_parallel_lines: bool,

    /// Skip the family of lines parallel to Y.
    pub disable_y_parallel_lines: bool,

    /// Skip the family of lines parallel to Z.
    pub disable_z_parallel_lines: bool,

    /// Rebuild as soon as a parameter changes in the panel.
    pub auto_update: bool,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            size: IVec3::new(5, 5, 5),
            spacing: Vec3::ONE,
            pivot: Vec3::splat(0.5),
            line_material: None,
            line_width: 0.02,
            disable_x_parallel_lines: false,
            disable_y_parallel_lines: false,
            disable_z_parallel_lines: false,
            auto_update: true,
        }
    }
}

impl GridParameters {
    /// Creates parameters with the given size and spacing; everything else is default.
    pub fn new(size: IVec3, spacing: Vec3) -> Self {
        Self {
            size,
            spacing,
            ..Self::default()
        }
    }

    /// Sets the pivot.
    #[must_use]
    pub fn with_pivot(mut self, pivot: Vec3) -> Self {
        self.pivot = pivot;
        self
    }

    /// Sets the line material.
    #[must_use]
    pub fn with_material(mut self, material: Option<MaterialRef>) -> Self {
        self.line_material = material;
        self
    }

    /// Sets the line width.
    #[must_use]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Enables or disables a line family.
    #[must_use]
    pub fn with_family_disabled(mut self, family: LineFamily, disabled: bool) -> Self {
        *self.family_flag_mut(family) = disabled;
        self
    }

    /// Sets the auto update flag.
    #[must_use]
    pub fn with_auto_update(mut self, auto_update: bool) -> Self {
        self.auto_update = auto_update;
        self
    }

    /// Checks that every size component is non-negative.
    pub fn validate_size(&self) -> Result<()> {
        if self.size.cmplt(IVec3::ZERO).any() {
            return Err(GridError::InvalidSize { size: self.size });
        }
        Ok(())
    }

    /// Checks that the line width is strictly positive (NaN is rejected).
    pub fn validate_line_width(&self) -> Result<()> {
        if self.line_width > 0.0 {
            Ok(())
        } else {
            Err(GridError::InvalidLineWidth(self.line_width))
        }
    }

    /// Validates the whole parameter set, size first.
    pub fn validate(&self) -> Result<()> {
        self.validate_size()?;
        self.validate_line_width()
    }

    /// Returns true if the parameters would pass [`validate`](Self::validate).
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns the full extent of the grid along each axis.
    pub fn extent(&self) -> Vec3 {
        self.size.as_vec3() * self.spacing
    }

    /// Returns the origin corner of the grid in local space.
    pub fn corner(&self) -> Vec3 {
        -self.pivot * self.size.as_vec3() * self.spacing
    }

    /// Returns whether the given line family is disabled.
    pub fn is_family_disabled(&self, family: LineFamily) -> bool {
        match family {
            LineFamily::XParallel => self.disable_x_parallel_lines,
            LineFamily::YParallel => self.disable_y_parallel_lines,
            LineFamily::ZParallel => self.disable_z_parallel_lines,
        }
    }

    fn family_flag_mut(&mut self, family: LineFamily) -> &mut bool {
        match family {
            LineFamily::XParallel => &mut self.disable_x_parallel_lines,
            LineFamily::YParallel => &mut self.disable_y_parallel_lines,
            LineFamily::ZParallel => &mut self.disable_z_parallel_lines,
        }
    }

    /// Returns the number of lines a rebuild would emit.
    ///
    /// Negative size components count as zero cells.
    pub fn line_count(&self) -> usize {
        LineFamily::ALL
            .iter()
            .filter(|family| !self.is_family_disabled(**family))
            .map(|family| family.line_count(self.size))
            .sum()
    }

    /// Serializes the parameters to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes parameters from a JSON string.
    ///
    /// Missing keys take their default values. The result is not validated.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
