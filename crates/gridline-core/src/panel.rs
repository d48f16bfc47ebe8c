//! Parameter panel: a declarative two-way binding between [`GridParameters`]
//! and a property-editing surface.
//!
//! The panel owns no UI code. It walks a list of [`FieldDescriptor`]s, hands
//! each field to a [`PropertySurface`] as a typed mutable view, collects
//! validation warnings, and reports whether the grid should be rebuilt.
//!
//! Two update modes exist, selected by [`GridParameters::auto_update`]:
//! - **Auto**: any change to any field triggers a rebuild.
//! - **Manual**: changes accumulate until the "Update" button is pressed.

use glam::{IVec3, Vec3};

use crate::error::{GridError, Result};
use crate::params::{GridParameters, MaterialRef};

/// Identifies a field of [`GridParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Size,
    Spacing,
    Pivot,
    LineMaterial,
    LineWidth,
    DisableXParallelLines,
    DisableYParallelLines,
    DisableZParallelLines,
    AutoUpdate,
}

/// How a field is presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget {
    /// Three integer inputs.
    Vector3Int,
    /// Three float inputs.
    Vector3,
    /// One slider per component, restricted to `[min, max]`.
    Sliders3 { min: f32, max: f32 },
    /// A single float input.
    Float,
    /// A checkbox.
    Toggle,
    /// A material selector.
    MaterialPicker,
}

/// Typed mutable view of a single field.
#[derive(Debug)]
pub enum FieldMut<'a> {
    Int3(&'a mut IVec3),
    Float3(&'a mut Vec3),
    Float(&'a mut f32),
    Bool(&'a mut bool),
    Material(&'a mut Option<MaterialRef>),
}

/// Describes one editable field of [`GridParameters`].
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    pub label: &'static str,
    pub widget: Widget,
    /// Borrows the field out of the parameter set.
    pub access: fn(&mut GridParameters) -> FieldMut<'_>,
    /// Checked after the field is edited; a failure becomes an inline warning.
    pub validate: Option<fn(&GridParameters) -> Result<()>>,
}

/// Returns the descriptors of every [`GridParameters`] field, in display order.
pub fn grid_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor {
            key: FieldKey::Size,
            label: "Grid Size",
            widget: Widget::Vector3Int,
            access: |p| FieldMut::Int3(&mut p.size),
            validate: Some(GridParameters::validate_size),
        },
        FieldDescriptor {
            key: FieldKey::Spacing,
            label: "Grid Spacing",
            widget: Widget::Vector3,
            access: |p| FieldMut::Float3(&mut p.spacing),
            validate: None,
        },
        FieldDescriptor {
            key: FieldKey::Pivot,
            label: "Pivot",
            widget: Widget::Sliders3 { min: 0.0, max: 1.0 },
            access: |p| FieldMut::Float3(&mut p.pivot),
            validate: None,
        },
        FieldDescriptor {
            key: FieldKey::LineMaterial,
            label: "Line Material",
            widget: Widget::MaterialPicker,
            access: |p| FieldMut::Material(&mut p.line_material),
            validate: None,
        },
        FieldDescriptor {
            key: FieldKey::LineWidth,
            label: "Line Width",
            widget: Widget::Float,
            access: |p| FieldMut::Float(&mut p.line_width),
            validate: Some(GridParameters::validate_line_width),
        },
        FieldDescriptor {
            key: FieldKey::DisableXParallelLines,
            label: "Disable X Parallel Lines",
            widget: Widget::Toggle,
            access: |p| FieldMut::Bool(&mut p.disable_x_parallel_lines),
            validate: None,
        },
        FieldDescriptor {
            key: FieldKey::DisableYParallelLines,
            label: "Disable Y Parallel Lines",
            widget: Widget::Toggle,
            access: |p| FieldMut::Bool(&mut p.disable_y_parallel_lines),
            validate: None,
        },
        FieldDescriptor {
            key: FieldKey::DisableZParallelLines,
            label: "Disable Z Parallel Lines",
            widget: Widget::Toggle,
            access: |p| FieldMut::Bool(&mut p.disable_z_parallel_lines),
            validate: None,
        },
        FieldDescriptor {
            key: FieldKey::AutoUpdate,
            label: "Auto Update",
            widget: Widget::Toggle,
            access: |p| FieldMut::Bool(&mut p.auto_update),
            validate: None,
        },
    ]
}

/// A rendering surface able to present and edit typed fields.
pub trait PropertySurface {
    /// Presents a field and applies the user's edit in place.
    ///
    /// Returns true if the value changed.
    fn edit(&mut self, label: &str, widget: Widget, field: FieldMut<'_>) -> bool;

    /// Shows a non-blocking warning below the previous field.
    fn warning(&mut self, message: &str);

    /// Shows a button; returns true if it was pressed this frame.
    fn button(&mut self, label: &str, enabled: bool) -> bool;
}

/// Result of one panel pass.
#[derive(Debug, Default)]
pub struct PanelResponse {
    /// Any field differs from the snapshot taken before the pass.
    pub changed: bool,
    /// Fields touched by the surface during this pass.
    pub edited: Vec<FieldKey>,
    /// Validation failures shown as warnings.
    pub errors: Vec<GridError>,
    /// The "Update" button was pressed.
    pub manual_update: bool,
}

impl PanelResponse {
    /// Returns true if no validation warning was raised.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Decides whether the grid should be rebuilt after this pass.
    pub fn should_rebuild(&self, auto_update: bool) -> bool {
        self.is_valid() && ((auto_update && self.changed) || self.manual_update)
    }
}

/// Property panel for [`GridParameters`].
#[derive(Debug, Clone)]
pub struct ParameterPanel {
    fields: Vec<FieldDescriptor>,
    update_label: &'static str,
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterPanel {
    /// Creates a panel over every grid field.
    pub fn new() -> Self {
        Self::with_fields(grid_fields())
    }

    /// Creates a panel over a custom field list.
    pub fn with_fields(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            update_label: "Update",
        }
    }

    /// Returns the field descriptors.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Returns the descriptor for `key`, if the panel shows it.
    pub fn field(&self, key: FieldKey) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Runs one edit pass over `params`.
    ///
    /// Edits are applied to a working copy and committed back to `params` at
    /// the end of the pass, even when validation fails.
    pub fn show(
        &self,
        params: &mut GridParameters,
        surface: &mut dyn PropertySurface,
    ) -> PanelResponse {
        let snapshot = params.clone();
        let mut working = params.clone();
        let mut response = PanelResponse::default();

        for field in &self.fields {
            if surface.edit(field.label, field.widget, (field.access)(&mut working)) {
                response.edited.push(field.key);
            }
            if let Some(validate) = field.validate {
                if let Err(err) = validate(&working) {
                    surface.warning(&err.to_string());
                    response.errors.push(err);
                }
            }
        }

        response.manual_update = surface.button(self.update_label, !working.auto_update);
        response.changed = working != snapshot;

        if response.changed {
            log::trace!("parameter panel committed edits to {:?}", response.edited);
        }
        *params = working;
        response
    }
}
