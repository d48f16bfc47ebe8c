//! gridline-rs: procedural 3D wireframe grids for scene-authoring hosts.
//!
//! Given integer dimensions, per-axis spacing and a pivot, gridline generates the
//! axis-parallel line segments of a 3D grid and keeps them as children of a host
//! container node. An inspector panel edits the parameters and rebuilds the grid.
//!
//! # Quick Start
//!
//! ```
//! use gridline::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let params = GridParameters::new(IVec3::new(2, 1, 0), Vec3::ONE).with_pivot(Vec3::ZERO);
//!     let mut grid = GridLineRenderer::with_parameters(
//!         params,
//!         LineContainer::new(),
//!         HostMode::Authoring,
//!     );
//!     let count = grid.create_grid()?;
//!     assert_eq!(count, 11);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`GridParameters`] is the serialized state of the component
//! - [`GridBuilder`] validates the parameters and replaces the container's children
//! - [`GridContainer`] abstracts the host scene graph; [`LineContainer`] is an
//!   in-memory implementation
//! - [`ParameterPanel`] binds the parameters to a [`PropertySurface`];
//!   [`EguiSurface`] draws it with egui
//! - [`GridLineRenderer`] ties everything together as a host component

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod renderer;

pub use renderer::GridLineRenderer;

// Re-export core types
pub use gridline_core::{
    builder::GridBuilder,
    container::{
        DeferredPolicy, DestroyPolicy, DestroyTiming, GridContainer, HostMode, HostModePolicy,
        ImmediatePolicy, LineContainer, LineNode, LineStyle, NodeId,
    },
    error::{GridError, Result},
    grid::{family_lines, generate_lines, LineFamily, LineSegment},
    panel::{
        grid_fields, FieldDescriptor, FieldKey, FieldMut, PanelResponse, ParameterPanel,
        PropertySurface, Widget,
    },
    params::{GridParameters, MaterialRef},
    IVec3, UVec2, Vec3,
};

// Re-export UI types
pub use gridline_ui::{show_grid_panel, EguiSurface};

/// Initializes logging from `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
