//! Core abstractions for gridline-rs.
//!
//! This crate provides everything needed to generate and edit a 3D wireframe grid:
//! - [`GridParameters`] describing size, spacing, pivot and line appearance
//! - Line generation for the three axis-parallel [`LineFamily`]s
//! - The [`GridContainer`] abstraction over the host scene graph and the
//!   [`GridBuilder`] that fills it
//! - A declarative [`ParameterPanel`] bound to any [`PropertySurface`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Parameters legitimately carry one flag per line family
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Grid indices are small non-negative integers
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod builder;
pub mod container;
pub mod error;
pub mod grid;
pub mod panel;
pub mod params;

pub use builder::GridBuilder;
pub use container::{
    DeferredPolicy, DestroyPolicy, DestroyTiming, GridContainer, HostMode, HostModePolicy,
    ImmediatePolicy, LineContainer, LineNode, LineStyle, NodeId,
};
pub use error::{GridError, Result};
pub use grid::{family_lines, generate_lines, LineFamily, LineSegment};
pub use panel::{
    grid_fields, FieldDescriptor, FieldKey, FieldMut, PanelResponse, ParameterPanel,
    PropertySurface, Widget,
};
pub use params::{GridParameters, MaterialRef};

// Re-export glam types for convenience
pub use glam::{IVec3, UVec2, Vec3};
