//! UI layer for gridline-rs using egui.

pub mod surface;

pub use surface::*;
