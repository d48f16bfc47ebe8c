//! Demo showing basic gridline usage without a host.
//!
//! Builds a grid into an in-memory container, edits it through the parameter
//! panel, and prints the resulting lines. Run with `RUST_LOG=debug` to see the
//! rebuild log.

use gridline::*;

/// Stands in for a host inspector: shrinks the grid and recenters the pivot.
struct ScriptedInspector;

impl PropertySurface for ScriptedInspector {
    fn edit(&mut self, label: &str, _widget: Widget, field: FieldMut<'_>) -> bool {
        match (label, field) {
            ("Grid Size", FieldMut::Int3(size)) => {
                *size = IVec3::new(2, 1, 1);
                true
            }
            ("Pivot", FieldMut::Float3(pivot)) => {
                *pivot = Vec3::ZERO;
                true
            }
            _ => false,
        }
    }

    fn warning(&mut self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn button(&mut self, _label: &str, _enabled: bool) -> bool {
        false
    }
}

fn main() -> Result<()> {
    init_logging();

    let mut grid: GridLineRenderer = GridLineRenderer::default();
    let count = grid.create_grid()?;
    println!("Default grid: {count} lines");

    let response = grid.on_inspector(&mut ScriptedInspector);
    println!(
        "Edited {:?}; rebuilt: {}",
        response.edited,
        response.should_rebuild(grid.parameters().auto_update)
    );

    for line in grid.container().lines() {
        println!("  {:<12} {} -> {}", line.name, line.start, line.end);
    }

    println!("Parameters:\n{}", grid.parameters().to_json()?);
    Ok(())
}
