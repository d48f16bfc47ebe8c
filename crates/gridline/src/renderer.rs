//! The grid-line component: parameters, container, builder and panel together.

use gridline_core::{
    GridBuilder, GridContainer, GridParameters, HostMode, LineContainer, MaterialRef,
    PanelResponse, ParameterPanel, PropertySurface, Result,
};
use gridline_ui::EguiSurface;

/// A grid-line component attached to a host container node.
///
/// The component owns its parameters and the container whose children are the
/// generated lines. Parameter edits go through [`on_inspector`](Self::on_inspector),
/// which rebuilds the grid according to the panel's update mode.
#[derive(Debug)]
pub struct GridLineRenderer<C: GridContainer = LineContainer> {
    params: GridParameters,
    container: C,
    builder: GridBuilder,
    panel: ParameterPanel,
}

impl<C: GridContainer> GridLineRenderer<C> {
    /// Creates a component with default parameters. No lines are built yet.
    pub fn new(container: C, mode: HostMode) -> Self {
        Self::with_parameters(GridParameters::default(), container, mode)
    }

    /// Creates a component with the given parameters. No lines are built yet.
    pub fn with_parameters(params: GridParameters, container: C, mode: HostMode) -> Self {
        Self {
            params,
            container,
            builder: GridBuilder::new(mode),
            panel: ParameterPanel::new(),
        }
    }

    /// Returns the current parameters.
    pub fn parameters(&self) -> &GridParameters {
        &self.params
    }

    /// Returns the parameters for direct editing.
    ///
    /// Direct edits do not rebuild; call [`create_grid`](Self::create_grid).
    pub fn parameters_mut(&mut self) -> &mut GridParameters {
        &mut self.params
    }

    /// Returns the container holding the lines.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Returns the container holding the lines.
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    /// Returns the builder, e.g. to replace its destruction policy.
    pub fn builder_mut(&mut self) -> &mut GridBuilder {
        &mut self.builder
    }

    /// Informs the component that the host entered or left play.
    pub fn set_host_mode(&mut self, mode: HostMode) {
        self.builder.set_mode(mode);
    }

    /// Rebuilds the grid from the current parameters.
    ///
    /// Returns the number of lines created. On a validation error the
    /// previous lines are left untouched.
    pub fn create_grid(&mut self) -> Result<usize> {
        self.builder.rebuild(&self.params, &mut self.container)
    }

    /// Destroys every line of the grid.
    pub fn destroy_grid(&mut self) {
        self.builder.destroy_all(&mut self.container);
    }

    /// Restores the default parameters, building the grid if auto update is on.
    pub fn reset(&mut self) {
        self.params = GridParameters::default();
        log::debug!("grid parameters reset to defaults");
        if self.params.auto_update {
            // Errors are already logged by the builder.
            let _ = self.create_grid();
        }
    }

    /// Runs one inspector pass on `surface`, rebuilding when the panel asks for it.
    pub fn on_inspector(&mut self, surface: &mut dyn PropertySurface) -> PanelResponse {
        let response = self.panel.show(&mut self.params, surface);
        if response.should_rebuild(self.params.auto_update) {
            let _ = self.create_grid();
        }
        response
    }

    /// Draws the inspector into an egui `Ui`, rebuilding as needed.
    pub fn show_inspector(
        &mut self,
        ui: &mut egui::Ui,
        materials: &[MaterialRef],
    ) -> PanelResponse {
        let mut surface = EguiSurface::new(ui, materials);
        self.on_inspector(&mut surface)
    }
}

impl Default for GridLineRenderer<LineContainer> {
    fn default() -> Self {
        Self::new(LineContainer::new(), HostMode::Authoring)
    }
}
