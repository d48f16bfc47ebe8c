//! egui implementation of the parameter panel's property surface.

use std::ops::RangeInclusive;

use egui::{Button, ComboBox, DragValue, Slider, Ui};
use glam::{IVec3, Vec3};
use gridline_core::{
    FieldMut, GridParameters, MaterialRef, PanelResponse, ParameterPanel, PropertySurface, Widget,
};

const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

/// Presents grid fields with egui widgets.
pub struct EguiSurface<'a> {
    ui: &'a mut Ui,
    /// Materials offered by the material picker, besides "None".
    materials: &'a [MaterialRef],
}

impl<'a> EguiSurface<'a> {
    /// Creates a surface drawing into `ui`.
    pub fn new(ui: &'a mut Ui, materials: &'a [MaterialRef]) -> Self {
        Self { ui, materials }
    }
}

impl PropertySurface for EguiSurface<'_> {
    fn edit(&mut self, label: &str, widget: Widget, field: FieldMut<'_>) -> bool {
        match (widget, field) {
            (Widget::Sliders3 { min, max }, FieldMut::Float3(value)) => {
                build_sliders3(self.ui, label, value, min..=max)
            }
            (_, FieldMut::Int3(value)) => build_vector3_int(self.ui, label, value),
            (_, FieldMut::Float3(value)) => build_vector3(self.ui, label, value),
            (_, FieldMut::Float(value)) => build_float(self.ui, label, value),
            (_, FieldMut::Bool(value)) => self.ui.checkbox(value, label).changed(),
            (_, FieldMut::Material(value)) => {
                build_material_selector(self.ui, label, value, self.materials)
            }
        }
    }

    fn warning(&mut self, message: &str) {
        let color = self.ui.visuals().warn_fg_color;
        self.ui.colored_label(color, message);
    }

    fn button(&mut self, label: &str, enabled: bool) -> bool {
        self.ui.add_enabled(enabled, Button::new(label)).clicked()
    }
}

/// Builds the full grid parameter panel into `ui`.
pub fn show_grid_panel(
    ui: &mut Ui,
    panel: &ParameterPanel,
    params: &mut GridParameters,
    materials: &[MaterialRef],
) -> PanelResponse {
    let mut surface = EguiSurface::new(ui, materials);
    panel.show(params, &mut surface)
}

/// Builds three integer inputs. Returns true if any component changed.
pub fn build_vector3_int(ui: &mut Ui, label: &str, value: &mut IVec3) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        for (axis, component) in [&mut value.x, &mut value.y, &mut value.z]
            .into_iter()
            .enumerate()
        {
            let prefix = format!("{}: ", AXIS_LABELS[axis].to_lowercase());
            if ui.add(DragValue::new(component).prefix(prefix)).changed() {
                changed = true;
            }
        }
    });
    changed
}

/// Builds three float inputs. Returns true if any component changed.
pub fn build_vector3(ui: &mut Ui, label: &str, value: &mut Vec3) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        for (axis, component) in [&mut value.x, &mut value.y, &mut value.z]
            .into_iter()
            .enumerate()
        {
            let prefix = format!("{}: ", AXIS_LABELS[axis].to_lowercase());
            if ui
                .add(DragValue::new(component).speed(0.01).prefix(prefix))
                .changed()
            {
                changed = true;
            }
        }
    });
    changed
}

/// Builds one slider per component, labelled "`label` X" and so on.
pub fn build_sliders3(
    ui: &mut Ui,
    label: &str,
    value: &mut Vec3,
    range: RangeInclusive<f32>,
) -> bool {
    let mut changed = false;
    for (axis, component) in [&mut value.x, &mut value.y, &mut value.z]
        .into_iter()
        .enumerate()
    {
        if ui
            .add(Slider::new(component, range.clone()).text(format!("{label} {}", AXIS_LABELS[axis])))
            .changed()
        {
            changed = true;
        }
    }
    changed
}

/// Builds a single float input.
pub fn build_float(ui: &mut Ui, label: &str, value: &mut f32) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(DragValue::new(value).speed(0.001)).changed()
    })
    .inner
}

/// Builds a material selector `ComboBox`. Returns true if the material changed.
pub fn build_material_selector(
    ui: &mut Ui,
    label: &str,
    material: &mut Option<MaterialRef>,
    available_materials: &[MaterialRef],
) -> bool {
    let before = material.clone();
    let selected = material.as_ref().map_or("None", MaterialRef::name).to_owned();

    ComboBox::from_label(label)
        .selected_text(selected)
        .show_ui(ui, |ui| {
            ui.selectable_value(material, None, "None");
            for candidate in available_materials {
                ui.selectable_value(material, Some(candidate.clone()), candidate.name());
            }
        });

    if *material != before {
        log::debug!("line material changed to {material:?}");
        true
    } else {
        false
    }
}
