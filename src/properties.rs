use egui::Ui;

use crate::palette::DeviceKind;

/// Right dock: read-only details for the current palette selection.
pub struct PropertiesPanel;

impl PropertiesPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&self, ui: &mut Ui, selection: Option<DeviceKind>) {
        match selection {
            Some(kind) => {
                ui.label(format!("Type: {}", kind.label()));
                ui.label(kind.description());
            }
            None => {
                ui.label("No selection");
            }
        }
    }
}
