use egui::Ui;

/// Device kinds offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Router,
    Switch,
    Server,
    Pc,
    Modem,
    Firewall,
    AccessPoint,
    Printer,
}

impl DeviceKind {
    pub const ALL: [DeviceKind; 8] = [
        DeviceKind::Router,
        DeviceKind::Switch,
        DeviceKind::Server,
        DeviceKind::Pc,
        DeviceKind::Modem,
        DeviceKind::Firewall,
        DeviceKind::AccessPoint,
        DeviceKind::Printer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeviceKind::Router => "Router",
            DeviceKind::Switch => "Switch",
            DeviceKind::Server => "Server",
            DeviceKind::Pc => "PC",
            DeviceKind::Modem => "Modem",
            DeviceKind::Firewall => "Firewall",
            DeviceKind::AccessPoint => "Access Point",
            DeviceKind::Printer => "Printer",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeviceKind::Router => "Routes traffic between networks",
            DeviceKind::Switch => "Connects devices on one network segment",
            DeviceKind::Server => "Hosts services for other devices",
            DeviceKind::Pc => "End-user workstation",
            DeviceKind::Modem => "Bridges to an external carrier line",
            DeviceKind::Firewall => "Filters traffic between network zones",
            DeviceKind::AccessPoint => "Wireless entry point for nearby devices",
            DeviceKind::Printer => "Shared network printer",
        }
    }
}

/// Left dock: the list of placeable devices. Clicking an entry highlights
/// it (and clears on a second click); nothing is placed on the canvas.
pub struct PalettePanel {
    pub selected: Option<DeviceKind>,
}

impl PalettePanel {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        for kind in DeviceKind::ALL {
            let checked = self.selected == Some(kind);
            let response = ui
                .selectable_label(checked, kind.label())
                .on_hover_text(kind.description());
            if response.clicked() {
                self.selected = if checked { None } else { Some(kind) };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let labels: Vec<_> = DeviceKind::ALL.iter().map(|k| k.label()).collect();
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), labels.len());
    }

    #[test]
    fn core_devices_come_first() {
        let labels: Vec<_> = DeviceKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(&labels[..5], ["Router", "Switch", "Server", "PC", "Modem"]);
    }
}
