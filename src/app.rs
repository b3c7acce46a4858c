use std::time::Instant;

use crate::actions::{ActionSet, Command};
use crate::canvas::CanvasView;
use crate::palette::PalettePanel;
use crate::properties::PropertiesPanel;
use crate::status::StatusBar;
use crate::theme;

/// Main window: menu, toolbar, the two dock panels, status bar, and the
/// canvas filling the remaining central space. Pure composition; the app
/// owns every panel and the canvas, and teardown follows drop order.
pub struct NetworkProjectApp {
    actions: ActionSet,
    canvas: CanvasView,
    palette: PalettePanel,
    properties: PropertiesPanel,
    status: StatusBar,
}

impl NetworkProjectApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        theme::apply(&cc.egui_ctx);

        Self {
            actions: ActionSet::new(),
            canvas: CanvasView::new(),
            palette: PalettePanel::new(),
            properties: PropertiesPanel::new(),
            status: StatusBar::new(),
        }
    }

    /// Applies everything the action handlers queued since the last frame.
    /// File actions only post status text; no file I/O happens here.
    fn apply_commands(&mut self) {
        let now = Instant::now();
        while let Some(command) = self.actions.poll() {
            match command {
                Command::NewProject => self.status.post("New project", now),
                Command::OpenProject => self.status.post("Open project", now),
                Command::SaveProject => self.status.post("Save project", now),
                Command::ToggleGrid => {
                    self.canvas.show_grid = !self.canvas.show_grid;
                    let state = if self.canvas.show_grid { "on" } else { "off" };
                    self.status.post(format!("Grid {state}"), now);
                }
                Command::ZoomIn => {
                    self.canvas.zoom_in();
                    self.post_zoom(now);
                }
                Command::ZoomOut => {
                    self.canvas.zoom_out();
                    self.post_zoom(now);
                }
                Command::ResetZoom => {
                    self.canvas.reset_zoom();
                    self.post_zoom(now);
                }
            }
        }
    }

    fn post_zoom(&mut self, now: Instant) {
        self.status
            .post(format!("Zoom {:.0}%", self.canvas.zoom() * 100.0), now);
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for action in &self.actions.file {
                        if ui.button(action.label).clicked() {
                            action.trigger();
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("View", |ui| {
                    for action in &self.actions.view {
                        if ui.button(action.label).clicked() {
                            action.trigger();
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    let mut show_grid = self.canvas.show_grid;
                    if ui
                        .checkbox(&mut show_grid, self.actions.grid_toggle.label)
                        .clicked()
                    {
                        self.actions.grid_toggle.trigger();
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for action in &self.actions.file {
                    if ui.button(action.label).clicked() {
                        action.trigger();
                    }
                }
            });
        });
    }

    fn docks(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("palette_dock")
            .min_width(150.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Palette");
                ui.separator();
                self.palette.ui(ui);
            });

        egui::SidePanel::right("properties_dock")
            .min_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Properties");
                ui.separator();
                self.properties.ui(ui, self.palette.selected);
            });
    }
}

impl eframe::App for NetworkProjectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_commands();

        self.menu_bar(ctx);
        self.toolbar(ctx);
        self.status.ui(ctx);
        self.docks(ctx);

        // The central panel is added last so the canvas gets the leftover
        // space between the docks.
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.ui(ui);
            });
    }
}
