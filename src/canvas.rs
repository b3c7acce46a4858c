use egui::{vec2, CursorIcon, Pos2, Rect, Sense, Ui, Vec2};

use crate::grid;
use crate::viewport::ViewTransform;

/// Workspace extent in canvas units, origin at the top-left.
pub const SCENE_SIZE: Vec2 = vec2(4000.0, 3000.0);

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 4.0;
const ZOOM_STEP: f32 = 1.25;

/// Central canvas: a pannable, zoomable view onto the workspace with the
/// grid painted as its background. Holds no diagram content.
pub struct CanvasView {
    view: ViewTransform,
    pub show_grid: bool,
    // Viewport from the previous frame, so menu zoom can anchor at its
    // center before the next layout pass.
    last_viewport: Option<Rect>,
}

impl CanvasView {
    pub fn new() -> Self {
        Self {
            view: ViewTransform::default(),
            show_grid: true,
            last_viewport: None,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.view.zoom
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.view.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.view.zoom / ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
    }

    fn set_zoom(&mut self, zoom: f32) {
        match self.last_viewport {
            Some(viewport) => self.zoom_anchored(zoom, viewport.center(), viewport),
            None => self.view.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Rescales the view so the canvas point under `anchor` stays put.
    fn zoom_anchored(&mut self, zoom: f32, anchor: Pos2, viewport: Rect) {
        let before = self.view.to_canvas(viewport, anchor);
        self.view.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let after = self.view.to_canvas(viewport, anchor);
        self.view.offset += before - after;
        self.clamp_offset(viewport.size());
    }

    fn clamp_offset(&mut self, viewport_size: Vec2) {
        self.view.offset = clamp_to_scene(self.view.offset, viewport_size, self.view.zoom);
    }

    pub fn ui(&mut self, ui: &mut Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let viewport = response.rect;
        self.last_viewport = Some(viewport);

        // Scroll-hand drag: primary-button drag pans the view.
        if response.dragged_by(egui::PointerButton::Primary) {
            self.view.offset -= response.drag_delta() / self.view.zoom;
            ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }

        if let Some(pointer) = response.hover_pos() {
            let zoom_delta = ui.input(|i| i.zoom_delta());
            if zoom_delta != 1.0 {
                self.zoom_anchored(self.view.zoom * zoom_delta, pointer, viewport);
            }
        }

        self.clamp_offset(viewport.size());

        grid::paint_grid(&painter, viewport, &self.view, self.show_grid);
    }
}

/// Keeps the visible region inside the scene. On an axis where the viewport
/// is larger than the scene, the offset pins to the origin.
fn clamp_to_scene(offset: Vec2, viewport_size: Vec2, zoom: f32) -> Vec2 {
    let visible = viewport_size / zoom;
    vec2(
        offset.x.clamp(0.0, (SCENE_SIZE.x - visible.x).max(0.0)),
        offset.y.clamp(0.0, (SCENE_SIZE.y - visible.y).max(0.0)),
    )
}
