use egui::{Pos2, Rect, Vec2};

/// Maps between canvas coordinates and screen coordinates for a given
/// viewport rectangle (the on-screen area occupied by the canvas widget).
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    /// Canvas coordinates visible at the viewport's top-left corner.
    pub offset: Vec2,
    /// Screen points per canvas unit.
    pub zoom: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl ViewTransform {
    pub fn to_screen(&self, viewport: Rect, canvas_pos: Pos2) -> Pos2 {
        viewport.min + (canvas_pos.to_vec2() - self.offset) * self.zoom
    }

    pub fn to_canvas(&self, viewport: Rect, screen_pos: Pos2) -> Pos2 {
        ((screen_pos - viewport.min) / self.zoom + self.offset).to_pos2()
    }

    /// The canvas-space rectangle currently visible through `viewport`.
    /// Built fresh for every paint pass; nothing holds on to it.
    pub fn visible_rect(&self, viewport: Rect) -> Rect {
        Rect::from_min_size(self.offset.to_pos2(), viewport.size() / self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn screen_and_canvas_roundtrip() {
        let view = ViewTransform {
            offset: vec2(100.0, 50.0),
            zoom: 2.0,
        };
        let viewport = Rect::from_min_size(pos2(10.0, 20.0), vec2(640.0, 480.0));

        let canvas = pos2(130.0, 80.0);
        let screen = view.to_screen(viewport, canvas);
        assert_eq!(screen, pos2(70.0, 80.0));
        assert_eq!(view.to_canvas(viewport, screen), canvas);
    }

    #[test]
    fn visible_rect_shrinks_with_zoom() {
        let view = ViewTransform {
            offset: vec2(40.0, 60.0),
            zoom: 2.0,
        };
        let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0));

        let visible = view.visible_rect(viewport);
        assert_eq!(visible.min, pos2(40.0, 60.0));
        assert_eq!(visible.size(), vec2(400.0, 300.0));
    }
}
