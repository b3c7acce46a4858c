use egui::{pos2, Color32, CornerRadius, Painter, Rect, Stroke};

use crate::viewport::ViewTransform;

/// Grid pitch in canvas units.
pub const GRID_SIZE: f32 = 20.0;

/// ~10% opaque black, drawn over the white fill.
pub const GRID_LINE_COLOR: Color32 = Color32::from_black_alpha(26);

/// On-screen stroke width in points; never scaled by zoom (cosmetic).
const GRID_STROKE_WIDTH: f32 = 1.0;

/// Positions of grid lines covering the range `min..max` at the given pitch.
///
/// The scan starts at the largest multiple of `pitch` that is at most
/// `floor(min)` and stops strictly before `ceil(max)`, so the requested
/// range is covered with no gap at either edge. The result depends only on
/// the arguments: a view scrolled by a whole number of cells sees the same
/// lines, shifted by exactly that amount.
pub fn line_positions(min: f32, max: f32, pitch: f32) -> Vec<f32> {
    let start = (min.floor() / pitch).floor() * pitch;
    let end = max.ceil();

    let mut positions = Vec::new();
    let mut p = start;
    while p < end {
        positions.push(p);
        p += pitch;
    }
    positions
}

/// Vertical and horizontal grid line coordinates covering `rect`.
///
/// The vertical set depends only on the horizontal extent and vice versa.
pub fn grid_lines(rect: Rect, pitch: f32) -> (Vec<f32>, Vec<f32>) {
    (
        line_positions(rect.left(), rect.right(), pitch),
        line_positions(rect.top(), rect.bottom(), pitch),
    )
}

/// Paints the canvas background: a white fill over `viewport`, then the
/// square grid clipped to it unless the grid is hidden.
pub fn paint_grid(painter: &Painter, viewport: Rect, view: &ViewTransform, show_grid: bool) {
    painter.rect_filled(viewport, CornerRadius::ZERO, Color32::WHITE);
    if !show_grid {
        return;
    }

    let visible = view.visible_rect(viewport);
    let stroke = Stroke::new(GRID_STROKE_WIDTH, GRID_LINE_COLOR);
    let (vertical, horizontal) = grid_lines(visible, GRID_SIZE);

    let top = visible.top().floor();
    let bottom = visible.bottom().ceil();
    for x in vertical {
        painter.line_segment(
            [
                view.to_screen(viewport, pos2(x, top)),
                view.to_screen(viewport, pos2(x, bottom)),
            ],
            stroke,
        );
    }

    let left = visible.left().floor();
    let right = visible.right().ceil();
    for y in horizontal {
        painter.line_segment(
            [
                view.to_screen(viewport, pos2(left, y)),
                view.to_screen(viewport, pos2(right, y)),
            ],
            stroke,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PITCH: f32 = GRID_SIZE;

    #[test]
    fn covers_the_documented_example() {
        // rect (5, 5, 45, 25): vertical lines at 0, 20, 40; horizontal at 0, 20
        let rect = Rect::from_min_max(pos2(5.0, 5.0), pos2(45.0, 25.0));
        let (vertical, horizontal) = grid_lines(rect, PITCH);
        assert_eq!(vertical, vec![0.0, 20.0, 40.0]);
        assert_eq!(horizontal, vec![0.0, 20.0]);
    }

    #[test]
    fn positions_are_multiples_of_the_pitch() {
        for (min, max) in [(0.0, 100.0), (13.7, 97.2), (-55.4, 12.0), (399.9, 641.0)] {
            for p in line_positions(min, max, PITCH) {
                assert_eq!(p % PITCH, 0.0, "{p} from range {min}..{max}");
            }
        }
    }

    #[test]
    fn aligned_edges_keep_their_lines() {
        let xs = line_positions(40.0, 120.0, PITCH);
        assert_eq!(xs.first(), Some(&40.0));
        assert_eq!(xs.last(), Some(&100.0));
    }

    #[test]
    fn same_range_same_lines() {
        assert_eq!(
            line_positions(3.3, 87.9, PITCH),
            line_positions(3.3, 87.9, PITCH)
        );
    }

    #[test]
    fn panning_by_whole_cells_does_not_drift() {
        let base = line_positions(5.0, 45.0, PITCH);
        for k in [-3i32, -1, 1, 2, 10] {
            let shift = k as f32 * PITCH;
            let shifted = line_positions(5.0 + shift, 45.0 + shift, PITCH);
            let expected: Vec<f32> = base.iter().map(|x| x + shift).collect();
            assert_eq!(shifted, expected, "k = {k}");
        }
    }

    #[test]
    fn horizontal_placement_ignores_the_horizontal_extent() {
        let narrow = Rect::from_min_max(pos2(10.0, 5.0), pos2(30.0, 95.0));
        let wide = Rect::from_min_max(pos2(-500.0, 5.0), pos2(2000.0, 95.0));
        assert_eq!(grid_lines(narrow, PITCH).1, grid_lines(wide, PITCH).1);
    }

    #[test]
    fn negative_ranges_round_away_from_zero() {
        // floor division, not truncation: -5 belongs to the cell starting at -20
        assert_eq!(line_positions(-5.0, 25.0, PITCH), vec![-20.0, 0.0, 20.0]);
    }
}
