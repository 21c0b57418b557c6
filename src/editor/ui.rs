use crate::controller::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::types::Point;

/// Width (in columns) of the right-hand panel holding the frame picker,
/// the palette, and the preview thumbnail.
pub const RIGHT_PANEL_WIDTH: u16 = 26;

/// Rows reserved above the canvas (menu bar) and below it (status bar).
const MENU_H: u16 = 1;
const STATUS_H: u16 = 1;

/// Screen regions. The canvas paints two pixel rows per terminal row
/// (half-block cells), so it occupies `CANVAS_HEIGHT / 2` rows.
pub struct Layout {
    pub canvas_x: u16,
    pub canvas_y: u16,
    /// Canvas extent in terminal cells.
    pub canvas_cols: u16,
    pub canvas_rows: u16,
    pub panel_x: u16,
    pub panel_y: u16,
    pub status_y: u16,
    pub term_width: u16,
}

impl Layout {
    pub fn compute(term_width: u16, term_height: u16) -> Self {
        let canvas_cols = CANVAS_WIDTH;
        let canvas_rows = CANVAS_HEIGHT / 2;
        Layout {
            canvas_x: 0,
            canvas_y: MENU_H,
            canvas_cols,
            canvas_rows,
            panel_x: canvas_cols + 1,
            panel_y: MENU_H,
            status_y: term_height.saturating_sub(STATUS_H),
            term_width,
        }
    }

    /// Smallest terminal the editor runs in.
    pub fn min_size() -> (u16, u16) {
        (
            CANVAS_WIDTH + 1 + RIGHT_PANEL_WIDTH,
            MENU_H + CANVAS_HEIGHT / 2 + STATUS_H,
        )
    }

    /// Map a terminal cell to canvas pixel coordinates, or None when the
    /// cell lies outside the canvas region. Each terminal row covers two
    /// pixel rows; the pointer maps to the upper one.
    pub fn canvas_point(&self, column: u16, row: u16) -> Option<Point> {
        if column < self.canvas_x || row < self.canvas_y {
            return None;
        }
        let x = column - self.canvas_x;
        let y = row - self.canvas_y;
        if x >= self.canvas_cols || y >= self.canvas_rows {
            return None;
        }
        Some(Point::new(i32::from(x), i32::from(y) * 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_point_maps_origin() {
        let layout = Layout::compute(100, 30);
        assert_eq!(
            layout.canvas_point(layout.canvas_x, layout.canvas_y),
            Some(Point::new(0, 0)),
        );
    }

    #[test]
    fn canvas_point_doubles_rows() {
        let layout = Layout::compute(100, 30);
        assert_eq!(
            layout.canvas_point(layout.canvas_x + 3, layout.canvas_y + 5),
            Some(Point::new(3, 10)),
        );
    }

    #[test]
    fn cells_outside_the_canvas_map_to_none() {
        let layout = Layout::compute(100, 30);
        assert_eq!(layout.canvas_point(0, 0), None); // menu bar row
        assert_eq!(
            layout.canvas_point(layout.canvas_x + layout.canvas_cols, layout.canvas_y),
            None,
        );
        assert_eq!(
            layout.canvas_point(layout.canvas_x, layout.canvas_y + layout.canvas_rows),
            None,
        );
    }
}
