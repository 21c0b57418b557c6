use crate::canvas::Surface;
use crate::types::{Color, Point};

/// Render a recorded action onto a surface.
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface);
}

/// One recorded drawing operation within a frame.
///
/// A closed set for now — the line stroke is the only primitive the editor
/// records. New kinds slot in as variants with their own `Draw` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Line(Line),
}

impl Draw for Action {
    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Action::Line(l) => l.draw(surface),
        }
    }
}

/// A straight colored stroke from `from` to `to`, inclusive of both
/// endpoints. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

impl Line {
    pub fn new(from: Point, to: Point, color: Color) -> Self {
        Line { from, to, color }
    }
}

impl Draw for Line {
    /// Bresenham rasterization. Off-surface pixels are dropped by the
    /// surface itself, so no clipping happens here.
    fn draw(&self, surface: &mut dyn Surface) {
        let Point { x: x1, y: y1 } = self.to;
        let mut x = self.from.x;
        let mut y = self.from.y;

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            surface.set(x, y, self.color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{BACKGROUND, Canvas};

    fn painted(c: &Canvas) -> Vec<(u16, u16)> {
        let mut out = Vec::new();
        for (y, row) in c.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != BACKGROUND {
                    out.push((x as u16, y as u16));
                }
            }
        }
        out
    }

    #[test]
    fn line_covers_both_endpoints() {
        let mut c = Canvas::new(16, 16);
        Line::new(Point::new(2, 3), Point::new(11, 9), Color::Red).draw(&mut c);
        assert_eq!(c.get(2, 3), Color::Red);
        assert_eq!(c.get(11, 9), Color::Red);
    }

    #[test]
    fn single_point_line_paints_one_pixel() {
        let mut c = Canvas::new(8, 8);
        Line::new(Point::new(4, 4), Point::new(4, 4), Color::Blue).draw(&mut c);
        assert_eq!(painted(&c), vec![(4, 4)]);
    }

    #[test]
    fn horizontal_line_is_contiguous() {
        let mut c = Canvas::new(16, 4);
        Line::new(Point::new(3, 1), Point::new(10, 1), Color::Black).draw(&mut c);
        let cells: Vec<_> = (3..=10).map(|x| (x, 1)).collect();
        assert_eq!(painted(&c), cells);
    }

    #[test]
    fn direction_does_not_change_coverage() {
        let mut fwd = Canvas::new(16, 16);
        let mut rev = Canvas::new(16, 16);
        Line::new(Point::new(1, 2), Point::new(13, 10), Color::Red).draw(&mut fwd);
        Line::new(Point::new(13, 10), Point::new(1, 2), Color::Red).draw(&mut rev);
        assert_eq!(painted(&fwd), painted(&rev));
    }

    #[test]
    fn off_surface_segment_is_clipped_not_panicking() {
        let mut c = Canvas::new(8, 8);
        Line::new(Point::new(-4, -4), Point::new(20, 20), Color::Green).draw(&mut c);
        // The on-surface diagonal is painted.
        assert_eq!(c.get(0, 0), Color::Green);
        assert_eq!(c.get(7, 7), Color::Green);
    }
}
