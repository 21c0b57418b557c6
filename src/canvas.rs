//! Drawing surfaces.
//!
//! `Surface` is the abstract target actions render onto; `Canvas` is the
//! concrete in-memory pixel grid. The editor owns the mapping from canvas
//! pixels to terminal cells — nothing in here knows about terminals.

use crate::types::{Color, Point};

/// Background color every frame is cleared to before replay.
pub const BACKGROUND: Color = Color::White;

/// An abstract mutable pixel grid. Writes outside the surface bounds are
/// silently dropped so line rasterization never has to clip.
pub trait Surface {
    fn width(&self) -> u16;
    fn height(&self) -> u16;
    /// Fill the whole surface with one color.
    fn fill(&mut self, color: Color);
    /// Set a single pixel; out-of-range coordinates are a no-op.
    fn set(&mut self, x: i32, y: i32, color: Color);
}

/// A fixed-size grid of `Color` cells, row-major.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Canvas {
            width,
            height,
            cells: vec![BACKGROUND; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Color {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u16) < self.width && (p.y as u16) < self.height
    }

    /// Iterate rows top to bottom, each row a slice of `width` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks_exact(self.width as usize)
    }
}

impl Surface for Canvas {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width as usize || y >= self.height as usize {
            return;
        }
        self.cells[y * self.width as usize + x] = color;
    }
}
