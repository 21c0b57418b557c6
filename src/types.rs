//! Shared primitives for the flipbook editor.
//!
//! `Point` and `Color` cross every layer boundary: actions record them,
//! the canvas stores them, the editor translates terminal input into them.

/// A 2D canvas coordinate. Value type, immutable once constructed; actions
/// record pairs of these and never move them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// A stroke/fill color: the eight ANSI named colors the palette offers,
/// plus arbitrary RGB for callers that want more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Short label for the status bar and palette panel.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Rgb { .. } => "rgb",
        }
    }
}
