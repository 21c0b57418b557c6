use std::mem;

use crate::types::Color;

/// The colors offered by the palette panel, bound to keys 1-8.
pub const PALETTE: [Color; 8] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// UI-local palette state: the working color and the one before it. The
/// core model only ever sees the working color via `set_current_color`.
#[derive(Debug, Clone, Copy)]
pub struct PaletteState {
    pub current: Color,
    pub prev: Color,
}

impl PaletteState {
    pub fn new() -> Self {
        PaletteState {
            current: Color::Green,
            prev: Color::Red,
        }
    }

    pub fn pick(&mut self, color: Color) {
        self.prev = self.current;
        self.current = color;
    }

    pub fn swap(&mut self) {
        mem::swap(&mut self.current, &mut self.prev);
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        PaletteState::new()
    }
}

/// What a pointer drag does. Pan exists so a drag can be a non-drawing
/// gesture; it deliberately records nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Draw,
    Pan,
}

impl Tool {
    pub fn toggle(self) -> Self {
        match self {
            Tool::Draw => Tool::Pan,
            Tool::Pan => Tool::Draw,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Draw => "draw",
            Tool::Pan => "pan",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_remembers_previous_color() {
        let mut p = PaletteState::new();
        p.pick(Color::Cyan);
        assert_eq!(p.current, Color::Cyan);
        assert_eq!(p.prev, Color::Green);
    }

    #[test]
    fn swap_exchanges_current_and_prev() {
        let mut p = PaletteState::new();
        p.pick(Color::Cyan);
        p.swap();
        assert_eq!(p.current, Color::Green);
        assert_eq!(p.prev, Color::Cyan);
        p.swap();
        assert_eq!(p.current, Color::Cyan);
    }
}
