//! Canvas painting.
//!
//! Canvas pixels are square-ish; terminal cells are not. Each terminal row
//! carries two pixel rows using the upper-half-block glyph: foreground =
//! upper pixel, background = lower pixel.

use std::io;

use crossterm::{cursor, queue, style};

use crate::canvas::Surface;

use crate::types::Color;

use super::state::EditorState;
use super::ui::Layout;

pub fn to_ct_color(c: Color) -> style::Color {
    match c {
        Color::Black => style::Color::Black,
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Yellow => style::Color::Yellow,
        Color::Blue => style::Color::Blue,
        Color::Magenta => style::Color::Magenta,
        Color::Cyan => style::Color::Cyan,
        Color::White => style::Color::White,
        Color::Rgb { r, g, b } => style::Color::Rgb { r, g, b },
    }
}

/// Style a half-block cell from an (upper, lower) pixel pair.
pub fn half_block(upper: Color, lower: Color) -> style::StyledContent<char> {
    let mut cs = style::ContentStyle::default();
    cs.foreground_color = Some(to_ct_color(upper));
    cs.background_color = Some(to_ct_color(lower));
    style::StyledContent::new(cs, '\u{2580}')
}

/// Paint the primary surface into the canvas region.
pub fn render_canvas(
    stdout: &mut io::Stdout,
    layout: &Layout,
    state: &EditorState,
) -> anyhow::Result<()> {
    let canvas = state.controller.primary();
    let mut rows = canvas.rows();

    for ty in 0..layout.canvas_rows {
        let (Some(upper), Some(lower)) = (rows.next(), rows.next()) else {
            break;
        };
        queue!(
            stdout,
            cursor::MoveTo(layout.canvas_x, layout.canvas_y + ty)
        )?;
        for x in 0..canvas.width() as usize {
            queue!(stdout, style::PrintStyledContent(half_block(upper[x], lower[x])))?;
        }
    }

    Ok(())
}
