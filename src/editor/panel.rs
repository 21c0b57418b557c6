//! Right panel: frame picker, palette, preview thumbnail.

use std::io;

use crossterm::{cursor, queue, style};

use crate::canvas::{Canvas, Surface};
use crate::types::Color;

use super::palette::PALETTE;
use super::screen::{half_block, to_ct_color};
use super::state::EditorState;
use super::ui::Layout;

/// Thumbnail extent in terminal cells.
const PREVIEW_COLS: u16 = 16;
const PREVIEW_ROWS: u16 = 5;

pub fn render_panel(
    stdout: &mut io::Stdout,
    layout: &Layout,
    state: &EditorState,
) -> anyhow::Result<()> {
    let x = layout.panel_x;
    let mut y = layout.panel_y;

    // Frame picker, projected by the scene view.
    queue!(
        stdout,
        cursor::MoveTo(x, y),
        style::SetAttribute(style::Attribute::Bold),
        style::Print("Frames"),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    y += 1;

    let picker = state.controller.picker();
    if picker.is_empty() {
        queue!(stdout, cursor::MoveTo(x, y), style::Print("(no frames)"))?;
        y += 1;
    }
    // Leave room for the palette and preview sections below.
    let max_entries = layout
        .status_y
        .saturating_sub(y + PREVIEW_ROWS + 6) as usize;
    for entry in picker.iter().take(max_entries.max(1)) {
        queue!(stdout, cursor::MoveTo(x, y))?;
        if entry.active {
            queue!(
                stdout,
                style::SetAttribute(style::Attribute::Reverse),
                style::Print(&entry.label),
                style::SetAttribute(style::Attribute::Reset),
            )?;
        } else {
            queue!(stdout, style::Print(&entry.label))?;
        }
        y += 1;
    }
    if picker.len() > max_entries.max(1) {
        queue!(stdout, cursor::MoveTo(x, y), style::Print("..."))?;
        y += 1;
    }

    if let Some(entry) = picker.first() {
        queue!(
            stdout,
            cursor::MoveTo(x, y),
            style::SetAttribute(style::Attribute::Dim),
            style::Print(entry.affordances),
            style::SetAttribute(style::Attribute::Reset),
        )?;
        y += 1;
    }
    y += 1;

    // Palette swatches bound to keys 1-8.
    queue!(
        stdout,
        cursor::MoveTo(x, y),
        style::SetAttribute(style::Attribute::Bold),
        style::Print("Palette"),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    y += 1;
    queue!(stdout, cursor::MoveTo(x, y))?;
    for (i, &color) in PALETTE.iter().enumerate() {
        let mut cs = style::ContentStyle::default();
        cs.background_color = Some(to_ct_color(color));
        cs.foreground_color = Some(contrast_fg(color));
        let label = format!("{}", i + 1);
        queue!(
            stdout,
            style::PrintStyledContent(style::StyledContent::new(cs, label)),
            style::Print(" "),
        )?;
    }
    y += 1;
    queue!(
        stdout,
        cursor::MoveTo(x, y),
        style::SetAttribute(style::Attribute::Dim),
        style::Print(format!(
            "cur: {}  prev: {}",
            state.palette.current.name(),
            state.palette.prev.name(),
        )),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    y += 2;

    // Preview thumbnail: the preview surface, downsampled.
    queue!(
        stdout,
        cursor::MoveTo(x, y),
        style::SetAttribute(style::Attribute::Bold),
        style::Print("Preview"),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    y += 1;
    render_thumbnail(stdout, state.controller.preview(), x, y)?;

    Ok(())
}

/// Black text on light swatches, white on dark ones.
fn contrast_fg(c: Color) -> style::Color {
    match c {
        Color::Black | Color::Red | Color::Blue | Color::Magenta => style::Color::White,
        _ => style::Color::Black,
    }
}

fn render_thumbnail(
    stdout: &mut io::Stdout,
    canvas: &Canvas,
    x: u16,
    y: u16,
) -> anyhow::Result<()> {
    let sx = canvas.width() / PREVIEW_COLS;
    let sy = canvas.height() / (PREVIEW_ROWS * 2);

    for ty in 0..PREVIEW_ROWS {
        queue!(stdout, cursor::MoveTo(x, y + ty))?;
        for tx in 0..PREVIEW_COLS {
            let upper = canvas.get(tx * sx, ty * 2 * sy);
            let lower = canvas.get(tx * sx, (ty * 2 + 1) * sy);
            queue!(stdout, style::PrintStyledContent(half_block(upper, lower)))?;
        }
    }

    Ok(())
}
