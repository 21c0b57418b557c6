use std::io;

use crossterm::{cursor, queue, style, terminal};

use super::state::EditorState;
use super::ui::Layout;

pub fn render_status(
    stdout: &mut io::Stdout,
    layout: &Layout,
    state: &EditorState,
) -> anyhow::Result<()> {
    let model = state.controller.model();
    let mode_str = if state.controller.is_playing() {
        "PLAYING"
    } else {
        "IDLE"
    };
    let frame_str = match model.active() {
        Some(i) => format!("Frame {}/{}", i + 1, model.len()),
        None => "no frame".to_string(),
    };
    let status = state.status_message.as_deref().unwrap_or("");

    let line = format!(
        " {mode_str} | {frame_str} | {} fps | color: {} | tool: {} {status}",
        state.controller.speed(),
        model.current_color().name(),
        state.tool.name(),
    );

    queue!(
        stdout,
        cursor::MoveTo(0, layout.status_y),
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::SetAttribute(style::Attribute::Dim),
        style::Print(line),
        style::SetAttribute(style::Attribute::Reset),
    )?;
    Ok(())
}
