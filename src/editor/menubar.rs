use std::io;

use crossterm::{cursor, queue, style, terminal};

use super::state::EditorState;

pub fn render_menubar(stdout: &mut io::Stdout, state: &EditorState) -> anyhow::Result<()> {
    let play_item = if state.controller.is_playing() {
        "[Space] stop"
    } else {
        "[Space] play"
    };
    let items: &[&str] = &[
        play_item,
        "[a]dd",
        "[d]up",
        "[⌫] del",
        "[c]lear",
        "[←→] frame",
        "[1-8] color",
        "[x] swap",
        "[t]ool",
        "[+/-] speed",
        "[F11] full",
        "[q]uit",
    ];

    queue!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print(" "),
    )?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            queue!(stdout, style::Print("  "))?;
        }
        print_menu_item(stdout, item)?;
    }
    Ok(())
}

/// Print a menu item string, bolding the key inside `[...]` brackets and
/// dimming the text around it.
fn print_menu_item(stdout: &mut io::Stdout, item: &str) -> anyhow::Result<()> {
    let mut rest = item;
    while !rest.is_empty() {
        if let Some(open) = rest.find('[') {
            if open > 0 {
                queue!(
                    stdout,
                    style::SetAttribute(style::Attribute::Dim),
                    style::Print(&rest[..open]),
                    style::SetAttribute(style::Attribute::Reset),
                )?;
            }
            rest = &rest[open..];
            if let Some(close) = rest.find(']') {
                queue!(
                    stdout,
                    style::SetAttribute(style::Attribute::Bold),
                    style::Print(&rest[..=close]),
                    style::SetAttribute(style::Attribute::Reset),
                )?;
                rest = &rest[close + 1..];
            } else {
                queue!(stdout, style::Print(rest))?;
                break;
            }
        } else {
            queue!(
                stdout,
                style::SetAttribute(style::Attribute::Dim),
                style::Print(rest),
                style::SetAttribute(style::Attribute::Reset),
            )?;
            break;
        }
    }
    Ok(())
}
