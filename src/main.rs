use std::process;

use anyhow::{Result, bail};

use flipbook::editor::Editor;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const USAGE: &str = "flipbook — terminal flipbook animation editor\n\nUsage:\n  flipbook";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    if args.next().is_some() {
        bail!("{USAGE}");
    }

    let mut editor = Editor::new();
    editor.run()
}
