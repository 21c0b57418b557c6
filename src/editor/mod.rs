//! Editor — the terminal UI wiring.
//!
//! Everything in here is glue: it owns the terminal lifecycle, translates
//! crossterm events into controller operations, and paints the controller's
//! surfaces and picker projection onto the screen. The core never sees a
//! terminal.

pub mod config;
mod input;
mod menubar;
mod palette;
mod panel;
mod screen;
pub mod state;
mod statusbar;
mod ui;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use crossterm::{cursor, event, execute, terminal};

use input::Action;
use state::EditorState;
use ui::Layout;

/// Poll timeout while idle; keeps the loop responsive to resize events
/// without a playback deadline to wake up for.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct Editor {
    state: EditorState,
    fullscreen: bool,
}

impl Editor {
    pub fn new() -> Self {
        Editor {
            state: EditorState::new(),
            fullscreen: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let (term_w, term_h) = terminal::size()?;
        let (need_w, need_h) = Layout::min_size();
        if term_w < need_w || term_h < need_h {
            bail!("Terminal too small: need {need_w}x{need_h}, have {term_w}x{term_h}");
        }

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;

        let result = self.main_loop(&mut stdout);

        // Always restore terminal state.
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();

        result
    }

    fn main_loop(&mut self, stdout: &mut io::Stdout) -> Result<()> {
        self.full_redraw(stdout)?;

        loop {
            // Wake up for the next playback deadline, or periodically.
            let timeout = self
                .state
                .controller
                .next_deadline()
                .map(|due| due.saturating_duration_since(Instant::now()))
                .unwrap_or(IDLE_POLL);

            if event::poll(timeout)? {
                let event = event::read()?;
                let layout = self.layout()?;
                match input::handle_event(&mut self.state, &layout, event) {
                    Action::Continue => {}
                    Action::Redraw => self.full_redraw(stdout)?,
                    Action::ToggleFullscreen => {
                        self.fullscreen = !self.fullscreen;
                        if self.fullscreen {
                            stdout.write_all(b"\x1b[10;1t")?;
                        } else {
                            stdout.write_all(b"\x1b[10;0t")?;
                        }
                        stdout.flush()?;
                        self.full_redraw(stdout)?;
                    }
                    Action::Quit => break,
                }
            }

            if self.state.controller.tick(Instant::now()) > 0 {
                self.full_redraw(stdout)?;
            }
        }

        Ok(())
    }

    fn layout(&self) -> Result<Layout> {
        let (term_w, term_h) = terminal::size()?;
        Ok(Layout::compute(term_w, term_h))
    }

    fn full_redraw(&self, stdout: &mut io::Stdout) -> Result<()> {
        let layout = self.layout()?;

        execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

        menubar::render_menubar(stdout, &self.state)?;
        screen::render_canvas(stdout, &layout, &self.state)?;
        panel::render_panel(stdout, &layout, &self.state)?;
        statusbar::render_status(stdout, &layout, &self.state)?;

        stdout.flush()?;
        Ok(())
    }
}
