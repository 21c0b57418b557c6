use crate::controller::SceneController;
use crate::types::{Color, Point};

use super::config::EditorConfig;
use super::palette::{PaletteState, Tool};

pub struct EditorState {
    pub controller: SceneController,
    pub config: EditorConfig,
    pub palette: PaletteState,
    pub tool: Tool,
    pub status_message: Option<String>,
    /// Last pointer sample of an in-progress drag, in canvas coordinates.
    /// None when no stroke is being drawn.
    pub drag: Option<Point>,
}

impl EditorState {
    /// A fresh session: one empty frame selected, green as the working
    /// color.
    pub fn new() -> Self {
        let mut controller = SceneController::new();
        controller.add_frame();

        let palette = PaletteState::new();
        controller.set_current_color(palette.current);

        EditorState {
            controller,
            config: EditorConfig::load(),
            palette,
            tool: Tool::Draw,
            status_message: None,
            drag: None,
        }
    }

    pub fn pick_color(&mut self, color: Color) {
        self.palette.pick(color);
        self.controller.set_current_color(color);
    }

    pub fn swap_colors(&mut self) {
        self.palette.swap();
        self.controller.set_current_color(self.palette.current);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        EditorState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_has_one_selected_empty_frame() {
        let state = EditorState::new();
        assert_eq!(state.controller.model().len(), 1);
        assert_eq!(state.controller.model().active(), Some(0));
        assert!(state.controller.model().frames()[0].is_empty());
        assert_eq!(state.controller.model().current_color(), Color::Green);
    }

    #[test]
    fn pick_and_swap_track_the_model_color() {
        let mut state = EditorState::new();
        state.pick_color(Color::Blue);
        assert_eq!(state.controller.model().current_color(), Color::Blue);
        assert_eq!(state.palette.prev, Color::Green);

        state.swap_colors();
        assert_eq!(state.controller.model().current_color(), Color::Green);
        assert_eq!(state.palette.prev, Color::Blue);
    }
}
