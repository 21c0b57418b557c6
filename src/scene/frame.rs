use crate::canvas::{BACKGROUND, Surface};

use super::action::{Action, Draw};

/// One still image of the animation: an ordered list of recorded actions.
/// Later strokes paint over earlier ones, so replay order is insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    actions: Vec<Action>,
}

impl Frame {
    pub fn new() -> Self {
        Frame::default()
    }

    /// Clear the surface to the fixed background, then replay every action
    /// in insertion order. Mutates the surface only.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill(BACKGROUND);
        for action in &self.actions {
            action.draw(surface);
        }
    }

    /// Discard all recorded actions.
    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
