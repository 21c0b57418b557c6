use crate::types::Color;

use super::frame::Frame;
use super::SceneError;

/// The animation document: the ordered frame collection, the color used for
/// newly recorded strokes, and the active frame index.
///
/// Invariant: `active`, when `Some`, is a valid index into `frames`. Every
/// mutating operation re-establishes this before returning.
#[derive(Debug, Clone)]
pub struct SceneModel {
    frames: Vec<Frame>,
    current_color: Color,
    active: Option<usize>,
}

impl Default for SceneModel {
    fn default() -> Self {
        SceneModel {
            frames: Vec::new(),
            current_color: Color::Red,
            active: None,
        }
    }
}

impl SceneModel {
    pub fn new() -> Self {
        SceneModel::default()
    }

    /// Append a new empty frame and return its index. Does not change the
    /// active frame; the controller decides what becomes active.
    pub fn add_frame(&mut self) -> usize {
        self.frames.push(Frame::new());
        self.frames.len() - 1
    }

    /// Remove the frame at `index`. The first remaining frame becomes
    /// active, or no frame if the collection emptied. Returns the new
    /// active index.
    pub fn delete_frame(&mut self, index: usize) -> Result<Option<usize>, SceneError> {
        self.check_index(index)?;
        self.frames.remove(index);
        self.active = if self.frames.is_empty() { None } else { Some(0) };
        Ok(self.active)
    }

    /// Append a copy of the frame at `index`, make it active, and return
    /// its index. The copy's actions are cloned: mutating the duplicate
    /// never affects the source frame.
    pub fn duplicate_frame(&mut self, index: usize) -> Result<usize, SceneError> {
        self.check_index(index)?;
        let copy = self.frames[index].clone();
        self.frames.push(copy);
        let new_index = self.frames.len() - 1;
        self.active = Some(new_index);
        Ok(new_index)
    }

    /// Advance the active index by one, wrapping past the last frame. An
    /// unset active index starts playback at frame 0.
    pub fn next(&mut self) -> Result<usize, SceneError> {
        if self.frames.is_empty() {
            return Err(SceneError::EmptyScene);
        }
        let next = match self.active {
            Some(i) => (i + 1) % self.frames.len(),
            None => 0,
        };
        self.active = Some(next);
        Ok(next)
    }

    pub fn set_active(&mut self, index: usize) -> Result<(), SceneError> {
        self.check_index(index)?;
        self.active = Some(index);
        Ok(())
    }

    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_frame(&self) -> Option<&Frame> {
        self.active.map(|i| &self.frames[i])
    }

    pub fn active_frame_mut(&mut self) -> Option<&mut Frame> {
        self.active.map(|i| &mut self.frames[i])
    }

    fn check_index(&self, index: usize) -> Result<(), SceneError> {
        if index >= self.frames.len() {
            return Err(SceneError::InvalidIndex {
                index,
                len: self.frames.len(),
            });
        }
        Ok(())
    }
}
