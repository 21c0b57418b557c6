//! Scene — the animation data model.
//!
//! A scene is an ordered collection of frames; a frame is an ordered list of
//! recorded draw actions. The model knows nothing about terminals, timers,
//! or input devices — it renders onto an abstract `Surface` and is mutated
//! through explicit operations.

mod action;
mod frame;
mod model;

pub use action::{Action, Draw, Line};
pub use frame::Frame;
pub use model::SceneModel;

use thiserror::Error;

/// Failures of the core model. These are programming/UI-wiring errors, not
/// expected runtime conditions: the UI layer must never present an
/// out-of-range index or drive playback over an empty scene.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("frame index {index} out of range (scene has {len} frames)")]
    InvalidIndex { index: usize, len: usize },
    #[error("scene has no frames")]
    EmptyScene,
}
