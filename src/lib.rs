//! Flipbook — a terminal flipbook animation editor.
//!
//! Draw line strokes on a cell canvas with the mouse, stack them into
//! ordered frames, and loop the frames back at a configurable speed.
//!
//! The core (scene model, controller, view projection, canvas) is
//! terminal-agnostic and driven by explicit ticks; `editor` wires it to a
//! crossterm UI.

pub mod canvas;
pub mod controller;
pub mod editor;
pub mod scene;
pub mod types;
pub mod view;
