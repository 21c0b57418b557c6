//! Scene view — the frame-picker projection.
//!
//! A pure function of the frame list and the active index: no retained
//! state, no diffing. The editor re-invokes it after every model mutation
//! and paints whatever comes back (last writer wins).

use crate::scene::Frame;

/// Key hints attached to every picker entry. The bracketed keys map 1:1 to
/// controller operations (select / duplicate / delete).
pub const AFFORDANCES: &str = "[←→] sel  [d]up  [⌫] del";

/// One row of the frame-picker widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub index: usize,
    /// Display label, 1-based: "[ 3] 5 strokes".
    pub label: String,
    pub active: bool,
    pub affordances: &'static str,
}

pub struct SceneView;

impl SceneView {
    /// Project the frame list into picker rows, marking the entry at
    /// `active` as selected.
    pub fn render(frames: &[Frame], active: Option<usize>) -> Vec<PickerEntry> {
        frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                let count = frame.actions().len();
                let noun = if count == 1 { "stroke" } else { "strokes" };
                PickerEntry {
                    index: i,
                    label: format!("[{:>2}] {count} {noun}", i + 1),
                    active: active == Some(i),
                    affordances: AFFORDANCES,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Action, Line};
    use crate::types::{Color, Point};

    fn frame_with_strokes(n: usize) -> Frame {
        let mut f = Frame::new();
        for i in 0..n {
            f.add_action(Action::Line(Line::new(
                Point::new(0, 0),
                Point::new(i as i32, 0),
                Color::Red,
            )));
        }
        f
    }

    #[test]
    fn empty_scene_projects_no_entries() {
        assert!(SceneView::render(&[], None).is_empty());
    }

    #[test]
    fn exactly_the_active_entry_is_marked() {
        let frames = vec![Frame::new(), Frame::new(), Frame::new()];
        let entries = SceneView::render(&frames, Some(1));
        let marked: Vec<usize> = entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.index)
            .collect();
        assert_eq!(marked, vec![1]);
    }

    #[test]
    fn labels_are_one_based_with_stroke_counts() {
        let frames = vec![frame_with_strokes(1), frame_with_strokes(3)];
        let entries = SceneView::render(&frames, None);
        assert_eq!(entries[0].label, "[ 1] 1 stroke");
        assert_eq!(entries[1].label, "[ 2] 3 strokes");
        assert!(entries.iter().all(|e| !e.active));
    }

    #[test]
    fn rendering_twice_gives_identical_output() {
        let frames = vec![frame_with_strokes(2), Frame::new()];
        assert_eq!(
            SceneView::render(&frames, Some(0)),
            SceneView::render(&frames, Some(0)),
        );
    }
}
