//! Drag Coordinator
//!
//! State machine over a single reorder gesture. Indices are full-list
//! indices; the list itself is only touched through the returned `Reorder`.

/// Gesture events fed in by the UI layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEvent {
    /// Gesture started on the row at this index
    Start(usize),
    /// Pointer is over a candidate target row
    Over(usize),
    /// Pointer left the current target row
    Leave,
    /// Released; commit against the current hover target
    Drop,
    /// Gesture abandoned without a drop
    Cancel,
}

/// A committed move from one index to another
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// Current gesture state. `source == None` means Idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    source: Option<usize>,
    hover: Option<usize>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<usize> {
        self.source
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Advance the machine. Returns a reorder to commit, if the event was a
    /// drop onto a different row.
    pub fn handle(&mut self, event: DragEvent) -> Option<Reorder> {
        match (self.source, event) {
            (_, DragEvent::Start(index)) => {
                self.source = Some(index);
                self.hover = None;
                None
            }
            (Some(_), DragEvent::Over(index)) => {
                self.hover = Some(index);
                None
            }
            (Some(_), DragEvent::Leave) => {
                self.hover = None;
                None
            }
            (Some(from), DragEvent::Drop) => {
                let target = self.hover;
                self.clear();
                match target {
                    Some(to) if to != from => Some(Reorder { from, to }),
                    _ => None,
                }
            }
            (Some(_), DragEvent::Cancel) => {
                self.clear();
                None
            }
            // Idle: nothing to hover, drop or cancel
            (None, _) => None,
        }
    }

    fn clear(&mut self) {
        self.source = None;
        self.hover = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_gesture_commits() {
        let mut drag = DragState::default();
        assert_eq!(drag.handle(DragEvent::Start(0)), None);
        assert!(drag.is_dragging());
        assert_eq!(drag.handle(DragEvent::Over(1)), None);
        assert_eq!(drag.handle(DragEvent::Over(3)), None);
        assert_eq!(drag.hover(), Some(3));
        assert_eq!(drag.handle(DragEvent::Drop), Some(Reorder { from: 0, to: 3 }));
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn test_drop_on_source_clears_without_commit() {
        let mut drag = DragState::default();
        drag.handle(DragEvent::Start(2));
        drag.handle(DragEvent::Over(2));
        assert_eq!(drag.handle(DragEvent::Drop), None);
        assert!(!drag.is_dragging());
        assert_eq!(drag.hover(), None);
    }

    #[test]
    fn test_drop_without_target_is_cancel() {
        let mut drag = DragState::default();
        drag.handle(DragEvent::Start(1));
        drag.handle(DragEvent::Over(0));
        drag.handle(DragEvent::Leave);
        assert_eq!(drag.handle(DragEvent::Drop), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_cancel_clears_without_commit() {
        let mut drag = DragState::default();
        drag.handle(DragEvent::Start(1));
        drag.handle(DragEvent::Over(4));
        assert_eq!(drag.handle(DragEvent::Cancel), None);
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn test_idle_ignores_hover_and_drop() {
        let mut drag = DragState::default();
        assert_eq!(drag.handle(DragEvent::Over(1)), None);
        assert_eq!(drag.handle(DragEvent::Drop), None);
        assert_eq!(drag.handle(DragEvent::Cancel), None);
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn test_restart_resets_hover() {
        let mut drag = DragState::default();
        drag.handle(DragEvent::Start(0));
        drag.handle(DragEvent::Over(2));
        drag.handle(DragEvent::Start(1));
        assert_eq!(drag.source(), Some(1));
        assert_eq!(drag.hover(), None);
    }
}
