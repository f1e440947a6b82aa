//! Input adapters translating pointer events into tracker calls.
//!
//! Both interaction modes drive the same [`SelectionTracker`]:
//!
//! - **Click chain**: tap a cell, tap the next, ..., tap the last cell again
//!   to commit.
//! - **Drag**: press starts, entering neighbouring cells extends, release
//!   commits, leaving the grid abandons.
//!
//! A host routes each physical gesture to one adapter; feeding the same
//! gesture to both would apply it twice.

use serde::{Deserialize, Serialize};

use crate::core::{Grid, Position};

use super::tracker::{SelectionTracker, TrackerState, Transition};

/// Raw interaction with the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Tap or click on a cell.
    Click(Position),
    /// Pointer pressed down on a cell.
    Press(Position),
    /// Pointer moved onto a cell.
    Enter(Position),
    /// Pointer released.
    Release,
    /// Pointer left the grid area.
    Leave,
}

impl PointerEvent {
    /// Whether this event belongs to the click-chain mode.
    #[must_use]
    pub fn is_click(self) -> bool {
        matches!(self, PointerEvent::Click(_))
    }
}

/// Converts pointer events into tracker transitions.
pub trait InputAdapter {
    /// Apply one event. Events the adapter does not handle are ignored.
    fn handle(
        &mut self,
        tracker: &mut SelectionTracker,
        grid: &Grid,
        event: PointerEvent,
    ) -> Transition;
}

/// Click-chain mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickAdapter;

impl InputAdapter for ClickAdapter {
    fn handle(
        &mut self,
        tracker: &mut SelectionTracker,
        grid: &Grid,
        event: PointerEvent,
    ) -> Transition {
        let PointerEvent::Click(pos) = event else {
            return Transition::Ignored;
        };
        let Some(cell) = grid.cell(pos) else {
            return Transition::Ignored;
        };

        if tracker.state() == TrackerState::Idle || tracker.is_commit_target(pos) {
            return tracker.start(cell);
        }

        // Tapping a cell already on the path starts over from it.
        match tracker.extend(cell) {
            Transition::Ignored => tracker.start(cell),
            other => other,
        }
    }
}

/// Drag mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragAdapter {
    dragging: bool,
}

impl DragAdapter {
    /// Create an adapter with no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Forget any drag in progress without touching the tracker.
    pub fn reset(&mut self) {
        self.dragging = false;
    }
}

impl InputAdapter for DragAdapter {
    fn handle(
        &mut self,
        tracker: &mut SelectionTracker,
        grid: &Grid,
        event: PointerEvent,
    ) -> Transition {
        match event {
            PointerEvent::Press(pos) => match grid.cell(pos) {
                Some(cell) => {
                    self.dragging = true;
                    tracker.start(cell)
                }
                None => Transition::Ignored,
            },
            PointerEvent::Enter(pos) if self.dragging => match grid.cell(pos) {
                Some(cell) => tracker.extend(cell),
                None => Transition::Ignored,
            },
            PointerEvent::Release if self.dragging => {
                self.dragging = false;
                tracker.commit()
            }
            PointerEvent::Leave if self.dragging => {
                self.dragging = false;
                tracker.abandon()
            }
            _ => Transition::Ignored,
        }
    }
}
