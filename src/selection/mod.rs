//! Interactive selection of straight-line letter paths.
//!
//! The [`SelectionTracker`] is a two-state machine (idle, building) that
//! enforces adjacency and direction locking. [`ClickAdapter`] and
//! [`DragAdapter`] feed it from raw [`PointerEvent`]s so that both input
//! modes share one set of rules.

mod adapters;
mod path;
mod tracker;

pub use adapters::{ClickAdapter, DragAdapter, InputAdapter, PointerEvent};
pub use path::SelectionPath;
pub use tracker::{SelectionTracker, TrackerState, Transition};
