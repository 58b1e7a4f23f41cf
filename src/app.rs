//! Application layer.
//!
//! Hosts the UI controller that owns panel state and consumes fetch worker
//! responses at a single dispatch point.

pub mod controller;

pub use controller::{ChatRole, ChatTurn, DisplayRegion, UiController};
