//! Input mapping: native window events reduced to keys, actions and deltas.
//!
//! # Invariants
//! - No windowing crate appears below this layer.
//! - Camera mutations for a frame are applied before the frame is rendered.

pub mod action;
pub mod frame;
pub mod pointer;

pub use action::{Action, Key, KeyBindings};
pub use frame::FrameInput;
pub use pointer::PointerTracker;

pub fn crate_info() -> &'static str {
    "deskscene-input v0.1.0"
}
