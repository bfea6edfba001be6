//! Gesture dispatch and scroll physics for the `gridvirt` crate.
//!
//! The `gridvirt` grid only reacts to already-resolved events. This crate adds the pieces an
//! embedding layer usually needs on top of it:
//!
//! - a [`Controller`] that routes tap / long-press / drag / scroll / fling gestures to the grid
//! - a friction-based fling animation ([`SmoothScroll`])
//! - edge auto-scroll while dragging a column ([`DragAutoScroll`])
//!
//! Animations are pull-based: call [`Controller::tick`] from a frame loop or timer.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoscroll;
mod controller;
mod fling;
mod options;

#[cfg(test)]
mod tests;

pub use autoscroll::DragAutoScroll;
pub use controller::Controller;
pub use fling::{FRAME_MS, SmoothScroll};
pub use options::PhysicsOptions;
