//! A headless virtualized grid engine.
//!
//! For gesture dispatch and scroll physics (fling, drag auto-scroll), see the
//! `gridvirt-adapter` crate.
//!
//! This crate keeps only the logical state needed to show a huge table through a small
//! viewport: per-column/per-row prefix sums for pixel → index lookups, a sparse store of the
//! elements currently materialized (plus the pinned header row and header column), per-kind
//! pools of recycled elements, and a column drag-reorder state machine.
//!
//! It is UI-agnostic. The embedding layer provides:
//! - a [`TableAdapter`] that knows the data, sizes, and how to create/bind elements
//! - a [`RenderSink`] that inserts, removes and positions those elements
//! - viewport size and already-resolved gestures (scroll deltas, long-press, drag moves)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod cells;
mod drag;
mod element;
mod error;
mod geometry;
mod grid;
mod map;
mod options;
mod pool;
mod prefix;
mod state;
mod types;
mod viewport;


pub use adapter::{RenderSink, TableAdapter};
pub use cells::CellStore;
pub use drag::{DragDescriptor, DragPhase};
pub use element::{Element, ElementId, ElementRef, Holder};
pub use error::{GridError, Result};
pub use geometry::GeometryTable;
pub use grid::Grid;
pub use options::{DEFAULT_SWAP_HYSTERESIS, GridOptions};
pub use pool::ElementPool;
pub use state::{FrameState, ScrollState, consumable_delta};
pub use types::{
    Axis, Bounds, CellCoord, ElementKind, Placement, Size, ViewRect, VisibleRange,
};
