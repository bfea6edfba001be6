use crate::map::Map;
use crate::{CellCoord, ElementKind};

/// Engine-assigned identity of a materialized element.
///
/// Render sinks receive the id next to the handle, so they can key their own bookkeeping on
/// it instead of attaching metadata to the handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A renderable handle plus the logical cell it is currently bound to.
///
/// An element is owned by exactly one of the cell store or the pool.
#[derive(Clone, Debug)]
pub struct Element<H> {
    pub(crate) id: ElementId,
    pub(crate) handle: H,
    pub(crate) row: usize,
    pub(crate) column: usize,
    pub(crate) kind: ElementKind,
    pub(crate) is_dragging: bool,
}

impl<H> Element<H> {
    pub fn new(id: ElementId, handle: H, kind: ElementKind) -> Self {
        Self {
            id,
            handle,
            row: 0,
            column: 0,
            kind,
            is_dragging: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.row, self.column)
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn to_ref(&self) -> ElementRef {
        ElementRef {
            id: self.id,
            kind: self.kind,
            row: self.row,
            column: self.column,
        }
    }
}

/// A copyable description of a live element, returned by hit tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRef {
    pub id: ElementId,
    pub kind: ElementKind,
    pub row: usize,
    pub column: usize,
}

/// Where an element currently lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holder {
    Data(CellCoord),
    HeaderColumn(usize),
    HeaderRow(usize),
    Pooled(ElementKind),
}

/// Id allocation plus the id → holder half of the handle/holder association.
/// The holder → handle half is the cell store itself.
#[derive(Clone, Debug, Default)]
pub(crate) struct Registry {
    next_id: u64,
    holders: Map<ElementId, Holder>,
}

impl Registry {
    pub(crate) fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub(crate) fn set(&mut self, id: ElementId, holder: Holder) {
        self.holders.insert(id, holder);
    }

    pub(crate) fn get(&self, id: ElementId) -> Option<Holder> {
        self.holders.get(&id).copied()
    }

    pub(crate) fn clear(&mut self) {
        self.holders.clear();
    }
}
