use crate::{ElementId, ElementKind, Placement};

/// The data/element provider consumed by [`crate::Grid`].
///
/// One object answers every question the engine asks: dimensions, sizes, element creation
/// and binding, and column reordering of its own dataset.
pub trait TableAdapter {
    /// The renderable handle produced by `create_element` (a widget, a view id, ...).
    type Handle;

    fn row_count(&self) -> usize;
    fn column_count(&self) -> usize;
    fn column_width(&self, column: usize) -> u32;
    fn row_height(&self, row: usize) -> u32;
    fn header_column_height(&self) -> u32;
    fn header_row_width(&self) -> u32;

    /// Creates a fresh element. Only called when the pool has nothing of `kind` to reuse.
    fn create_element(&mut self, kind: ElementKind) -> Self::Handle;

    fn bind_element(&mut self, handle: &mut Self::Handle, row: usize, column: usize);
    fn bind_header_column(&mut self, handle: &mut Self::Handle, column: usize);
    fn bind_header_row(&mut self, handle: &mut Self::Handle, row: usize);

    /// Called after an element left the screen and was parked in the pool.
    fn on_element_recycled(&mut self, handle: &mut Self::Handle) {
        let _ = handle;
    }

    /// Reorders the adapter's own data so that columns `from` and `to` trade places, keeping
    /// the dataset aligned with the displayed geometry.
    fn swap_columns(&mut self, from: usize, to: usize);
}

/// Receives the engine's render-tree instructions.
///
/// The engine never infers tree membership: every element is explicitly attached before its
/// first placement and detached when it goes back to the pool.
pub trait RenderSink<H> {
    fn attach(&mut self, id: ElementId, handle: &H, kind: ElementKind);
    fn detach(&mut self, id: ElementId, handle: &H);
    fn place(&mut self, id: ElementId, handle: &H, placement: Placement);
}

/// A sink that ignores every instruction (useful for headless measurement).
impl<H> RenderSink<H> for () {
    fn attach(&mut self, _id: ElementId, _handle: &H, _kind: ElementKind) {}
    fn detach(&mut self, _id: ElementId, _handle: &H) {}
    fn place(&mut self, _id: ElementId, _handle: &H, _placement: Placement) {}
}
