use alloc::vec::Vec;

use crate::cells::CellStore;
use crate::drag::DragPhase;
use crate::element::{Element, Holder, Registry};
use crate::geometry::GeometryTable;
use crate::pool::ElementPool;
use crate::{
    CellCoord, ElementId, ElementKind, FrameState, GridOptions, RenderSink, Result, ScrollState,
    Size, TableAdapter, ViewRect, VisibleRange,
};

/// A headless virtualized grid.
///
/// The grid holds only logical state: geometry, the cell store, the element pool, the scroll
/// offset and the drag state. Elements come from the attached [`TableAdapter`]; every
/// add/remove/position instruction goes to the [`RenderSink`].
///
/// Without an adapter every operation is a no-op.
///
/// For gesture dispatch and scroll animations, see the `gridvirt-adapter` crate.
pub struct Grid<A: TableAdapter, R> {
    pub(crate) options: GridOptions,
    pub(crate) adapter: Option<A>,
    pub(crate) sink: R,

    pub(crate) geometry: GeometryTable,
    pub(crate) cells: CellStore<Element<A::Handle>>,
    pub(crate) pool: ElementPool<Element<A::Handle>>,
    pub(crate) registry: Registry,

    pub(crate) scroll: ScrollState,
    pub(crate) viewport: Size,
    pub(crate) drag: DragPhase,
}

impl<A, R> Grid<A, R>
where
    A: TableAdapter,
    R: RenderSink<A::Handle>,
{
    pub fn new(options: GridOptions, sink: R) -> Self {
        vdebug!(
            enabled = options.enabled,
            swap_hysteresis = options.swap_hysteresis,
            "Grid::new"
        );
        Self {
            options,
            adapter: None,
            sink,
            geometry: GeometryTable::new(),
            cells: CellStore::new(),
            pool: ElementPool::new(),
            registry: Registry::default(),
            scroll: ScrollState::default(),
            viewport: Size::default(),
            drag: DragPhase::Idle,
        }
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: GridOptions) {
        self.options = options;
        self.refresh();
    }

    pub fn adapter(&self) -> Option<&A> {
        self.adapter.as_ref()
    }

    pub fn adapter_mut(&mut self) -> Option<&mut A> {
        self.adapter.as_mut()
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn geometry(&self) -> &GeometryTable {
        &self.geometry
    }

    pub fn cells(&self) -> &CellStore<Element<A::Handle>> {
        &self.cells
    }

    pub fn pool(&self) -> &ElementPool<Element<A::Handle>> {
        &self.pool
    }

    /// Attaches `adapter` (or detaches with `None`) and returns the previous one.
    ///
    /// Elements of the previous adapter are detached from the sink and dropped. On a geometry
    /// error the new adapter is dropped as well and the grid is left without one.
    pub fn set_adapter(&mut self, adapter: Option<A>) -> Result<Option<A>> {
        let previous = self.take_adapter();
        let Some(adapter) = adapter else {
            return Ok(previous);
        };
        vdebug!(
            rows = adapter.row_count(),
            columns = adapter.column_count(),
            "Grid::set_adapter"
        );
        self.adapter = Some(adapter);
        if let Err(err) = self.reload_geometry() {
            vwarn!(%err, "Grid::set_adapter: rejected adapter geometry");
            self.adapter = None;
            return Err(err);
        }
        self.clamp_scroll();
        self.refresh();
        Ok(previous)
    }

    /// Detaches the adapter, dropping every element it created.
    pub fn take_adapter(&mut self) -> Option<A> {
        let adapter = self.adapter.take()?;
        vdebug!("Grid::take_adapter");
        for element in self.cells.drain_all() {
            self.sink.detach(element.id, &element.handle);
        }
        self.pool.clear();
        self.registry.clear();
        self.drag = DragPhase::Idle;
        Some(adapter)
    }

    /// Re-reads dimensions and sizes after the adapter's dataset changed.
    ///
    /// Every live element is recycled first, so rebinding happens through the pool.
    pub fn notify_data_changed(&mut self) -> Result<()> {
        if self.adapter.is_none() {
            return Ok(());
        }
        self.recycle_all();
        self.drag = DragPhase::Idle;
        self.reload_geometry()?;
        self.clamp_scroll();
        self.refresh();
        Ok(())
    }

    /// Replaces every column width. A length that differs from the column count is rejected
    /// and the adapter's widths are restored.
    pub fn set_column_widths(&mut self, widths: Vec<u32>) -> Result<()> {
        if self.adapter.is_none() {
            return Ok(());
        }
        self.geometry.set_column_widths(widths);
        self.commit_geometry()
    }

    /// Replaces every row height. A length that differs from the row count is rejected and
    /// the adapter's heights are restored.
    pub fn set_row_heights(&mut self, heights: Vec<u32>) -> Result<()> {
        if self.adapter.is_none() {
            return Ok(());
        }
        self.geometry.set_row_heights(heights);
        self.commit_geometry()
    }

    pub fn resize_column(&mut self, column: usize, width: u32) -> Result<()> {
        if self.adapter.is_none() {
            return Ok(());
        }
        self.geometry.set_column_width(column, width)?;
        self.commit_geometry()
    }

    pub fn resize_row(&mut self, row: usize, height: u32) -> Result<()> {
        if self.adapter.is_none() {
            return Ok(());
        }
        self.geometry.set_row_height(row, height)?;
        self.commit_geometry()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn viewport_rect(&self) -> ViewRect {
        ViewRect::from_size(self.viewport)
    }

    /// Applies a viewport resize: re-clamps the scroll offset and re-materializes.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        vtrace!(
            width = viewport.width,
            height = viewport.height,
            "Grid::set_viewport_size"
        );
        self.viewport = viewport;
        self.clamp_scroll();
        self.refresh();
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// Largest valid scroll offsets, `max(0, full - viewport)` per axis.
    pub fn max_scroll(&self) -> (u64, u64) {
        if self.adapter.is_none() {
            return (0, 0);
        }
        let max_x = self
            .geometry
            .full_width()
            .saturating_sub(self.viewport.width as u64);
        let max_y = self
            .geometry
            .full_height()
            .saturating_sub(self.viewport.height as u64);
        (max_x, max_y)
    }

    /// Scrolls by `(dx, dy)`, clamped to the content. Returns the applied delta.
    ///
    /// A non-zero delta recycles elements that left the viewport, fills newly exposed cells
    /// (reusing the elements just recycled), and lays everything out again.
    pub fn scroll_by(&mut self, dx: i64, dy: i64) -> (i64, i64) {
        if self.adapter.is_none() {
            return (0, 0);
        }
        let (max_x, max_y) = self.max_scroll();
        let applied = self.scroll.scroll_by(dx, dy, max_x, max_y);
        vtrace!(dx, dy, applied_x = applied.0, applied_y = applied.1, "Grid::scroll_by");
        if applied != (0, 0) {
            self.refresh();
        }
        applied
    }

    /// Scrolls to an absolute offset (clamped). Returns the applied delta.
    pub fn scroll_to(&mut self, x: u64, y: u64) -> (i64, i64) {
        let dx = (x as i128 - self.scroll.x as i128).clamp(i64::MIN as i128, i64::MAX as i128);
        let dy = (y as i128 - self.scroll.y as i128).clamp(i64::MIN as i128, i64::MAX as i128);
        self.scroll_by(dx as i64, dy as i64)
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport,
            scroll: self.scroll,
        }
    }

    /// Restores a previously captured scroll offset (clamped to the current content).
    pub fn restore_scroll_state(&mut self, scroll: ScrollState) -> (i64, i64) {
        self.scroll_to(scroll.x, scroll.y)
    }

    /// Where the element `id` currently lives, if the grid knows it.
    pub fn holder_of(&self, id: ElementId) -> Option<Holder> {
        self.registry.get(id)
    }

    /// The screen rectangle a renderer should clip elements of `kind` to, so that scrolled
    /// cells never paint over the pinned headers.
    pub fn clip_rect(&self, kind: ElementKind) -> ViewRect {
        let header_w = i64::from(self.geometry.header_row_width());
        let header_h = i64::from(self.geometry.header_column_height());
        let width = i64::from(self.viewport.width);
        let height = i64::from(self.viewport.height);
        match kind {
            ElementKind::HeaderColumn => ViewRect::new(header_w, 0, width, header_h),
            ElementKind::HeaderRow => ViewRect::new(0, header_h, header_w, height),
            ElementKind::Data => ViewRect::new(header_w, header_h, width, height),
        }
    }

    /// Recycles what left the viewport, fills what entered it, and lays out everything.
    pub fn refresh(&mut self) {
        if self.adapter.is_none() {
            return;
        }
        let rect = self.viewport_rect();
        self.recycle(rect);
        match self.visible_bands(rect) {
            (Some((top, bottom)), Some((left, right))) => {
                self.fill(VisibleRange {
                    top_row: top,
                    bottom_row: bottom,
                    left_column: left,
                    right_column: right,
                });
            }
            // Only one header band is on screen.
            (Some((top, bottom)), None) => {
                self.fill_header_rows(top, bottom);
            }
            (None, Some((left, right))) => {
                self.fill_header_columns(left, right);
            }
            (None, None) => {}
        }
        self.layout();
    }

    pub(crate) fn reload_geometry(&mut self) -> Result<()> {
        let Some(adapter) = self.adapter.as_ref() else {
            return Ok(());
        };
        let rows = adapter.row_count();
        let columns = adapter.column_count();
        self.geometry.initialize(rows, columns);
        self.geometry
            .set_column_widths((0..columns).map(|c| adapter.column_width(c)).collect());
        self.geometry
            .set_row_heights((0..rows).map(|r| adapter.row_height(r)).collect());
        self.geometry
            .set_header_sizes(adapter.header_row_width(), adapter.header_column_height());
        self.geometry.invalidate()
    }

    fn commit_geometry(&mut self) -> Result<()> {
        if let Err(err) = self.geometry.invalidate() {
            vwarn!(%err, "Grid: geometry rejected, restoring adapter sizes");
            self.reload_geometry()?;
            return Err(err);
        }
        self.clamp_scroll();
        self.refresh();
        Ok(())
    }

    pub(crate) fn clamp_scroll(&mut self) {
        let (max_x, max_y) = self.max_scroll();
        self.scroll.clamp_to(max_x, max_y);
    }

    /// Stores a data element, releasing whatever it displaced.
    pub(crate) fn store_cell(&mut self, row: usize, column: usize, element: Element<A::Handle>) {
        let id = element.id;
        self.registry.set(id, Holder::Data(CellCoord::new(row, column)));
        let displaced = self.cells.put(row, column, element);
        debug_assert!(
            displaced.is_none(),
            "CellStore: ({row}, {column}) was overwritten without removing its element"
        );
        if let Some(displaced) = displaced {
            vwarn!(row, column, "CellStore: displaced a live element");
            self.release(displaced);
        }
    }

    /// Detaches `element` from the sink, parks it in the pool and notifies the adapter.
    pub(crate) fn release(&mut self, mut element: Element<A::Handle>) {
        self.sink.detach(element.id, &element.handle);
        element.is_dragging = false;
        let kind = element.kind;
        self.registry.set(element.id, Holder::Pooled(kind));
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.on_element_recycled(&mut element.handle);
        }
        self.pool.recycle(element, kind);
    }

    fn recycle_all(&mut self) {
        let elements = self.cells.drain_all();
        vdebug!(count = elements.len(), "Grid::recycle_all");
        for element in elements {
            self.release(element);
        }
    }
}

impl<A, R> core::fmt::Debug for Grid<A, R>
where
    A: TableAdapter,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("options", &self.options)
            .field("attached", &self.adapter.is_some())
            .field("rows", &self.geometry.row_count())
            .field("columns", &self.geometry.column_count())
            .field("scroll", &self.scroll)
            .field("viewport", &self.viewport)
            .field("live", &self.cells.len())
            .field("pooled", &self.pool.total_len())
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}
