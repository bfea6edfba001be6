use alloc::vec::Vec;

use crate::element::{Element, Holder, Registry};
use crate::geometry::GeometryTable;
use crate::pool::ElementPool;
use crate::{
    Bounds, CellCoord, ElementKind, ElementRef, Grid, Placement, RenderSink, ScrollState,
    TableAdapter, ViewRect, VisibleRange,
};

/// Applies the placement rules for one layout pass.
///
/// Built from disjoint grid fields so the cell store can be iterated while the sink is
/// being driven.
pub(crate) struct Layout<'a> {
    geometry: &'a GeometryTable,
    scroll_x: i64,
    scroll_y: i64,
    /// Screen x of the drag pointer, when a dragged column should follow it.
    drag_pointer: Option<i64>,
}

impl<'a> Layout<'a> {
    pub(crate) fn new(
        geometry: &'a GeometryTable,
        scroll: ScrollState,
        drag_pointer: Option<i64>,
    ) -> Self {
        Self {
            geometry,
            scroll_x: px(scroll.x),
            scroll_y: px(scroll.y),
            drag_pointer: drag_pointer.filter(|&x| x > 0),
        }
    }

    fn column_left(&self, column: usize) -> i64 {
        px(self.geometry.span_width(0, column)) - self.scroll_x
            + i64::from(self.geometry.header_row_width())
    }

    fn row_top(&self, row: usize) -> i64 {
        px(self.geometry.span_height(0, row)) - self.scroll_y
            + i64::from(self.geometry.header_column_height())
    }

    /// Left edge of an element centred on the drag pointer.
    fn dragged_left(&self, is_dragging: bool, width: u32) -> Option<i64> {
        if !is_dragging {
            return None;
        }
        self.drag_pointer.map(|x| x - i64::from(width / 2))
    }

    pub(crate) fn data(&self, row: usize, column: usize, is_dragging: bool) -> Placement {
        let width = self.geometry.column_width(column);
        let dragged = self.dragged_left(is_dragging, width);
        Placement {
            bounds: Bounds {
                left: dragged.unwrap_or_else(|| self.column_left(column)),
                top: self.row_top(row),
                width,
                height: self.geometry.row_height(row),
            },
            elevated: dragged.is_some(),
        }
    }

    pub(crate) fn header_column(&self, column: usize, is_dragging: bool) -> Placement {
        let width = self.geometry.column_width(column);
        let dragged = self.dragged_left(is_dragging, width);
        Placement {
            bounds: Bounds {
                left: dragged.unwrap_or_else(|| self.column_left(column)),
                top: 0,
                width,
                height: self.geometry.header_column_height(),
            },
            elevated: dragged.is_some(),
        }
    }

    /// Header rows are pinned horizontally; they never follow a drag.
    pub(crate) fn header_row(&self, row: usize) -> Placement {
        Placement {
            bounds: Bounds {
                left: 0,
                top: self.row_top(row),
                width: self.geometry.header_row_width(),
                height: self.geometry.row_height(row),
            },
            elevated: false,
        }
    }
}

/// Inclusive `(first, last)` index pair along one axis.
pub(crate) type Band = (usize, usize);

pub(crate) fn px(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

fn obtain<A: TableAdapter>(
    pool: &mut ElementPool<Element<A::Handle>>,
    registry: &mut Registry,
    adapter: &mut A,
    kind: ElementKind,
) -> Element<A::Handle> {
    match pool.acquire(kind) {
        Some(element) => element,
        None => Element::new(registry.allocate(), adapter.create_element(kind), kind),
    }
}

impl<A, R> Grid<A, R>
where
    A: TableAdapter,
    R: RenderSink<A::Handle>,
{
    /// Inclusive bounds of the cells intersecting `rect` at the current scroll offset.
    ///
    /// The rectangle's edges are first moved into the scrollable data area (past the pinned
    /// headers), so every cell in the range actually overlaps `rect` on screen. Returns
    /// `None` without an adapter, for an empty grid, or when the data area is not visible.
    pub fn visible_range(&self, rect: ViewRect) -> Option<VisibleRange> {
        let (rows, columns) = self.visible_bands(rect);
        let (top_row, bottom_row) = rows?;
        let (left_column, right_column) = columns?;
        Some(VisibleRange {
            top_row,
            bottom_row,
            left_column,
            right_column,
        })
    }

    /// Row and column bands behind `rect`, each `None` when its scrollable extent is off
    /// screen. A band can be visible on its own: a viewport no taller than the header row
    /// still shows header columns.
    pub(crate) fn visible_bands(&self, rect: ViewRect) -> (Option<Band>, Option<Band>) {
        if self.adapter.is_none() || !self.options.enabled {
            return (None, None);
        }
        let g = &self.geometry;
        if g.row_count() == 0 || g.column_count() == 0 {
            return (None, None);
        }
        let header_w = i64::from(g.header_row_width());
        let header_h = i64::from(g.header_column_height());
        let data_right = rect.right - header_w;
        let data_bottom = rect.bottom - header_h;

        let scroll_x = px(self.scroll.x);
        let scroll_y = px(self.scroll.y);
        let rows = (data_bottom >= 0).then(|| {
            let top = scroll_y + (rect.top - header_h).max(0);
            (g.row_for_y(top), g.row_for_y(scroll_y + data_bottom))
        });
        let columns = (data_right >= 0).then(|| {
            let left = scroll_x + (rect.left - header_w).max(0);
            (g.column_for_x(left), g.column_for_x(scroll_x + data_right))
        });
        (rows, columns)
    }

    /// Materializes every missing data cell in `range`, plus the header-row slot of each row
    /// and the header-column slot of each column.
    ///
    /// Pooled elements are reused first; the adapter is only asked to create an element when
    /// the pool for that kind is empty. Returns the number of elements materialized.
    pub fn fill(&mut self, range: VisibleRange) -> usize {
        if !self.options.enabled || self.adapter.is_none() {
            return 0;
        }
        let filled = self.fill_data(range)
            + self.fill_header_rows(range.top_row, range.bottom_row)
            + self.fill_header_columns(range.left_column, range.right_column);
        vtrace!(
            filled,
            top = range.top_row,
            bottom = range.bottom_row,
            left = range.left_column,
            right = range.right_column,
            "Grid::fill"
        );
        filled
    }

    fn fill_data(&mut self, range: VisibleRange) -> usize {
        let Some(adapter) = self.adapter.as_mut() else {
            return 0;
        };
        let dragging_column = self.drag.source_column();
        let layout = Layout::new(&self.geometry, self.scroll, self.drag.pointer_offset());
        let mut data = Vec::new();
        for row in range.rows() {
            for column in range.columns() {
                if self.cells.contains(row, column) {
                    continue;
                }
                let mut element =
                    obtain(&mut self.pool, &mut self.registry, adapter, ElementKind::Data);
                element.row = row;
                element.column = column;
                element.is_dragging = dragging_column == Some(column);
                adapter.bind_element(&mut element.handle, row, column);
                self.sink.attach(element.id, &element.handle, ElementKind::Data);
                self.sink.place(
                    element.id,
                    &element.handle,
                    layout.data(row, column, element.is_dragging),
                );
                data.push(element);
            }
        }

        let filled = data.len();
        for element in data {
            let (row, column) = (element.row, element.column);
            self.store_cell(row, column, element);
        }
        filled
    }

    /// Fills the header-row slots of rows `top..=bottom`.
    pub(crate) fn fill_header_rows(&mut self, top: usize, bottom: usize) -> usize {
        let Some(adapter) = self.adapter.as_mut() else {
            return 0;
        };
        let layout = Layout::new(&self.geometry, self.scroll, self.drag.pointer_offset());
        let mut filled = 0usize;
        for row in top..=bottom {
            if self.cells.header_row(row).is_some() {
                continue;
            }
            let mut element = obtain(
                &mut self.pool,
                &mut self.registry,
                adapter,
                ElementKind::HeaderRow,
            );
            element.row = row;
            element.column = 0;
            element.is_dragging = false;
            adapter.bind_header_row(&mut element.handle, row);
            self.sink.attach(element.id, &element.handle, ElementKind::HeaderRow);
            self.sink.place(element.id, &element.handle, layout.header_row(row));
            self.registry.set(element.id, Holder::HeaderRow(row));
            self.cells.put_header_row(row, element);
            filled += 1;
        }
        filled
    }

    /// Fills the header-column slots of columns `left..=right`.
    pub(crate) fn fill_header_columns(&mut self, left: usize, right: usize) -> usize {
        let Some(adapter) = self.adapter.as_mut() else {
            return 0;
        };
        let dragging_column = self.drag.source_column();
        let layout = Layout::new(&self.geometry, self.scroll, self.drag.pointer_offset());
        let mut filled = 0usize;
        for column in left..=right {
            if self.cells.header_column(column).is_some() {
                continue;
            }
            let mut element = obtain(
                &mut self.pool,
                &mut self.registry,
                adapter,
                ElementKind::HeaderColumn,
            );
            element.row = 0;
            element.column = column;
            element.is_dragging = dragging_column == Some(column);
            adapter.bind_header_column(&mut element.handle, column);
            self.sink.attach(element.id, &element.handle, ElementKind::HeaderColumn);
            self.sink.place(
                element.id,
                &element.handle,
                layout.header_column(column, element.is_dragging),
            );
            self.registry.set(element.id, Holder::HeaderColumn(column));
            self.cells.put_header_column(column, element);
            filled += 1;
        }
        filled
    }

    /// Returns every element that no longer intersects `rect` (inflated by
    /// `options.recycle_margin`) to the pool. Elements of a dragged column are kept.
    ///
    /// Header-column elements are only tested horizontally and header-row elements only
    /// vertically, since each is pinned on the other axis. Returns the number recycled.
    pub fn recycle(&mut self, rect: ViewRect) -> usize {
        if self.adapter.is_none() {
            return 0;
        }
        let rect = rect.inflate(self.options.recycle_margin);
        let (data, header_columns, header_rows) = {
            let layout = Layout::new(&self.geometry, self.scroll, self.drag.pointer_offset());
            let data: Vec<CellCoord> = self
                .cells
                .iter()
                .filter(|(coord, element)| {
                    !element.is_dragging
                        && !layout
                            .data(coord.row, coord.column, false)
                            .bounds
                            .intersects(&rect)
                })
                .map(|(coord, _)| coord)
                .collect();
            let header_columns: Vec<usize> = self
                .cells
                .header_columns()
                .filter(|(column, element)| {
                    !element.is_dragging
                        && !layout
                            .header_column(*column, false)
                            .bounds
                            .overlaps_horizontally(&rect)
                })
                .map(|(column, _)| column)
                .collect();
            let header_rows: Vec<usize> = self
                .cells
                .header_rows()
                .filter(|(row, _)| {
                    !layout.header_row(*row).bounds.overlaps_vertically(&rect)
                })
                .map(|(row, _)| row)
                .collect();
            (data, header_columns, header_rows)
        };

        let recycled = data.len() + header_columns.len() + header_rows.len();
        for coord in data {
            if let Some(element) = self.cells.remove(coord.row, coord.column) {
                self.release(element);
            }
        }
        for column in header_columns {
            if let Some(element) = self.cells.remove_header_column(column) {
                self.release(element);
            }
        }
        for row in header_rows {
            if let Some(element) = self.cells.remove_header_row(row) {
                self.release(element);
            }
        }
        if recycled > 0 {
            vtrace!(recycled, pooled = self.pool.total_len(), "Grid::recycle");
        }
        recycled
    }

    /// Hands the current placement of every materialized element to the sink.
    pub fn layout(&mut self) {
        if self.adapter.is_none() || !self.options.enabled {
            return;
        }
        let layout = Layout::new(&self.geometry, self.scroll, self.drag.pointer_offset());
        for (coord, element) in self.cells.iter() {
            let placement = layout.data(coord.row, coord.column, element.is_dragging);
            self.sink.place(element.id, &element.handle, placement);
        }
        for (column, element) in self.cells.header_columns() {
            let placement = layout.header_column(column, element.is_dragging);
            self.sink.place(element.id, &element.handle, placement);
        }
        for (row, element) in self.cells.header_rows() {
            self.sink.place(element.id, &element.handle, layout.header_row(row));
        }
    }

    /// Hit test in screen coordinates.
    ///
    /// The header row band (`y < header_column_height`) wins over the header column band,
    /// which wins over the data area.
    pub fn element_at_position(&self, x: i64, y: i64) -> Option<ElementRef> {
        self.adapter.as_ref()?;
        let g = &self.geometry;
        let header_w = i64::from(g.header_row_width());
        let header_h = i64::from(g.header_column_height());
        let scroll_x = px(self.scroll.x);
        let scroll_y = px(self.scroll.y);

        let element = if y < header_h {
            let column = g.column_for_x(x + scroll_x - header_w);
            self.cells.header_column(column)
        } else if x < header_w {
            let row = g.row_for_y(y + scroll_y - header_h);
            self.cells.header_row(row)
        } else {
            let column = g.column_for_x(x + scroll_x - header_w);
            let row = g.row_for_y(y + scroll_y - header_h);
            self.cells.get(row, column)
        };
        element.map(Element::to_ref)
    }
}
