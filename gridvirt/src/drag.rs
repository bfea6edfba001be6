use crate::element::Holder;
use crate::viewport::px;
use crate::{ElementKind, ElementRef, Grid, RenderSink, Result, TableAdapter};

/// State of an active column drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragDescriptor {
    /// The column currently occupied by the dragged column (follows every swap).
    pub source_column: usize,
    /// Content-space x where the long-press happened.
    pub pointer_start: i64,
    /// Screen-space x of the latest drag-move; `0` until the pointer first moves.
    pub pointer_offset: i64,
    /// Content-space x at which the last swap happened.
    pub last_swap_anchor_x: i64,
}

/// Column drag-reorder state machine: `Idle -> Armed -> Dragging -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    /// A long-press landed on a header-column element; no move yet.
    Armed(DragDescriptor),
    Dragging(DragDescriptor),
}

impl DragPhase {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn descriptor(&self) -> Option<&DragDescriptor> {
        match self {
            Self::Idle => None,
            Self::Armed(d) | Self::Dragging(d) => Some(d),
        }
    }

    pub fn source_column(&self) -> Option<usize> {
        self.descriptor().map(|d| d.source_column)
    }

    pub(crate) fn pointer_offset(&self) -> Option<i64> {
        self.descriptor().map(|d| d.pointer_offset)
    }
}

impl<A, R> Grid<A, R>
where
    A: TableAdapter,
    R: RenderSink<A::Handle>,
{
    pub fn drag_phase(&self) -> &DragPhase {
        &self.drag
    }

    /// Resolves a long-press. Over a header-column element this arms a column drag.
    ///
    /// Returns the element under the pointer, whatever its kind. Header rows cannot be
    /// dragged.
    pub fn long_press(&mut self, x: i64, y: i64) -> Option<ElementRef> {
        let hit = self.element_at_position(x, y)?;
        if hit.kind == ElementKind::HeaderColumn && !self.drag.is_active() {
            let start = self.absolute_x(x);
            self.drag = DragPhase::Armed(DragDescriptor {
                source_column: hit.column,
                pointer_start: start,
                pointer_offset: 0,
                last_swap_anchor_x: start,
            });
            self.set_column_dragging(hit.column, true);
            vdebug!(column = hit.column, start, "drag armed");
            self.layout();
        }
        Some(hit)
    }

    /// Follows the drag pointer, swapping the dragged column with its neighbours one step at
    /// a time once the pointer has travelled past the hysteresis threshold into another
    /// column.
    ///
    /// Returns the number of adjacent swaps performed.
    pub fn drag_move(&mut self, x: i64, _y: i64) -> Result<usize> {
        let Some(mut descriptor) = self.drag.descriptor().copied() else {
            return Ok(0);
        };
        if self.adapter.is_none() {
            return Ok(0);
        }

        let absolute = self.absolute_x(x);
        let threshold = i64::from(self.options.swap_hysteresis);
        let mut swaps = 0usize;
        if (absolute - descriptor.last_swap_anchor_x).abs() > threshold {
            let target = self.geometry.column_for_x(absolute);
            let source = descriptor.source_column;
            if target != source {
                if source.abs_diff(target) > 1 {
                    vdebug!(source, target, "multi-column shift");
                }
                if source < target {
                    for i in source..target {
                        self.swap_adjacent_columns(i, i + 1)?;
                        swaps += 1;
                    }
                } else {
                    for i in (target + 1..=source).rev() {
                        self.swap_adjacent_columns(i - 1, i)?;
                        swaps += 1;
                    }
                }
                descriptor.source_column = target;
                descriptor.last_swap_anchor_x = absolute;
            }
        }

        descriptor.pointer_offset = x;
        self.drag = DragPhase::Dragging(descriptor);
        self.layout();
        Ok(swaps)
    }

    /// Ends the drag: clears every dragging flag and lays everything out at rest.
    ///
    /// Returns `false` when no drag was active.
    pub fn drag_end(&mut self) -> bool {
        if !self.drag.is_active() {
            return false;
        }
        vdebug!(column = ?self.drag.source_column(), "drag ended");
        for (_, element) in self.cells.iter_mut() {
            element.is_dragging = false;
        }
        for (_, element) in self.cells.header_columns_mut() {
            element.is_dragging = false;
        }
        self.drag = DragPhase::Idle;
        self.layout();
        true
    }

    /// Swaps two neighbouring columns everywhere: geometry, header elements, data elements
    /// and the adapter's dataset.
    fn swap_adjacent_columns(&mut self, a: usize, b: usize) -> Result<()> {
        vtrace!(from = a, to = b, "swap columns");
        self.geometry.swap_columns(a, b);
        self.geometry.invalidate()?;

        let header_a = self.cells.remove_header_column(a);
        let header_b = self.cells.remove_header_column(b);
        if let Some(mut element) = header_a {
            element.column = b;
            self.registry.set(element.id, Holder::HeaderColumn(b));
            self.cells.put_header_column(b, element);
        }
        if let Some(mut element) = header_b {
            element.column = a;
            self.registry.set(element.id, Holder::HeaderColumn(a));
            self.cells.put_header_column(a, element);
        }

        // Both columns leave the store before either is reinserted.
        let column_a = self.cells.take_column(a);
        let column_b = self.cells.take_column(b);
        for (row, mut element) in column_a {
            element.column = b;
            self.store_cell(row, b, element);
        }
        for (row, mut element) in column_b {
            element.column = a;
            self.store_cell(row, a, element);
        }

        if let Some(adapter) = self.adapter.as_mut() {
            adapter.swap_columns(a, b);
        }
        Ok(())
    }

    fn set_column_dragging(&mut self, column: usize, is_dragging: bool) {
        for row in self.cells.column_rows(column) {
            if let Some(element) = self.cells.get_mut(row, column) {
                element.is_dragging = is_dragging;
            }
        }
        if let Some(element) = self.cells.header_column_mut(column) {
            element.is_dragging = is_dragging;
        }
    }

    /// Screen x → content x of the scrollable data area.
    fn absolute_x(&self, x: i64) -> i64 {
        px(self.scroll.x) + x - i64::from(self.geometry.header_row_width())
    }
}
