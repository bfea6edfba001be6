use core::fmt;
use core::ops::RangeInclusive;

/// The three kinds of materialized elements. Each kind has its own recycling pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// A scrollable data cell.
    Data,
    /// A cell of the pinned header row at the top, keyed by column.
    HeaderColumn,
    /// A cell of the pinned header column on the left, keyed by row.
    HeaderRow,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [Self::Data, Self::HeaderColumn, Self::HeaderRow];

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::Data => 0,
            Self::HeaderColumn => 1,
            Self::HeaderRow => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    pub row: usize,
    pub column: usize,
}

impl CellCoord {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A rectangle in screen space (relative to the grid's top-left corner).
///
/// Edges are inclusive for intersection tests: an element whose left edge sits exactly on
/// `right` still counts as visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl ViewRect {
    pub const fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, i64::from(size.width), i64::from(size.height))
    }

    /// Grows the rectangle by `margin` on every side.
    pub fn inflate(&self, margin: u32) -> Self {
        let m = i64::from(margin);
        Self::new(
            self.left - m,
            self.top - m,
            self.right + m,
            self.bottom + m,
        )
    }

    pub fn width(&self) -> i64 {
        self.right - self.left
    }

    pub fn height(&self) -> i64 {
        self.bottom - self.top
    }
}

/// Screen-space bounds of a placed element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: i64,
    pub top: i64,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn right(&self) -> i64 {
        self.left + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        self.top + i64::from(self.height)
    }

    pub fn overlaps_horizontally(&self, rect: &ViewRect) -> bool {
        !(self.right() < rect.left || self.left > rect.right)
    }

    pub fn overlaps_vertically(&self, rect: &ViewRect) -> bool {
        !(self.bottom() < rect.top || self.top > rect.bottom)
    }

    pub fn intersects(&self, rect: &ViewRect) -> bool {
        self.overlaps_horizontally(rect) && self.overlaps_vertically(rect)
    }
}

/// A positioning instruction handed to the render sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub bounds: Bounds,
    /// Draw above every non-elevated element (set while the element's column is dragged).
    pub elevated: bool,
}

/// Inclusive row/column index bounds of the cells intersecting a viewport rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub top_row: usize,
    pub bottom_row: usize,
    pub left_column: usize,
    pub right_column: usize,
}

impl VisibleRange {
    pub fn rows(&self) -> RangeInclusive<usize> {
        self.top_row..=self.bottom_row
    }

    pub fn columns(&self) -> RangeInclusive<usize> {
        self.left_column..=self.right_column
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        self.rows().contains(&coord.row) && self.columns().contains(&coord.column)
    }

    pub fn cell_count(&self) -> usize {
        self.rows().count().saturating_mul(self.columns().count())
    }
}
