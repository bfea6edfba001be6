use crate::Axis;

/// Errors raised by geometry configuration.
///
/// Everything else in the engine (out-of-range pixels, empty pools, missing adapter) is
/// handled by clamping or by doing nothing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A size sequence does not match the declared row/column count.
    #[error("{axis} sizes hold {actual} entries but {expected} {axis}s are declared")]
    GeometryMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// An index-addressed size update targeted a row/column that does not exist.
    #[error("{axis} index {index} is out of range (count {count})")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        count: usize,
    },
}

pub type Result<T> = core::result::Result<T, GridError>;
