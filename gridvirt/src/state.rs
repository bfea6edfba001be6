use crate::Size;

/// The current scroll offset of the grid content.
///
/// Invariant (maintained by [`crate::Grid`]): `0 <= x <= max(0, full_width - viewport_width)`,
/// likewise for `y`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub x: u64,
    pub y: u64,
}

impl ScrollState {
    pub const fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Moves by `(dx, dy)` without leaving `[0, max_x] x [0, max_y]`.
    ///
    /// Returns the delta actually applied on each axis.
    pub fn scroll_by(&mut self, dx: i64, dy: i64, max_x: u64, max_y: u64) -> (i64, i64) {
        let applied_x = consumable_delta(self.x, dx, max_x);
        let applied_y = consumable_delta(self.y, dy, max_y);
        self.x = offset_after(self.x, applied_x);
        self.y = offset_after(self.y, applied_y);
        (applied_x, applied_y)
    }

    pub fn clamp_to(&mut self, max_x: u64, max_y: u64) {
        self.x = self.x.min(max_x);
        self.y = self.y.min(max_y);
    }
}

/// The part of `delta` that can be applied to `offset` while staying in `[0, max]`.
pub fn consumable_delta(offset: u64, delta: i64, max: u64) -> i64 {
    let target = (offset as i128 + delta as i128).clamp(0, max as i128);
    i64::try_from(target - offset as i128).unwrap_or(delta)
}

fn offset_after(offset: u64, applied: i64) -> u64 {
    if applied >= 0 {
        offset.saturating_add(applied.unsigned_abs())
    } else {
        offset.saturating_sub(applied.unsigned_abs())
    }
}

/// A combined snapshot of viewport + scroll state.
///
/// Useful for restoring the grid position across sessions without coupling to a UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: Size,
    pub scroll: ScrollState,
}
