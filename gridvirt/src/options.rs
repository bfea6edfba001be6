/// Column drag hysteresis used when no other value is configured, in pixels.
pub const DEFAULT_SWAP_HYSTERESIS: u32 = 25;

/// Configuration for [`crate::Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridOptions {
    /// Enables/disables the grid. When disabled, fill and layout do nothing.
    pub enabled: bool,

    /// Horizontal distance the pointer must travel away from the last swap position before a
    /// dragged column is allowed to move again. Prevents columns from bouncing back and forth
    /// around a boundary.
    pub swap_hysteresis: u32,

    /// Extra pixels around the viewport inside which elements are kept alive by `recycle`.
    pub recycle_margin: u32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            swap_hysteresis: DEFAULT_SWAP_HYSTERESIS,
            recycle_margin: 0,
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_swap_hysteresis(mut self, swap_hysteresis: u32) -> Self {
        self.swap_hysteresis = swap_hysteresis;
        self
    }

    pub fn with_recycle_margin(mut self, recycle_margin: u32) -> Self {
        self.recycle_margin = recycle_margin;
        self
    }
}
