/// Tuning for the scroll animations driven by [`crate::Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsOptions {
    /// Multiplier applied to a fling's release velocity before it starts.
    pub fling_scale: f32,

    /// Fraction of fling velocity kept after each 16 ms frame.
    pub friction: f32,

    /// A fling axis stops once its speed drops below this, in px/s.
    pub min_velocity: f32,

    /// Width of the band along the viewport edges in which a drag pointer auto-scrolls.
    pub auto_scroll_margin: u32,

    /// Auto-scroll speed in px/s per pixel of penetration into the edge band.
    pub auto_scroll_speed: f32,

    /// Whether drag auto-scroll also runs along the vertical axis. Column drags happen in the
    /// header band, so this is off by default.
    pub auto_scroll_vertical: bool,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self {
            fling_scale: 0.25,
            friction: 0.95,
            min_velocity: 20.0,
            auto_scroll_margin: 48,
            auto_scroll_speed: 12.0,
            auto_scroll_vertical: false,
        }
    }
}

impl PhysicsOptions {
    pub fn with_fling_scale(mut self, fling_scale: f32) -> Self {
        self.fling_scale = fling_scale;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.clamp(0.0, 1.0);
        self
    }

    pub fn with_min_velocity(mut self, min_velocity: f32) -> Self {
        self.min_velocity = min_velocity.max(0.0);
        self
    }

    pub fn with_auto_scroll(mut self, margin: u32, speed: f32) -> Self {
        self.auto_scroll_margin = margin;
        self.auto_scroll_speed = speed;
        self
    }

    pub fn with_auto_scroll_vertical(mut self, vertical: bool) -> Self {
        self.auto_scroll_vertical = vertical;
        self
    }
}
