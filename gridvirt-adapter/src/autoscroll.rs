use gridvirt::Size;

use crate::PhysicsOptions;
use crate::fling::{FRAME_MS, take_whole};

/// Scrolls while a drag pointer rests near a viewport edge.
///
/// The speed grows with how deep the pointer sits inside the edge band, and is re-evaluated on
/// every [`DragAutoScroll::touch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAutoScroll {
    margin: u32,
    speed: f32,
    vertical: bool,

    velocity: (f32, f32),
    carry: (f32, f32),
    last_ms: Option<u64>,
}

impl DragAutoScroll {
    pub fn new(options: &PhysicsOptions) -> Self {
        Self {
            margin: options.auto_scroll_margin,
            speed: options.auto_scroll_speed,
            vertical: options.auto_scroll_vertical,
            velocity: (0.0, 0.0),
            carry: (0.0, 0.0),
            last_ms: None,
        }
    }

    /// Feeds the pointer position (screen coordinates) and the viewport it moves in.
    ///
    /// Outside the edge bands the auto-scroll stops.
    pub fn touch(&mut self, x: i64, y: i64, viewport: Size) {
        let vx = self.edge_depth(x, viewport.width) as f32 * self.speed;
        let vy = if self.vertical {
            self.edge_depth(y, viewport.height) as f32 * self.speed
        } else {
            0.0
        };
        if (vx, vy) == (0.0, 0.0) {
            self.stop();
            return;
        }
        if !self.is_active() {
            atrace!(x, y, "DragAutoScroll: entered edge band");
        }
        self.velocity = (vx, vy);
    }

    /// Advances to `now_ms`. Returns `None` while inactive.
    ///
    /// The first tick after activation counts as one 16 ms frame.
    pub fn tick(&mut self, now_ms: u64) -> Option<(i64, i64)> {
        if !self.is_active() {
            return None;
        }
        let elapsed = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => FRAME_MS,
        };
        self.last_ms = Some(now_ms);

        let dt = elapsed as f32 / 1000.0;
        self.carry.0 += self.velocity.0 * dt;
        self.carry.1 += self.velocity.1 * dt;
        Some((take_whole(&mut self.carry.0), take_whole(&mut self.carry.1)))
    }

    /// Stops scrolling. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.velocity = (0.0, 0.0);
        self.carry = (0.0, 0.0);
        self.last_ms = None;
    }

    pub fn is_active(&self) -> bool {
        self.velocity != (0.0, 0.0)
    }

    pub fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    /// Signed penetration into the band at either end of `[0, extent]`, capped at the margin.
    /// Negative near the start edge.
    fn edge_depth(&self, pos: i64, extent: u32) -> i64 {
        let margin = i64::from(self.margin);
        let extent = i64::from(extent);
        if margin == 0 || extent <= 2 * margin {
            return 0;
        }
        if pos < margin {
            -(margin - pos).min(margin)
        } else if pos > extent - margin {
            (pos - (extent - margin)).min(margin)
        } else {
            0
        }
    }
}
