use crate::PhysicsOptions;

/// Friction is applied once per frame of this length.
pub const FRAME_MS: u64 = 16;

/// A 2D fling animation with exponential friction.
///
/// `tick(now_ms)` advances in whole 16 ms frames and yields the integer pixel displacement
/// travelled since the previous tick. Fractional pixels carry over to the next tick, so the
/// total distance does not depend on the tick rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    friction: f32,
    min_velocity: f32,

    velocity: (f32, f32),
    carry: (f32, f32),
    last_ms: u64,
    pending_ms: u64,
    finished: bool,
}

impl SmoothScroll {
    /// Creates an idle animation.
    pub fn new(options: &PhysicsOptions) -> Self {
        Self {
            friction: options.friction,
            min_velocity: options.min_velocity,
            velocity: (0.0, 0.0),
            carry: (0.0, 0.0),
            last_ms: 0,
            pending_ms: 0,
            finished: true,
        }
    }

    /// Starts (or restarts) a fling with velocities in px/s.
    ///
    /// Axes already slower than `min_velocity` are dropped; if both are, nothing starts.
    pub fn start(&mut self, vx: f32, vy: f32, now_ms: u64) {
        self.velocity = (self.cut(vx), self.cut(vy));
        self.carry = (0.0, 0.0);
        self.last_ms = now_ms;
        self.pending_ms = 0;
        self.finished = self.velocity == (0.0, 0.0);
        atrace!(vx, vy, finished = self.finished, "SmoothScroll::start");
    }

    /// Advances to `now_ms`. Returns `None` once the fling is finished.
    pub fn tick(&mut self, now_ms: u64) -> Option<(i64, i64)> {
        if self.finished {
            return None;
        }
        self.pending_ms += now_ms.saturating_sub(self.last_ms);
        self.last_ms = now_ms;

        let dt = FRAME_MS as f32 / 1000.0;
        while self.pending_ms >= FRAME_MS && !self.finished {
            self.pending_ms -= FRAME_MS;
            self.velocity.0 *= self.friction;
            self.velocity.1 *= self.friction;
            self.carry.0 += self.velocity.0 * dt;
            self.carry.1 += self.velocity.1 * dt;
            self.velocity = (self.cut(self.velocity.0), self.cut(self.velocity.1));
            self.finished = self.velocity == (0.0, 0.0);
        }

        Some((take_whole(&mut self.carry.0), take_whole(&mut self.carry.1)))
    }

    /// Stops horizontal motion (e.g. the content edge was reached).
    pub fn stop_x(&mut self) {
        self.velocity.0 = 0.0;
        self.carry.0 = 0.0;
        self.finished = self.velocity == (0.0, 0.0);
    }

    /// Stops vertical motion.
    pub fn stop_y(&mut self) {
        self.velocity.1 = 0.0;
        self.carry.1 = 0.0;
        self.finished = self.velocity == (0.0, 0.0);
    }

    /// Ends the fling immediately. Later ticks yield nothing.
    pub fn force_finished(&mut self) {
        self.velocity = (0.0, 0.0);
        self.carry = (0.0, 0.0);
        self.pending_ms = 0;
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current velocity in px/s.
    pub fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    fn cut(&self, v: f32) -> f32 {
        if v < self.min_velocity && -v < self.min_velocity {
            0.0
        } else {
            v
        }
    }
}

/// Removes and returns the whole-pixel part of `acc`, truncating toward zero.
pub(crate) fn take_whole(acc: &mut f32) -> i64 {
    let whole = *acc as i64;
    *acc -= whole as f32;
    whole
}
