use gridvirt::{ElementRef, Grid, GridOptions, RenderSink, Result, Size, TableAdapter};

use crate::{DragAutoScroll, PhysicsOptions, SmoothScroll};

/// A framework-neutral gesture dispatcher that wraps a [`gridvirt::Grid`] and drives its scroll
/// animations.
///
/// The host's gesture recognizer resolves raw input and calls:
/// - `tap` / `long_press` / `drag_move` / `drag_end` / `scroll` / `fling`
/// - `viewport_resize` when the grid's size changes
/// - `tick(now_ms)` each frame while it keeps returning `true`
///
/// The controller is live while the grid has an adapter, however it was attached. After
/// [`Controller::detach`], pending ticks are dropped until an adapter is attached again.
#[derive(Debug)]
pub struct Controller<A: TableAdapter, R> {
    grid: Grid<A, R>,
    options: PhysicsOptions,
    fling: SmoothScroll,
    auto_scroll: DragAutoScroll,
    last_pointer: Option<(i64, i64)>,
}

impl<A, R> Controller<A, R>
where
    A: TableAdapter,
    R: RenderSink<A::Handle>,
{
    pub fn new(options: GridOptions, physics: PhysicsOptions, sink: R) -> Self {
        Self::from_grid(Grid::new(options, sink), physics)
    }

    pub fn from_grid(grid: Grid<A, R>, physics: PhysicsOptions) -> Self {
        Self {
            grid,
            options: physics,
            fling: SmoothScroll::new(&physics),
            auto_scroll: DragAutoScroll::new(&physics),
            last_pointer: None,
        }
    }

    pub fn grid(&self) -> &Grid<A, R> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid<A, R> {
        &mut self.grid
    }

    pub fn into_grid(self) -> Grid<A, R> {
        self.grid
    }

    pub fn physics(&self) -> &PhysicsOptions {
        &self.options
    }

    /// Attaches (or with `None`, detaches) the grid's adapter, returning the previous one.
    ///
    /// Any running animation is cancelled either way.
    pub fn set_adapter(&mut self, adapter: Option<A>) -> Result<Option<A>> {
        self.cancel_animation();
        self.last_pointer = None;
        self.grid.set_adapter(adapter)
    }

    /// Detaches from the host: drops the adapter and every live element, and stops animating.
    pub fn detach(&mut self) -> Option<A> {
        adebug!("Controller::detach");
        self.cancel_animation();
        self.last_pointer = None;
        self.grid.take_adapter()
    }

    /// Whether gestures and ticks reach the grid, i.e. it currently has an adapter.
    pub fn is_attached(&self) -> bool {
        self.grid.adapter().is_some()
    }

    pub fn is_animating(&self) -> bool {
        !self.fling.is_finished() || self.auto_scroll.is_active()
    }

    pub fn cancel_animation(&mut self) {
        self.fling.force_finished();
        self.auto_scroll.stop();
    }

    /// Resolves a tap to the element under the pointer.
    pub fn tap(&mut self, x: i64, y: i64) -> Option<ElementRef> {
        self.fling.force_finished();
        self.grid.element_at_position(x, y)
    }

    /// Resolves a long-press; over a header-column element this arms a column drag.
    pub fn long_press(&mut self, x: i64, y: i64) -> Option<ElementRef> {
        self.fling.force_finished();
        let hit = self.grid.long_press(x, y);
        if self.grid.drag_phase().is_active() {
            self.last_pointer = Some((x, y));
        }
        hit
    }

    /// Moves an active column drag and updates edge auto-scroll. Returns the swap count.
    pub fn drag_move(&mut self, x: i64, y: i64) -> Result<usize> {
        if !self.grid.drag_phase().is_active() {
            return Ok(0);
        }
        self.last_pointer = Some((x, y));
        self.auto_scroll.touch(x, y, self.grid.viewport());
        self.grid.drag_move(x, y)
    }

    /// Ends an active drag and stops edge auto-scroll.
    pub fn drag_end(&mut self) -> bool {
        self.auto_scroll.stop();
        self.last_pointer = None;
        self.grid.drag_end()
    }

    /// Applies a scroll gesture. Ignored while a column drag is active; cancels a running
    /// fling. Returns the applied delta.
    pub fn scroll(&mut self, dx: i64, dy: i64) -> (i64, i64) {
        if self.grid.drag_phase().is_active() {
            return (0, 0);
        }
        self.fling.force_finished();
        self.grid.scroll_by(dx, dy)
    }

    /// Starts a fling with the release velocity (px/s) reported by the gesture recognizer.
    ///
    /// Positive velocities move the content offset forward (toward the end of the table).
    pub fn fling(&mut self, vx: f32, vy: f32, now_ms: u64) {
        if !self.is_attached() || self.grid.drag_phase().is_active() {
            return;
        }
        let scale = self.options.fling_scale;
        self.fling.start(vx * scale, vy * scale, now_ms);
        adebug!(vx, vy, running = !self.fling.is_finished(), "Controller::fling");
    }

    pub fn viewport_resize(&mut self, viewport: Size) {
        self.grid.set_viewport_size(viewport);
    }

    /// Advances every running animation to `now_ms`.
    ///
    /// Returns whether another tick is wanted. After `detach` this does nothing and returns
    /// `false`.
    pub fn tick(&mut self, now_ms: u64) -> Result<bool> {
        if !self.is_attached() {
            self.cancel_animation();
            return Ok(false);
        }

        if let Some((dx, dy)) = self.fling.tick(now_ms) {
            let (ax, ay) = self.grid.scroll_by(dx, dy);
            // A shortfall means the content edge was reached on that axis.
            if ax != dx {
                self.fling.stop_x();
            }
            if ay != dy {
                self.fling.stop_y();
            }
        }

        if let Some((dx, dy)) = self.auto_scroll.tick(now_ms) {
            let applied = self.grid.scroll_by(dx, dy);
            if applied == (0, 0) && (dx, dy) != (0, 0) {
                // Pinned against the content edge; a later touch restarts it.
                self.auto_scroll.stop();
            } else if applied != (0, 0) {
                atrace!(dx = applied.0, dy = applied.1, "Controller: auto-scroll");
                if let Some((x, y)) = self.last_pointer {
                    self.grid.drag_move(x, y)?;
                }
            }
        }

        Ok(self.is_animating())
    }
}
