use crate::*;

use gridvirt::{ElementKind, GridOptions, Size, TableAdapter};
use std::vec::Vec;

/// Uniform table: 100 rows of 20 px, columns of 50/60/70/80/90 px, 40x30 headers.
#[derive(Debug)]
struct Table {
    widths: Vec<u32>,
    swaps: Vec<(usize, usize)>,
}

impl Table {
    fn new() -> Self {
        Self {
            widths: std::vec![50, 60, 70, 80, 90],
            swaps: Vec::new(),
        }
    }
}

impl TableAdapter for Table {
    type Handle = ();

    fn row_count(&self) -> usize {
        100
    }

    fn column_count(&self) -> usize {
        self.widths.len()
    }

    fn column_width(&self, column: usize) -> u32 {
        self.widths[column]
    }

    fn row_height(&self, _row: usize) -> u32 {
        20
    }

    fn header_column_height(&self) -> u32 {
        30
    }

    fn header_row_width(&self) -> u32 {
        40
    }

    fn create_element(&mut self, _kind: ElementKind) {}

    fn bind_element(&mut self, _handle: &mut (), _row: usize, _column: usize) {}

    fn bind_header_column(&mut self, _handle: &mut (), _column: usize) {}

    fn bind_header_row(&mut self, _handle: &mut (), _row: usize) {}

    fn swap_columns(&mut self, from: usize, to: usize) {
        self.swaps.push((from, to));
        self.widths.swap(from, to);
    }
}

fn controller() -> Controller<Table, ()> {
    let mut c = Controller::new(GridOptions::default(), PhysicsOptions::default(), ());
    c.viewport_resize(Size::new(200, 130));
    c.set_adapter(Some(Table::new())).unwrap();
    c
}

/// Ticks every frame until the controller settles; returns the number of ticks.
fn run(c: &mut Controller<Table, ()>, mut now_ms: u64) -> usize {
    let mut ticks = 0;
    while c.tick(now_ms).unwrap() {
        now_ms += FRAME_MS;
        ticks += 1;
        assert!(ticks < 10_000, "animation never settled");
    }
    ticks
}

#[test]
fn fling_decelerates_to_a_stop() {
    let mut c = controller();
    // Scaled to 1000 px/s: the offset advances 304 * (1 - 0.95^77) ~= 298 px before stopping.
    c.fling(0.0, 4000.0, 0);
    assert!(c.is_animating());

    let mut last = 0;
    let mut now_ms = 0;
    while c.tick(now_ms).unwrap() {
        let y = c.grid().scroll_state().y;
        assert!(y >= last);
        last = y;
        now_ms += FRAME_MS;
    }
    let y = c.grid().scroll_state().y;
    assert!((290..=300).contains(&y), "y={y}");
    assert_eq!(c.grid().scroll_state().x, 0);
}

#[test]
fn fling_distance_does_not_depend_on_tick_rate() {
    let mut a = SmoothScroll::new(&PhysicsOptions::default());
    let mut b = a;
    a.start(800.0, -700.0, 0);
    b.start(800.0, -700.0, 0);

    let mut total_a = (0i64, 0i64);
    let mut now_ms = 0;
    while let Some((dx, dy)) = a.tick(now_ms) {
        total_a = (total_a.0 + dx, total_a.1 + dy);
        now_ms += FRAME_MS;
    }
    let mut total_b = (0i64, 0i64);
    let mut now_ms = 0;
    while let Some((dx, dy)) = b.tick(now_ms) {
        total_b = (total_b.0 + dx, total_b.1 + dy);
        now_ms += 3 * FRAME_MS + 5;
    }
    assert_eq!(total_a, total_b);
    assert!(total_a.0 > 0 && total_a.1 < 0);
}

#[test]
fn force_finished_freezes_the_offset() {
    let mut c = controller();
    c.fling(0.0, 8000.0, 0);
    c.tick(16).unwrap();
    c.tick(32).unwrap();
    let y = c.grid().scroll_state().y;
    assert!(y > 0);

    c.cancel_animation();
    c.cancel_animation();
    for now_ms in [48, 64, 500, 5_000] {
        assert!(!c.tick(now_ms).unwrap());
    }
    assert_eq!(c.grid().scroll_state().y, y);
}

#[test]
fn fling_stops_at_content_edge() {
    let mut c = controller();
    c.fling(-8000.0, 0.0, 0);
    // Already at x = 0: the first frame hits the edge and ends the fling.
    assert!(!c.tick(16).unwrap());
    assert_eq!(c.grid().scroll_state().x, 0);

    c.fling(1_000_000.0, 0.0, 100);
    run(&mut c, 100);
    assert_eq!(c.grid().scroll_state().x, c.grid().max_scroll().0);
}

#[test]
fn slow_fling_does_not_start() {
    let mut c = controller();
    // 60 px/s scaled by 0.25 is below the 20 px/s threshold.
    c.fling(60.0, -60.0, 0);
    assert!(!c.is_animating());
    assert!(!c.tick(16).unwrap());
}

#[test]
fn ticks_after_detach_are_dropped() {
    let mut c = controller();
    c.fling(0.0, 4000.0, 0);
    assert!(c.detach().is_some());
    assert!(!c.is_animating());
    assert!(!c.tick(16).unwrap());
    assert_eq!(c.grid().scroll_state().y, 0);
    assert!(c.grid().cells().is_empty());

    // Flings are ignored until an adapter is attached again.
    c.fling(0.0, 4000.0, 32);
    assert!(!c.is_animating());
}

#[test]
fn scroll_cancels_fling() {
    let mut c = controller();
    c.fling(0.0, 4000.0, 0);
    c.tick(16).unwrap();
    assert_eq!(c.scroll(0, 10), (0, 10));
    assert!(!c.is_animating());
}

#[test]
fn scroll_and_fling_are_ignored_while_dragging() {
    let mut c = controller();
    assert!(c.long_press(60, 10).is_some());
    assert!(c.grid().drag_phase().is_active());

    assert_eq!(c.scroll(0, 50), (0, 0));
    c.fling(0.0, 4000.0, 0);
    assert!(!c.is_animating());
    assert_eq!(c.grid().scroll_state().y, 0);
}

#[test]
fn tap_returns_element_under_pointer() {
    let mut c = controller();
    let hit = c.tap(100, 100).unwrap();
    assert_eq!(hit.kind, ElementKind::Data);
    assert_eq!((hit.row, hit.column), (3, 1));
    assert!(!c.grid().drag_phase().is_active());
}

#[test]
fn drag_near_right_edge_auto_scrolls() {
    let mut c = controller();
    c.long_press(60, 10).unwrap();

    // 43 px into the 48 px band: 43 * 12 = 516 px/s, first frame counts 16 ms.
    c.drag_move(195, 10).unwrap();
    assert!(c.is_animating());
    assert!(c.tick(16).unwrap());
    assert_eq!(c.grid().scroll_state().x, 8);
    assert_eq!(c.grid().scroll_state().y, 0);

    // Scrolling under a resting pointer keeps reordering the dragged column.
    run(&mut c, 32);
    let grid = c.grid();
    assert!(grid.adapter().unwrap().swaps.len() >= 3);
    assert_eq!(grid.scroll_state().x, grid.max_scroll().0);

    assert!(c.drag_end());
    assert!(!c.is_animating());
    assert!(!c.tick(10_000).unwrap());
}

#[test]
fn leaving_the_edge_band_stops_auto_scroll() {
    let mut c = controller();
    c.long_press(60, 10).unwrap();
    c.drag_move(195, 10).unwrap();
    c.tick(16).unwrap();

    c.drag_move(100, 10).unwrap();
    assert!(!c.is_animating());
    let x = c.grid().scroll_state().x;
    assert!(!c.tick(32).unwrap());
    assert_eq!(c.grid().scroll_state().x, x);
}

#[test]
fn auto_scroll_depth_is_signed_and_capped() {
    let options = PhysicsOptions::default().with_auto_scroll_vertical(true);
    let mut s = DragAutoScroll::new(&options);
    let viewport = Size::new(400, 300);

    s.touch(10, 150, viewport);
    assert_eq!(s.velocity(), (-38.0 * 12.0, 0.0));

    s.touch(1_000, 290, viewport);
    assert_eq!(s.velocity(), (48.0 * 12.0, 38.0 * 12.0));

    s.touch(200, 150, viewport);
    assert!(!s.is_active());
    assert_eq!(s.tick(16), None);
    s.stop();
    s.stop();
    assert!(!s.is_active());
}

#[test]
fn attaching_through_the_grid_makes_the_controller_live() {
    let mut c: Controller<Table, ()> =
        Controller::new(GridOptions::default(), PhysicsOptions::default(), ());
    c.viewport_resize(Size::new(200, 130));
    assert!(!c.is_attached());

    c.grid_mut().set_adapter(Some(Table::new())).unwrap();
    assert!(c.is_attached());
    c.fling(0.0, 4000.0, 0);
    assert!(c.is_animating());
    assert!(c.tick(16).unwrap());
    assert_eq!(c.grid().scroll_state().y, 15);

    // Detaching behind the controller's back ends the animation on the next tick.
    c.grid_mut().set_adapter(None).unwrap();
    assert!(!c.is_attached());
    assert!(!c.tick(32).unwrap());
    assert!(!c.is_animating());
}
