use gridvirt::{ElementKind, GridOptions, Size, TableAdapter};
use gridvirt_adapter::{Controller, PhysicsOptions};

struct Numbers {
    rows: usize,
    columns: usize,
}

impl TableAdapter for Numbers {
    type Handle = (usize, usize);

    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn column_width(&self, _column: usize) -> u32 {
        90
    }

    fn row_height(&self, _row: usize) -> u32 {
        22
    }

    fn header_column_height(&self) -> u32 {
        24
    }

    fn header_row_width(&self) -> u32 {
        56
    }

    fn create_element(&mut self, _kind: ElementKind) -> (usize, usize) {
        (0, 0)
    }

    fn bind_element(&mut self, handle: &mut (usize, usize), row: usize, column: usize) {
        *handle = (row, column);
    }

    fn bind_header_column(&mut self, handle: &mut (usize, usize), column: usize) {
        *handle = (0, column);
    }

    fn bind_header_row(&mut self, handle: &mut (usize, usize), row: usize) {
        *handle = (row, 0);
    }

    fn swap_columns(&mut self, _from: usize, _to: usize) {}
}

fn main() {
    // Example: a frame loop driving a fling, then a column drag that auto-scrolls at the edge.
    //
    // An adapter would:
    // - forward resolved gestures (fling, long-press, drag) to the controller
    // - call tick(now_ms) on every frame while it returns true
    // - render from the positions the grid hands to its sink
    let mut c = Controller::new(GridOptions::default(), PhysicsOptions::default(), ());
    c.viewport_resize(Size::new(640, 480));
    c.set_adapter(Some(Numbers {
        rows: 50_000,
        columns: 40,
    }))
    .expect("uniform geometry");

    c.fling(1_200.0, 9_000.0, 0);
    let mut now_ms = 0u64;
    while c.tick(now_ms).expect("no geometry changes mid-fling") {
        if now_ms % 160 == 0 {
            println!("t={now_ms} scroll={:?}", c.grid().scroll_state());
        }
        now_ms += 16;
    }
    println!("fling done: t={now_ms} scroll={:?}", c.grid().scroll_state());

    if let Some(hit) = c.long_press(100, 10) {
        println!("dragging column {}", hit.column);
    }
    c.drag_move(630, 10).expect("drag move");
    for _ in 0..30 {
        now_ms += 16;
        if !c.tick(now_ms).expect("auto-scroll") {
            break;
        }
    }
    println!(
        "auto-scrolled to {:?}, dragged column now at {:?}",
        c.grid().scroll_state(),
        c.grid().drag_phase().source_column()
    );
    c.drag_end();
}
