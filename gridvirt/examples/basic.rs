use std::collections::BTreeMap;

use gridvirt::{
    ElementId, ElementKind, Grid, GridOptions, Placement, RenderSink, Size, TableAdapter,
};

/// 10k rows x 26 lettered columns; handles are just labels.
struct Sheet {
    columns: Vec<char>,
    created: usize,
}

impl TableAdapter for Sheet {
    type Handle = String;

    fn row_count(&self) -> usize {
        10_000
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_width(&self, column: usize) -> u32 {
        60 + (column as u32 % 3) * 20
    }

    fn row_height(&self, _row: usize) -> u32 {
        24
    }

    fn header_column_height(&self) -> u32 {
        28
    }

    fn header_row_width(&self) -> u32 {
        48
    }

    fn create_element(&mut self, _kind: ElementKind) -> String {
        self.created += 1;
        String::new()
    }

    fn bind_element(&mut self, handle: &mut String, row: usize, column: usize) {
        *handle = format!("{}{}", self.columns[column], row + 1);
    }

    fn bind_header_column(&mut self, handle: &mut String, column: usize) {
        *handle = self.columns[column].to_string();
    }

    fn bind_header_row(&mut self, handle: &mut String, row: usize) {
        *handle = (row + 1).to_string();
    }

    fn swap_columns(&mut self, from: usize, to: usize) {
        self.columns.swap(from, to);
    }
}

/// Keeps what a real renderer would: which labels are on screen, and where.
#[derive(Default)]
struct Screen {
    placed: BTreeMap<ElementId, (String, Placement)>,
}

impl RenderSink<String> for Screen {
    fn attach(&mut self, id: ElementId, handle: &String, _kind: ElementKind) {
        self.placed.insert(id, (handle.clone(), Placement::default()));
    }

    fn detach(&mut self, id: ElementId, _handle: &String) {
        self.placed.remove(&id);
    }

    fn place(&mut self, id: ElementId, handle: &String, placement: Placement) {
        self.placed.insert(id, (handle.clone(), placement));
    }
}

fn main() {
    // Example: drive the grid headlessly, the way a UI adapter would.
    let mut grid = Grid::new(GridOptions::default(), Screen::default());
    grid.set_viewport_size(Size::new(480, 320));
    grid.set_adapter(Some(Sheet {
        columns: ('A'..='Z').collect(),
        created: 0,
    }))
    .expect("sheet geometry is consistent");

    println!(
        "attached: live={} created={}",
        grid.sink().placed.len(),
        grid.adapter().map_or(0, |s| s.created)
    );

    for step in 0..5 {
        let applied = grid.scroll_by(37, 400);
        println!(
            "step={step} applied={applied:?} scroll={:?} live={} pooled={}",
            grid.scroll_state(),
            grid.sink().placed.len(),
            grid.pool().total_len()
        );
    }
    println!(
        "after scrolling: created={}",
        grid.adapter().map_or(0, |s| s.created)
    );

    // Long-press the first visible header and drag it two columns to the right.
    if let Some(hit) = grid.long_press(60, 10) {
        println!("long-press hit {:?} column={}", hit.kind, hit.column);
    }
    let swaps = grid.drag_move(260, 10).expect("geometry stays consistent");
    grid.drag_end();
    println!(
        "swaps={swaps} order={}",
        grid.adapter()
            .map(|s| s.columns.iter().take(6).collect::<String>())
            .unwrap_or_default()
    );

    let top_left = grid
        .sink()
        .placed
        .values()
        .filter(|(_, p)| p.bounds.left >= 48 && p.bounds.top >= 28)
        .min_by_key(|(_, p)| (p.bounds.top, p.bounds.left));
    println!("top-left data cell: {top_left:?}");
}
