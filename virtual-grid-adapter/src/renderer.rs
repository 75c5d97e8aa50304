use virtual_grid::GridPosition;

/// The host's item renderer.
///
/// The grid only knows indexes; the renderer looks up the item payload by index and places it
/// at `position` (1-based row/column, e.g. CSS `grid-row-start`/`grid-column-start`).
pub trait ItemRenderer {
    fn render_item(&mut self, index: usize, position: GridPosition);
}

impl<F: FnMut(usize, GridPosition)> ItemRenderer for F {
    fn render_item(&mut self, index: usize, position: GridPosition) {
        self(index, position);
    }
}
