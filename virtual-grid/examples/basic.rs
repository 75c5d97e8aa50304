// Example: two-pass mount, then scrolling a 10k-item gallery.
use virtual_grid::{GridOptions, Measurement, VirtualGrid};

fn main() {
    let options = GridOptions::new(180.0, 120.0)
        .with_grid_gap(8.0)
        .with_padding(16.0)
        .with_preload(1);
    let mut grid = VirtualGrid::new(options, 10_000).expect("valid options");

    // The host reports its geometry; here rows are laid out at exactly 120px.
    let content_height =
        |rows: usize| rows as f64 * (120.0 + 8.0) - 8.0 + 2.0 * 16.0;
    let mut m = Measurement::new(1024.0, 0.0, 720.0, 0.0);

    grid.mount(m);
    println!("mount: {:?}", grid.state());

    m.content_height = content_height(grid.layout().rows);
    grid.commit(m);
    println!("probe: {:?}", grid.state());

    for scroll in [500.0, 5_000.0, 200_000.0] {
        if grid.on_scroll(m.with_scroll_offset(scroll)) {
            println!("scroll={scroll}: visible={:?}", grid.state().visible());
        }
    }

    grid.for_each_visible_item(|item| {
        if item.index % 50 == 0 {
            println!("render #{} at {:?}", item.index, item.position);
        }
    });
}
