// Example: a simulated host loop driving a grid through subscriptions and a scroll throttle.
use virtual_grid::{GridOptions, GridPosition, Measurement};
use virtual_grid_adapter::{Controller, EventHub, GridEvent};

struct Host {
    width: f64,
    scroll: f64,
    viewport: f64,
    rows: usize,
}

impl Host {
    fn measure(&self) -> Measurement {
        // Rows are laid out at their minimum height of 200px with a 10px gap.
        let content = (self.rows as f64 * 210.0 - 10.0).max(0.0);
        Measurement::new(self.width, self.scroll, self.viewport, content)
    }
}

fn main() {
    let options = GridOptions::new(200.0, 200.0).with_grid_gap(10.0);
    let mut c = Controller::new(options, 1_000)
        .expect("valid options")
        .with_scroll_interval_ms(50);

    let mut host = Host {
        width: 900.0,
        scroll: 0.0,
        viewport: 600.0,
        rows: 0,
    };

    c.mount(host.measure());
    host.rows = c.state().rows();
    c.commit(host.measure());
    println!("after probe: {:?}", c.state());

    let hub = EventHub::new();
    let sub = hub.subscribe();

    for now_ms in (0..400).step_by(16) {
        host.scroll += 120.0;
        hub.emit(GridEvent::Scroll);
        if now_ms == 160 {
            host.width = 430.0;
            hub.emit(GridEvent::Resize);
        }

        if c.pump(&sub, host.measure(), now_ms) {
            host.rows = c.state().rows();
            c.commit(host.measure());
            println!("t={now_ms}ms visible={:?}", c.state().visible());
        }
    }

    c.render(&mut |index: usize, position: GridPosition| {
        if index % 4 == 0 {
            println!("item {index} -> row {}, column {}", position.row, position.column);
        }
    });

    drop(sub);
    assert_eq!(hub.listener_count(), 0);
}
