use virtual_grid::{GridOptions, GridState, InvalidConfig, Measurement, Trigger, VirtualGrid};

use crate::{ItemRenderer, Subscription, Throttle};

/// Scroll events closer together than this are coalesced.
pub const DEFAULT_SCROLL_INTERVAL_MS: u64 = 100;

/// A framework-neutral controller that wraps a [`VirtualGrid`] and applies the event timing
/// policy hosts usually want:
///
/// - resize, item-count and option changes recompute immediately
/// - scroll events go through a [`Throttle`]: the first one fires at once, the last one of a
///   burst fires on a later [`Controller::tick`]
///
/// This type does not hold any UI objects or measurements. Adapters pass the current
/// [`Measurement`] with every call and call `tick(m, now_ms)` from a frame/timer callback
/// while [`Controller::scroll_deadline`] is `Some`.
#[derive(Clone, Debug)]
pub struct Controller {
    grid: VirtualGrid,
    scroll: Throttle<()>,
}

impl Controller {
    pub fn new(options: GridOptions, item_count: usize) -> Result<Self, InvalidConfig> {
        Ok(Self::from_grid(VirtualGrid::new(options, item_count)?))
    }

    pub fn from_grid(grid: VirtualGrid) -> Self {
        Self {
            grid,
            scroll: Throttle::new(DEFAULT_SCROLL_INTERVAL_MS),
        }
    }

    pub fn with_scroll_interval_ms(mut self, interval_ms: u64) -> Self {
        self.scroll = Throttle::new(interval_ms);
        self
    }

    pub fn grid(&self) -> &VirtualGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut VirtualGrid {
        &mut self.grid
    }

    pub fn into_grid(self) -> VirtualGrid {
        self.grid
    }

    pub fn state(&self) -> GridState {
        self.grid.state()
    }

    pub fn mount(&mut self, m: Measurement) -> bool {
        self.grid.mount(m)
    }

    /// Call after the host has laid out a new state. See [`VirtualGrid::commit`].
    pub fn commit(&mut self, m: Measurement) -> bool {
        self.grid.commit(m)
    }

    pub fn on_resize(&mut self, m: Measurement) -> bool {
        self.grid.on_resize(m)
    }

    /// Call when the UI reports a scroll. Returns whether the state changed now.
    pub fn on_scroll(&mut self, m: Measurement, now_ms: u64) -> bool {
        if self.scroll.call(now_ms, ()).is_none() {
            return false;
        }
        self.grid.on_scroll(m)
    }

    /// Fires a coalesced trailing scroll once it is due.
    pub fn tick(&mut self, m: Measurement, now_ms: u64) -> bool {
        if self.scroll.poll(now_ms).is_none() {
            return false;
        }
        self.grid.on_scroll(m)
    }

    /// When the next [`Controller::tick`] has work to do.
    pub fn scroll_deadline(&self) -> Option<u64> {
        self.scroll.deadline()
    }

    pub fn set_item_count(&mut self, item_count: usize, m: Measurement) -> bool {
        self.grid.set_item_count(item_count, m)
    }

    pub fn set_options(&mut self, options: GridOptions, m: Measurement) -> Result<bool, InvalidConfig> {
        self.grid.set_options(options, m)
    }

    /// Drains `subscription` and applies everything it received as one update.
    ///
    /// A new item count, a resize and a due scroll (offered to the throttle, or a trailing
    /// one that came due) fold into a single recompute against `m`, so observers are notified
    /// at most once.
    pub fn pump(&mut self, subscription: &Subscription, m: Measurement, now_ms: u64) -> bool {
        let pending = subscription.take();
        let scroll_due = if pending.scroll {
            self.scroll.call(now_ms, ()).is_some()
        } else {
            self.scroll.poll(now_ms).is_some()
        };
        let item_count = pending
            .item_count
            .filter(|&n| n != self.grid.item_count());

        let trigger = if pending.resize {
            Trigger::Resize
        } else if item_count.is_some() {
            Trigger::ItemCount
        } else if scroll_due {
            Trigger::Scroll
        } else {
            return false;
        };
        vtrace!(?trigger, scroll_due, "Controller::pump");
        self.grid.apply(item_count, m, trigger)
    }

    /// Hands every visible item to `renderer`, in index order.
    pub fn render<R: ItemRenderer + ?Sized>(&self, renderer: &mut R) {
        self.grid
            .for_each_visible_item(|item| renderer.render_item(item.index, item.position));
    }
}
