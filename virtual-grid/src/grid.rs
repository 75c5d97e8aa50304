use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::gate::is_changed;
use crate::layout::compute_layout;
use crate::window::compute_window;
use crate::{
    GridConfig, GridItem, GridOptions, GridPosition, GridState, InvalidConfig, LayoutState,
    Measurement, RenderPhase, Trigger, WindowState,
};

/// A headless windowing engine for uniformly-sized, multi-column grids.
///
/// The grid cannot know its row height before something has been laid out, so it walks
/// through three phases:
///
/// 1. [`RenderPhase::Initial`]: [`VirtualGrid::mount`] computes the layout and publishes a
///    single row.
/// 2. [`RenderPhase::SingleRowProbe`]: after the host has laid that row out, it calls
///    [`VirtualGrid::commit`] with a fresh [`Measurement`]. The full window is computed.
/// 3. [`RenderPhase::Continuous`]: resize, scroll, item-count and option changes each
///    recompute immediately.
///
/// Every recompute goes through the change gate ([`crate::is_changed`]). The state is only
/// replaced, and `on_change` only fired, when the result is observably different.
///
/// The grid never holds measurements. Hosts pass the current geometry with every call.
#[derive(Clone, Debug)]
pub struct VirtualGrid {
    options: GridOptions,
    config: GridConfig,
    item_count: usize,
    phase: RenderPhase,
    state: GridState,
    // Row count of the state the host last laid out (as of `mount`/`commit`). Measurements
    // taken between commits describe content of this many rows.
    laid_out_rows: usize,
    // Set when a published state changed the row count; cleared only by `commit`.
    remeasure: bool,
    last_trigger: Option<Trigger>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl VirtualGrid {
    /// Validates `options` and creates a grid in [`RenderPhase::Initial`].
    pub fn new(options: GridOptions, item_count: usize) -> Result<Self, InvalidConfig> {
        let config = options.validate()?;
        vdebug!(
            item_count,
            min_item_width = config.min_item_width(),
            min_item_height = config.min_item_height(),
            preload = config.preload(),
            "VirtualGrid::new"
        );
        Ok(Self {
            options,
            config,
            item_count,
            phase: RenderPhase::Initial,
            state: GridState::default(),
            laid_out_rows: 0,
            remeasure: false,
            last_trigger: None,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub fn state(&self) -> GridState {
        self.state
    }

    pub fn layout(&self) -> LayoutState {
        self.state.layout
    }

    pub fn window(&self) -> WindowState {
        self.state.window
    }

    /// The trigger that produced the current state, if any.
    pub fn last_trigger(&self) -> Option<Trigger> {
        self.last_trigger
    }

    /// Whether the next [`VirtualGrid::commit`] will recompute.
    pub fn needs_commit(&self) -> bool {
        match self.phase {
            RenderPhase::Initial => false,
            RenderPhase::SingleRowProbe => true,
            RenderPhase::Continuous => self.remeasure,
        }
    }

    /// First activation: lays out a single row so the host has something to measure.
    ///
    /// The published window is the first `min(columns, item_count)` items, whatever the
    /// preload. Returns `false` (and does nothing) outside [`RenderPhase::Initial`].
    ///
    /// The host must call [`VirtualGrid::commit`] once the result is laid out, even if this
    /// returned `false`.
    pub fn mount(&mut self, m: Measurement) -> bool {
        if self.phase != RenderPhase::Initial {
            vdebug!(phase = ?self.phase, "VirtualGrid::mount ignored");
            return false;
        }
        let layout = compute_layout(m.container_width, self.item_count, &self.config);
        let window = WindowState::new(0, layout.columns.min(self.item_count));
        self.set_phase(RenderPhase::SingleRowProbe);
        self.publish(GridState::new(layout, window), Trigger::Mount)
    }

    /// Signals that the host has laid out the current state and `m` reflects it.
    ///
    /// - In [`RenderPhase::SingleRowProbe`], runs the first full computation and moves to
    ///   [`RenderPhase::Continuous`].
    /// - In [`RenderPhase::Continuous`], recomputes only if a state published since the last
    ///   commit changed the row count (so the row height so far was derived from content laid
    ///   out at another row count).
    /// - In [`RenderPhase::Initial`], does nothing.
    pub fn commit(&mut self, m: Measurement) -> bool {
        let trigger = match self.phase {
            RenderPhase::Initial => {
                vwarn!("VirtualGrid::commit called before mount");
                return false;
            }
            RenderPhase::SingleRowProbe => {
                self.set_phase(RenderPhase::Continuous);
                Trigger::Probe
            }
            RenderPhase::Continuous if self.remeasure => Trigger::Remeasure,
            RenderPhase::Continuous => return false,
        };
        self.laid_out_rows = self.state.layout.rows;
        self.remeasure = false;
        self.recompute(m, trigger)
    }

    /// The viewport or container changed size.
    pub fn on_resize(&mut self, m: Measurement) -> bool {
        self.recompute_if_continuous(m, Trigger::Resize)
    }

    /// The scroll container scrolled. Rate limiting is left to the caller.
    pub fn on_scroll(&mut self, m: Measurement) -> bool {
        self.recompute_if_continuous(m, Trigger::Scroll)
    }

    /// Replaces the item count.
    ///
    /// Before [`RenderPhase::Continuous`] the count is stored and picked up by the next phase.
    pub fn set_item_count(&mut self, item_count: usize, m: Measurement) -> bool {
        if self.item_count == item_count {
            return false;
        }
        self.apply(Some(item_count), m, Trigger::ItemCount)
    }

    /// Stores `item_count` (if any) and recomputes once for `trigger`.
    ///
    /// Lets hosts fold simultaneous item-count, resize and scroll events into a single
    /// recompute against one measurement. Before [`RenderPhase::Continuous`] only the item
    /// count is stored.
    pub fn apply(&mut self, item_count: Option<usize>, m: Measurement, trigger: Trigger) -> bool {
        if let Some(item_count) = item_count {
            vtrace!(item_count, ?trigger, "VirtualGrid::apply");
            self.item_count = item_count;
        }
        self.recompute_if_continuous(m, trigger)
    }

    /// Validates and installs new options.
    ///
    /// On error the current options stay in place. Before [`RenderPhase::Continuous`] the
    /// options are stored and picked up by the next phase. Options that leave the geometry
    /// alone (such as a new `on_change`) are installed without a recompute.
    pub fn set_options(&mut self, options: GridOptions, m: Measurement) -> Result<bool, InvalidConfig> {
        let config = options.validate()?;
        let geometry_changed = !config.same_geometry(&self.config);
        vdebug!(geometry_changed, "VirtualGrid::set_options");
        self.options = options;
        self.config = config;
        if !geometry_changed {
            return Ok(false);
        }
        Ok(self.recompute_if_continuous(m, Trigger::Options))
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut GridOptions),
        m: Measurement,
    ) -> Result<bool, InvalidConfig> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, m)
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&GridState) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    /// Batches several triggers into a single `on_change` notification.
    ///
    /// Each trigger still recomputes against the measurement it was given; only the last
    /// resulting state is observed by the callback.
    pub fn batch_update<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        let out = f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
        out
    }

    /// Grid position of `index`, or `None` if it is out of bounds.
    pub fn position_of(&self, index: usize) -> Option<GridPosition> {
        if index >= self.item_count {
            return None;
        }
        Some(GridPosition::for_index(index, self.state.layout.columns))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_end().saturating_sub(self.state.window.start_index)
    }

    /// Calls `f` for each visible item, in index order.
    pub fn for_each_visible_item(&self, mut f: impl FnMut(GridItem)) {
        let columns = self.state.layout.columns;
        for index in self.state.window.start_index..self.visible_end() {
            f(GridItem {
                index,
                position: GridPosition::for_index(index, columns),
            });
        }
    }

    /// Collects the visible items into `out`.
    ///
    /// This clears `out` first.
    pub fn collect_visible_items(&self, out: &mut Vec<GridItem>) {
        out.clear();
        self.for_each_visible_item(|item| out.push(item));
    }

    // The item count may shrink before the next recompute (outside `Continuous`).
    fn visible_end(&self) -> usize {
        self.state.window.end_index.min(self.item_count)
    }

    fn set_phase(&mut self, phase: RenderPhase) {
        vdebug!(from = ?self.phase, to = ?phase, "VirtualGrid phase");
        self.phase = phase;
    }

    fn recompute_if_continuous(&mut self, m: Measurement, trigger: Trigger) -> bool {
        if self.phase != RenderPhase::Continuous {
            vtrace!(?trigger, phase = ?self.phase, "VirtualGrid: deferred until continuous");
            return false;
        }
        self.recompute(m, trigger)
    }

    fn recompute(&mut self, m: Measurement, trigger: Trigger) -> bool {
        let layout = compute_layout(m.container_width, self.item_count, &self.config);
        let window = compute_window(&m, self.laid_out_rows, layout, self.item_count, &self.config);
        self.publish(GridState::new(layout, window), trigger)
    }

    fn publish(&mut self, next: GridState, trigger: Trigger) -> bool {
        let prev = self.state;
        if !is_changed(&prev, &next) {
            vtrace!(?trigger, "VirtualGrid: unchanged");
            return false;
        }
        vtrace!(
            ?trigger,
            columns = next.layout.columns,
            rows = next.layout.rows,
            start = next.window.start_index,
            end = next.window.end_index,
            "VirtualGrid: publish"
        );
        self.remeasure |= next.layout.rows != prev.layout.rows;
        self.last_trigger = Some(trigger);
        self.state = next;
        self.notify();
        true
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(&self.state);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}
