use crate::{GridConfig, LayoutState};

/// Rounds toward negative infinity and saturates into `i64` (`NaN` maps to `0`).
///
/// Works without `std`, where `f64::floor` is unavailable.
pub(crate) fn floor_i64(value: f64) -> i64 {
    let truncated = value as i64;
    if (truncated as f64) > value {
        truncated.saturating_sub(1)
    } else {
        truncated
    }
}

/// Number of columns that fit `container_width`, at least 1.
///
/// An `n`-column grid holds `n - 1` inner gaps, so one extra gap is added to the available
/// width before dividing by `min_item_width + grid_gap`.
pub fn column_count(container_width: f64, config: &GridConfig) -> usize {
    let gap = config.grid_gap();
    let available = container_width + gap - 2.0 * config.padding();
    let columns = floor_i64(available / (config.min_item_width() + gap));
    usize::try_from(columns).unwrap_or(0).max(1)
}

/// Derives the column and row count for `item_count` items laid out in `container_width`.
pub fn compute_layout(container_width: f64, item_count: usize, config: &GridConfig) -> LayoutState {
    let columns = column_count(container_width, config);
    LayoutState {
        columns,
        rows: item_count.div_ceil(columns),
    }
}
