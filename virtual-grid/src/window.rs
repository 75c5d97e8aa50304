use crate::layout::floor_i64;
use crate::{GridConfig, LayoutState, Measurement, WindowState};

/// Vertical span of one row including its trailing gap.
///
/// `content_height` must have been measured on a grid laid out with `measured_rows` rows.
/// When that is impossible to convert (no rows measured, or a non-positive height), the
/// smallest possible row span, `min_item_height + grid_gap`, is used instead.
pub fn row_height_with_gap(content_height: f64, measured_rows: usize, config: &GridConfig) -> f64 {
    let fallback = config.min_item_height() + config.grid_gap();
    if measured_rows == 0 {
        return fallback;
    }
    let height =
        (content_height + config.grid_gap() - 2.0 * config.padding()) / measured_rows as f64;
    if height.is_finite() && height > 0.0 {
        height
    } else {
        fallback
    }
}

/// Derives the row-aligned range of items that intersect the viewport, widened by `preload`
/// rows on each side.
///
/// `measured_rows` is the row count the grid had when `m.content_height` was measured. This is
/// the previous layout's row count, which differs from `layout.rows` right after a column
/// change.
pub fn compute_window(
    m: &Measurement,
    measured_rows: usize,
    layout: LayoutState,
    item_count: usize,
    config: &GridConfig,
) -> WindowState {
    if item_count == 0 || layout.rows == 0 {
        return WindowState::empty();
    }

    let columns = layout.columns.max(1);
    let preload = i64::try_from(config.preload()).unwrap_or(i64::MAX);
    let row_height = row_height_with_gap(m.content_height, measured_rows, config);
    let gap = config.grid_gap();
    let padding = config.padding();

    // A row stays visible until its lower edge (plus gap) scrolls past the top.
    let mut first_row = floor_i64((m.scroll_offset + gap - padding) / row_height)
        .saturating_sub(preload)
        .max(0);
    // A row becomes visible once its upper edge enters; the last pixel row of the viewport is
    // inclusive.
    let last_row =
        floor_i64((m.scroll_offset + m.viewport_height - padding - 1.0) / row_height)
            .saturating_add(preload);

    // Keep a full row above a lone (possibly partial) row so it is never stretched.
    if first_row == last_row && first_row > 0 {
        first_row -= 1;
    }

    let start = row_start_index(first_row, columns).min(item_count);
    let end = row_start_index(last_row.saturating_add(1), columns)
        .min(item_count)
        .max(start);

    WindowState::new(start, end)
}

fn row_start_index(row: i64, columns: usize) -> usize {
    usize::try_from(row).unwrap_or(0).saturating_mul(columns)
}
