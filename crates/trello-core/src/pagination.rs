//! Scroll-window helpers.
//!
//! Pure functions that decide which slice of a list is on screen. The window
//! only moves as far as it has to for the selection to stay visible; it never
//! recenters.

/// Compute the first visible index of a window of `per_page` items.
///
/// `current` is the previously committed first index. The result keeps
/// `selected` inside `[first, first + per_page - 1]` while moving the window
/// as little as possible. When `selected` is out of bounds (stale data after
/// a refresh) the stored value is returned unchanged.
pub fn first_visible(selected: usize, per_page: usize, total: usize, current: usize) -> usize {
    if total == 0 {
        return 0;
    }
    if selected >= total {
        return current;
    }
    let per_page = per_page.max(1);
    let min = (selected + 1).saturating_sub(per_page);
    let max = if selected + per_page - 1 < total {
        selected
    } else {
        total.saturating_sub(per_page)
    };
    current.clamp(min, max)
}

/// Information about the visible portion of a windowed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Indices of items visible in the current viewport.
    pub visible_indices: Vec<usize>,
    /// Number of items that fit in one page.
    pub items_per_page: usize,
    /// Whether there are items above the viewport.
    pub show_above_indicator: bool,
    /// Count of items above the viewport.
    pub items_above: usize,
    /// Whether there are items below the viewport.
    pub show_below_indicator: bool,
    /// Count of items below the viewport.
    pub items_below: usize,
}

impl PageInfo {
    /// Create an empty page info (no items).
    pub fn empty() -> Self {
        Self {
            visible_indices: vec![],
            items_per_page: 0,
            show_above_indicator: false,
            items_above: 0,
            show_below_indicator: false,
            items_below: 0,
        }
    }

    /// Describe the window starting at `first` over `total` items.
    pub fn new(first: usize, per_page: usize, total: usize) -> Self {
        if total == 0 || per_page == 0 {
            return Self::empty();
        }
        let first = first.min(total - 1);
        let end = (first + per_page).min(total);

        PageInfo {
            visible_indices: (first..end).collect(),
            items_per_page: per_page,
            show_above_indicator: first > 0,
            items_above: first,
            show_below_indicator: end < total,
            items_below: total - end,
        }
    }
}
