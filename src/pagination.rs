use std::ops::Range;

use serde::Serialize;

/// Page size used when a list page does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 25;
/// Choices offered by the per-page selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];
/// Up to this many pages are listed without ellipsis gaps.
const MAX_COMPACT_PAGES: usize = 7;

/// Number of pages needed for `total` items.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Clamps a 1-based page into `[1, total_pages]`; an empty result keeps page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of the items shown on `page`, bounded by `total`.
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}

/// 1-based positions of the first and last item on `page`, `(0, 0)` when empty.
pub fn item_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    let bounds = page_bounds(page, page_size, total);
    if bounds.is_empty() {
        (0, 0)
    } else {
        (bounds.start + 1, bounds.end)
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page buttons for the pagination bar. `None` marks an ellipsis.
///
/// Short lists show every page; longer ones show the first page, the current
/// page with one neighbour on each side, and the last page.
pub fn visible_pages(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages <= MAX_COMPACT_PAGES {
        return (1..=total_pages).map(Some).collect();
    }
    get_pages(total_pages, clamp_page(current_page, total_pages), 1, 1, 1, 1)
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = visible_pages(total_pages, current_page);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 25), 0);
        assert_eq!(total_pages(57, 25), 3);
        assert_eq!(total_pages(50, 25), 2);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn page_bounds_stop_at_total() {
        assert_eq!(page_bounds(3, 25, 57), 50..57);
        assert_eq!(page_bounds(4, 25, 57), 57..57);
        assert_eq!(page_bounds(1, 25, 0), 0..0);
    }

    #[test]
    fn item_range_is_one_based() {
        assert_eq!(item_range(1, 25, 57), (1, 25));
        assert_eq!(item_range(3, 25, 57), (51, 57));
        assert_eq!(item_range(1, 25, 0), (0, 0));
    }

    #[test]
    fn clamp_page_keeps_page_one_for_empty_results() {
        assert_eq!(clamp_page(5, 0), 1);
        assert_eq!(clamp_page(5, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
    }

    #[test]
    fn short_lists_show_every_page() {
        assert_eq!(
            visible_pages(4, 2),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
        assert!(visible_pages(0, 1).is_empty());
    }

    #[test]
    fn long_lists_collapse_around_current_page() {
        assert_eq!(
            visible_pages(10, 5),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(
            visible_pages(10, 1),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            visible_pages(10, 10),
            vec![Some(1), None, Some(9), Some(10)]
        );
    }

    #[test]
    fn paginated_treats_page_zero_as_first() {
        let paginated = Paginated::new(vec!["a", "b"], 0, 1);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.pages, vec![Some(1)]);
    }
}
