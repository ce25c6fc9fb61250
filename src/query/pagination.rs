use serde::{Deserialize, Serialize};

/// Most page links shown at once, not counting the first/last page and gaps.
pub const MAX_PAGE_LINKS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLink {
    Page(usize),
    Gap,
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Page links around `current`, with the first and last page always reachable.
///
/// `current` is clamped into `1..=total_pages`.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= MAX_PAGE_LINKS {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let half = MAX_PAGE_LINKS / 2;
    let current = current.clamp(1, total_pages);

    let mut start = current.saturating_sub(half).max(1);
    let mut end = (current + half).min(total_pages);
    if current <= half + 1 {
        end = MAX_PAGE_LINKS;
    }
    if current + half >= total_pages {
        start = total_pages - MAX_PAGE_LINKS + 1;
    }

    let mut links = Vec::with_capacity(MAX_PAGE_LINKS + 4);
    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Gap);
        }
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total_pages {
        if end < total_pages - 1 {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(total_pages));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Gap, Page};

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(25, 0), 0);
    }

    #[test]
    fn test_short_listing_shows_every_page() {
        assert_eq!(page_window(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(
            page_window(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
        assert_eq!(page_window(3, 10), page_window(1, 10));
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Gap, Page(3), Page(4), Page(5), Page(6), Page(7), Gap, Page(10)]
        );
        assert_eq!(
            page_window(4, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(
            page_window(10, 10),
            vec![Page(1), Gap, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
        assert_eq!(page_window(42, 10), page_window(10, 10));
    }

    #[test]
    fn test_six_pages_has_no_gap() {
        assert_eq!(
            page_window(1, 6),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }
}
