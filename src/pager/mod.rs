//! Client-side pagination over the filtered set.
//!
//! Pages are 1-indexed. Out-of-range pages yield empty slices rather than errors.

use serde::{Serialize, Serializer};

/// Viewport widths below this are treated as narrow.
pub const NARROW_BREAKPOINT_PX: u32 = 768;

/// Viewport class, which decides how many page links fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Standard,
}

impl Viewport {
    pub fn from_width(px: u32) -> Self {
        if px < NARROW_BREAKPOINT_PX {
            Viewport::Narrow
        } else {
            Viewport::Standard
        }
    }

    /// Page links shown without an ellipsis.
    pub fn max_visible(self) -> usize {
        match self {
            Viewport::Narrow => 3,
            Viewport::Standard => 7,
        }
    }
}

/// One entry in the page-link bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Page(n) => serializer.serialize_u64(*n as u64),
            PageLink::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp `page` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Items on `page`: the slice `[(page-1)*page_size, page*page_size)` clamped
/// to the bounds of `items`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// 1-based inclusive bounds of the items on `page`, for "showing X-Y of N".
pub fn item_range(page: usize, page_size: usize, total_items: usize) -> Option<(usize, usize)> {
    if page == 0 || page_size == 0 {
        return None;
    }

    let first = (page - 1).saturating_mul(page_size).saturating_add(1);
    let last = page.saturating_mul(page_size).min(total_items);
    (first <= last).then_some((first, last))
}

/// Parse the "go to page" input. Only pages that exist are accepted.
pub fn parse_jump_target(input: &str, total_pages: usize) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|page| (1..=total_pages).contains(page))
}

/// The page links to render for `current` out of `total`.
///
/// Page 1 and `total` are always present. When links are elided, `current`
/// stays visible.
pub fn renderable_page_numbers(current: usize, total: usize, viewport: Viewport) -> Vec<PageLink> {
    use PageLink::{Ellipsis, Page};

    if total <= viewport.max_visible() {
        return (1..=total).map(Page).collect();
    }

    match viewport {
        Viewport::Narrow => {
            if current <= 2 {
                vec![Page(1), Page(2), Ellipsis, Page(total)]
            } else if current >= total - 1 {
                vec![Page(1), Ellipsis, Page(total - 1), Page(total)]
            } else {
                vec![Page(1), Ellipsis, Page(current), Ellipsis, Page(total)]
            }
        }
        Viewport::Standard => {
            if current <= 4 {
                let mut links: Vec<PageLink> = (1..=5).map(Page).collect();
                links.extend([Ellipsis, Page(total)]);
                links
            } else if current >= total - 3 {
                let mut links = vec![Page(1), Ellipsis];
                links.extend((total - 4..=total).map(Page));
                links
            } else {
                vec![
                    Page(1),
                    Ellipsis,
                    Page(current - 1),
                    Page(current),
                    Page(current + 1),
                    Ellipsis,
                    Page(total),
                ]
            }
        }
    }
}

/// Derived pagination state for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerState {
    pub current: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl PagerState {
    pub fn new(current: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = total_pages(total_items, page_size);
        Self {
            current: clamp_page(current, total_pages),
            page_size,
            total_items,
            total_pages,
        }
    }

    /// The control is hidden when everything fits on one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn item_range(&self) -> Option<(usize, usize)> {
        item_range(self.current, self.page_size, self.total_items)
    }

    pub fn links(&self, viewport: Viewport) -> Vec<PageLink> {
        renderable_page_numbers(self.current, self.total_pages, viewport)
    }
}
