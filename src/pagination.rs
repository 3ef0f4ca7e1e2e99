//! Page arithmetic for the invoice table and the page strip under it.
use serde::{Serialize, Serializer};

/// Default number of invoices per table page.
pub const ITEMS_PER_PAGE: u32 = 6;

/// Pages below 1 are treated as the first page.
pub fn offset(page: u32, per_page: u32) -> i64 {
    (i64::from(page.max(1)) - 1).saturating_mul(i64::from(per_page))
}

pub fn page_count(total: i64, per_page: u32) -> u32 {
    if total <= 0 || per_page == 0 {
        return 0;
    }
    let per_page = i64::from(per_page);
    let pages = (total + per_page - 1) / per_page;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One entry of the page strip: a page number or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageItem::Page(n) => serializer.serialize_u32(*n),
            PageItem::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Build the strip of page links for `current` out of `total` pages.
///
/// Up to seven pages are listed in full. Beyond that the first and last
/// pages stay visible and the run around `current` is separated from them
/// with ellipses.
pub fn generate_pagination(current: u32, total: u32) -> Vec<PageItem> {
    use PageItem::{Ellipsis, Page};

    if total <= 7 {
        return (1..=total).map(Page).collect();
    }

    if current <= 3 {
        return vec![Page(1), Page(2), Page(3), Ellipsis, Page(total - 1), Page(total)];
    }

    if current >= total - 2 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ];
    }

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
