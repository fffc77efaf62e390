use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Number of identities listed per search page.
pub const PAGE_SIZE: u32 = 50;

/// Turn a user supplied page token into a 1-based page number.
///
/// Missing, empty, unparsable and non-positive tokens all mean page 1.
pub fn parse_page_token(token: Option<&str>) -> u32 {
    token
        .map(str::trim)
        .and_then(|t| t.parse::<i64>().ok())
        .map(|page| page.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}

/// A selectable page number, as rendered by the page widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageInfo {
    pub display: u32,
}

/// Paging arithmetic for one request: which page, out of how many matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    page: u32,
    page_size: u32,
    total_items: i64,
}

impl Paging {
    pub fn new(page: u32, total_items: i64) -> Self {
        Self {
            page: page.max(1),
            page_size: PAGE_SIZE,
            total_items: total_items.max(0),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_items(&self) -> i64 {
        self.total_items
    }

    /// Zero-based row offset. `page` is never below 1, so this cannot underflow.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn total_pages(&self) -> u32 {
        let page_size = i64::from(self.page_size);
        ((self.total_items + page_size - 1) / page_size) as u32
    }

    /// How many rows this page should hold.
    ///
    /// Every page before the last is full. The last page holds the remainder,
    /// or a full page when the total is an exact multiple of the page size.
    /// Pages past the end hold nothing.
    pub fn expected_len(&self) -> usize {
        let total_pages = self.total_pages();
        let page_size = i64::from(self.page_size);

        if self.page < total_pages {
            self.page_size as usize
        } else if self.page == total_pages {
            match self.total_items % page_size {
                0 => self.page_size as usize,
                remainder => remainder as usize,
            }
        } else {
            0
        }
    }

    pub fn pages(&self) -> Vec<PageInfo> {
        (1..=self.total_pages())
            .map(|display| PageInfo { display })
            .collect()
    }
}
