//! Pagination - slices an ordered sequence into fixed-size pages
//!
//! A [`Paginator`] borrows the ordered posts and hands out one [`Page`] at a
//! time. Pages are 1-based. An empty sequence has zero pages, so the build
//! emits no listing at all rather than an empty "page 1 of 0".

use crate::error::{BuildError, Result};

/// How the index listing is split across pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// Every post on a single page
    Disabled,
    /// Fixed number of posts per page (always > 0)
    PerPage(usize),
}

impl Pagination {
    /// Effective page size for a sequence of `len` items
    pub fn page_size(&self, len: usize) -> usize {
        match *self {
            Pagination::Disabled => len.max(1),
            Pagination::PerPage(size) => size,
        }
    }
}

/// Computes page slices over an ordered sequence
#[derive(Debug)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// Create a paginator with a configured page size.
    ///
    /// Fails with [`BuildError::InvalidConfiguration`] when `page_size <= 0`.
    pub fn new(items: &'a [T], page_size: i64) -> Result<Self> {
        if page_size <= 0 {
            return Err(BuildError::InvalidConfiguration(format!(
                "page size must be positive (got {})",
                page_size
            )));
        }
        Ok(Self {
            items,
            page_size: page_size as usize,
        })
    }

    /// Create a paginator from an already validated policy
    pub fn with_policy(items: &'a [T], policy: Pagination) -> Self {
        Self {
            items,
            page_size: policy.page_size(items.len()),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`; zero for an empty sequence
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Get the page at `index` (1-based)
    pub fn page(&self, index: usize) -> Result<Page<'a, T>> {
        let total = self.total_pages();
        if index == 0 || index > total {
            return Err(BuildError::OutOfRangeRequest { page: index, total });
        }

        let start = (index - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());

        Ok(Page {
            items: &self.items[start..end],
            index,
            total_pages: total,
        })
    }

    /// Iterate over every page in order
    pub fn pages(&self) -> impl Iterator<Item = Page<'a, T>> + '_ {
        let total = self.total_pages();
        self.items
            .chunks(self.page_size)
            .enumerate()
            .map(move |(i, chunk)| Page {
                items: chunk,
                index: i + 1,
                total_pages: total,
            })
    }
}

/// Slice `items` into pages of `page_size` and return page `page_index`
pub fn paginate<T>(items: &[T], page_size: i64, page_index: usize) -> Result<Page<'_, T>> {
    Paginator::new(items, page_size)?.page(page_index)
}

/// One page of results
#[derive(Debug)]
pub struct Page<'a, T> {
    /// Items on this page, in sequence order
    pub items: &'a [T],
    /// 1-based page index
    pub index: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn is_first(&self) -> bool {
        self.index == 1
    }

    pub fn is_last(&self) -> bool {
        self.index == self.total_pages
    }

    /// Navigation metadata for this page
    pub fn nav(&self) -> PageNav {
        PageNav {
            current: self.index,
            total: self.total_pages,
            prev: (!self.is_first()).then(|| self.index - 1),
            next: (!self.is_last()).then(|| self.index + 1),
        }
    }
}

/// Forward/backward navigation between listing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub current: usize,
    pub total: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl PageNav {
    /// Navigation controls are only rendered when there is somewhere to go
    pub fn is_needed(&self) -> bool {
        self.total > 1
    }
}
