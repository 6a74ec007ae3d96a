/// Records per page when the caller does not choose.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// The slice bounds for one page of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Start index, inclusive.
    pub start: usize,
    /// End index, exclusive.
    pub end: usize,
}

impl PageWindow {
    /// Clamps `page` into `1..=total_pages` and computes its bounds.
    ///
    /// An empty result set is one empty page. A `page_size` of zero is
    /// treated as one.
    pub fn compute(total_count: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);
        let start = ((page - 1) * page_size).min(total_count);
        let end = (start + page_size).min(total_count);
        Self {
            page,
            total_pages,
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One page of results plus the numbers needed to render a pager.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    /// Number of matches across all pages.
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.page == self.total_pages
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}

/// Slices an ordered result set into the requested page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total_count = items.len();
    let window = PageWindow::compute(total_count, page, page_size);
    let items = items
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();
    Page {
        items,
        page: window.page,
        total_pages: window.total_pages,
        total_count,
    }
}
