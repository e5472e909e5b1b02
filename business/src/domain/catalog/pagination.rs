pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Up to this many pages are listed without any ellipsis.
const MAX_VISIBLE_PAGES: usize = 5;

/// `ceil(item_count / page_size)`, zero for an empty sequence.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Current position inside the filtered sequence.
///
/// Pages are 1-based. `current_page` stays within `[1, total_pages]`, or 1
/// when there are no pages at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Moves to `page`, clamped into the valid range.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> usize {
        self.current_page = page.clamp(1, total_pages.max(1));
        self.current_page
    }

    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// The contiguous run of at most `page_size` items for the current page.
pub fn page_slice<'a, T>(items: &'a [T], page: &PageState) -> &'a [T] {
    let start = page.offset().min(items.len());
    let end = (start + page.page_size()).min(items.len());
    &items[start..end]
}

/// One entry of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Page numbers to display around `current_page`.
///
/// Every page is listed when there are few of them. Otherwise the first and
/// last pages are always listed, plus the neighbours of the current page,
/// with a single ellipsis standing in for each gap.
pub fn page_numbers(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageMarker::Page).collect();
    }

    let mut markers = vec![PageMarker::Page(1)];

    if current_page > 3 {
        markers.push(PageMarker::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = (current_page + 1).min(total_pages - 1);
    markers.extend((start..=end).map(PageMarker::Page));

    if current_page + 2 < total_pages {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Page(total_pages));
    markers
}

/// "Showing `from` to `to` of `total`", 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowingRange {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

pub fn showing_range(page: &PageState, total_items: usize) -> Option<ShowingRange> {
    if total_items == 0 {
        return None;
    }
    Some(ShowingRange {
        from: page.offset() + 1,
        to: (page.offset() + page.page_size()).min(total_items),
        total: total_items,
    })
}
