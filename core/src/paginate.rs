use std::fmt;

/// One page of results; renders as the concatenation of its items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T>(pub &'a [T]);

impl<'a, T> Page<'a, T> {
    pub fn items(&self) -> &'a [T] { self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<T: fmt::Display> fmt::Display for Page<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|item| write!(f, "{item}"))
    }
}

/// Lazy, single-pass split of a slice into pages of `page_size`; the last may be shorter.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    rest: &'a [T],
    page_size: usize,
}

impl<'a, T> Iterator for Paginator<'a, T> {
    type Item = Page<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() || self.page_size == 0 {
            return None;
        }
        let (page, rest) = self.rest.split_at(self.page_size.min(self.rest.len()));
        self.rest = rest;
        Some(Page(page))
    }
}

/// Page size zero yields no pages.
pub fn paginate<T>(items: &[T], page_size: usize) -> Paginator<'_, T> {
    Paginator { rest: items, page_size }
}
