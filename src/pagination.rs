use serde::Deserialize;

use crate::names;

/// Query string accepted by the paginated listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// A 1-based page over an id-ordered list, [`names::QUESTIONS_PER_PAGE`] items long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    /// Returns `None` for page numbers below 1. A missing number means the first page.
    pub fn new(number: Option<i64>) -> Option<Self> {
        match number {
            None => Some(Page(1)),
            Some(n) if n >= 1 => Some(Page(n)),
            Some(_) => None,
        }
    }

    pub fn number(self) -> i64 {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    pub fn limit(self) -> i64 {
        names::QUESTIONS_PER_PAGE
    }

    pub fn offset(self) -> i64 {
        (self.0 - 1).saturating_mul(names::QUESTIONS_PER_PAGE)
    }

    /// The part of `items` this page covers; empty past the end.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let end = start.saturating_add(names::QUESTIONS_PER_PAGE as usize);
        if start >= items.len() {
            return &[];
        }
        &items[start..end.min(items.len())]
    }
}
