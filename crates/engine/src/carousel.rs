//! Category filter and fixed-size paging of the item list.

use crate::{Category, FinanceItem, Navigation};

/// Number of items shown together on one page.
pub const PAGE_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Debt,
    Goal,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Debt, Filter::Goal];

    pub fn matches(self, item: &FinanceItem) -> bool {
        match self {
            Self::All => true,
            Self::Debt => item.category == Category::Debt,
            Self::Goal => item.category == Category::Goal,
        }
    }

    /// Cycles All → Debt → Goal → All.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Debt,
            Self::Debt => Self::Goal,
            Self::Goal => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Debt => "Debts",
            Self::Goal => "Goals",
        }
    }

    /// Message shown when nothing matches the filter.
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No items yet",
            Self::Debt => "No debts yet",
            Self::Goal => "No goals yet",
        }
    }
}

/// Items matching `filter`, in ledger order.
pub fn filtered(items: &[FinanceItem], filter: Filter) -> Vec<&FinanceItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Splits `items` into consecutive pages of at most `size` elements.
///
/// A `size` of zero is treated as one.
pub fn paginate<T>(items: &[T], size: usize) -> Vec<&[T]> {
    items.chunks(size.max(1)).collect()
}

/// `ceil(len / size)`, zero for an empty list.
pub fn page_count(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1))
}

/// Page position of the item carousel.
///
/// The index is reset to the first page whenever the filter changes or the
/// number of items in the ledger changes. Edits that keep the count do not
/// reset it, even when they move an item to the other category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    filter: Filter,
    index: usize,
    observed_len: usize,
}

impl Carousel {
    pub fn new(item_count: usize) -> Self {
        Self {
            filter: Filter::All,
            index: 0,
            observed_len: item_count,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if filter != self.filter {
            self.filter = filter;
            self.index = 0;
        }
    }

    /// Records the current item count, resetting the index when it changed.
    ///
    /// Returns `true` if a reset happened.
    pub fn sync(&mut self, item_count: usize) -> bool {
        if item_count == self.observed_len {
            return false;
        }
        self.observed_len = item_count;
        self.index = 0;
        true
    }

    /// Current page index clamped to `[0, page_count - 1]`.
    pub fn current(&self, page_count: usize) -> usize {
        self.index.min(page_count.saturating_sub(1))
    }

    /// Stores the clamped index so a later increase in pages does not bring
    /// back a page the view already left.
    pub fn clamp(&mut self, page_count: usize) {
        self.index = self.current(page_count);
    }

    /// Jumps to page `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, page_count: usize) -> bool {
        if index >= page_count {
            return false;
        }
        self.index = index;
        true
    }

    /// Moves one page forward or backward, clamped to the valid range.
    pub fn navigate(&mut self, navigation: Navigation, page_count: usize) {
        let current = self.current(page_count);
        self.index = match navigation {
            Navigation::Advance => (current + 1).min(page_count.saturating_sub(1)),
            Navigation::Retreat => current.saturating_sub(1),
            Navigation::None => current,
        };
    }
}
