//! One run of the ledger view: the ledger plus carousel and drag state.
//!
//! Every mutation goes through the session so the carousel can be re-synced
//! with the item count right after it. Read accessors recompute from the
//! current state on each call.

use uuid::Uuid;

use crate::{
    Carousel, DragSampler, FinanceItem, Filter, ItemDraft, Ledger, MoneyCents, Navigation,
    ResultEngine, SWIPE_THRESHOLD, Totals, carousel,
};

#[derive(Clone, Debug)]
pub struct Session {
    ledger: Ledger,
    carousel: Carousel,
    drag: DragSampler,
    swipe_threshold: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Ledger::default())
    }
}

impl Session {
    pub fn new(ledger: Ledger) -> Self {
        let carousel = Carousel::new(ledger.len());
        Self {
            ledger,
            carousel,
            drag: DragSampler::default(),
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }

    /// Overrides the swipe threshold, e.g. to express it in terminal columns.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    pub fn set_salary(&mut self, raw: &str) -> MoneyCents {
        self.ledger.set_salary(raw)
    }

    pub fn add_item(&mut self, draft: &ItemDraft) -> ResultEngine<Uuid> {
        let id = self.ledger.add_item(draft)?;
        self.after_mutation();
        Ok(id)
    }

    pub fn begin_edit(&self, id: Uuid) -> ResultEngine<ItemDraft> {
        self.ledger.begin_edit(id)
    }

    pub fn update_item(&mut self, id: Uuid, draft: &ItemDraft) -> ResultEngine<()> {
        self.ledger.update_item(id, draft)?;
        self.after_mutation();
        Ok(())
    }

    pub fn delete_item(&mut self, id: Uuid) -> Option<FinanceItem> {
        let removed = self.ledger.delete_item(id);
        self.after_mutation();
        removed
    }

    pub fn totals(&self) -> Totals {
        self.ledger.totals()
    }

    pub fn filter(&self) -> Filter {
        self.carousel.filter()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.carousel.set_filter(filter);
    }

    pub fn filtered_items(&self) -> Vec<&FinanceItem> {
        carousel::filtered(self.ledger.items(), self.carousel.filter())
    }

    pub fn page_count(&self) -> usize {
        carousel::page_count(self.filtered_items().len(), carousel::PAGE_SIZE)
    }

    /// Filtered items grouped into pages.
    pub fn pages(&self) -> Vec<Vec<&FinanceItem>> {
        let filtered = self.filtered_items();
        carousel::paginate(&filtered, carousel::PAGE_SIZE)
            .into_iter()
            .map(|page| page.to_vec())
            .collect()
    }

    pub fn current_page(&self) -> usize {
        self.carousel.current(self.page_count())
    }

    pub fn current_page_items(&self) -> Vec<&FinanceItem> {
        let current = self.current_page();
        self.pages().into_iter().nth(current).unwrap_or_default()
    }

    /// Jumps to the page behind indicator `index`.
    pub fn select_page(&mut self, index: usize) -> bool {
        let pages = self.page_count();
        self.carousel.select(index, pages)
    }

    pub fn navigate(&mut self, navigation: Navigation) {
        let pages = self.page_count();
        self.carousel.navigate(navigation, pages);
    }

    pub fn drag_start(&mut self, x: f64) {
        self.drag.begin(x);
    }

    pub fn drag_move(&mut self, x: f64) {
        if self.drag.is_active() {
            self.drag.moved(x);
        }
    }

    /// Ends the drag and applies the resulting navigation.
    pub fn drag_end(&mut self) -> Navigation {
        let navigation = self.drag.finish(self.swipe_threshold);
        tracing::debug!(?navigation, "drag finished");
        self.navigate(navigation);
        navigation
    }

    fn after_mutation(&mut self) {
        if self.carousel.sync(self.ledger.len()) {
            tracing::debug!("item count changed, carousel back to first page");
        } else {
            let pages = self.page_count();
            self.carousel.clamp(pages);
        }
    }
}
