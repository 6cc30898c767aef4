//! The in-memory ledger: a salary and the ordered list of items it covers.

use std::collections::HashSet;

use uuid::Uuid;

use crate::{Category, EngineError, FinanceItem, ItemDraft, MoneyCents, ResultEngine};

/// Salary used when nothing else is configured.
pub const DEFAULT_SALARY: MoneyCents = MoneyCents::from_major(5_000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    salary: MoneyCents,
    items: Vec<FinanceItem>,
}

impl Default for Ledger {
    /// A ledger with the default salary and four sample items.
    fn default() -> Self {
        Self {
            salary: DEFAULT_SALARY,
            items: seed_items(),
        }
    }
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// An empty ledger with a zero salary.
    pub fn empty() -> Self {
        Self {
            salary: MoneyCents::ZERO,
            items: Vec::new(),
        }
    }

    pub fn salary(&self) -> MoneyCents {
        self.salary
    }

    pub fn items(&self) -> &[FinanceItem] {
        &self.items
    }

    pub fn item(&self, id: Uuid) -> Option<&FinanceItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the salary with the coerced value of `raw`.
    ///
    /// Empty, non-numeric or negative input stores zero. Returns the stored
    /// value.
    pub fn set_salary(&mut self, raw: &str) -> MoneyCents {
        self.salary = coerce_salary(raw);
        tracing::info!(salary = %self.salary, "salary updated");
        self.salary
    }

    /// Appends a new item built from `draft` and returns its id.
    ///
    /// The ledger is left untouched when the draft is not valid or its amount
    /// would push the committed total past what `MoneyCents` can hold.
    pub fn add_item(&mut self, draft: &ItemDraft) -> ResultEngine<Uuid> {
        let valid = draft.validate()?;
        check_committed(self.items.iter(), valid.amount)?;
        let id = self.fresh_id();
        self.items.push(FinanceItem {
            id,
            title: valid.title,
            amount: valid.amount,
            category: valid.category,
            description: valid.description,
        });
        tracing::info!(%id, category = valid.category.as_str(), "item added");
        Ok(id)
    }

    /// Loads the current values of an item into an editable draft.
    pub fn begin_edit(&self, id: Uuid) -> ResultEngine<ItemDraft> {
        self.item(id)
            .map(ItemDraft::from)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// Replaces the fields of item `id` in place, keeping its id and position.
    ///
    /// The ledger is left untouched when the draft is not valid, the id is
    /// unknown or the new amount would overflow the committed total.
    pub fn update_item(&mut self, id: Uuid, draft: &ItemDraft) -> ResultEngine<()> {
        let valid = draft.validate()?;
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        check_committed(
            self.items.iter().filter(|item| item.id != id),
            valid.amount,
        )?;

        let item = &mut self.items[position];
        item.title = valid.title;
        item.amount = valid.amount;
        item.category = valid.category;
        item.description = valid.description;
        tracing::info!(%id, "item updated");
        Ok(())
    }

    /// Removes item `id` and returns it. Unknown ids are a no-op.
    pub fn delete_item(&mut self, id: Uuid) -> Option<FinanceItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(position);
        tracing::info!(%id, "item deleted");
        Some(removed)
    }

    pub fn total_debts(&self) -> MoneyCents {
        self.total_for(Category::Debt)
    }

    pub fn total_goals(&self) -> MoneyCents {
        self.total_for(Category::Goal)
    }

    /// Salary minus debts minus goals; negative when over budget.
    pub fn remaining(&self) -> MoneyCents {
        self.salary - self.total_debts() - self.total_goals()
    }

    /// All aggregates, recomputed from the current state.
    pub fn totals(&self) -> Totals {
        Totals {
            salary: self.salary,
            debts: self.total_debts(),
            goals: self.total_goals(),
            remaining: self.remaining(),
        }
    }

    fn total_for(&self, category: Category) -> MoneyCents {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .map(|item| item.amount)
            .sum()
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.item(id).is_none() {
                return id;
            }
        }
    }
}

/// Aggregates derived from a ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Totals {
    pub salary: MoneyCents,
    pub debts: MoneyCents,
    pub goals: MoneyCents,
    pub remaining: MoneyCents,
}

impl Totals {
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Share of the salary taken by debts and goals, in `[0, 1]`.
    pub fn committed_ratio(&self) -> f64 {
        if self.salary.cents() <= 0 {
            return 0.0;
        }
        let committed = (self.debts + self.goals).cents() as f64;
        (committed / self.salary.cents() as f64).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct LedgerBuilder {
    salary: Option<MoneyCents>,
    items: Option<Vec<FinanceItem>>,
}

impl LedgerBuilder {
    /// Initial salary; negative values are clamped to zero.
    pub fn salary(mut self, salary: MoneyCents) -> LedgerBuilder {
        self.salary = Some(if salary.is_negative() {
            MoneyCents::ZERO
        } else {
            salary
        });
        self
    }

    /// Initial items, replacing the sample ones.
    pub fn items(mut self, items: Vec<FinanceItem>) -> LedgerBuilder {
        self.items = Some(items);
        self
    }

    /// Build `Ledger`, checking that every item is well formed and ids are unique.
    pub fn build(self) -> ResultEngine<Ledger> {
        let items = self.items.unwrap_or_else(seed_items);
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(EngineError::DuplicateId(item.id.to_string()));
            }
            if item.title.is_empty() {
                return Err(EngineError::EmptyTitle);
            }
            if item.amount.is_negative() {
                return Err(EngineError::InvalidAmount(format!(
                    "negative amount for \"{}\"",
                    item.title
                )));
            }
        }
        check_committed(items.iter(), MoneyCents::ZERO)?;

        Ok(Ledger {
            salary: self.salary.unwrap_or(DEFAULT_SALARY),
            items,
        })
    }
}

/// Fails when `amount` plus every amount in `items` does not fit in
/// `MoneyCents`.
///
/// Keeping debts plus goals representable also keeps `remaining` in range,
/// since the salary is never negative.
fn check_committed<'a>(
    items: impl Iterator<Item = &'a FinanceItem>,
    amount: MoneyCents,
) -> ResultEngine<()> {
    items
        .map(|item| item.amount)
        .try_fold(amount, MoneyCents::checked_add)
        .map(|_| ())
        .ok_or_else(|| EngineError::InvalidAmount("total amount too large".to_string()))
}

/// Coerces raw salary input: empty, non-numeric or negative input gives zero.
pub fn coerce_salary(raw: &str) -> MoneyCents {
    MoneyCents::parse_non_negative(raw).unwrap_or(MoneyCents::ZERO)
}

fn seed_items() -> Vec<FinanceItem> {
    let seed = [
        ("Credit card", 800, Category::Debt, "Monthly statement"),
        ("Car loan", 450, Category::Debt, "24 installments left"),
        ("Emergency fund", 1_000, Category::Goal, "Monthly target"),
        ("Trip", 300, Category::Goal, "Year-end holidays"),
    ];
    seed.into_iter()
        .map(|(title, amount, category, description)| FinanceItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            amount: MoneyCents::from_major(amount),
            category,
            description: Some(description.to_string()),
        })
        .collect()
}
