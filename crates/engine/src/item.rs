//! Finance item primitives.
//!
//! A `FinanceItem` is a titled amount the salary has to cover, either a debt
//! to pay or a goal to save for. An `ItemDraft` holds the raw form values
//! used to create or edit one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents, ResultEngine};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Debt,
    Goal,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debt => "debt",
            Self::Goal => "goal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Debt => "Debt",
            Self::Goal => "Goal",
        }
    }

    /// The other category, used by two-valued selectors.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Debt => Self::Goal,
            Self::Goal => Self::Debt,
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "debt" => Ok(Self::Debt),
            "goal" => Ok(Self::Goal),
            other => Err(EngineError::KeyNotFound(format!("category {other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceItem {
    pub id: Uuid,
    pub title: String,
    pub amount: MoneyCents,
    pub category: Category,
    pub description: Option<String>,
}

impl FinanceItem {
    /// Builds a new item with a fresh id.
    pub fn new(
        title: impl Into<String>,
        amount: MoneyCents,
        category: Category,
        description: Option<String>,
    ) -> ResultEngine<Self> {
        Self::with_id(Uuid::new_v4(), title, amount, category, description)
    }

    pub fn with_id(
        id: Uuid,
        title: impl Into<String>,
        amount: MoneyCents,
        category: Category,
        description: Option<String>,
    ) -> ResultEngine<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(EngineError::EmptyTitle);
        }
        if amount.is_negative() {
            return Err(EngineError::InvalidAmount(
                "amount must not be negative".to_string(),
            ));
        }
        Ok(Self {
            id,
            title,
            amount,
            category,
            description: description.filter(|d| !d.is_empty()),
        })
    }

    pub fn is_debt(&self) -> bool {
        self.category == Category::Debt
    }

    pub fn is_goal(&self) -> bool {
        self.category == Category::Goal
    }
}

/// Editable form values for an item.
///
/// Text fields are kept exactly as typed; only `amount` is interpreted, and
/// only when the draft is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub title: String,
    pub amount: String,
    pub category: Category,
    pub description: String,
}

/// A draft that passed validation, ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ValidDraft {
    pub title: String,
    pub amount: MoneyCents,
    pub category: Category,
    pub description: Option<String>,
}

impl ItemDraft {
    pub fn new(
        title: impl Into<String>,
        amount: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            amount: amount.into(),
            category,
            description: description.into(),
        }
    }

    /// `true` when both required fields are filled in.
    ///
    /// Front-ends use it to disable submission; `validate` still has the last
    /// word on the amount.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && !self.amount.is_empty()
    }

    pub(crate) fn validate(&self) -> ResultEngine<ValidDraft> {
        if self.title.is_empty() {
            return Err(EngineError::EmptyTitle);
        }
        let amount = MoneyCents::parse_non_negative(&self.amount)?;
        let description = if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        };
        Ok(ValidDraft {
            title: self.title.clone(),
            amount,
            category: self.category,
            description,
        })
    }
}

impl From<&FinanceItem> for ItemDraft {
    fn from(item: &FinanceItem) -> Self {
        Self {
            title: item.title.clone(),
            amount: item.amount.to_string(),
            category: item.category,
            description: item.description.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_title_and_amount() {
        let draft = ItemDraft::new("", "10", Category::Debt, "");
        assert_eq!(draft.validate(), Err(EngineError::EmptyTitle));
        assert!(!draft.is_submittable());

        let draft = ItemDraft::new("Rent", "", Category::Debt, "");
        assert!(matches!(
            draft.validate(),
            Err(EngineError::InvalidAmount(_))
        ));

        let draft = ItemDraft::new("Rent", "ten", Category::Debt, "");
        assert!(draft.is_submittable());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn draft_keeps_text_untrimmed() {
        let draft = ItemDraft::new(" Rent ", "10", Category::Goal, "  ");
        let valid = draft.validate().unwrap();
        assert_eq!(valid.title, " Rent ");
        assert_eq!(valid.description.as_deref(), Some("  "));
        assert_eq!(valid.amount, MoneyCents::new(1000));
    }

    #[test]
    fn draft_from_item_renders_amount_and_description() {
        let item = FinanceItem::new("Trip", MoneyCents::new(30_000), Category::Goal, None).unwrap();
        let draft = ItemDraft::from(&item);
        assert_eq!(draft.amount, "300.00");
        assert_eq!(draft.description, "");
        assert_eq!(draft.category, Category::Goal);
    }

    #[test]
    fn category_predicates_follow_category() {
        let mut item = FinanceItem::new("Rent", MoneyCents::new(100), Category::Debt, None).unwrap();
        assert!(item.is_debt() && !item.is_goal());
        item.category = item.category.toggled();
        assert!(item.is_goal() && !item.is_debt());
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in [Category::Debt, Category::Goal] {
            assert_eq!(Category::try_from(category.as_str()).unwrap(), category);
            assert_eq!(category.toggled().toggled(), category);
        }
    }
}
