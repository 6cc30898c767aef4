//! Ledger engine for Saldo.
//!
//! Keeps a monthly salary and the debts and goals it has to cover, derives
//! the totals, and pages the (optionally filtered) item list three at a time
//! for the carousel front-ends show.
//!
//! ```rust
//! use engine::{Category, ItemDraft, MoneyCents, Session};
//!
//! let mut session = Session::default();
//! session
//!     .add_item(&ItemDraft::new("Gym", "80", Category::Debt, ""))
//!     .unwrap();
//! let totals = session.totals();
//! assert_eq!(totals.debts, MoneyCents::from_major(1_330));
//! assert_eq!(session.page_count(), 2);
//! ```

pub use carousel::{Carousel, Filter, PAGE_SIZE, filtered, page_count, paginate};
pub use currency::Currency;
pub use error::EngineError;
pub use gesture::{DragSampler, Navigation, SWIPE_THRESHOLD, decide_navigation};
pub use item::{Category, FinanceItem, ItemDraft};
pub use ledger::{DEFAULT_SALARY, Ledger, LedgerBuilder, Totals, coerce_salary};
pub use money::MoneyCents;
pub use session::Session;

pub mod carousel;
mod currency;
mod error;
mod gesture;
mod item;
mod ledger;
mod money;
mod session;

type ResultEngine<T> = Result<T, EngineError>;
