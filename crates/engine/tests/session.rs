use std::collections::HashSet;

use engine::{
    Category, EngineError, FinanceItem, Filter, ItemDraft, Ledger, MoneyCents, Navigation,
    PAGE_SIZE, Session,
};
use uuid::Uuid;

fn draft(title: &str, amount: &str, category: Category) -> ItemDraft {
    ItemDraft::new(title, amount, category, "")
}

fn item(title: &str, major: i64, category: Category) -> FinanceItem {
    FinanceItem::new(title, MoneyCents::from_major(major), category, None).unwrap()
}

/// Small deterministic generator so state-based checks cover many shapes.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next() % bound
    }
}

fn random_session(rng: &mut Lcg) -> Session {
    let mut session = Session::new(Ledger::empty());
    session.set_salary(&format!("{}.{:02}", rng.below(20_000), rng.below(100)));
    for n in 0..rng.below(15) {
        let category = if rng.below(2) == 0 {
            Category::Debt
        } else {
            Category::Goal
        };
        let amount = format!("{}.{:02}", rng.below(3_000), rng.below(100));
        session
            .add_item(&draft(&format!("item {n}"), &amount, category))
            .unwrap();
    }
    session
}

#[test]
fn sample_ledger_totals() {
    let ledger = Ledger::builder()
        .salary(MoneyCents::from_major(5_000))
        .items(vec![
            item("Card", 800, Category::Debt),
            item("Car", 450, Category::Debt),
            item("Reserve", 1_000, Category::Goal),
            item("Trip", 300, Category::Goal),
        ])
        .build()
        .unwrap();

    let totals = ledger.totals();
    assert_eq!(totals.debts, MoneyCents::from_major(1_250));
    assert_eq!(totals.goals, MoneyCents::from_major(1_300));
    assert_eq!(totals.remaining, MoneyCents::from_major(2_450));
}

#[test]
fn valid_adds_grow_list_with_distinct_ids() {
    let mut session = Session::new(Ledger::empty());
    let mut ids = HashSet::new();
    for n in 0..50 {
        let category = if n % 3 == 0 { Category::Goal } else { Category::Debt };
        let id = session
            .add_item(&draft(&format!("item {n}"), &n.to_string(), category))
            .unwrap();
        ids.insert(id);
    }
    assert_eq!(session.ledger().len(), 50);
    assert_eq!(ids.len(), 50);
}

#[test]
fn totals_identity_holds_for_any_state() {
    let mut rng = Lcg(7);
    for _ in 0..200 {
        let session = random_session(&mut rng);
        let totals = session.totals();
        assert_eq!(totals.debts + totals.goals + totals.remaining, totals.salary);
    }
}

#[test]
fn debt_and_goal_counts_add_up_to_all() {
    let mut rng = Lcg(11);
    for _ in 0..100 {
        let mut session = random_session(&mut rng);
        session.set_filter(Filter::Debt);
        let debts = session.filtered_items().len();
        session.set_filter(Filter::Goal);
        let goals = session.filtered_items().len();
        session.set_filter(Filter::All);
        let all = session.filtered_items().len();
        assert_eq!(debts + goals, all);
    }
}

#[test]
fn pages_concatenate_back_to_filtered_items() {
    let mut rng = Lcg(23);
    for _ in 0..100 {
        let mut session = random_session(&mut rng);
        for filter in Filter::ALL {
            session.set_filter(filter);
            let filtered: Vec<Uuid> = session.filtered_items().iter().map(|i| i.id).collect();
            let pages = session.pages();
            assert_eq!(pages.len(), filtered.len().div_ceil(PAGE_SIZE));
            assert_eq!(session.page_count(), pages.len());
            assert!(pages.iter().all(|page| !page.is_empty() && page.len() <= PAGE_SIZE));
            let joined: Vec<Uuid> = pages.concat().iter().map(|i| i.id).collect();
            assert_eq!(joined, filtered);
        }
    }
}

#[test]
fn filter_keeps_ledger_order() {
    let mut session = Session::default();
    session.set_filter(Filter::Goal);
    let titles: Vec<&str> = session
        .filtered_items()
        .iter()
        .map(|i| i.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Emergency fund", "Trip"]);
}

#[test]
fn leftward_drag_moves_from_page_one_to_two() {
    let mut session = Session::new(Ledger::empty());
    for n in 0..7 {
        session
            .add_item(&draft(&format!("item {n}"), "1", Category::Debt))
            .unwrap();
    }
    assert_eq!(session.page_count(), 3);
    assert!(session.select_page(1));

    session.drag_start(100.0);
    session.drag_move(60.0);
    session.drag_move(30.0);
    assert_eq!(session.drag_end(), Navigation::Advance);
    assert_eq!(session.current_page(), 2);

    session.drag_start(100.0);
    session.drag_move(20.0);
    session.drag_end();
    assert_eq!(session.current_page(), 2);
    assert_eq!(session.current_page_items().len(), 1);
}

#[test]
fn drag_without_move_is_ignored() {
    let mut session = Session::default();
    session.add_item(&draft("Gym", "80", Category::Debt)).unwrap();
    session.drag_start(100.0);
    assert_eq!(session.drag_end(), Navigation::None);
    assert_eq!(session.current_page(), 0);
}

#[test]
fn delete_missing_id_leaves_items_unchanged() {
    let mut session = Session::default();
    let before = session.ledger().clone();
    assert!(session.delete_item(Uuid::new_v4()).is_none());
    assert_eq!(session.ledger(), &before);
}

#[test]
fn add_with_empty_title_leaves_items_unchanged() {
    let mut session = Session::default();
    let before = session.ledger().clone();
    assert_eq!(
        session.add_item(&draft("", "120", Category::Goal)),
        Err(EngineError::EmptyTitle)
    );
    assert_eq!(session.ledger(), &before);
}

#[test]
fn add_and_delete_reset_page_but_edit_does_not() {
    let mut session = Session::new(Ledger::empty());
    for n in 0..6 {
        session
            .add_item(&draft(&format!("item {n}"), "10", Category::Debt))
            .unwrap();
    }
    session.select_page(1);

    let id = session.ledger().items()[0].id;
    let mut edit = session.begin_edit(id).unwrap();
    edit.category = Category::Goal;
    session.update_item(id, &edit).unwrap();
    assert_eq!(session.current_page(), 1);

    session.add_item(&draft("extra", "10", Category::Debt)).unwrap();
    assert_eq!(session.current_page(), 0);

    session.select_page(2);
    session.delete_item(id);
    assert_eq!(session.current_page(), 0);
}

#[test]
fn filter_change_resets_page() {
    let mut session = Session::new(Ledger::empty());
    for n in 0..7 {
        session
            .add_item(&draft(&format!("item {n}"), "10", Category::Debt))
            .unwrap();
    }
    session.select_page(2);
    session.set_filter(Filter::Debt);
    assert_eq!(session.current_page(), 0);
}

#[test]
fn edit_moving_items_out_of_filter_clamps_page() {
    let mut session = Session::new(Ledger::empty());
    for n in 0..4 {
        session
            .add_item(&draft(&format!("item {n}"), "10", Category::Debt))
            .unwrap();
    }
    session.set_filter(Filter::Debt);
    session.select_page(1);

    let id = session.ledger().items()[0].id;
    let mut edit = session.begin_edit(id).unwrap();
    edit.category = Category::Goal;
    session.update_item(id, &edit).unwrap();

    assert_eq!(session.page_count(), 1);
    assert_eq!(session.current_page(), 0);
    assert_eq!(session.current_page_items().len(), 3);
}

#[test]
fn page_stays_put_when_edited_item_returns_to_filter() {
    let mut session = Session::new(Ledger::empty());
    for n in 0..4 {
        session
            .add_item(&draft(&format!("item {n}"), "10", Category::Debt))
            .unwrap();
    }
    session.set_filter(Filter::Debt);
    session.select_page(1);

    let id = session.ledger().items()[0].id;
    let mut edit = session.begin_edit(id).unwrap();
    edit.category = Category::Goal;
    session.update_item(id, &edit).unwrap();
    assert_eq!(session.current_page(), 0);

    edit.category = Category::Debt;
    session.update_item(id, &edit).unwrap();
    assert_eq!(session.page_count(), 2);
    assert_eq!(session.current_page(), 0);
}

#[test]
fn overflowing_add_is_rejected_and_totals_stay_readable() {
    let mut session = Session::new(Ledger::empty());
    let large = "90000000000000000";
    session.add_item(&draft("first", large, Category::Debt)).unwrap();
    assert!(matches!(
        session.add_item(&draft("second", large, Category::Debt)),
        Err(EngineError::InvalidAmount(_))
    ));

    assert_eq!(session.ledger().len(), 1);
    let totals = session.totals();
    assert_eq!(totals.debts + totals.goals + totals.remaining, totals.salary);
}

#[test]
fn empty_filter_has_no_pages() {
    let mut session = Session::new(Ledger::empty());
    session.add_item(&draft("Rent", "900", Category::Debt)).unwrap();
    session.set_filter(Filter::Goal);
    assert_eq!(session.page_count(), 0);
    assert!(session.current_page_items().is_empty());
    assert!(!session.select_page(0));
    session.navigate(Navigation::Advance);
    assert_eq!(session.current_page(), 0);
}

#[test]
fn custom_threshold_applies_to_drags() {
    let mut session = Session::new(Ledger::empty()).with_swipe_threshold(5.0);
    for n in 0..4 {
        session
            .add_item(&draft(&format!("item {n}"), "10", Category::Goal))
            .unwrap();
    }
    session.drag_start(20.0);
    session.drag_move(12.0);
    assert_eq!(session.drag_end(), Navigation::Advance);
    assert_eq!(session.current_page(), 1);
}
