//! The ledger store
//!
//! Holds members, expenses, and the two input drafts for one session. Commits
//! validate the current draft and either apply fully or leave every field as
//! it was.

use super::outcome::{Outcome, RejectReason};
use super::snapshot::LedgerSnapshot;
use super::subscription::{Change, Listeners, Notification, SubscriptionId};
use crate::models::{contains_member, normalize_member, Expense};

/// An action a rendering layer can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerAction {
    UpdateInputMember(String),
    UpdateInputExpense(Expense),
    AddMember,
    AddExpense,
    RemoveExpense(String),
}

/// In-memory store of members and expenses
#[derive(Debug, Default)]
pub struct LedgerStore {
    state: LedgerSnapshot,
    listeners: Listeners,
}

impl LedgerStore {
    /// Create an empty store with empty drafts
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.state.clone()
    }

    pub fn input_member(&self) -> &str {
        &self.state.input_member
    }

    pub fn input_expense(&self) -> &Expense {
        &self.state.input_expense
    }

    pub fn members(&self) -> &[String] {
        &self.state.members
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.state.expenses
    }

    /// Register a listener; it runs after every state change
    pub fn subscribe(&mut self, listener: impl FnMut(&Notification<'_>) + 'static) -> SubscriptionId {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Replace the member draft
    pub fn update_input_member(&mut self, value: impl Into<String>) {
        self.state.input_member = value.into();
        self.emit(Change::InputMemberUpdated);
    }

    /// Replace the expense draft
    pub fn update_input_expense(&mut self, value: Expense) {
        self.state.input_expense = value;
        self.emit(Change::InputExpenseUpdated);
    }

    /// Commit the member draft
    pub fn add_member(&mut self) -> Outcome {
        let name = match self.check_member() {
            Ok(name) => name,
            Err(reason) => return self.reject(reason),
        };

        tracing::debug!(member = %name, "member added");
        self.state.members.push(name.clone());
        self.state.input_member.clear();
        self.emit(Change::MemberAdded(name));
        Outcome::Accepted
    }

    /// Commit the expense draft
    pub fn add_expense(&mut self) -> Outcome {
        if let Err(reason) = self.check_expense() {
            return self.reject(reason);
        }

        let expense = self.state.input_expense.normalized();
        tracing::debug!(description = %expense.description, paid_by = %expense.paid_by, "expense added");
        self.state.expenses.push(expense.clone());
        self.state.input_expense = Expense::empty();
        self.emit(Change::ExpenseAdded(expense));
        Outcome::Accepted
    }

    /// Remove every expense with the given description.
    ///
    /// The argument is trimmed, matching the trimmed keys `add_expense`
    /// stores. Returns how many expenses were removed.
    pub fn remove_expense(&mut self, description: &str) -> usize {
        let key = description.trim();
        let (removed, kept): (Vec<Expense>, Vec<Expense>) = std::mem::take(&mut self.state.expenses)
            .into_iter()
            .partition(|e| e.description == key);
        self.state.expenses = kept;

        let count = removed.len();
        if count > 0 {
            tracing::debug!(description = %key, count, "expenses removed");
            self.emit(Change::ExpensesRemoved {
                description: key.to_string(),
                removed,
            });
        }
        count
    }

    /// Route an action to the matching operation
    pub fn dispatch(&mut self, action: LedgerAction) -> Outcome {
        match action {
            LedgerAction::UpdateInputMember(value) => {
                self.update_input_member(value);
                Outcome::Accepted
            }
            LedgerAction::UpdateInputExpense(value) => {
                self.update_input_expense(value);
                Outcome::Accepted
            }
            LedgerAction::AddMember => self.add_member(),
            LedgerAction::AddExpense => self.add_expense(),
            LedgerAction::RemoveExpense(description) => {
                self.remove_expense(&description);
                Outcome::Accepted
            }
        }
    }

    fn check_member(&self) -> Result<String, RejectReason> {
        let name = normalize_member(&self.state.input_member).ok_or(RejectReason::EmptyMember)?;
        if contains_member(&self.state.members, name) {
            return Err(RejectReason::DuplicateMember);
        }
        Ok(name.to_string())
    }

    fn check_expense(&self) -> Result<(), RejectReason> {
        let draft = &self.state.input_expense;
        let description = draft.trimmed_description();

        if draft.paid_by.is_empty() {
            return Err(RejectReason::MissingPayer);
        }
        if description.is_empty() {
            return Err(RejectReason::EmptyDescription);
        }
        if draft.amount.is_zero() {
            return Err(RejectReason::ZeroAmount);
        }
        if self.state.expenses.iter().any(|e| e.description == description) {
            return Err(RejectReason::DuplicateDescription);
        }
        Ok(())
    }

    fn reject(&self, reason: RejectReason) -> Outcome {
        tracing::debug!(%reason, "commit rejected");
        Outcome::Rejected(reason)
    }

    fn emit(&mut self, change: Change) {
        self.listeners.notify(&Notification {
            change,
            snapshot: &self.state,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn lunch() -> Expense {
        Expense::new("Alice", "Lunch", Money::from_units(12))
    }

    fn store_with_expense(expense: Expense) -> LedgerStore {
        let mut store = LedgerStore::new();
        store.update_input_expense(expense);
        assert!(store.add_expense().is_accepted());
        store
    }

    fn recorder(store: &mut LedgerStore) -> Rc<RefCell<Vec<Change>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |n| sink.borrow_mut().push(n.change.clone()));
        seen
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = LedgerStore::new();
        assert!(store.members().is_empty());
        assert!(store.expenses().is_empty());
        assert_eq!(store.input_member(), "");
        assert_eq!(store.input_expense(), &Expense::empty());
    }

    #[test]
    fn test_add_member_trims_and_clears_draft() {
        let mut store = LedgerStore::new();
        store.update_input_member("  Alice  ");
        assert_eq!(store.add_member(), Outcome::Accepted);
        assert_eq!(store.members(), ["Alice"]);
        assert_eq!(store.input_member(), "");
    }

    #[test]
    fn test_add_duplicate_member_keeps_draft() {
        let mut store = LedgerStore::new();
        store.update_input_member("Alice");
        store.add_member();

        store.update_input_member(" Alice ");
        assert_eq!(
            store.add_member(),
            Outcome::Rejected(RejectReason::DuplicateMember)
        );
        assert_eq!(store.members(), ["Alice"]);
        assert_eq!(store.input_member(), " Alice ");
    }

    #[test]
    fn test_member_uniqueness_is_case_sensitive() {
        let mut store = LedgerStore::new();
        store.update_input_member("Alice");
        store.add_member();
        store.update_input_member("alice");
        assert!(store.add_member().is_accepted());
        assert_eq!(store.members(), ["Alice", "alice"]);
    }

    #[test]
    fn test_whitespace_member_rejected() {
        let mut store = LedgerStore::new();
        store.update_input_member("   ");
        assert_eq!(
            store.add_member(),
            Outcome::Rejected(RejectReason::EmptyMember)
        );
        assert!(store.members().is_empty());
        assert_eq!(store.input_member(), "   ");
    }

    #[test]
    fn test_add_expense_resets_draft() {
        let store = store_with_expense(lunch());
        assert_eq!(store.expenses(), [lunch()]);
        assert_eq!(store.input_expense(), &Expense::empty());
    }

    #[test]
    fn test_add_expense_stores_trimmed_description() {
        let store = store_with_expense(Expense::new("Alice", "  Lunch ", Money::from_units(12)));
        assert_eq!(store.expenses()[0].description, "Lunch");
    }

    #[test]
    fn test_payer_need_not_be_member() {
        let store = store_with_expense(Expense::new("Stranger", "Taxi", Money::from_units(30)));
        assert!(store.members().is_empty());
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut store = LedgerStore::new();
        let draft = Expense::new("Alice", "Lunch", Money::zero());
        store.update_input_expense(draft.clone());
        assert_eq!(
            store.add_expense(),
            Outcome::Rejected(RejectReason::ZeroAmount)
        );
        assert!(store.expenses().is_empty());
        assert_eq!(store.input_expense(), &draft);
    }

    #[test]
    fn test_negative_amount_accepted() {
        let store = store_with_expense(Expense::new("Alice", "Refund", Money::from_minor(-500)));
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn test_each_expense_rule_has_its_reason() {
        let cases = [
            (Expense::new("", "Lunch", Money::from_units(1)), RejectReason::MissingPayer),
            (Expense::new("Alice", "   ", Money::from_units(1)), RejectReason::EmptyDescription),
            (Expense::new("Alice", "Lunch", Money::zero()), RejectReason::ZeroAmount),
        ];

        for (draft, reason) in cases {
            let mut store = LedgerStore::new();
            store.update_input_expense(draft.clone());
            assert_eq!(store.add_expense(), Outcome::Rejected(reason));
            assert_eq!(store.input_expense(), &draft, "draft must be kept verbatim");
        }
    }

    #[test]
    fn test_duplicate_description_keeps_first() {
        let mut store = store_with_expense(lunch());
        let second = Expense::new("Bob", " Lunch ", Money::from_units(99));
        store.update_input_expense(second.clone());

        assert_eq!(
            store.add_expense(),
            Outcome::Rejected(RejectReason::DuplicateDescription)
        );
        assert_eq!(store.expenses(), [lunch()]);
        assert_eq!(store.input_expense(), &second);
    }

    #[test]
    fn test_remove_expense_removes_matches_only() {
        let mut store = store_with_expense(lunch());
        store.update_input_expense(Expense::new("Bob", "Dinner", Money::from_units(40)));
        store.add_expense();
        store.update_input_member("Alice");
        store.add_member();

        assert_eq!(store.remove_expense("Lunch"), 1);
        assert_eq!(store.expenses().len(), 1);
        assert_eq!(store.expenses()[0].description, "Dinner");
        assert_eq!(store.members(), ["Alice"]);

        assert_eq!(store.remove_expense("Lunch"), 0);
        assert_eq!(store.expenses().len(), 1);
    }

    #[test]
    fn test_remove_expense_trims_argument() {
        let mut store = store_with_expense(lunch());
        assert_eq!(store.remove_expense("  Lunch "), 1);
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut store = LedgerStore::new();
        for (i, name) in ["A", "B", "C", "D"].iter().enumerate() {
            store.update_input_expense(Expense::new("Alice", *name, Money::from_units(i as i64 + 1)));
            store.add_expense();
        }
        store.remove_expense("B");

        let order: Vec<&str> = store.expenses().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, ["A", "C", "D"]);
    }

    #[test]
    fn test_accepted_commit_notifies_once() {
        let mut store = LedgerStore::new();
        store.update_input_member("Alice");
        let seen = recorder(&mut store);

        store.add_member();
        assert_eq!(*seen.borrow(), vec![Change::MemberAdded("Alice".into())]);
    }

    #[test]
    fn test_rejected_commit_does_not_notify() {
        let mut store = LedgerStore::new();
        store.update_input_member("  ");
        store.update_input_expense(Expense::new("Alice", "Lunch", Money::zero()));
        let seen = recorder(&mut store);

        store.add_member();
        store.add_expense();
        assert_eq!(store.remove_expense("nothing"), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listener_sees_new_state() {
        let mut store = LedgerStore::new();
        let members = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&members);
        store.subscribe(move |n| *sink.borrow_mut() = n.snapshot.members.clone());

        store.update_input_member("Bob");
        store.add_member();
        assert_eq!(*members.borrow(), vec!["Bob".to_string()]);
    }

    #[test]
    fn test_draft_updates_notify() {
        let mut store = LedgerStore::new();
        let seen = recorder(&mut store);
        store.update_input_member("A");
        store.update_input_expense(lunch());
        assert_eq!(
            *seen.borrow(),
            vec![Change::InputMemberUpdated, Change::InputExpenseUpdated]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = LedgerStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.update_input_member("A");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.update_input_member("B");

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_stores_are_independent() {
        let mut first = LedgerStore::new();
        let second = LedgerStore::new();
        first.update_input_member("Alice");
        first.add_member();
        assert_eq!(first.members().len(), 1);
        assert!(second.members().is_empty());
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut store = LedgerStore::new();
        store.dispatch(LedgerAction::UpdateInputExpense(lunch()));
        assert!(store.dispatch(LedgerAction::AddExpense).is_accepted());
        store.dispatch(LedgerAction::UpdateInputMember(" ".into()));
        assert_eq!(
            store.dispatch(LedgerAction::AddMember),
            Outcome::Rejected(RejectReason::EmptyMember)
        );
        store.dispatch(LedgerAction::RemoveExpense("Lunch".into()));
        assert!(store.expenses().is_empty());
    }
}
