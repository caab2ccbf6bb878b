use contracts::domain::a001_laundry_transaction::Transaction;
use leptos::prelude::*;

use crate::domain::a001_laundry_transaction::api::retain_completed;
use crate::shared::list_utils::{can_go_next, can_go_prev, filter_list, page_slice, PAGE_SIZE};

/// Everything the completed-transactions page can do to its state
#[derive(Clone, Debug, PartialEq)]
pub enum ListEvent {
    /// Fresh backend answer; replaces the working collection wholesale
    Loaded(Vec<Transaction>),
    LoadFailed,
    Search(String),
    PageNext,
    PagePrev,
    Select(Transaction),
    Dismiss,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionsListState {
    /// Working collection, completed records only
    pub items: Vec<Transaction>,
    pub search_query: String,
    /// 1-based
    pub page: usize,
    /// Receipt preview; survives searching and paging
    pub selected: Option<Transaction>,
    pub is_loaded: bool,
}

impl Default for TransactionsListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            page: 1,
            selected: None,
            is_loaded: false,
        }
    }
}

impl TransactionsListState {
    /// Single transition function. A query change is the only event that
    /// touches a second field (page goes back to 1).
    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::Loaded(records) => {
                self.items = retain_completed(records);
                self.is_loaded = true;
            }
            ListEvent::LoadFailed => {
                self.is_loaded = true;
            }
            ListEvent::Search(query) => {
                self.search_query = query;
                self.page = 1;
            }
            ListEvent::PageNext => {
                self.page = self.page.saturating_add(1);
            }
            ListEvent::PagePrev => {
                self.page = self.page.saturating_sub(1).max(1);
            }
            ListEvent::Select(transaction) => {
                self.selected = Some(transaction);
            }
            ListEvent::Dismiss => {
                self.selected = None;
            }
        }
    }

    pub fn filtered(&self) -> Vec<&Transaction> {
        filter_list(&self.items, &self.search_query)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    /// Rows of the current page, cloned for rendering
    pub fn page_items(&self) -> Vec<Transaction> {
        page_slice(&self.filtered(), self.page, PAGE_SIZE)
            .iter()
            .map(|t| (*t).clone())
            .collect()
    }

    pub fn can_go_next(&self) -> bool {
        can_go_next(page_slice(&self.filtered(), self.page, PAGE_SIZE).len(), PAGE_SIZE)
    }

    pub fn can_go_prev(&self) -> bool {
        can_go_prev(self.page)
    }
}

pub fn create_state() -> RwSignal<TransactionsListState> {
    RwSignal::new(TransactionsListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_laundry_transaction::{Price, TransactionId, TransactionStatus};

    fn tx(id: i64, name: &str, status: &str) -> Transaction {
        Transaction {
            id: TransactionId::from(id),
            customer_name: name.to_string(),
            phone_number: format!("0813{id}"),
            service_name: "Cuci Kering".to_string(),
            total_price: Price::from(id * 1000),
            created_at: "2024-03-01 08:00".to_string(),
            status: TransactionStatus(status.to_string()),
        }
    }

    fn loaded(count: i64) -> TransactionsListState {
        let mut state = TransactionsListState::default();
        state.apply(ListEvent::Loaded(
            (1..=count).map(|id| tx(id, "Pelanggan", "Selesai")).collect(),
        ));
        state
    }

    fn page_ids(state: &TransactionsListState) -> Vec<String> {
        state.page_items().iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = TransactionsListState::default();
        assert_eq!(state.page, 1);
        assert!(state.items.is_empty());
        assert!(state.selected.is_none());
        assert!(!state.can_go_prev());
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_loaded_keeps_only_completed() {
        let mut records: Vec<Transaction> =
            (1..=7).map(|id| tx(id, "Ani", "Selesai")).collect();
        records.push(tx(8, "Budi", "Proses"));
        records.push(tx(9, "Citra", "Diambil"));

        let mut state = TransactionsListState::default();
        state.apply(ListEvent::Loaded(records));
        assert_eq!(state.items.len(), 7);
        assert!(state.is_loaded);

        state.apply(ListEvent::Loaded(vec![tx(20, "Dewi", "Selesai")]));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_load_failure_keeps_collection() {
        let mut state = TransactionsListState::default();
        state.apply(ListEvent::LoadFailed);
        assert!(state.is_loaded);
        assert!(state.items.is_empty());
        assert!(state.page_items().is_empty());

        let mut state = loaded(3);
        state.apply(ListEvent::LoadFailed);
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn test_twelve_records_paging() {
        let mut state = loaded(12);
        assert_eq!(page_ids(&state), vec!["1", "2", "3", "4", "5"]);
        assert!(state.can_go_next());
        assert!(!state.can_go_prev());

        state.apply(ListEvent::PageNext);
        state.apply(ListEvent::PageNext);
        assert_eq!(state.page, 3);
        assert_eq!(page_ids(&state), vec!["11", "12"]);
        assert!(!state.can_go_next());
        assert!(state.can_go_prev());
    }

    #[test]
    fn test_next_is_not_clamped() {
        let mut state = loaded(3);
        state.apply(ListEvent::PageNext);
        state.apply(ListEvent::PageNext);
        assert_eq!(state.page, 3);
        assert!(state.page_items().is_empty());
    }

    #[test]
    fn test_prev_never_goes_below_one() {
        let mut state = loaded(12);
        state.apply(ListEvent::PageNext);
        state.apply(ListEvent::PagePrev);
        assert_eq!(state.page, 1);
        state.apply(ListEvent::PagePrev);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = loaded(12);
        state.apply(ListEvent::PageNext);
        state.apply(ListEvent::PageNext);
        state.apply(ListEvent::Search("1".to_string()));
        assert_eq!(state.page, 1);
        assert_eq!(page_ids(&state), vec!["1", "10", "11", "12"]);

        state.apply(ListEvent::PageNext);
        state.apply(ListEvent::Search(String::new()));
        assert_eq!(state.page, 1);
        assert_eq!(state.filtered_count(), 12);
    }

    #[test]
    fn test_search_by_name_and_id() {
        let mut state = TransactionsListState::default();
        state.apply(ListEvent::Loaded(vec![
            tx(1, "Budi", "Selesai"),
            tx(2, "Ani", "Selesai"),
            tx(3, "Bambang", "Selesai"),
            tx(13, "Citra", "Selesai"),
            tx(23, "Dewi", "Selesai"),
        ]));

        state.apply(ListEvent::Search("3".to_string()));
        assert_eq!(page_ids(&state), vec!["3", "13", "23"]);

        state.apply(ListEvent::Search("b".to_string()));
        assert_eq!(page_ids(&state), vec!["1", "3"]);
    }

    #[test]
    fn test_selection_replaces_and_dismisses() {
        let mut state = loaded(6);
        let first = state.items[0].clone();
        let second = state.items[1].clone();

        state.apply(ListEvent::Select(first));
        state.apply(ListEvent::Select(second.clone()));
        assert_eq!(state.selected, Some(second));

        state.apply(ListEvent::Dismiss);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_selection_survives_search_and_paging() {
        let mut state = loaded(12);
        let picked = state.items[0].clone();
        state.apply(ListEvent::Select(picked.clone()));

        state.apply(ListEvent::PageNext);
        state.apply(ListEvent::Search("zzz".to_string()));
        assert!(state.filtered().is_empty());
        assert_eq!(state.selected, Some(picked));
    }
}
