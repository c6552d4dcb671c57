//! Admin list screens
//!
//! A list screen loads its whole collection once and then narrows it
//! locally: named filters, then the search box, then the column sort.
//! There is no pagination.

mod filters;

use std::collections::BTreeMap;
use std::fmt;

use pos_client::{HttpClient, PosClient, Resource};
use shared::query::{Searchable, SortState, Sortable, apply_sort, matches_search};

use crate::BackofficeResult;

pub use filters::{
    CustomerGroupsPage, CustomersPage, IngredientsPage, LoyaltyProgramsPage, PromotionsPage,
    SuppliersPage, TechnicalCardsPage, TransactionsPage, WarehousesPage,
};

type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// State of one list screen
pub struct ListPage<T> {
    rows: Vec<T>,
    search: String,
    sort: SortState,
    filters: BTreeMap<&'static str, Filter<T>>,
    loading: bool,
    error: Option<String>,
}

impl<T> fmt::Debug for ListPage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListPage")
            .field("rows", &self.rows.len())
            .field("search", &self.search)
            .field("sort", &self.sort)
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish()
    }
}

impl<T> ListPage<T>
where
    T: Resource + Searchable + Sortable,
{
    /// Empty page sorted by `default_sort` ascending
    pub fn new(default_sort: &str) -> Self {
        Self {
            rows: Vec::new(),
            search: String::new(),
            sort: SortState::new(default_sort),
            filters: BTreeMap::new(),
            loading: false,
            error: None,
        }
    }

    /// Page over rows that are already loaded
    pub fn with_rows(default_sort: &str, rows: Vec<T>) -> Self {
        let mut page = Self::new(default_sort);
        page.rows = rows;
        page
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Column header click
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort.toggle(column);
    }

    /// Install or replace a named filter
    pub fn set_filter(&mut self, name: &'static str, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) {
        self.filters.insert(name, Box::new(predicate));
    }

    pub fn clear_filter(&mut self, name: &str) {
        self.filters.remove(name);
    }

    pub fn has_filter(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error of the last load or delete
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Rows to display: filtered, searched and sorted
    pub fn visible(&self) -> Vec<&T> {
        let mut rows: Vec<&T> = self
            .rows
            .iter()
            .filter(|row| self.filters.values().all(|f| f(*row)))
            .filter(|row| matches_search(*row, &self.search))
            .collect();
        apply_sort(&mut rows, &self.sort);
        rows
    }

    /// Reload the collection from the backend
    pub async fn refresh<H: HttpClient>(&mut self, client: &PosClient<H>) -> BackofficeResult<()> {
        self.loading = true;
        let result = client.list::<T>().await;
        self.loading = false;
        match result {
            Ok(rows) => {
                tracing::debug!(resource = T::NAME, count = rows.len(), "List loaded");
                self.rows = rows;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Delete a record; the row disappears only when the backend agrees
    pub async fn delete<H: HttpClient>(&mut self, client: &PosClient<H>, id: i64) -> BackofficeResult<()> {
        match client.delete::<T>(id).await {
            Ok(()) => {
                self.rows.retain(|row| row.id() != id);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e.into())
            }
        }
    }

    /// Insert or replace a record saved by a form modal
    pub fn upsert(&mut self, record: T) {
        match self.rows.iter_mut().find(|row| row.id() == record.id()) {
            Some(existing) => *existing = record,
            None => self.rows.push(record),
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Warehouse;
    use shared::query::SortDirection;

    fn warehouse(id: i64, name: &str, active: bool) -> Warehouse {
        Warehouse {
            id,
            name: name.into(),
            address: None,
            is_active: active,
        }
    }

    fn page() -> ListPage<Warehouse> {
        ListPage::with_rows(
            "name",
            vec![
                warehouse(1, "Кухня", true),
                warehouse(2, "Бар", true),
                warehouse(3, "Архив", false),
            ],
        )
    }

    fn ids(rows: &[&Warehouse]) -> Vec<i64> {
        rows.iter().map(|w| w.id).collect()
    }

    #[test]
    fn test_visible_sorted() {
        let mut page = page();
        assert_eq!(ids(&page.visible()), [3, 2, 1]);
        page.toggle_sort("name");
        assert_eq!(page.sort().direction, SortDirection::Desc);
        assert_eq!(ids(&page.visible()), [1, 2, 3]);
    }

    #[test]
    fn test_filter_and_search() {
        let mut page = page();
        page.set_filter("active", |w: &Warehouse| w.is_active);
        assert_eq!(ids(&page.visible()), [2, 1]);
        page.set_search("КУХ");
        assert_eq!(ids(&page.visible()), [1]);
        page.clear_filter("active");
        page.set_search("");
        assert_eq!(page.visible().len(), 3);
    }

    #[test]
    fn test_upsert() {
        let mut page = page();
        page.upsert(warehouse(2, "Бар у входа", true));
        page.upsert(warehouse(9, "Подвал", true));
        assert_eq!(page.rows().len(), 4);
        assert_eq!(page.rows()[1].name, "Бар у входа");
    }
}
