//! Client-side list search and sort
//!
//! List screens load the whole collection once and narrow it locally;
//! nothing here talks to the backend.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rows that take part in free-text search
pub trait Searchable {
    /// Text fields the search box looks at
    fn search_fields(&self) -> Vec<&str>;
}

/// Case-insensitive substring match over the row's search fields.
/// A blank query matches every row.
pub fn matches_search<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Column a list is sorted by, and in which direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Header click: same column flips direction, a new column starts ascending
    pub fn toggle(&mut self, column: &str) {
        if self.column == column {
            self.direction = self.direction.reversed();
        } else {
            self.column = column.to_string();
            self.direction = SortDirection::Asc;
        }
    }
}

/// Value a row exposes for one sortable column
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    /// Empty cell; always sorted after present values
    Missing,
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, Self::text)
    }

    pub fn opt_number(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Number)
    }

    pub fn opt_date(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Missing, Self::Date)
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Rows that can be ordered by named columns
pub trait Sortable {
    fn sort_key(&self, column: &str) -> SortKey;
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn sort_key(&self, column: &str) -> SortKey {
        (**self).sort_key(column)
    }
}

/// Stable sort by the given state. Missing values go last in both directions.
pub fn apply_sort<T: Sortable>(rows: &mut [T], sort: &SortState) {
    rows.sort_by(|a, b| {
        let (ka, kb) = (a.sort_key(&sort.column), b.sort_key(&sort.column));
        match (&ka, &kb) {
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Greater,
            (_, SortKey::Missing) => Ordering::Less,
            _ => match sort.direction {
                SortDirection::Asc => ka.compare(&kb),
                SortDirection::Desc => kb.compare(&ka),
            },
        }
    });
}
