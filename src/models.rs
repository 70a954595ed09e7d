//! Domain types that mirror the SQLite schema and get passed between the
//! persistence layer and whatever front end drives it. These stay light-weight
//! data holders so callers can focus on presentation and the store can focus
//! on queries.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the books table.
pub struct BookRecord {
    /// Primary key from the database. Assigned on insert and never reused,
    /// so edit/delete flows can hold on to it safely.
    pub id: i64,
    /// Title displayed in listings and matched by substring search.
    pub title: String,
    /// Free-form category label.
    pub category: String,
    /// Publication year. Kept as an integer so the store can reject
    /// non-numeric input at the boundary instead of persisting garbage.
    pub year: i64,
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.title, self.category, self.year)
    }
}

/// The closed set of columns a caller may update one at a time. Each variant
/// maps to a fixed parameterized statement inside the store, so caller input
/// never reaches the SQL text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Category,
    Year,
}

impl Field {
    /// Column name as it appears in the schema.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Category => "category",
            Field::Year => "year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
