//! Record operations on the books table. Every method encapsulates one
//! parameterized statement so the rest of the codebase never assembles SQL
//! text from caller input.

use rusqlite::{params, Row};

use crate::db::BookStore;
use crate::error::{Result, StoreError};
use crate::models::{BookRecord, Field};

impl BookStore {
    /// Validate and insert a new record, returning its assigned id.
    ///
    /// `year` arrives as text because that is what the input boundary hands
    /// us; it must parse as an integer before anything is written. Titles
    /// and categories are trimmed and must be non-empty.
    pub fn create(&self, title: &str, category: &str, year: &str) -> Result<i64> {
        let title = require_text(Field::Title, title)?;
        let category = require_text(Field::Category, category)?;
        let year = parse_year(year)?;

        self.conn.execute(
            "INSERT INTO books (title, category, year) VALUES (?1, ?2, ?3)",
            params![title, category, year],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Retrieve every present record in insertion order. The query doubles
    /// as the single source of truth for how records are ordered.
    pub fn list_all(&self) -> Result<Vec<BookRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, category, year FROM books ORDER BY id")?;

        let records = stmt
            .query_map([], record_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Retrieve records whose title contains `needle`, in insertion order.
    ///
    /// Matching follows SQLite's `LIKE`, which is case-insensitive for
    /// ASCII. Wildcard characters in the needle are escaped so they match
    /// literally. An empty needle returns every record.
    pub fn search(&self, needle: &str) -> Result<Vec<BookRecord>> {
        if needle.is_empty() {
            return self.list_all();
        }

        let pattern = format!("%{}%", escape_like(needle));
        let mut stmt = self.conn.prepare(
            "SELECT id, title, category, year FROM books
             WHERE title LIKE ?1 ESCAPE '\\'
             ORDER BY id",
        )?;

        let records = stmt
            .query_map([pattern], record_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Fetch a single record by id.
    pub fn get(&self, id: i64) -> Result<BookRecord> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, category, year FROM books WHERE id = ?1")?;

        stmt.query_row([id], record_from_row)
            .map_err(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound { id },
                other => StoreError::Storage(other),
            })
    }

    /// Update a single column of an existing record, leaving the others
    /// untouched. The statement text is fixed per field; only values are
    /// bound. The change is committed immediately.
    pub fn update_field(&self, id: i64, field: Field, new_value: &str) -> Result<()> {
        let updated = match field {
            Field::Title => {
                let title = require_text(Field::Title, new_value)?;
                self.conn.execute(
                    "UPDATE books SET title = ?1 WHERE id = ?2",
                    params![title, id],
                )?
            }
            Field::Category => {
                let category = require_text(Field::Category, new_value)?;
                self.conn.execute(
                    "UPDATE books SET category = ?1 WHERE id = ?2",
                    params![category, id],
                )?
            }
            Field::Year => {
                let year = parse_year(new_value)?;
                self.conn.execute(
                    "UPDATE books SET year = ?1 WHERE id = ?2",
                    params![year, id],
                )?
            }
        };

        if updated == 0 {
            Err(StoreError::NotFound { id })
        } else {
            Ok(())
        }
    }

    /// Permanently remove a record. Reports `NotFound` rather than silently
    /// succeeding when the id does not exist.
    pub fn delete(&self, id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1", params![id])?;

        if deleted == 0 {
            Err(StoreError::NotFound { id })
        } else {
            Ok(())
        }
    }

    /// Number of present records.
    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Map one result row onto the domain struct. Shared by every SELECT so the
/// column order stays consistent.
fn record_from_row(row: &Row<'_>) -> rusqlite::Result<BookRecord> {
    Ok(BookRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        year: row.get(3)?,
    })
}

/// Trim and reject empty required text, naming the offending field.
fn require_text(field: Field, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(StoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse the year text, rejecting anything that is not a whole number.
fn parse_year(value: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| {
        StoreError::Validation(format!("year must be a whole number, got {value:?}"))
    })
}

/// Backslash-escape `LIKE` wildcards so a needle containing `%` or `_`
/// matches those characters literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
