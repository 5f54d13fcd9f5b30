//! Book model and request payload types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique identifier assigned by the store
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
}

/// Incoming book payload for create and update requests.
///
/// Every field is optional at the serde level so that required-field
/// validation can name the exact missing field instead of surfacing a
/// generic deserialization failure. Unknown keys (a client-supplied `id`
/// among them) are ignored; the store owns id assignment.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookDraft {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub pages: Option<i32>,
}

/// A complete set of book fields, before an id is assigned.
#[derive(Debug, Clone)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
}

impl BookDraft {
    /// Check that every required field is present (and non-null), in
    /// declaration order. Fails with the name of the first missing field.
    pub fn into_fields(self) -> Result<BookFields, &'static str> {
        let title = self.title.ok_or("title")?;
        let author = self.author.ok_or("author")?;
        let year = self.year.ok_or("year")?;
        let pages = self.pages.ok_or("pages")?;

        Ok(BookFields {
            title,
            author,
            year,
            pages,
        })
    }
}
