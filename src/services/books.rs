//! Book collection service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDraft},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a new book after checking required fields
    pub async fn add(&self, draft: BookDraft) -> AppResult<Book> {
        let fields = draft.into_fields().map_err(AppError::MissingField)?;
        Ok(self.repository.books.insert(fields).await)
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.repository.books.list().await
    }

    /// Get a book by id
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Replace the fields of an existing book.
    ///
    /// The update payload is a full book record, so the same required-field
    /// validation as `add` applies before the id lookup.
    pub async fn update(&self, id: i32, draft: BookDraft) -> AppResult<Book> {
        let fields = draft.into_fields().map_err(AppError::MissingField)?;
        self.repository.books.update(id, fields).await
    }

    /// Remove a book by id
    pub async fn remove(&self, id: i32) -> AppResult<()> {
        self.repository.books.remove(id).await
    }

    /// Remove every book and reset id assignment. Used for test isolation.
    pub async fn remove_all(&self) {
        self.repository.books.clear().await
    }
}
