//! Books repository for in-memory storage operations.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
};

/// Shelf state: insertion-ordered records plus the id counter.
///
/// Ids are assigned sequentially starting at 1 and are never reused while
/// the shelf lives; `clear` resets the counter.
#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    next_id: i32,
}

impl Shelf {
    fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }
}

/// Books repository backed by process memory.
///
/// Clones share the same underlying shelf, the way the pooled database
/// handles of the other repositories share a connection pool.
#[derive(Clone)]
pub struct BooksRepository {
    shelf: Arc<RwLock<Shelf>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self {
            shelf: Arc::new(RwLock::new(Shelf::new())),
        }
    }

    /// Insert a new book, assigning the next sequential id
    pub async fn insert(&self, fields: BookFields) -> Book {
        let mut shelf = self.shelf.write().await;
        let book = Book {
            id: shelf.next_id,
            title: fields.title,
            author: fields.author,
            year: fields.year,
            pages: fields.pages,
        };
        shelf.next_id += 1;
        shelf.books.push(book.clone());
        book
    }

    /// List all books in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.shelf.read().await.books.clone()
    }

    /// Get book by id
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.shelf
            .read()
            .await
            .books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Replace the stored fields of the book with the given id (id unchanged)
    pub async fn update(&self, id: i32, fields: BookFields) -> AppResult<Book> {
        let mut shelf = self.shelf.write().await;
        let book = shelf
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        book.title = fields.title;
        book.author = fields.author;
        book.year = fields.year;
        book.pages = fields.pages;

        Ok(book.clone())
    }

    /// Remove the book with the given id
    pub async fn remove(&self, id: i32) -> AppResult<()> {
        let mut shelf = self.shelf.write().await;
        let index = shelf
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        shelf.books.remove(index);
        Ok(())
    }

    /// Remove every book and reset id assignment to its initial value
    pub async fn clear(&self) {
        let mut shelf = self.shelf.write().await;
        shelf.books.clear();
        shelf.next_id = 1;
    }
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}
