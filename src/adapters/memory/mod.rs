pub mod book_catalog;
pub mod seed;

pub use book_catalog::BookCatalog;
pub use seed::seed_books;
