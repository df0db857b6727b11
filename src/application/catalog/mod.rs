mod catalog_service;
mod errors;

pub use catalog_service::{
    ServiceDependencies, add_book, checkout_book, get_book, list_books, return_book,
};
pub use errors::{CatalogApplicationError, Result};
