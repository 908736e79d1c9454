//! Core domain entities.
//!
//! - [`Book`] - A catalog entry, persisted by [`crate::domain::repositories::BookRepository`]
//! - [`BookInput`] - Caller-supplied fields for create and update
//! - [`BookPage`] - One page of a paginated listing
//! - [`PriceQuote`] - A discounted price, computed fresh on every request

pub mod book;
pub mod price_quote;

pub use book::{Book, BookInput, BookPage};
pub use price_quote::PriceQuote;
