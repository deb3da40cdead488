//! Catalog Table Feature
//!
//! The paged artwork table shared by both selection strategies.

pub mod controller;
pub mod page;
