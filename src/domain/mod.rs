//! Domain - Pure Data Structures and Selection Logic
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod artwork;
pub mod config;
pub mod reconcile;
pub mod selection;
