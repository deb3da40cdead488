//! Components - Reusable UI Components
//!
//! Reusable UI components. State stays with the caller; components render it
//! and report user input through handlers.

pub mod composite;
pub mod layout;
pub mod primitives;
