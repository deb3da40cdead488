//! Artwork Table Library
//!
//! A desktop table over the Art Institute of Chicago artwork catalog. Rows can
//! be selected in bulk across pages with one of two strategies: a lazy one
//! that keeps selecting as the user pages forward, and an eager one that
//! fetches every needed page up front.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
