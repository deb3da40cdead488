//! Layout Components
//!
//! Header and activity log panel.

pub mod header;
pub mod log_panel;
