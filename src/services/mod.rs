//! Service Layer
//!
//! Catalog access and the async work behind both tables.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ServiceHub                             │
//! │  ┌──────────────┐  ┌─────────────────┐  ┌──────────────┐    │
//! │  │ HttpCatalog  │  │  eager_select   │  │   runtime    │    │
//! │  │ (page fetch) │  │ (bounded fetch) │  │   (tokio)    │    │
//! │  └──────────────┘  └─────────────────┘  └──────────────┘    │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ AppEvent
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                            │
//! │                (TableState, LogState)                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod eager_select;
pub mod runtime;
pub mod service_hub;
