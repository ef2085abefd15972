//! Bundled boundary backends for CourseRAG.
//!
//! - [`StaticCatalog`] answers `/api/courses` from a fixed list of titles.
//! - [`OfflineQueryService`] stands in when no retrieval backend is wired.

pub mod offline;
pub mod static_catalog;

pub use offline::OfflineQueryService;
pub use static_catalog::StaticCatalog;
