//! # CourseRAG Core
//!
//! Domain types, boundary traits, and error definitions for the CourseRAG
//! API. This crate has **no web framework dependencies**: it defines the
//! contract that the gateway consumes and that backends implement.
//!
//! ## Boundaries
//!
//! The API layer talks to three collaborators, each defined as a trait here:
//! - [`SessionManager`] creates sessions and records exchanges
//! - [`QueryService`] answers a question for a session
//! - [`CourseAnalytics`] reports catalog statistics
//!
//! Implementations live in their own crates, and tests swap in doubles.

pub mod analytics;
pub mod error;
pub mod query;
pub mod session;

// Re-export key types at crate root for ergonomics
pub use analytics::{CourseAnalytics, CourseStats};
pub use error::{AnalyticsError, Error, QueryError, Result, SessionError};
pub use query::{QueryAnswer, QueryService};
pub use session::{Exchange, SessionId, SessionManager};
