//! Session manager implementations for CourseRAG.

pub mod in_memory;

pub use in_memory::InMemorySessionManager;
