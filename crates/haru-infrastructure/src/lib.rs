//! Infrastructure layer: file-backed state store, in-memory store, the
//! Quotable HTTP client and path management.

pub mod json_store;
pub mod memory_store;
pub mod paths;
pub mod quotable;

pub use json_store::JsonStateStore;
pub use memory_store::MemoryStateStore;
pub use paths::HaruPaths;
pub use quotable::QuotableClient;
