//! Threadfile Storage Library
//!
//! This crate holds the extracted text of uploaded documents, keyed by
//! conversation id. It provides the [`ConversationFileStore`] trait and the
//! in-memory backend.
//!
//! # Keying
//!
//! Each conversation has at most one stored file. A new upload replaces the
//! previous one; there is no enumeration and no expiry.

pub mod factory;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use factory::create_store;
pub use memory::MemoryFileStore;
pub use threadfile_core::FileStoreBackend;
pub use traits::{ConversationFileStore, StoreError, StoreResult};
