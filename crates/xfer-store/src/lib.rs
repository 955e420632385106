//! Record-store access for contract-transfer imports.
//!
//! The store itself is external; this crate defines the search capability it
//! must offer ([`RecordStore`]), an in-memory implementation, and the
//! [`DuplicateChecker`] that flags rows already registered.

mod checker;
mod error;
mod memory;
mod store;

pub use checker::{CheckStats, DuplicateChecker};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use store::{Record, RecordStore};
