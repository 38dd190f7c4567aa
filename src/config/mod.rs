//! Configuration module for the expense tracker
//!
//! Resolves where the persisted table lives and where exports go by
//! default. The resolved paths are passed explicitly to the store; nothing
//! is held in process-wide state.

pub mod paths;

pub use paths::ExpensePaths;
