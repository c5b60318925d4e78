//! Domain model for the vocabulary word list.
//!
//! # Responsibility
//! - Define the canonical word record shared by list, detail and search views.
//! - Enforce creation-time field requirements before anything is persisted.
//!
//! # Invariants
//! - Every record carries a list-unique `WordId`.
//! - Deletion is hard delete; there are no tombstones in this model.

pub mod word;
