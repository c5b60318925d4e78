//! Persistence glue between the in-memory word list and the key-value store.
//!
//! # Responsibility
//! - Serialize and hydrate the whole-list blob under its fixed store key.
//! - Recover from unparsable persisted state via seed fallback.
//!
//! # Invariants
//! - The entire list is the unit of persistence; there is no partial-update
//!   wire format.

pub mod word_list_repo;
