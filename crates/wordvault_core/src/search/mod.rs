//! Pure filtering and tallying over the word list.
//!
//! # Responsibility
//! - Derive the visible subsequence for the list view.
//! - Compute aggregate counts for the filter selector.

pub mod filter;
