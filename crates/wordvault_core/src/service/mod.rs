//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repo and store calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from persistence details.

pub mod word_list_service;
