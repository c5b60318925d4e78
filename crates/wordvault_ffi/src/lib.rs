//! FFI surface for the mobile UI shell.
//! Everything exported to Dart lives in [`api`].

pub mod api;
