//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wordvault_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // A tiny probe validates core crate wiring independently from the
    // mobile/FFI runtime setup.
    println!("wordvault_core ping={}", wordvault_core::ping());
    println!("wordvault_core version={}", wordvault_core::core_version());
    println!(
        "wordvault_core seed_words={}",
        wordvault_core::seed_words().len()
    );
}
