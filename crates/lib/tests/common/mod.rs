//! # Common Test Utilities
//!
//! Shared setup for the library's integration tests.

// Not every test file uses every helper.
#![allow(unused)]

pub use formaid_test_utils::{entry, fixture_entries, fixture_knowledge_base, MockAiProvider};

/// Installs a compact tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .with_test_writer()
        .try_init();
}
