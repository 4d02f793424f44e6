//! Crate-level tests for recomment-core.
