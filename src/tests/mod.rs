// src/tests/mod.rs

//! Tests for _cwlib_.
//!
//! Tests are placed at `src/tests/`, inside the `cwlib`, for crate-internal
//! visibility.

pub mod common;
pub mod summary_tests;
