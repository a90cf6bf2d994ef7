//! Common test utilities for leaktrace-core
//!
//! Shared builders for integration and property tests.

#![allow(dead_code)]

mod builders;

pub use builders::*;
