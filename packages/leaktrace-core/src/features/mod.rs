//! Feature modules
//!
//! - `reachability`: inspectors and the inspection chain
//! - `leak_trace`: trace model, assembly and cause/connector derivation

pub mod leak_trace;
pub mod reachability;
