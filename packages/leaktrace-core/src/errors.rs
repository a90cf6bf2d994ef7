//! Error types for leaktrace-core
//!
//! Provides unified error handling across the crate.

use crate::config::ConfigError;
use crate::features::reachability::InspectorConflict;
use std::fmt;
use thiserror::Error;

/// Why a sequence of elements could not be assembled into a leak trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// No elements at all
    Empty,

    /// Element has no class in its hierarchy
    EmptyClassHierarchy,

    /// Non-terminal element has no outgoing reference
    MissingReference,

    /// Terminal (leaking) element has an outgoing reference
    TerminalReference,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Empty => write!(f, "trace has no elements"),
            MalformedReason::EmptyClassHierarchy => write!(f, "class hierarchy is empty"),
            MalformedReason::MissingReference => {
                write!(f, "non-terminal element has no outgoing reference")
            }
            MalformedReason::TerminalReference => {
                write!(f, "leaking instance has an outgoing reference")
            }
        }
    }
}

/// Main error type for leak trace operations
#[derive(Debug, Error)]
pub enum LeakTraceError {
    /// Input sequence violates a trace invariant
    #[error("Malformed trace{}: {reason}", index.map(|i| format!(" at element {}", i)).unwrap_or_default())]
    MalformedTrace {
        index: Option<usize>,
        reason: MalformedReason,
    },

    /// Inspectors disagree about an element (strict mode only)
    #[error("Inspector conflict at element {index}: {conflict}")]
    InspectorConflict {
        index: usize,
        conflict: InspectorConflict,
    },

    /// Position outside `[0, len)`
    #[error("Index {index} out of range for trace of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl LeakTraceError {
    /// Create a malformed-trace error pointing at one element
    pub fn malformed_at(index: usize, reason: MalformedReason) -> Self {
        LeakTraceError::MalformedTrace {
            index: Some(index),
            reason,
        }
    }

    /// Create the error for an empty input sequence
    pub fn empty() -> Self {
        LeakTraceError::MalformedTrace {
            index: None,
            reason: MalformedReason::Empty,
        }
    }
}

/// Result type alias for leak trace operations
pub type Result<T> = std::result::Result<T, LeakTraceError>;
