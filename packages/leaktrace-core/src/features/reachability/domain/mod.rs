//! Reachability Domain - Verdicts & Conflict Records
//!
//! Value objects produced by the inspection chain. Domain logic here is
//! independent of any concrete inspector.
//!
//! ## Combination rule
//! - `Reachable` / `Unreachable` are authoritative
//! - `Unknown` never overrides an authoritative verdict
//! - Two authoritative verdicts that disagree form an [`InspectorConflict`];
//!   the first registered inspector wins

use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Value Objects
// ═══════════════════════════════════════════════════════════════════════════

/// Expected reachability of one trace element
///
/// This is domain knowledge about whether the object *should* still be alive,
/// not the mere fact that a reference to it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reachability {
    /// Expected to be alive (e.g. an attached view)
    Reachable,

    /// Expected to be garbage (e.g. a destroyed activity)
    Unreachable,

    /// No inspector had an opinion
    Unknown,
}

impl Reachability {
    /// Reachable or Unreachable
    pub fn is_authoritative(&self) -> bool {
        !matches!(self, Reachability::Unknown)
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Reachability::Reachable)
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Reachability::Unreachable)
    }
}

impl Default for Reachability {
    fn default() -> Self {
        Reachability::Unknown
    }
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reachability::Reachable => write!(f, "REACHABLE"),
            Reachability::Unreachable => write!(f, "UNREACHABLE"),
            Reachability::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One authoritative answer from a named inspector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InspectorVote {
    pub inspector: String,
    pub verdict: Reachability,
}

impl InspectorVote {
    pub fn new(inspector: impl Into<String>, verdict: Reachability) -> Self {
        Self {
            inspector: inspector.into(),
            verdict,
        }
    }
}

/// Authoritative votes that disagree about a single element
///
/// Votes are kept in registration order, so the first vote is the one that
/// was applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InspectorConflict {
    pub votes: Vec<InspectorVote>,
}

impl InspectorConflict {
    /// The vote that won (first registered)
    pub fn winner(&self) -> Option<&InspectorVote> {
        self.votes.first()
    }

    pub fn inspectors(&self) -> impl Iterator<Item = &str> {
        self.votes.iter().map(|v| v.inspector.as_str())
    }
}

impl fmt::Display for InspectorConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let votes = self
            .votes
            .iter()
            .map(|v| format!("{}={}", v.inspector, v.verdict))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", votes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Chain Output
// ═══════════════════════════════════════════════════════════════════════════

/// Result of running the whole inspection chain over one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Reachability,
    pub conflict: Option<InspectorConflict>,
}

impl Classification {
    pub fn unknown() -> Self {
        Self {
            verdict: Reachability::Unknown,
            conflict: None,
        }
    }

    /// Combine authoritative votes (registration order)
    pub fn from_votes(votes: Vec<InspectorVote>) -> Self {
        let Some(first) = votes.first() else {
            return Self::unknown();
        };

        let verdict = first.verdict;
        let disagree = votes.iter().any(|v| v.verdict != verdict);

        Self {
            verdict,
            conflict: disagree.then(|| InspectorConflict { votes }),
        }
    }

    pub fn is_conflicted(&self) -> bool {
        self.conflict.is_some()
    }
}
