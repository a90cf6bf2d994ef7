/*
 * Connector Shapes
 *
 * Discrete topology tag for one position of a rendered leak trace. A renderer
 * maps each shape straight to a line style (solid/dashed, start/end caps)
 * without looking at verdicts itself.
 */

use super::element::LeakTraceElement;
use crate::features::reachability::Reachability;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorShape {
    /// Root, next element confirmed reachable
    Start,
    /// Root, next element not confirmed reachable
    StartLastReachable,
    /// Reachable, next element reachable too
    NodeReachable,
    /// Reachable, next element not confirmed reachable
    NodeLastReachable,
    /// Unreachable, previous element unreachable too
    NodeUnreachable,
    /// Unreachable, previous element not unreachable
    NodeFirstUnreachable,
    NodeUnknown,
    /// Leaking instance, previous element unreachable
    End,
    /// Leaking instance, previous element not unreachable
    EndFirstUnreachable,
}

impl ConnectorShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorShape::Start => "start",
            ConnectorShape::StartLastReachable => "start_last_reachable",
            ConnectorShape::NodeReachable => "node_reachable",
            ConnectorShape::NodeLastReachable => "node_last_reachable",
            ConnectorShape::NodeUnreachable => "node_unreachable",
            ConnectorShape::NodeFirstUnreachable => "node_first_unreachable",
            ConnectorShape::NodeUnknown => "node_unknown",
            ConnectorShape::End => "end",
            ConnectorShape::EndFirstUnreachable => "end_first_unreachable",
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, ConnectorShape::Start | ConnectorShape::StartLastReachable)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, ConnectorShape::End | ConnectorShape::EndFirstUnreachable)
    }
}

impl fmt::Display for ConnectorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a renderer needs for one position of a trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow<'a> {
    pub index: usize,
    pub element: &'a LeakTraceElement,
    pub verdict: Reachability,
    pub maybe_leak_cause: bool,
    pub connector: ConnectorShape,
    pub is_root: bool,
    pub is_leaking_instance: bool,
}
