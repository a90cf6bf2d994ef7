/*
 * Cause & Connector Derivation
 *
 * Pure functions over an assembled LeakTrace.
 *
 * maybe_leak_cause(i):
 * - false for the leaking instance and for Unreachable elements
 * - otherwise true iff the next element is not confirmed Reachable
 *
 * connector_shape(i):
 * - root:            Start / StartLastReachable   (next Reachable or not)
 * - leaking object:  End / EndFirstUnreachable    (previous Unreachable or not)
 * - Unknown:         NodeUnknown
 * - Reachable:       NodeReachable / NodeLastReachable      (next Reachable or not)
 * - Unreachable:     NodeUnreachable / NodeFirstUnreachable (previous Unreachable or not)
 *
 * The root rule is checked before the leaking-instance rule, so a single
 * element trace is drawn as a root. Neighbours outside the trace read as
 * Unknown.
 */

use super::super::domain::{ConnectorShape, LeakReference, LeakTrace, LeakTraceElement, TraceRow};
use crate::errors::Result;
use crate::features::leak_trace::domain::{HolderKind, ReferenceKind};
use crate::features::reachability::Reachability;
use std::fmt;

/// Whether the reference at `index` is a candidate leak cause
pub fn maybe_leak_cause(trace: &LeakTrace, index: usize) -> Result<bool> {
    trace.check_index(index)?;
    Ok(cause_at(trace, index))
}

/// Connector topology for `index`
pub fn connector_shape(trace: &LeakTrace, index: usize) -> Result<ConnectorShape> {
    trace.check_index(index)?;
    Ok(shape_at(trace, index))
}

/// One row per element, root first
pub fn annotate(trace: &LeakTrace) -> Vec<TraceRow<'_>> {
    let last = trace.last_index();
    trace
        .iter()
        .enumerate()
        .map(|(index, (element, verdict))| TraceRow {
            index,
            element,
            verdict,
            maybe_leak_cause: cause_at(trace, index),
            connector: shape_at(trace, index),
            is_root: index == 0,
            is_leaking_instance: index == last,
        })
        .collect()
}

/// Indices whose outgoing reference may cause the leak
pub fn leak_cause_candidates(trace: &LeakTrace) -> Vec<usize> {
    (0..trace.len()).filter(|&i| cause_at(trace, i)).collect()
}

fn cause_at(trace: &LeakTrace, index: usize) -> bool {
    if index == trace.last_index() || trace.verdicts()[index].is_unreachable() {
        return false;
    }
    !trace.neighbor_verdict(Some(index + 1)).is_reachable()
}

fn shape_at(trace: &LeakTrace, index: usize) -> ConnectorShape {
    let next = trace.neighbor_verdict(Some(index + 1));
    let previous = trace.neighbor_verdict(index.checked_sub(1));

    if index == 0 {
        return if next.is_reachable() {
            ConnectorShape::Start
        } else {
            ConnectorShape::StartLastReachable
        };
    }

    if index == trace.last_index() {
        return if previous.is_unreachable() {
            ConnectorShape::End
        } else {
            ConnectorShape::EndFirstUnreachable
        };
    }

    match trace.verdicts()[index] {
        Reachability::Unknown => ConnectorShape::NodeUnknown,
        Reachability::Reachable if next.is_reachable() => ConnectorShape::NodeReachable,
        Reachability::Reachable => ConnectorShape::NodeLastReachable,
        Reachability::Unreachable if previous.is_unreachable() => ConnectorShape::NodeUnreachable,
        Reachability::Unreachable => ConnectorShape::NodeFirstUnreachable,
    }
}

impl LeakTrace {
    pub fn maybe_leak_cause(&self, index: usize) -> Result<bool> {
        maybe_leak_cause(self, index)
    }

    pub fn connector_shape(&self, index: usize) -> Result<ConnectorShape> {
        connector_shape(self, index)
    }

    pub fn rows(&self) -> Vec<TraceRow<'_>> {
        annotate(self)
    }

    pub fn leak_cause_candidates(&self) -> Vec<usize> {
        leak_cause_candidates(self)
    }
}

/// Column at which the reference name starts in the element's Display output
fn reference_column(element: &LeakTraceElement, reference: &LeakReference) -> usize {
    let mut column = element.class_name().chars().count() + 1;
    if reference.kind == ReferenceKind::StaticField {
        column += "static ".len();
    }
    if matches!(element.holder, HolderKind::Array | HolderKind::Thread) {
        column += element.holder.as_str().len() + 1;
    }
    column
}

impl fmt::Display for LeakTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in annotate(self) {
            let prefix = if row.is_root { "* " } else { "* ↳ " };
            writeln!(f, "{}{}", prefix, row.element)?;

            if let (true, Some(reference)) = (row.maybe_leak_cause, &row.element.reference) {
                let column = prefix.chars().count() + reference_column(row.element, reference);
                writeln!(
                    f,
                    "{}{}",
                    " ".repeat(column),
                    "~".repeat(reference.display_name().chars().count())
                )?;
            }
        }
        Ok(())
    }
}
