/*
 * Leak Trace
 *
 * Ordered chain from a tracked root (index 0) to the leaking instance (last
 * index), with one resolved reachability verdict per element.
 *
 * A LeakTrace is only produced by the assembler, which guarantees:
 * - at least one element
 * - verdicts.len() == elements.len()
 * - every element satisfies the hierarchy/reference invariants
 *
 * Nothing is mutated after construction; a new leak means a new LeakTrace.
 */

use super::element::LeakTraceElement;
use crate::errors::{LeakTraceError, Result};
use crate::features::reachability::{InspectorConflict, Reachability};

/// Inspector disagreement recorded for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementConflict {
    pub index: usize,
    pub class_name: String,
    pub conflict: InspectorConflict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeakTrace {
    elements: Vec<LeakTraceElement>,
    verdicts: Vec<Reachability>,
    conflicts: Vec<ElementConflict>,
}

impl LeakTrace {
    pub(crate) fn new(
        elements: Vec<LeakTraceElement>,
        verdicts: Vec<Reachability>,
        conflicts: Vec<ElementConflict>,
    ) -> Self {
        debug_assert!(!elements.is_empty());
        debug_assert_eq!(elements.len(), verdicts.len());
        Self {
            elements,
            verdicts,
            conflicts,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: empty traces are rejected at assembly
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[LeakTraceElement] {
        &self.elements
    }

    pub fn verdicts(&self) -> &[Reachability] {
        &self.verdicts
    }

    /// Inspector conflicts resolved during assembly, in element order
    pub fn conflicts(&self) -> &[ElementConflict] {
        &self.conflicts
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn element(&self, index: usize) -> Result<&LeakTraceElement> {
        self.elements
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn verdict(&self, index: usize) -> Result<Reachability> {
        self.verdicts
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Tracked root the chain starts from
    pub fn root(&self) -> &LeakTraceElement {
        &self.elements[0]
    }

    pub fn leaking_instance(&self) -> &LeakTraceElement {
        &self.elements[self.elements.len() - 1]
    }

    pub fn last_index(&self) -> usize {
        self.elements.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LeakTraceElement, Reachability)> + '_ {
        self.elements.iter().zip(self.verdicts.iter().copied())
    }

    /// Number of elements with the given verdict
    pub fn count(&self, verdict: Reachability) -> usize {
        self.verdicts.iter().filter(|v| **v == verdict).count()
    }

    /// Verdict of a neighbour position; missing neighbours read as Unknown
    pub(crate) fn neighbor_verdict(&self, index: Option<usize>) -> Reachability {
        index
            .and_then(|i| self.verdicts.get(i).copied())
            .unwrap_or(Reachability::Unknown)
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.elements.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> LeakTraceError {
        LeakTraceError::IndexOutOfRange {
            index,
            len: self.elements.len(),
        }
    }
}
