/*
 * Leak Trace Assembler
 *
 * Turns an externally built root-to-leak path into a LeakTrace:
 * 1. Validate the input (non-empty, hierarchies, reference placement)
 * 2. Run the inspector chain over every element
 * 3. Record (or, in strict mode, reject) inspector conflicts
 *
 * Assembly is pure and idempotent: same elements + same inspectors give the
 * same verdicts. A malformed input never produces a partial trace.
 *
 * # Example
 * ```rust,ignore
 * let assembler = LeakTraceAssembler::android();
 * let trace = assembler.assemble(elements)?;
 *
 * for conflict in trace.conflicts() {
 *     eprintln!("inspectors disagree at {}: {}", conflict.index, conflict.conflict);
 * }
 * ```
 */

use super::super::domain::{ElementConflict, LeakTrace, LeakTraceElement};
use crate::config::InspectionConfig;
use crate::errors::{LeakTraceError, MalformedReason, Result};
use crate::features::reachability::{InspectorChain, Reachability};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Default)]
pub struct LeakTraceAssembler {
    chain: InspectorChain,
    strict_conflicts: bool,
}

impl LeakTraceAssembler {
    pub fn new(chain: InspectorChain) -> Self {
        Self {
            chain,
            strict_conflicts: false,
        }
    }

    /// Assembler with the Android framework inspectors
    pub fn android() -> Self {
        Self::new(InspectorChain::android())
    }

    pub fn from_config(config: &InspectionConfig) -> Result<Self> {
        let chain = config.build_chain()?;
        Ok(Self::new(chain).strict_conflicts(config.strict_conflicts))
    }

    /// Builder: Fail on inspector conflicts instead of recording them
    pub fn strict_conflicts(mut self, v: bool) -> Self {
        self.strict_conflicts = v;
        self
    }

    pub fn chain(&self) -> &InspectorChain {
        &self.chain
    }

    /// Check the input contract without classifying anything
    pub fn validate(elements: &[LeakTraceElement]) -> Result<()> {
        let Some(last) = elements.len().checked_sub(1) else {
            return Err(LeakTraceError::empty());
        };

        for (index, element) in elements.iter().enumerate() {
            if element.class_hierarchy.is_empty() {
                return Err(LeakTraceError::malformed_at(
                    index,
                    MalformedReason::EmptyClassHierarchy,
                ));
            }

            match (index == last, element.reference.is_some()) {
                (true, true) => {
                    return Err(LeakTraceError::malformed_at(
                        index,
                        MalformedReason::TerminalReference,
                    ))
                }
                (false, false) => {
                    return Err(LeakTraceError::malformed_at(
                        index,
                        MalformedReason::MissingReference,
                    ))
                }
                _ => {}
            }
        }

        Ok(())
    }

    /// Assemble one trace
    pub fn assemble(&self, elements: Vec<LeakTraceElement>) -> Result<LeakTrace> {
        Self::validate(&elements)?;

        let mut verdicts = Vec::with_capacity(elements.len());
        let mut conflicts = Vec::new();

        for (index, element) in elements.iter().enumerate() {
            let classification = self.chain.classify(element);

            if let Some(conflict) = classification.conflict {
                tracing::warn!(
                    "inspector conflict at element {} ({}): {}, keeping {}",
                    index,
                    element.class_name(),
                    conflict,
                    classification.verdict
                );

                if self.strict_conflicts {
                    return Err(LeakTraceError::InspectorConflict { index, conflict });
                }

                conflicts.push(ElementConflict {
                    index,
                    class_name: element.class_name().to_string(),
                    conflict,
                });
            }

            verdicts.push(classification.verdict);
        }

        let trace = LeakTrace::new(elements, verdicts, conflicts);

        tracing::debug!(
            "assembled leak trace: {} elements ({} reachable, {} unreachable, {} unknown, {} conflicts)",
            trace.len(),
            trace.count(Reachability::Reachable),
            trace.count(Reachability::Unreachable),
            trace.count(Reachability::Unknown),
            trace.conflicts().len()
        );

        Ok(trace)
    }

    /// Assemble independent traces; results keep input order
    pub fn assemble_all(&self, traces: Vec<Vec<LeakTraceElement>>) -> Vec<Result<LeakTrace>> {
        #[cfg(feature = "parallel")]
        let results: Vec<_> = traces
            .into_par_iter()
            .map(|elements| self.assemble(elements))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = traces
            .into_iter()
            .map(|elements| self.assemble(elements))
            .collect();

        results
    }
}
