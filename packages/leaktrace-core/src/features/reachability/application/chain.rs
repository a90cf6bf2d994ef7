/*
 * Inspector Chain
 *
 * Runs every registered inspector over one element and combines the answers:
 * - no authoritative answer        → Unknown
 * - one or several that agree      → that verdict
 * - authoritative answers disagree → first registered wins, conflict recorded
 *
 * Registration order is resolution order. The chain holds no mutable state,
 * so one chain can classify elements from many threads.
 *
 * # Example
 * ```rust,ignore
 * let chain = InspectorChain::new()
 *     .with_inspector(Box::new(ActivityInspector::define()))
 *     .with_inspector(Box::new(ViewInspector::define()));
 *
 * let classification = chain.classify(&element);
 * ```
 */

use super::super::domain::{Classification, InspectorVote};
use super::super::infrastructure::{ActivityInspector, ViewInspector};
use super::super::ports::ReachabilityInspector;
use crate::features::leak_trace::domain::LeakTraceElement;

#[derive(Default)]
pub struct InspectorChain {
    inspectors: Vec<Box<dyn ReachabilityInspector>>,
}

impl InspectorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain with the Android framework inspectors (Activity, then View)
    pub fn android() -> Self {
        Self::new()
            .with_inspector(Box::new(ActivityInspector::define()))
            .with_inspector(Box::new(ViewInspector::define()))
    }

    /// Register an inspector (builder pattern)
    pub fn with_inspector(mut self, inspector: Box<dyn ReachabilityInspector>) -> Self {
        self.inspectors.push(inspector);
        self
    }

    /// Register several inspectors, keeping their order
    pub fn with_inspectors(
        mut self,
        inspectors: impl IntoIterator<Item = Box<dyn ReachabilityInspector>>,
    ) -> Self {
        self.inspectors.extend(inspectors);
        self
    }

    pub fn len(&self) -> usize {
        self.inspectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inspectors.is_empty()
    }

    /// Inspector names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.inspectors.iter().map(|i| i.name()).collect()
    }

    /// Classify one element with every inspector
    pub fn classify(&self, element: &LeakTraceElement) -> Classification {
        let votes: Vec<InspectorVote> = self
            .inspectors
            .iter()
            .filter_map(|inspector| {
                let verdict = inspector.classify(element);
                tracing::trace!(
                    "{} says {} for {}",
                    inspector.name(),
                    verdict,
                    element.class_name()
                );
                verdict
                    .is_authoritative()
                    .then(|| InspectorVote::new(inspector.name(), verdict))
            })
            .collect();

        Classification::from_votes(votes)
    }
}

impl std::fmt::Debug for InspectorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InspectorChain")
            .field("inspectors", &self.names())
            .finish()
    }
}
