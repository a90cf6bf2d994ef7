/*
 * Reachability Inspection
 *
 * Assigns an expected-reachability verdict to each leak trace element using
 * pluggable inspectors.
 *
 * Architecture:
 * - Domain: Reachability, InspectorVote, InspectorConflict, Classification
 * - Ports: ReachabilityInspector trait
 * - Infrastructure: FieldInspector, built-in Activity/View definitions
 * - Application: InspectorChain
 *
 * Combination:
 * - Every inspector runs on every element
 * - Unknown answers are dropped
 * - Disagreeing authoritative answers are resolved in registration order
 *   and reported, never silently swallowed
 */

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::InspectorChain;
pub use domain::{Classification, InspectorConflict, InspectorVote, Reachability};
pub use infrastructure::{ActivityInspector, FieldInspector, ViewInspector};
pub use ports::ReachabilityInspector;
