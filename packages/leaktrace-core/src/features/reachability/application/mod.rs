/*
 * Reachability Application Layer
 *
 * The inspection chain that turns inspector answers into one verdict.
 */

mod chain;

pub use chain::InspectorChain;
