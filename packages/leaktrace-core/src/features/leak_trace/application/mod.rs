/*
 * Leak Trace Application Layer
 *
 * Assembly of traces and the pure derivations renderers consume.
 */

mod assembler;
mod deriver;

pub use assembler::LeakTraceAssembler;
pub use deriver::{annotate, connector_shape, leak_cause_candidates, maybe_leak_cause};
