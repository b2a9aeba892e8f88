//! Reaction read-model and command handling
//!
//! [`ReactionAggregator`] is the only sanctioned way to read like/dislike
//! summaries. [`ReactionCommandProcessor`] turns a desired status into the
//! smallest store mutation.

mod aggregator;
mod command;
#[cfg(test)]
pub(crate) mod memory;

pub use aggregator::ReactionAggregator;
pub use command::{ReactionCommandProcessor, ReactionOutcome};
