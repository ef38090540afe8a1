//! Assetforge naming pipeline.
//!
//! Takes flat lists of raw design-source assets and produces
//! export-ready collections:
//!
//! - [`NamingRule`] -- optional validation pattern and `$N` rewrite
//!   template, compiled once when the processor is built.
//! - [`AssetsProcessor`] -- the two batch entry points:
//!   [`AssetsProcessor::process`] for plain asset groups and
//!   [`AssetsProcessor::process_pairs`] for light/dark themed groups.
//! - [`DuplicatePolicy`] -- tie-break for colliding transformed names.
//!
//! Everything here is synchronous and CPU-bound; fetching assets and
//! writing platform source files happen in the surrounding layers.

pub mod processor;
pub mod rule;

pub use processor::{AssetsProcessor, DuplicatePolicy};
pub use rule::NamingRule;
