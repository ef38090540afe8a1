//! Processing error type.
//!
//! Every processing entry point is fail-fast: the first error aborts
//! the whole batch and no partial result is produced. A partially
//! renamed export would be worse than no export.

/// Errors produced while validating, renaming, or pairing assets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A raw asset name did not match the configured validation
    /// pattern.
    #[error("Invalid asset name {name:?}: does not match {pattern:?}")]
    InvalidName { name: String, pattern: String },

    /// A dark-variant asset has no light-variant counterpart with the
    /// same transformed name.
    #[error("Dark asset {name:?} has no matching light asset")]
    UnmatchedVariant { name: String },

    /// Two assets in the same list transformed to the same final name
    /// while the processor was configured to reject duplicates.
    #[error("Duplicate asset name after transformation: {name:?}")]
    DuplicateName { name: String },

    /// A configured naming pattern is not valid regex syntax.
    /// Surfaced at rule construction, never mid-batch.
    #[error("Invalid naming pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
