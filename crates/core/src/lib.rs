//! Assetforge domain core.
//!
//! Data model and naming primitives for the design-asset export
//! pipeline:
//!
//! - [`Asset`] -- trait implemented by every exportable payload type.
//! - [`AssetPair`] -- a light-mode asset with its optional dark-mode
//!   counterpart.
//! - [`NameStyle`] -- target identifier convention (camelCase /
//!   snake_case) and the pure case-conversion functions behind it.
//! - [`Error`] -- the error type shared by every processing entry
//!   point.
//!
//! This crate is pure: no I/O, no async, no cross-call state. Talking
//! to the design source and writing platform output files belong to
//! the surrounding layers.

pub mod asset;
pub mod color;
pub mod error;
pub mod image;
pub mod naming;
pub mod platform;
pub mod text_style;

pub use asset::{Asset, AssetPair};
pub use color::Color;
pub use error::Error;
pub use image::{Image, ImagePack};
pub use naming::NameStyle;
pub use platform::Platform;
pub use text_style::TextStyle;
