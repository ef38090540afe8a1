//! Asset trait and the light/dark pairing record.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// A named design artifact (icon, image pack, color swatch, text
/// style) pulled from the design source.
///
/// Processors only need to read and rewrite the name and to inspect
/// the optional platform scope; the payload rides along untouched.
pub trait Asset {
    /// Current export name.
    fn name(&self) -> &str;

    /// Replace the export name with its transformed form.
    fn set_name(&mut self, name: String);

    /// Platform this asset is scoped to. `None` means the asset
    /// applies to every platform.
    fn platform(&self) -> Option<Platform> {
        None
    }
}

/// A light-mode asset paired with its optional dark-mode counterpart.
///
/// Invariant: `dark`, when present, carries the same transformed name
/// as `light`. Pairs are only constructed by the variant pairing
/// processor, which enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPair<A> {
    pub light: A,
    pub dark: Option<A>,
}

impl<A: Asset> AssetPair<A> {
    pub fn new(light: A, dark: Option<A>) -> Self {
        Self { light, dark }
    }

    /// The pair's export name (always the light asset's name).
    pub fn name(&self) -> &str {
        self.light.name()
    }
}
