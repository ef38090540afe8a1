//! Color swatch model.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::platform::Platform;

/// A named color swatch with components in the 0.0 to 1.0 range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub fn new(name: impl Into<String>, red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            name: name.into(),
            platform: None,
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Scope this color to a single platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }
}

impl Asset for Color {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn platform(&self) -> Option<Platform> {
        self.platform
    }
}
