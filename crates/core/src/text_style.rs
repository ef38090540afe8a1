//! Typography model.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;

/// A named text style from the design source's typography page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub name: String,
    pub font_name: String,
    pub font_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

impl TextStyle {
    pub fn new(name: impl Into<String>, font_name: impl Into<String>, font_size: f64) -> Self {
        Self {
            name: name.into(),
            font_name: font_name.into(),
            font_size,
            line_height: None,
            letter_spacing: None,
        }
    }
}

impl Asset for TextStyle {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
