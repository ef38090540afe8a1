//! Image and image-pack models.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::platform::Platform;

/// A single exported bitmap or vector rendition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub name: String,
    /// Download URL handed out by the design source.
    pub url: String,
    /// Source format, e.g. "pdf", "svg", "png".
    pub format: String,
    /// Render scale for raster formats. `None` for vector formats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl Image {
    pub fn new(name: impl Into<String>, url: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            format: format.into(),
            scale: None,
        }
    }
}

impl Asset for Image {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// A named set of renditions of the same image at different scales.
///
/// Renaming the pack renames every rendition, keeping the set
/// consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePack {
    pub name: String,
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl ImagePack {
    /// Pack holding a single rendition, named after it.
    pub fn single(image: Image) -> Self {
        Self {
            name: image.name.clone(),
            images: vec![image],
            platform: None,
        }
    }

    /// Pack holding multiple renditions under one name.
    pub fn new(name: impl Into<String>, images: Vec<Image>) -> Self {
        Self {
            name: name.into(),
            images,
            platform: None,
        }
    }
}

impl Asset for ImagePack {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        for image in &mut self.images {
            image.name = name.clone();
        }
        self.name = name;
    }

    fn platform(&self) -> Option<Platform> {
        self.platform
    }
}
