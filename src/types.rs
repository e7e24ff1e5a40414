//! Shared types used across stages.
//!
//! [`TargetSpec`] is configuration data (it round-trips through
//! `appshots.toml`); the raster wrappers are in-memory only.

use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pixel dimensions of an image or a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both edges are at least one pixel.
    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Width over height. Only meaningful when [`is_positive`](Self::is_positive).
    pub fn ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A named output resolution, e.g. `iPhone_12` at 1170x2532.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSpec {
    pub label: String,
    pub width: u32,
    pub height: u32,
}

impl TargetSpec {
    pub fn new(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            label: label.into(),
            width,
            height,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Rectangle cut out of the source before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Pixels discarded on each side of the crop: `(left, right, top, bottom)`.
    pub fn margins(&self, source: Dimensions) -> (u32, u32, u32, u32) {
        (
            self.x,
            source.width - self.x - self.width,
            self.y,
            source.height - self.y - self.height,
        )
    }

    /// True when the region covers the whole source.
    pub fn is_full(&self, source: Dimensions) -> bool {
        self.x == 0 && self.y == 0 && self.width == source.width && self.height == source.height
    }
}

/// A decoded input image. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct SourceImage {
    image: DynamicImage,
}

impl SourceImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn dimensions(&self) -> Dimensions {
        let (width, height) = self.image.dimensions();
        Dimensions { width, height }
    }

    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }
}

/// Output of [`resize_to_fill`](crate::imaging::resize_to_fill): exactly the
/// requested dimensions.
#[derive(Debug, Clone)]
pub struct ResizedImage {
    image: DynamicImage,
}

impl ResizedImage {
    pub(crate) fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn dimensions(&self) -> Dimensions {
        let (width, height) = self.image.dimensions();
        Dimensions { width, height }
    }

    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}
