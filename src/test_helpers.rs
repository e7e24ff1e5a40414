//! Shared test utilities: synthetic images and scratch folders.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = input_dir(&[("home.png", 300, 200), ("detail.jpg", 120, 260)]);
//! let images = scan(tmp.path()).unwrap();
//! assert_eq!(file_names(&images), ["detail.jpg", "home.png"]);
//! ```

use image::{ImageEncoder, Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;

use crate::config::AppConfig;
use crate::scan::SourceFile;
use crate::types::TargetSpec;

// =========================================================================
// Synthetic images
// =========================================================================

fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    })
}

/// Write a gradient PNG of the given size.
pub fn write_png(path: &Path, width: u32, height: u32) {
    gradient(width, height).save(path).unwrap();
}

/// Write a gradient JPEG of the given size, regardless of the path's extension.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a temp folder holding one synthetic image per `(name, w, h)`.
///
/// `.jpg`/`.jpeg` names are written as JPEG, everything else as PNG.
pub fn input_dir(images: &[(&str, u32, u32)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for &(name, w, h) in images {
        let path = tmp.path().join(name);
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            write_jpeg(&path, w, h);
        } else {
            write_png(&path, w, h);
        }
    }
    tmp
}

// =========================================================================
// Config and result helpers
// =========================================================================

/// Stock config with the screenshot catalog replaced by small targets.
///
/// Keeps real-image tests fast; labels mirror real catalog entries so
/// category lookups still work.
pub fn small_catalog_config(targets: &[(&str, u32, u32)]) -> AppConfig {
    let mut config = AppConfig::default();
    config.screenshots.targets = targets
        .iter()
        .map(|&(label, w, h)| TargetSpec::new(label, w, h))
        .collect();
    config
        .categories
        .retain(|label, _| targets.iter().any(|(l, _, _)| l == label));
    config
}

/// File names of scanned sources, in scan order.
pub fn file_names(sources: &[SourceFile]) -> Vec<&str> {
    sources.iter().map(|s| s.file_name.as_str()).collect()
}

/// Sorted file names directly inside `dir`.
pub fn list_dir(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
