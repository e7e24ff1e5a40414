//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, ImageBackend};
use super::params::Compression;
use crate::types::{ResizedImage, SourceImage};
use image::codecs::png::{FilterType as PngFilter, PngEncoder};
use image::{ImageFormat, ImageReader};
use std::path::Path;
use std::sync::LazyLock;

/// Extensions accepted as screenshot or icon sources.
///
/// Screenshots usually arrive as PNG or JPEG; TIFF and WebP ride along with
/// the decoders already compiled in.
const SOURCE_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    SOURCE_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open a reader that sniffs the format from content, falling back to the extension.
fn open_reader(
    path: &Path,
) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)
}

fn decode_error(path: &Path, e: image::ImageError) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

impl ImageBackend for RustBackend {
    fn load(&self, path: &Path) -> Result<SourceImage, BackendError> {
        let img = open_reader(path)?
            .decode()
            .map_err(|e| decode_error(path, e))?;
        Ok(SourceImage::new(img))
    }

    fn save_png(
        &self,
        image: &ResizedImage,
        path: &Path,
        compression: Compression,
    ) -> Result<(), BackendError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        let encoder =
            PngEncoder::new_with_quality(writer, compression.to_png(), PngFilter::Adaptive);
        image
            .as_image()
            .write_with_encoder(encoder)
            .map_err(|e| BackendError::Encode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}
