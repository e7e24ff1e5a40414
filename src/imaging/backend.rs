//! Image backend trait and shared error type.
//!
//! The [`ImageBackend`] trait covers the two operations that touch files:
//! load and save. Pixel work in between is the pure
//! [`resize_to_fill`](super::resize_to_fill).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use a recording mock.

use super::params::Compression;
use crate::types::{Dimensions, ResizedImage, SourceImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("Failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },
}

/// Trait for image I/O backends.
pub trait ImageBackend: Sync {
    /// Decode a whole image into memory. Truncated or corrupt data is an error.
    fn load(&self, path: &Path) -> Result<SourceImage, BackendError>;

    /// Encode as PNG and write to `path`, replacing any existing file.
    fn save_png(
        &self,
        image: &ResizedImage,
        path: &Path,
        compression: Compression,
    ) -> Result<(), BackendError>;
}
