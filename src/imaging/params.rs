//! Parameter types for image operations.
//!
//! These structs describe *what* to write, not *how*. They sit between the
//! stages (which decide which files to produce) and the
//! [`backend`](super::backend) (which encodes and writes pixels), so a mock
//! backend can stand in during tests.
//!
//! - [`Compression`]: PNG compression effort. Output is always PNG.
//! - [`RenderParams`]: one output file: its target and where it goes.

use crate::types::TargetSpec;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// PNG compression effort. Lossless either way; trades encode time for size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Fast,
    #[default]
    Default,
    Best,
}

impl Compression {
    pub fn to_png(self) -> image::codecs::png::CompressionType {
        use image::codecs::png::CompressionType;
        match self {
            Compression::Fast => CompressionType::Fast,
            Compression::Default => CompressionType::Default,
            Compression::Best => CompressionType::Best,
        }
    }
}

/// A single output file to render from an already-loaded source.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub target: TargetSpec,
    pub output: PathBuf,
    pub compression: Compression,
}
