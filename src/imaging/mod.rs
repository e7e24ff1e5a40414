//! Image processing in pure Rust, no system dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader::decode` (format sniffed from content) |
//! | **Crop plan** | [`plan_crop`] (pure math) |
//! | **Resize** | [`resize_to_fill`]: `crop_imm` + Lanczos3 `resize_exact` |
//! | **Encode** | PNG via `image::codecs::png` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing output files
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: The resize itself, plus [`render`] which resizes and writes

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{icon_pixels, plan_crop};
pub use operations::{RenderError, ResizeError, render, resize_to_fill};
pub use params::{Compression, RenderParams};
pub use rust_backend::{RustBackend, supported_input_extensions};
