//! The aspect-preserving resize.
//!
//! [`resize_to_fill`] is a pure function over pixel buffers: center-crop to
//! the target aspect ratio, then Lanczos3-scale to the exact target size.
//! Loading and saving live in the [`backend`](super::backend); [`render`]
//! joins the two for a single output file.

use super::backend::{BackendError, ImageBackend};
use super::calculations::plan_crop;
use super::params::RenderParams;
use crate::types::{Dimensions, ResizedImage, SourceImage};
use image::imageops::FilterType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: Dimensions,
        actual: Dimensions,
    },
}

/// Failure to produce one output file.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Resize(#[from] ResizeError),
    #[error("write failed: {0}")]
    Write(#[from] BackendError),
}

/// Produce an image of exactly `target` from `source` without distortion.
///
/// Fails with [`ResizeError::InvalidInput`] when either the source or the
/// target has a zero edge.
pub fn resize_to_fill(
    source: &SourceImage,
    target: Dimensions,
) -> Result<ResizedImage, ResizeError> {
    let source_dims = source.dimensions();
    if !source_dims.is_positive() {
        return Err(ResizeError::InvalidInput(format!(
            "source has empty dimensions {source_dims}"
        )));
    }
    if !target.is_positive() {
        return Err(ResizeError::InvalidInput(format!(
            "target has empty dimensions {target}"
        )));
    }

    let crop = plan_crop(source_dims, target);
    tracing::debug!(
        source = %source_dims,
        target = %target,
        x = crop.x,
        y = crop.y,
        width = crop.width,
        height = crop.height,
        "crop planned"
    );

    let img = source.as_image();
    let cropped = if crop.is_full(source_dims) {
        img.clone()
    } else {
        img.crop_imm(crop.x, crop.y, crop.width, crop.height)
    };
    let scaled = if cropped.width() == target.width && cropped.height() == target.height {
        cropped
    } else {
        cropped.resize_exact(target.width, target.height, FilterType::Lanczos3)
    };

    let resized = ResizedImage::new(scaled);
    let actual = resized.dimensions();
    if actual != target {
        return Err(ResizeError::SizeMismatch {
            expected: target,
            actual,
        });
    }
    Ok(resized)
}

/// Resize `source` to `params.target` and write it as PNG.
///
/// Nothing is written when the resize fails. Returns the dimensions of the
/// written image.
pub fn render(
    backend: &impl ImageBackend,
    source: &SourceImage,
    params: &RenderParams,
) -> Result<Dimensions, RenderError> {
    let resized = resize_to_fill(source, params.target.dimensions())?;
    backend.save_png(&resized, &params.output, params.compression)?;
    Ok(resized.dimensions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Compression;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};
    use crate::types::TargetSpec;
    use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> SourceImage {
        SourceImage::new(DynamicImage::ImageRgb8(RgbImage::from_fn(
            width,
            height,
            |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]),
        )))
    }

    #[test]
    fn output_matches_target_exactly() {
        let source = gradient(300, 200);
        for target in [
            Dimensions::new(75, 133),
            Dimensions::new(128, 128),
            Dimensions::new(287, 132),
            Dimensions::new(1, 1),
            Dimensions::new(600, 50),
        ] {
            let out = resize_to_fill(&source, target).unwrap();
            assert_eq!(out.dimensions(), target);
        }
    }

    #[test]
    fn square_source_upscales_without_cropping() {
        let source = gradient(64, 64);
        let out = resize_to_fill(&source, Dimensions::new(128, 128)).unwrap();
        assert_eq!(out.dimensions(), Dimensions::new(128, 128));
    }

    #[test]
    fn resizing_to_own_size_is_a_fixed_point() {
        let source = gradient(90, 160);
        let out = resize_to_fill(&source, Dimensions::new(90, 160)).unwrap();
        assert_eq!(out.dimensions(), Dimensions::new(90, 160));
        assert_eq!(
            out.as_image().get_pixel(10, 20),
            source.as_image().get_pixel(10, 20)
        );
    }

    #[test]
    fn center_crop_keeps_the_middle_band() {
        // Left third red, middle third green, right third blue
        let img = RgbImage::from_fn(300, 100, |x, _| match x {
            0..100 => Rgb([255, 0, 0]),
            100..200 => Rgb([0, 255, 0]),
            _ => Rgb([0, 0, 255]),
        });
        let source = SourceImage::new(DynamicImage::ImageRgb8(img));

        // Square target keeps x in [100, 200): only green survives
        let out = resize_to_fill(&source, Dimensions::new(50, 50)).unwrap();
        let rgb = out.as_image().to_rgb8();
        let center = rgb.get_pixel(25, 25);
        assert!(center[1] > 200 && center[0] < 50 && center[2] < 50);
    }

    #[test]
    fn zero_target_is_invalid_input() {
        let source = gradient(10, 10);
        let err = resize_to_fill(&source, Dimensions::new(0, 10)).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidInput(_)));
        let err = resize_to_fill(&source, Dimensions::new(10, 0)).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidInput(_)));
    }

    #[test]
    fn empty_source_is_invalid_input() {
        let source = SourceImage::new(DynamicImage::new_rgb8(0, 0));
        let err = resize_to_fill(&source, Dimensions::new(10, 10)).unwrap_err();
        assert!(matches!(err, ResizeError::InvalidInput(msg) if msg.contains("source")));
    }

    #[test]
    fn size_mismatch_message_names_both_sizes() {
        let err = ResizeError::SizeMismatch {
            expected: Dimensions::new(1170, 2532),
            actual: Dimensions::new(1169, 2532),
        };
        assert_eq!(
            err.to_string(),
            "size mismatch: expected 1170x2532, got 1169x2532"
        );
    }

    #[test]
    fn render_writes_resized_png() {
        let backend = MockBackend::new();
        let params = RenderParams {
            target: TargetSpec::new("iPhone_12", 117, 253),
            output: "/out/shot_iPhone_12_117x253.png".into(),
            compression: Compression::Fast,
        };
        let dims = render(&backend, &gradient(300, 200), &params).unwrap();
        assert_eq!(dims, Dimensions::new(117, 253));
        assert_eq!(
            backend.get_operations(),
            vec![RecordedOp::SavePng {
                output: "shot_iPhone_12_117x253.png".into(),
                width: 117,
                height: 253,
            }]
        );
    }

    #[test]
    fn render_invalid_target_writes_nothing() {
        let backend = MockBackend::new();
        let params = RenderParams {
            target: TargetSpec::new("broken", 0, 100),
            output: "/out/shot_broken_0x100.png".into(),
            compression: Compression::Default,
        };
        let err = render(&backend, &gradient(30, 20), &params).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Resize(ResizeError::InvalidInput(_))
        ));
        assert!(backend.get_operations().is_empty());
    }
}
