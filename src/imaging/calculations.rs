//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::types::{CropRegion, Dimensions};

/// Compute the centered crop that gives `source` the aspect ratio of `target`.
///
/// The crop keeps the full extent of one axis and trims the other symmetrically,
/// so scaling the crop to `target` never distorts. Callers must pass positive
/// dimensions for both arguments.
///
/// # Examples
/// ```
/// # use appshots::imaging::plan_crop;
/// # use appshots::types::{CropRegion, Dimensions};
/// // 3:2 landscape source into a tall phone screenshot
/// let crop = plan_crop(Dimensions::new(3000, 2000), Dimensions::new(750, 1334));
/// assert_eq!(crop, CropRegion { x: 938, y: 0, width: 1124, height: 2000 });
/// ```
pub fn plan_crop(source: Dimensions, target: Dimensions) -> CropRegion {
    let source_ratio = source.ratio();
    let target_ratio = target.ratio();

    if source_ratio > target_ratio {
        // Source is wider: keep full height, trim left and right
        let width = ((source.height as f64 * target_ratio).round() as u32).clamp(1, source.width);
        CropRegion {
            x: (source.width - width) / 2,
            y: 0,
            width,
            height: source.height,
        }
    } else {
        // Source is taller or equal: keep full width, trim top and bottom
        let height =
            ((source.width as f64 / target_ratio).round() as u32).clamp(1, source.height);
        CropRegion {
            x: 0,
            y: (source.height - height) / 2,
            width: source.width,
            height,
        }
    }
}

/// Pixel edge of a square icon slot: `round(points * scale)`.
///
/// ```
/// # use appshots::imaging::icon_pixels;
/// assert_eq!(icon_pixels(83.5, 2), 167);
/// assert_eq!(icon_pixels(20.0, 3), 60);
/// ```
pub fn icon_pixels(points: f64, scale: u32) -> u32 {
    (points * scale as f64).round() as u32
}
