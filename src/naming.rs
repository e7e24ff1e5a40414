//! Output filename conventions.
//!
//! Screenshots are written as `{base}_{label}_{width}x{height}.png`, so the
//! declared size travels with the file and can be checked later by
//! [`verify`](crate::verify). Icons are written as `icon_{points}pt@{scale}x.png`.
//!
//! ```text
//! home.png + iPhone_12 (1170x2532)  →  home_iPhone_12_1170x2532.png
//! 83.5pt @2x                        →  icon_83.5pt@2x.png
//! ```

use crate::types::{Dimensions, TargetSpec};
use std::path::Path;

/// Extension of every file this crate writes.
pub const OUTPUT_EXTENSION: &str = "png";

/// Stem of a source file, used as the `{base}` part of output names.
///
/// `ios/Home Screen.JPG` → `Home Screen`. Falls back to the whole file name
/// when there is no stem.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Output file name for one source/target pair.
pub fn screenshot_file_name(base: &str, target: &TargetSpec) -> String {
    format!(
        "{}_{}_{}x{}.{}",
        base, target.label, target.width, target.height, OUTPUT_EXTENSION
    )
}

/// Output file name for one AppIcon slot. Whole point sizes drop the `.0`.
pub fn icon_file_name(points: f64, scale: u32) -> String {
    format!("icon_{}pt@{}x.{}", points, scale, OUTPUT_EXTENSION)
}

/// File name without its `.png` extension, matched in any case.
///
/// `home_iPhone_12_1170x2532.PNG` → `home_iPhone_12_1170x2532`; `None` for
/// any other extension.
pub fn strip_output_extension(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    ext.eq_ignore_ascii_case(OUTPUT_EXTENSION).then_some(stem)
}

/// Dimensions declared by a screenshot file name's trailing `_{w}x{h}.png`.
///
/// Returns `None` when the name is not a `.png` or the last `_` segment is
/// not exactly `{digits}x{digits}`.
pub fn parse_declared_dimensions(file_name: &str) -> Option<Dimensions> {
    let stem = strip_output_extension(file_name)?;
    let token = stem.rsplit('_').next()?;
    let (w, h) = token.split_once('x')?;
    if !is_digits(w) || !is_digits(h) {
        return None;
    }
    Some(Dimensions::new(w.parse().ok()?, h.parse().ok()?))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Catalog target a screenshot file name was produced for.
///
/// Matches the full `_{label}_{w}x{h}.png` suffix, so labels that prefix one
/// another (`iPhone_6_7_8` / `iPhone_6_7_8_Plus`) cannot be confused. When
/// several suffixes fit, the longest label wins.
pub fn match_target<'a>(file_name: &str, targets: &'a [TargetSpec]) -> Option<&'a TargetSpec> {
    let stem = strip_output_extension(file_name)?;
    targets
        .iter()
        .filter(|t| stem.ends_with(&format!("_{}_{}x{}", t.label, t.width, t.height)))
        .max_by_key(|t| t.label.len())
}
