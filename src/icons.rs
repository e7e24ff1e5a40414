//! iOS AppIcon set generation.
//!
//! Renders one square PNG per configured slot from a single source image and
//! writes the `Contents.json` Xcode expects next to them, so the output
//! folder can be dropped into `Assets.xcassets/` as `AppIcon.appiconset`.
//!
//! Each slot is `round(points * scale)` pixels square. Non-square sources are
//! center-cropped by [`resize_to_fill`](crate::imaging::resize_to_fill) rather
//! than squashed.
//!
//! | Slot | File | Pixels |
//! |---|---|---|
//! | 20pt @2x | `icon_20pt@2x.png` | 40 |
//! | 83.5pt @2x | `icon_83.5pt@2x.png` | 167 |
//! | 1024pt @1x | `icon_1024pt@1x.png` | 1024 |

use crate::config::{IconSpec, IconsConfig};
use crate::imaging::{
    BackendError, ImageBackend, RenderParams, RustBackend, icon_pixels, render,
};
use crate::naming;
use crate::process::{PairFailure, PairOutcome};
use crate::types::TargetSpec;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file read by Xcode's asset catalog.
pub const CONTENTS_FILE: &str = "Contents.json";

#[derive(Error, Debug)]
pub enum IconError {
    #[error("Cannot load icon source: {0}")]
    Source(#[from] BackendError),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of rendering one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct IconReport {
    pub spec: IconSpec,
    pub file_name: String,
    pub pixels: u32,
    pub outcome: PairOutcome,
}

#[derive(Debug, Default)]
pub struct IconSummary {
    pub out_dir: PathBuf,
    /// One entry per configured slot, in config order.
    pub icons: Vec<IconReport>,
}

impl IconSummary {
    pub fn written(&self) -> usize {
        self.icons.iter().filter(|i| i.outcome.is_written()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &IconReport> {
        self.icons.iter().filter(|i| !i.outcome.is_written())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

// ============================================================================
// Contents.json
// ============================================================================

#[derive(Debug, Serialize)]
struct Contents {
    images: Vec<ContentsImage>,
    info: ContentsInfo,
}

#[derive(Debug, Serialize)]
struct ContentsImage {
    filename: String,
    idiom: &'static str,
    scale: String,
    size: String,
}

#[derive(Debug, Serialize)]
struct ContentsInfo {
    author: &'static str,
    version: u32,
}

/// Device idioms an icon slot belongs to in Xcode's AppIcon set.
///
/// 20/29/40pt are shared: @1x is iPad only, @3x iPhone only, @2x both.
pub fn idioms(spec: &IconSpec) -> &'static [&'static str] {
    match (spec.points, spec.scale) {
        (p, _) if p == 1024.0 => &["ios-marketing"],
        (p, _) if p == 60.0 => &["iphone"],
        (p, _) if p == 76.0 || p == 83.5 => &["ipad"],
        (p, s) if p == 20.0 || p == 29.0 || p == 40.0 => match s {
            1 => &["ipad"],
            2 => &["iphone", "ipad"],
            _ => &["iphone"],
        },
        _ => &["universal"],
    }
}

/// `Contents.json` body listing every written icon.
pub fn contents_json(icons: &[IconReport]) -> Result<String, serde_json::Error> {
    let images = icons
        .iter()
        .filter(|i| i.outcome.is_written())
        .flat_map(|icon| {
            idioms(&icon.spec).iter().map(move |&idiom| ContentsImage {
                filename: icon.file_name.clone(),
                idiom,
                scale: format!("{}x", icon.spec.scale),
                size: format!("{0}x{0}", icon.spec.points),
            })
        })
        .collect();
    let contents = Contents {
        images,
        info: ContentsInfo {
            author: "xcode",
            version: 1,
        },
    };
    serde_json::to_string_pretty(&contents)
}

// ============================================================================
// Rendering
// ============================================================================

pub fn generate_icons(
    source: &Path,
    out_dir: &Path,
    config: &IconsConfig,
) -> Result<IconSummary, IconError> {
    generate_icons_with_backend(&RustBackend::new(), source, out_dir, config)
}

/// Render every slot in `config` from `source` into `out_dir`.
///
/// An unreadable source aborts before anything is written. A slot that
/// cannot be rendered is reported and left out of `Contents.json`. Repeated
/// slots are rendered once.
pub fn generate_icons_with_backend(
    backend: &impl ImageBackend,
    source: &Path,
    out_dir: &Path,
    config: &IconsConfig,
) -> Result<IconSummary, IconError> {
    let image = backend.load(source)?;
    if image.dimensions().width != image.dimensions().height {
        tracing::info!(
            source = %image.dimensions(),
            "icon source is not square, center-cropping"
        );
    }
    std::fs::create_dir_all(out_dir).map_err(|e| IconError::Io {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    let mut slots = HashSet::new();
    let specs: Vec<&IconSpec> = config
        .specs
        .iter()
        .filter(|spec| {
            let first = slots.insert(naming::icon_file_name(spec.points, spec.scale));
            if !first {
                tracing::warn!(
                    points = spec.points,
                    scale = spec.scale,
                    "duplicate icon slot skipped"
                );
            }
            first
        })
        .collect();

    let icons: Vec<IconReport> = specs
        .into_par_iter()
        .map(|spec| {
            let pixels = icon_pixels(spec.points, spec.scale);
            let file_name = naming::icon_file_name(spec.points, spec.scale);
            let params = RenderParams {
                target: TargetSpec::new(file_name.trim_end_matches(".png"), pixels, pixels),
                output: out_dir.join(&file_name),
                compression: config.compression,
            };
            let outcome = match render(backend, &image, &params) {
                Ok(dimensions) => PairOutcome::Written {
                    path: params.output,
                    dimensions,
                },
                Err(err) => {
                    tracing::warn!(icon = %file_name, error = %err, "icon skipped");
                    PairOutcome::Failed(PairFailure::from(err))
                }
            };
            IconReport {
                spec: *spec,
                file_name,
                pixels,
                outcome,
            }
        })
        .collect();

    let contents_path = out_dir.join(CONTENTS_FILE);
    std::fs::write(&contents_path, contents_json(&icons)?).map_err(|e| IconError::Io {
        path: contents_path,
        source: e,
    })?;

    Ok(IconSummary {
        out_dir: out_dir.to_path_buf(),
        icons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::ResizeError;
    use crate::imaging::backend::tests::MockBackend;
    use crate::test_helpers::{list_dir, write_png};
    use tempfile::TempDir;

    fn spec(points: f64, scale: u32) -> IconSpec {
        IconSpec { points, scale }
    }

    #[test]
    fn stock_slots_render_at_rounded_pixel_sizes() {
        let out = TempDir::new().unwrap();
        let backend = MockBackend::with_sources(&[("logo.png", 1024, 1024)]);

        let summary = generate_icons_with_backend(
            &backend,
            Path::new("/in/logo.png"),
            out.path(),
            &IconsConfig::default(),
        )
        .unwrap();

        assert_eq!(summary.icons.len(), 15);
        assert_eq!(summary.written(), 15);
        let mut saved = backend.saved();
        saved.sort();
        assert!(saved.contains(&("icon_83.5pt@2x.png".to_string(), 167, 167)));
        assert!(saved.contains(&("icon_20pt@3x.png".to_string(), 60, 60)));
        assert!(saved.contains(&("icon_1024pt@1x.png".to_string(), 1024, 1024)));
        assert!(saved.iter().all(|(_, w, h)| w == h));
    }

    #[test]
    fn reports_keep_config_order() {
        let out = TempDir::new().unwrap();
        let backend = MockBackend::with_sources(&[("logo.png", 64, 64)]);
        let config = IconsConfig {
            specs: vec![spec(40.0, 3), spec(20.0, 1), spec(29.0, 2)],
            ..IconsConfig::default()
        };

        let summary =
            generate_icons_with_backend(&backend, Path::new("logo.png"), out.path(), &config)
                .unwrap();
        let names: Vec<_> = summary.icons.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, ["icon_40pt@3x.png", "icon_20pt@1x.png", "icon_29pt@2x.png"]);
        let pixels: Vec<_> = summary.icons.iter().map(|i| i.pixels).collect();
        assert_eq!(pixels, [120, 20, 58]);
    }

    #[test]
    fn unreadable_source_aborts_before_writing() {
        let out = TempDir::new().unwrap();
        let backend = MockBackend::new();
        let result = generate_icons_with_backend(
            &backend,
            Path::new("missing.png"),
            &out.path().join("AppIcon.appiconset"),
            &IconsConfig::default(),
        );
        assert!(matches!(result, Err(IconError::Source(_))));
        assert!(!out.path().join("AppIcon.appiconset").exists());
    }

    #[test]
    fn zero_pixel_slot_is_reported_and_left_out_of_contents() {
        let out = TempDir::new().unwrap();
        let backend = MockBackend::with_sources(&[("logo.png", 64, 64)]);
        let config = IconsConfig {
            specs: vec![spec(20.0, 2), spec(0.2, 1)],
            ..IconsConfig::default()
        };

        let summary =
            generate_icons_with_backend(&backend, Path::new("logo.png"), out.path(), &config)
                .unwrap();
        assert_eq!(summary.written(), 1);
        let failed: Vec<_> = summary.failures().collect();
        assert_eq!(failed.len(), 1);
        assert!(matches!(
            failed[0].outcome,
            PairOutcome::Failed(PairFailure::Resize(ResizeError::InvalidInput(_)))
        ));

        let contents = std::fs::read_to_string(out.path().join(CONTENTS_FILE)).unwrap();
        assert!(contents.contains("icon_20pt@2x.png"));
        assert!(!contents.contains("icon_0.2pt@1x.png"));
    }

    #[test]
    fn repeated_slot_is_written_once() {
        let out = TempDir::new().unwrap();
        let backend = MockBackend::with_sources(&[("logo.png", 1024, 1024)]);
        let config = IconsConfig {
            specs: vec![spec(20.0, 2), spec(20.0, 2), spec(29.0, 2)],
            ..IconsConfig::default()
        };

        let summary =
            generate_icons_with_backend(&backend, Path::new("/in/logo.png"), out.path(), &config)
                .unwrap();
        assert_eq!(summary.written(), 2);
        let mut saved = backend.saved();
        saved.sort();
        assert_eq!(
            saved,
            [
                ("icon_20pt@2x.png".to_string(), 40, 40),
                ("icon_29pt@2x.png".to_string(), 58, 58),
            ]
        );

        // One entry per idiom, not per repeat
        let json: serde_json::Value =
            serde_json::from_str(&contents_json(&summary.icons).unwrap()).unwrap();
        let listed = json["images"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|i| i["filename"] == "icon_20pt@2x.png")
            .count();
        assert_eq!(listed, 2);
    }

    #[test]
    fn idioms_follow_xcode_slots() {
        assert_eq!(idioms(&spec(20.0, 1)), ["ipad"]);
        assert_eq!(idioms(&spec(20.0, 2)), ["iphone", "ipad"]);
        assert_eq!(idioms(&spec(40.0, 3)), ["iphone"]);
        assert_eq!(idioms(&spec(60.0, 2)), ["iphone"]);
        assert_eq!(idioms(&spec(83.5, 2)), ["ipad"]);
        assert_eq!(idioms(&spec(1024.0, 1)), ["ios-marketing"]);
        assert_eq!(idioms(&spec(50.0, 2)), ["universal"]);
    }

    #[test]
    fn contents_json_lists_size_scale_and_idiom() {
        let icons = vec![IconReport {
            spec: spec(83.5, 2),
            file_name: "icon_83.5pt@2x.png".into(),
            pixels: 167,
            outcome: PairOutcome::Written {
                path: "icon_83.5pt@2x.png".into(),
                dimensions: crate::types::Dimensions::new(167, 167),
            },
        }];
        let json: serde_json::Value = serde_json::from_str(&contents_json(&icons).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "images": [{
                    "filename": "icon_83.5pt@2x.png",
                    "idiom": "ipad",
                    "scale": "2x",
                    "size": "83.5x83.5"
                }],
                "info": { "author": "xcode", "version": 1 }
            })
        );
    }

    #[test]
    fn real_non_square_source_is_center_cropped() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("logo.png");
        write_png(&source, 300, 200);
        let out = tmp.path().join("AppIcon.appiconset");
        let config = IconsConfig {
            specs: vec![spec(20.0, 2), spec(83.5, 2)],
            ..IconsConfig::default()
        };

        let summary = generate_icons(&source, &out, &config).unwrap();
        assert_eq!(summary.written(), 2);
        assert_eq!(
            list_dir(&out),
            ["Contents.json", "icon_20pt@2x.png", "icon_83.5pt@2x.png"]
        );
        assert_eq!(
            image::image_dimensions(out.join("icon_83.5pt@2x.png")).unwrap(),
            (167, 167)
        );
    }
}
