//! Configuration module.
//!
//! Handles loading, validating, and merging `appshots.toml`. Stock defaults
//! carry the full device catalog; a user file only needs the keys it wants
//! to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! catalog_version = "2024.09"   # Version tag of the device tables
//!
//! [screenshots]
//! compression = "default"       # PNG effort: fast | default | best
//! targets = [                   # Replaces the whole catalog when set
//!     { label = "iPhone_6_7_8", width = 750, height = 1334 },
//!     # ...
//! ]
//!
//! [categories]                  # Catalog label -> display class folder
//! iPhone_12 = "iPhone_6_1"
//!
//! [organize]
//! recommended = ["iPhone_6_7_New", "iPhone_6_7", ...]
//!
//! [icons]
//! compression = "best"
//! specs = [{ points = 20.0, scale = 1 }, ...]
//!
//! [processing]
//! max_processes = 4             # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! ## Merging
//!
//! Tables merge key by key, arrays replace wholesale. Setting
//! `screenshots.targets` therefore swaps the catalog, while a single
//! `[categories]` entry only re-buckets that one label.
//!
//! The device tables are plain data tagged with `catalog_version`; update
//! them here (or in a user file) as new hardware ships.
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::Compression;
use crate::naming;
use crate::organize::{GUIDE_FILE, RECOMMENDED_DIR};
use crate::types::TargetSpec;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "appshots.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Application configuration loaded from `appshots.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Version tag of the device catalog and category tables.
    pub catalog_version: String,
    /// Screenshot targets and encoding.
    pub screenshots: ScreenshotsConfig,
    /// Catalog label -> display class. Labels without an entry are their own class.
    pub categories: BTreeMap<String, String>,
    /// Folder layout settings for the organize stage.
    pub organize: OrganizeConfig,
    /// iOS AppIcon slots.
    pub icons: IconsConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_version: STOCK_CATALOG_VERSION.to_string(),
            screenshots: ScreenshotsConfig::default(),
            categories: stock_categories(),
            organize: OrganizeConfig::default(),
            icons: IconsConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Display class folder for a catalog label.
    pub fn display_class<'a>(&'a self, label: &'a str) -> &'a str {
        self.categories
            .get(label)
            .map(String::as_str)
            .unwrap_or(label)
    }

    /// Validate values that end up in file and folder names.
    ///
    /// Target dimensions are not checked here: a zero-sized
    /// target is reported per pair by the screenshot stage.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog_version.trim().is_empty() {
            return Err(ConfigError::Validation(
                "catalog_version must not be empty".into(),
            ));
        }
        if self.screenshots.targets.is_empty() {
            return Err(ConfigError::Validation(
                "screenshots.targets must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for target in &self.screenshots.targets {
            check_path_component("screenshots.targets label", &target.label)?;
            if !seen.insert(target.label.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate screenshot label '{}'",
                    target.label
                )));
            }
            check_class_name(
                &format!("display class of '{}'", target.label),
                self.display_class(&target.label),
            )?;
        }
        for (label, class) in &self.categories {
            check_path_component(&format!("categories.{label}"), class)?;
            check_class_name(&format!("categories.{label}"), class)?;
        }
        for class in &self.organize.recommended {
            check_path_component("organize.recommended entry", class)?;
        }
        let mut slots = HashSet::new();
        for spec in &self.icons.specs {
            if !(spec.points.is_finite() && spec.points > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "icons.specs points must be positive, got {}",
                    spec.points
                )));
            }
            if spec.scale == 0 {
                return Err(ConfigError::Validation(
                    "icons.specs scale must be at least 1".into(),
                ));
            }
            if !slots.insert(naming::icon_file_name(spec.points, spec.scale)) {
                return Err(ConfigError::Validation(format!(
                    "duplicate icon slot {}pt@{}x",
                    spec.points, spec.scale
                )));
            }
        }
        Ok(())
    }
}

/// Reject names that would escape or break a folder layout.
fn check_path_component(what: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty()
        || value == "."
        || value == ".."
        || value.contains(['/', '\\'])
        || value.chars().any(char::is_control)
    {
        return Err(ConfigError::Validation(format!(
            "{what} must be a plain folder/file name, got '{value}'"
        )));
    }
    Ok(())
}

/// Reject class folders that would collide with what organize writes at the
/// destination root, compared case-insensitively.
fn check_class_name(what: &str, class: &str) -> Result<(), ConfigError> {
    for reserved in [RECOMMENDED_DIR, GUIDE_FILE] {
        if class.eq_ignore_ascii_case(reserved) {
            return Err(ConfigError::Validation(format!(
                "{what} must not be '{class}', the name is reserved for the organized layout"
            )));
        }
    }
    Ok(())
}

/// Screenshot catalog and encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenshotsConfig {
    /// PNG compression effort for screenshots.
    pub compression: Compression,
    /// Output targets, in generation order.
    pub targets: Vec<TargetSpec>,
}

impl Default for ScreenshotsConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            targets: stock_targets(),
        }
    }
}

/// Organize-stage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrganizeConfig {
    /// Display classes also copied into `Recommended/`, in upload order.
    pub recommended: Vec<String>,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            recommended: STOCK_RECOMMENDED.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// One AppIcon slot: a point size at a display scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconSpec {
    pub points: f64,
    pub scale: u32,
}

/// iOS AppIcon generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconsConfig {
    /// PNG compression effort for icons.
    pub compression: Compression,
    /// Slots to render.
    pub specs: Vec<IconSpec>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Best,
            specs: STOCK_ICON_SPECS
                .iter()
                .map(|&(points, scale)| IconSpec { points, scale })
                .collect(),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel image processing workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

// =============================================================================
// Stock tables
// =============================================================================

const STOCK_CATALOG_VERSION: &str = "2024.09";

/// App Store screenshot resolutions, portrait unless labelled otherwise.
const STOCK_TARGETS: &[(&str, u32, u32)] = &[
    ("iPhone_6_7_8", 750, 1334),
    ("iPhone_6_7_8_Plus", 1242, 2208),
    ("iPhone_X_XS", 1125, 2436),
    ("iPhone_XR", 828, 1792),
    ("iPhone_XS_Max", 1242, 2688),
    ("iPhone_11", 828, 1792),
    ("iPhone_11_Pro", 1125, 2436),
    ("iPhone_11_Pro_Max", 1242, 2688),
    ("iPhone_12_mini", 1080, 2340),
    ("iPhone_12", 1170, 2532),
    ("iPhone_12_Pro", 1170, 2532),
    ("iPhone_12_Pro_Max", 1284, 2778),
    ("iPhone_13_mini", 1080, 2340),
    ("iPhone_13", 1170, 2532),
    ("iPhone_13_Pro", 1170, 2532),
    ("iPhone_13_Pro_Max", 1284, 2778),
    ("iPhone_14", 1170, 2532),
    ("iPhone_14_Plus", 1284, 2778),
    ("iPhone_14_Pro", 1179, 2556),
    ("iPhone_14_Pro_Max", 1290, 2796),
    ("iPhone_15", 1179, 2556),
    ("iPhone_15_Plus", 1290, 2796),
    ("iPhone_15_Pro", 1179, 2556),
    ("iPhone_15_Pro_Max", 1290, 2796),
    ("iPhone_16", 1179, 2556),
    ("iPhone_16_Plus", 1290, 2796),
    ("iPhone_16_Pro", 1179, 2556),
    ("iPhone_16_Pro_Max", 1290, 2796),
    ("iPhone_6_7_New", 1320, 2868),
    ("iPhone_6_7_Landscape", 2868, 1320),
    ("iPhone_6_9", 1290, 2796),
    ("iPhone_6_9_Landscape", 2796, 1290),
    ("iPad_9_7", 1536, 2048),
    ("iPad_10_2", 1620, 2160),
    ("iPad_10_9", 1640, 2360),
    ("iPad_11", 1668, 2388),
    ("iPad_12_9", 2048, 2732),
    ("iPad_Air_10_9", 1640, 2360),
    ("iPad_Air_11", 1668, 2388),
    ("iPad_Pro_11", 1668, 2388),
    ("iPad_Pro_12_9", 2048, 2732),
    ("iPad_mini_8_3", 1488, 2266),
];

/// Models that share a screen resolution class.
const STOCK_CATEGORIES: &[(&str, &str)] = &[
    ("iPhone_6_7_8", "iPhone_5_5"),
    ("iPhone_6_7_8_Plus", "iPhone_5_5_Plus"),
    ("iPhone_X_XS", "iPhone_5_8"),
    ("iPhone_XR", "iPhone_6_1"),
    ("iPhone_XS_Max", "iPhone_6_5"),
    ("iPhone_11", "iPhone_6_1"),
    ("iPhone_11_Pro", "iPhone_5_8"),
    ("iPhone_11_Pro_Max", "iPhone_6_5"),
    ("iPhone_12_mini", "iPhone_5_4"),
    ("iPhone_12", "iPhone_6_1"),
    ("iPhone_12_Pro", "iPhone_6_1"),
    ("iPhone_12_Pro_Max", "iPhone_6_7"),
    ("iPhone_13_mini", "iPhone_5_4"),
    ("iPhone_13", "iPhone_6_1"),
    ("iPhone_13_Pro", "iPhone_6_1"),
    ("iPhone_13_Pro_Max", "iPhone_6_7"),
    ("iPhone_14", "iPhone_6_1"),
    ("iPhone_14_Plus", "iPhone_6_7"),
    ("iPhone_14_Pro", "iPhone_6_1"),
    ("iPhone_14_Pro_Max", "iPhone_6_7"),
    ("iPhone_15", "iPhone_6_1"),
    ("iPhone_15_Plus", "iPhone_6_7"),
    ("iPhone_15_Pro", "iPhone_6_1"),
    ("iPhone_15_Pro_Max", "iPhone_6_7"),
    ("iPhone_16", "iPhone_6_1"),
    ("iPhone_16_Plus", "iPhone_6_7"),
    ("iPhone_16_Pro", "iPhone_6_1"),
    ("iPhone_16_Pro_Max", "iPhone_6_7"),
    ("iPhone_6_7_New", "iPhone_6_7_New"),
    ("iPhone_6_7_Landscape", "iPhone_6_7_Landscape"),
    ("iPhone_6_9", "iPhone_6_9"),
    ("iPhone_6_9_Landscape", "iPhone_6_9_Landscape"),
    ("iPad_9_7", "iPad_9_7"),
    ("iPad_10_2", "iPad_10_2"),
    ("iPad_10_9", "iPad_10_9"),
    ("iPad_11", "iPad_11"),
    ("iPad_12_9", "iPad_12_9"),
    ("iPad_Air_10_9", "iPad_10_9"),
    ("iPad_Air_11", "iPad_11"),
    ("iPad_Pro_11", "iPad_11"),
    ("iPad_Pro_12_9", "iPad_12_9"),
    ("iPad_mini_8_3", "iPad_8_3"),
];

const STOCK_RECOMMENDED: &[&str] = &[
    "iPhone_6_7_New",
    "iPhone_6_7",
    "iPhone_6_5",
    "iPhone_5_5_Plus",
    "iPhone_6_9",
    "iPad_12_9",
];

/// `(points, scale)` for every AppIcon slot.
const STOCK_ICON_SPECS: &[(f64, u32)] = &[
    (20.0, 1),
    (20.0, 2),
    (20.0, 3),
    (29.0, 1),
    (29.0, 2),
    (29.0, 3),
    (40.0, 1),
    (40.0, 2),
    (40.0, 3),
    (60.0, 2),
    (60.0, 3),
    (76.0, 1),
    (76.0, 2),
    (83.5, 2),
    (1024.0, 1),
];

pub fn stock_targets() -> Vec<TargetSpec> {
    STOCK_TARGETS
        .iter()
        .map(|&(label, w, h)| TargetSpec::new(label, w, h))
        .collect()
}

pub fn stock_categories() -> BTreeMap<String, String> {
    STOCK_CATEGORIES
        .iter()
        .map(|&(label, class)| (label.to_string(), class.to_string()))
        .collect()
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(AppConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay (arrays included) replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<AppConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AppConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is absent.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `appshots.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# appshots configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Tables merge key by key with the defaults; arrays replace them wholesale.
# Unknown keys will cause an error.

# Version tag of the device tables below. Bump it when you edit them.
catalog_version = "2024.09"

# ---------------------------------------------------------------------------
# Screenshots
# ---------------------------------------------------------------------------
[screenshots]
# PNG compression effort: "fast", "default" or "best". Output is lossless.
compression = "default"

# Every input image is rendered once per target as
#   {image}_{label}_{width}x{height}.png
# Sources are center-cropped to each target's aspect ratio, never stretched.
targets = [
    { label = "iPhone_6_7_8", width = 750, height = 1334 },
    { label = "iPhone_6_7_8_Plus", width = 1242, height = 2208 },
    { label = "iPhone_X_XS", width = 1125, height = 2436 },
    { label = "iPhone_XR", width = 828, height = 1792 },
    { label = "iPhone_XS_Max", width = 1242, height = 2688 },
    { label = "iPhone_11", width = 828, height = 1792 },
    { label = "iPhone_11_Pro", width = 1125, height = 2436 },
    { label = "iPhone_11_Pro_Max", width = 1242, height = 2688 },
    { label = "iPhone_12_mini", width = 1080, height = 2340 },
    { label = "iPhone_12", width = 1170, height = 2532 },
    { label = "iPhone_12_Pro", width = 1170, height = 2532 },
    { label = "iPhone_12_Pro_Max", width = 1284, height = 2778 },
    { label = "iPhone_13_mini", width = 1080, height = 2340 },
    { label = "iPhone_13", width = 1170, height = 2532 },
    { label = "iPhone_13_Pro", width = 1170, height = 2532 },
    { label = "iPhone_13_Pro_Max", width = 1284, height = 2778 },
    { label = "iPhone_14", width = 1170, height = 2532 },
    { label = "iPhone_14_Plus", width = 1284, height = 2778 },
    { label = "iPhone_14_Pro", width = 1179, height = 2556 },
    { label = "iPhone_14_Pro_Max", width = 1290, height = 2796 },
    { label = "iPhone_15", width = 1179, height = 2556 },
    { label = "iPhone_15_Plus", width = 1290, height = 2796 },
    { label = "iPhone_15_Pro", width = 1179, height = 2556 },
    { label = "iPhone_15_Pro_Max", width = 1290, height = 2796 },
    { label = "iPhone_16", width = 1179, height = 2556 },
    { label = "iPhone_16_Plus", width = 1290, height = 2796 },
    { label = "iPhone_16_Pro", width = 1179, height = 2556 },
    { label = "iPhone_16_Pro_Max", width = 1290, height = 2796 },
    { label = "iPhone_6_7_New", width = 1320, height = 2868 },
    { label = "iPhone_6_7_Landscape", width = 2868, height = 1320 },
    { label = "iPhone_6_9", width = 1290, height = 2796 },
    { label = "iPhone_6_9_Landscape", width = 2796, height = 1290 },
    { label = "iPad_9_7", width = 1536, height = 2048 },
    { label = "iPad_10_2", width = 1620, height = 2160 },
    { label = "iPad_10_9", width = 1640, height = 2360 },
    { label = "iPad_11", width = 1668, height = 2388 },
    { label = "iPad_12_9", width = 2048, height = 2732 },
    { label = "iPad_Air_10_9", width = 1640, height = 2360 },
    { label = "iPad_Air_11", width = 1668, height = 2388 },
    { label = "iPad_Pro_11", width = 1668, height = 2388 },
    { label = "iPad_Pro_12_9", width = 2048, height = 2732 },
    { label = "iPad_mini_8_3", width = 1488, height = 2266 },
]

# ---------------------------------------------------------------------------
# Display classes
# ---------------------------------------------------------------------------
# Maps a target label to the folder it is sorted into by `organize`.
# Labels not listed here get a folder of their own name.
[categories]
iPhone_6_7_8 = "iPhone_5_5"
iPhone_6_7_8_Plus = "iPhone_5_5_Plus"
iPhone_X_XS = "iPhone_5_8"
iPhone_XR = "iPhone_6_1"
iPhone_XS_Max = "iPhone_6_5"
iPhone_11 = "iPhone_6_1"
iPhone_11_Pro = "iPhone_5_8"
iPhone_11_Pro_Max = "iPhone_6_5"
iPhone_12_mini = "iPhone_5_4"
iPhone_12 = "iPhone_6_1"
iPhone_12_Pro = "iPhone_6_1"
iPhone_12_Pro_Max = "iPhone_6_7"
iPhone_13_mini = "iPhone_5_4"
iPhone_13 = "iPhone_6_1"
iPhone_13_Pro = "iPhone_6_1"
iPhone_13_Pro_Max = "iPhone_6_7"
iPhone_14 = "iPhone_6_1"
iPhone_14_Plus = "iPhone_6_7"
iPhone_14_Pro = "iPhone_6_1"
iPhone_14_Pro_Max = "iPhone_6_7"
iPhone_15 = "iPhone_6_1"
iPhone_15_Plus = "iPhone_6_7"
iPhone_15_Pro = "iPhone_6_1"
iPhone_15_Pro_Max = "iPhone_6_7"
iPhone_16 = "iPhone_6_1"
iPhone_16_Plus = "iPhone_6_7"
iPhone_16_Pro = "iPhone_6_1"
iPhone_16_Pro_Max = "iPhone_6_7"
iPhone_6_7_New = "iPhone_6_7_New"
iPhone_6_7_Landscape = "iPhone_6_7_Landscape"
iPhone_6_9 = "iPhone_6_9"
iPhone_6_9_Landscape = "iPhone_6_9_Landscape"
iPad_9_7 = "iPad_9_7"
iPad_10_2 = "iPad_10_2"
iPad_10_9 = "iPad_10_9"
iPad_11 = "iPad_11"
iPad_12_9 = "iPad_12_9"
iPad_Air_10_9 = "iPad_10_9"
iPad_Air_11 = "iPad_11"
iPad_Pro_11 = "iPad_11"
iPad_Pro_12_9 = "iPad_12_9"
iPad_mini_8_3 = "iPad_8_3"

# ---------------------------------------------------------------------------
# Organize
# ---------------------------------------------------------------------------
[organize]
# Display classes also copied into Recommended/, in suggested upload order.
recommended = [
    "iPhone_6_7_New",
    "iPhone_6_7",
    "iPhone_6_5",
    "iPhone_5_5_Plus",
    "iPhone_6_9",
    "iPad_12_9",
]

# ---------------------------------------------------------------------------
# App icons
# ---------------------------------------------------------------------------
[icons]
compression = "best"

# Each slot renders a square of round(points * scale) pixels,
# written as icon_{points}pt@{scale}x.png.
specs = [
    { points = 20.0, scale = 1 },
    { points = 20.0, scale = 2 },
    { points = 20.0, scale = 3 },
    { points = 29.0, scale = 1 },
    { points = 29.0, scale = 2 },
    { points = 29.0, scale = 3 },
    { points = 40.0, scale = 1 },
    { points = 40.0, scale = 2 },
    { points = 40.0, scale = 3 },
    { points = 60.0, scale = 2 },
    { points = 60.0, scale = 3 },
    { points = 76.0, scale = 1 },
    { points = 76.0, scale = 2 },
    { points = 83.5, scale = 2 },
    { points = 1024.0, scale = 1 },
]

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel image-processing workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
