//! Sort written screenshots into display-class folders.
//!
//! A display class is a group of devices that share one screen requirement
//! (`iPhone_12`, `iPhone_13` and `iPhone_14` all upload as `iPhone_6_1`).
//! Each PNG in the source folder is matched to its catalog target by the
//! `_{label}_{w}x{h}.png` suffix, then copied into the class folder from
//! `[categories]`:
//!
//! ```text
//! organized/
//! ├── README.md                   # usage guide, regenerated every run
//! ├── Recommended/
//! │   ├── iPhone_6_7_New/         # classes from [organize] recommended
//! │   └── iPad_12_9/
//! ├── iPhone_6_1/
//! │   ├── home_iPhone_12_1170x2532.png
//! │   └── home_iPhone_14_1170x2532.png
//! └── iPad_12_9/
//! ```
//!
//! The destination is removed and recreated on every run. Files that match
//! no catalog label are left out and listed in the report.

use crate::config::AppConfig;
use crate::naming;
use crate::types::Dimensions;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Folder holding copies of the recommended classes.
pub const RECOMMENDED_DIR: &str = "Recommended";
/// Usage guide written at the destination root.
pub const GUIDE_FILE: &str = "README.md";

#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("Screenshot folder not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("Destination {dest} would remove the screenshot folder {source_dir}")]
    UnsafeDestination { dest: PathBuf, source_dir: PathBuf },
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to list {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> OrganizeError {
    move |source| OrganizeError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Files copied into one display class folder.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassGroup {
    pub class: String,
    /// File names, sorted.
    pub files: Vec<String>,
    /// Distinct resolutions among the files, smallest width first.
    pub resolutions: Vec<Dimensions>,
}

#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub dest: PathBuf,
    /// Class folders, sorted by name.
    pub classes: Vec<ClassGroup>,
    /// Recommended classes that had files, in upload order.
    pub recommended: Vec<String>,
    /// Recommended classes with no files this run.
    pub recommended_missing: Vec<String>,
    /// PNGs whose name matched no catalog label.
    pub unassigned: Vec<String>,
}

impl OrganizeReport {
    pub fn class(&self, name: &str) -> Option<&ClassGroup> {
        self.classes.iter().find(|g| g.class == name)
    }

    pub fn file_count(&self) -> usize {
        self.classes.iter().map(|g| g.files.len()).sum()
    }
}

/// Group the PNGs in `source` by display class, without touching the disk
/// beyond listing. Returns the groups and the unassigned names.
pub fn classify(
    source: &Path,
    config: &AppConfig,
) -> Result<(Vec<ClassGroup>, Vec<String>), OrganizeError> {
    if !source.is_dir() {
        return Err(OrganizeError::SourceNotFound(source.to_path_buf()));
    }

    let mut groups: BTreeMap<String, ClassGroup> = BTreeMap::new();
    let mut unassigned = Vec::new();
    let walker = WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| OrganizeError::Walk {
            path: source.to_path_buf(),
            source: e,
        })?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() || naming::strip_output_extension(&file_name).is_none() {
            continue;
        }
        match naming::match_target(&file_name, &config.screenshots.targets) {
            Some(target) => {
                let class = config.display_class(&target.label);
                let group = groups
                    .entry(class.to_string())
                    .or_insert_with(|| ClassGroup {
                        class: class.to_string(),
                        files: Vec::new(),
                        resolutions: Vec::new(),
                    });
                group.files.push(file_name);
                let dims = target.dimensions();
                if !group.resolutions.contains(&dims) {
                    group.resolutions.push(dims);
                }
            }
            None => {
                tracing::warn!(file = %file_name, "no catalog label matches, not organized");
                unassigned.push(file_name);
            }
        }
    }

    let classes = groups
        .into_values()
        .map(|mut g| {
            g.resolutions.sort_by_key(|d| (d.width, d.height));
            g
        })
        .collect();
    Ok((classes, unassigned))
}

/// Recreate `dest` and copy every classified screenshot into it.
pub fn organize(
    source: &Path,
    dest: &Path,
    config: &AppConfig,
) -> Result<OrganizeReport, OrganizeError> {
    let (classes, unassigned) = classify(source, config)?;
    check_destination(source, dest)?;

    if dest.exists() {
        std::fs::remove_dir_all(dest).map_err(io_at(dest))?;
    }
    std::fs::create_dir_all(dest).map_err(io_at(dest))?;

    for group in &classes {
        copy_group(source, &dest.join(&group.class), group)?;
    }

    let mut recommended = Vec::new();
    let mut recommended_missing = Vec::new();
    for class in &config.organize.recommended {
        match classes.iter().find(|g| &g.class == class) {
            Some(group) => {
                copy_group(source, &dest.join(RECOMMENDED_DIR).join(class), group)?;
                recommended.push(class.clone());
            }
            None => recommended_missing.push(class.clone()),
        }
    }

    let report = OrganizeReport {
        dest: dest.to_path_buf(),
        classes,
        recommended,
        recommended_missing,
        unassigned,
    };
    let guide_path = dest.join(GUIDE_FILE);
    std::fs::write(&guide_path, usage_guide(&report, config)).map_err(io_at(&guide_path))?;

    tracing::info!(
        dest = %dest.display(),
        classes = report.classes.len(),
        files = report.file_count(),
        "organize finished"
    );
    Ok(report)
}

fn copy_group(source: &Path, folder: &Path, group: &ClassGroup) -> Result<(), OrganizeError> {
    std::fs::create_dir_all(folder).map_err(io_at(folder))?;
    for file in &group.files {
        let to = folder.join(file);
        std::fs::copy(source.join(file), &to).map_err(io_at(&to))?;
    }
    Ok(())
}

/// Refuse destinations whose removal would delete the screenshots themselves.
fn check_destination(source: &Path, dest: &Path) -> Result<(), OrganizeError> {
    if !dest.exists() {
        return Ok(());
    }
    let source_abs = source.canonicalize().map_err(io_at(source))?;
    let dest_abs = dest.canonicalize().map_err(io_at(dest))?;
    if source_abs.starts_with(&dest_abs) {
        return Err(OrganizeError::UnsafeDestination {
            dest: dest.to_path_buf(),
            source_dir: source.to_path_buf(),
        });
    }
    Ok(())
}

fn resolution_list(resolutions: &[Dimensions]) -> String {
    resolutions
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Markdown usage guide for an organized folder.
pub fn usage_guide(report: &OrganizeReport, config: &AppConfig) -> String {
    let mut out = String::new();
    out.push_str("# App Store Screenshots\n\n");
    out.push_str(&format!(
        "Device catalog version: {}\n\n",
        config.catalog_version
    ));

    out.push_str(&format!("## Recommended ({RECOMMENDED_DIR}/)\n\n"));
    if report.recommended.is_empty() {
        out.push_str("No recommended class had screenshots in this run.\n\n");
    } else {
        out.push_str("The sizes App Store Connect asks for most often. Upload in this order:\n\n");
        for (i, class) in report.recommended.iter().enumerate() {
            if let Some(group) = report.class(class) {
                out.push_str(&format!(
                    "{}. **{}/** - {}\n",
                    i + 1,
                    class,
                    resolution_list(&group.resolutions)
                ));
            }
        }
        out.push('\n');
    }
    if !report.recommended_missing.is_empty() {
        out.push_str(&format!(
            "Not generated this run: {}\n\n",
            report.recommended_missing.join(", ")
        ));
    }

    out.push_str("## All display classes\n\n");
    for group in &report.classes {
        let noun = if group.files.len() == 1 { "file" } else { "files" };
        out.push_str(&format!(
            "- **{}/** - {} ({} {})\n",
            group.class,
            resolution_list(&group.resolutions),
            group.files.len(),
            noun
        ));
    }
    out.push('\n');

    out.push_str("## Upload requirements\n\n");
    out.push_str("1. iPhone: at least one screenshot set at the largest recommended iPhone size.\n");
    out.push_str("2. iPad: required only if the app runs on iPad; use the 12.9\" size.\n");
    out.push_str("3. Keep the same content across every size of a screenshot set.\n\n");

    out.push_str("## File names\n\n");
    out.push_str("`{source}_{label}_{width}x{height}.png`");
    if let Some(example) = report.classes.first().and_then(|g| g.files.first()) {
        out.push_str(&format!(", for example `{example}`"));
    }
    out.push_str(".\nThe size in the name is the exact pixel size of the file.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{list_dir, small_catalog_config};
    use std::fs;
    use tempfile::TempDir;

    fn shots(names: &[&str]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for name in names {
            fs::write(tmp.path().join(name), name.as_bytes()).unwrap();
        }
        tmp
    }

    fn config() -> AppConfig {
        let mut config = small_catalog_config(&[
            ("iPhone_6_7_8", 750, 1334),
            ("iPhone_6_7_8_Plus", 1242, 2208),
            ("iPhone_12", 1170, 2532),
            ("iPhone_XR", 828, 1792),
            ("iPad_12_9", 2048, 2732),
        ]);
        config.organize.recommended = vec!["iPhone_5_5_Plus".into(), "iPad_12_9".into()];
        config
    }

    #[test]
    fn groups_labels_into_display_classes() {
        let src = shots(&[
            "home_iPhone_12_1170x2532.png",
            "home_iPhone_XR_828x1792.png",
            "home_iPad_12_9_2048x2732.png",
        ]);
        let (classes, unassigned) = classify(src.path(), &config()).unwrap();

        let names: Vec<_> = classes.iter().map(|g| g.class.as_str()).collect();
        assert_eq!(names, ["iPad_12_9", "iPhone_6_1"]);
        let six_one = &classes[1];
        assert_eq!(
            six_one.files,
            ["home_iPhone_12_1170x2532.png", "home_iPhone_XR_828x1792.png"]
        );
        assert_eq!(
            six_one.resolutions,
            [Dimensions::new(828, 1792), Dimensions::new(1170, 2532)]
        );
        assert!(unassigned.is_empty());
    }

    #[test]
    fn plus_label_is_not_taken_for_its_prefix() {
        let src = shots(&[
            "a_iPhone_6_7_8_750x1334.png",
            "a_iPhone_6_7_8_Plus_1242x2208.png",
        ]);
        let (classes, _) = classify(src.path(), &config()).unwrap();
        let by_class: Vec<(&str, &[String])> = classes
            .iter()
            .map(|g| (g.class.as_str(), g.files.as_slice()))
            .collect();
        assert_eq!(
            by_class,
            [
                ("iPhone_5_5", &["a_iPhone_6_7_8_750x1334.png".to_string()][..]),
                (
                    "iPhone_5_5_Plus",
                    &["a_iPhone_6_7_8_Plus_1242x2208.png".to_string()][..]
                ),
            ]
        );
    }

    #[test]
    fn unknown_labels_are_unassigned() {
        let src = shots(&["a_Galaxy_S24_1080x2340.png", "notes.txt"]);
        let (classes, unassigned) = classify(src.path(), &config()).unwrap();
        assert!(classes.is_empty());
        assert_eq!(unassigned, ["a_Galaxy_S24_1080x2340.png"]);
    }

    #[test]
    fn label_without_category_is_its_own_class() {
        let mut config = config();
        config.categories.remove("iPad_12_9");
        let src = shots(&["a_iPad_12_9_2048x2732.png"]);
        let (classes, _) = classify(src.path(), &config).unwrap();
        assert_eq!(classes[0].class, "iPad_12_9");
    }

    #[test]
    fn organize_copies_classes_and_recommended() {
        let src = shots(&[
            "home_iPhone_12_1170x2532.png",
            "home_iPhone_6_7_8_Plus_1242x2208.png",
            "home_iPad_12_9_2048x2732.png",
        ]);
        let dest = TempDir::new().unwrap();
        let out = dest.path().join("organized");

        let report = organize(src.path(), &out, &config()).unwrap();

        assert_eq!(
            list_dir(&out),
            ["README.md", "Recommended", "iPad_12_9", "iPhone_5_5_Plus", "iPhone_6_1"]
        );
        assert_eq!(
            list_dir(&out.join("Recommended")),
            ["iPad_12_9", "iPhone_5_5_Plus"]
        );
        assert_eq!(
            list_dir(&out.join("Recommended/iPhone_5_5_Plus")),
            ["home_iPhone_6_7_8_Plus_1242x2208.png"]
        );
        assert_eq!(
            fs::read(out.join("iPhone_6_1/home_iPhone_12_1170x2532.png")).unwrap(),
            b"home_iPhone_12_1170x2532.png"
        );
        assert_eq!(report.recommended, ["iPhone_5_5_Plus", "iPad_12_9"]);
        assert!(report.recommended_missing.is_empty());
        assert_eq!(report.file_count(), 3);
    }

    #[test]
    fn organize_starts_from_a_fresh_destination() {
        let src = shots(&["home_iPhone_12_1170x2532.png"]);
        let dest = TempDir::new().unwrap();
        let out = dest.path().join("organized");
        fs::create_dir_all(out.join("stale_class")).unwrap();
        fs::write(out.join("stale_class/old.png"), "").unwrap();

        organize(src.path(), &out, &config()).unwrap();
        assert_eq!(list_dir(&out), ["README.md", "iPhone_6_1"]);
    }

    #[test]
    fn organize_reports_missing_recommended_classes() {
        let src = shots(&["home_iPhone_12_1170x2532.png"]);
        let dest = TempDir::new().unwrap();
        let report = organize(src.path(), &dest.path().join("o"), &config()).unwrap();
        assert!(report.recommended.is_empty());
        assert_eq!(report.recommended_missing, ["iPhone_5_5_Plus", "iPad_12_9"]);
        assert!(!dest.path().join("o/Recommended").exists());
    }

    #[test]
    fn organize_refuses_to_wipe_the_source() {
        let parent = TempDir::new().unwrap();
        let src = parent.path().join("shots");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("home_iPhone_12_1170x2532.png"), "").unwrap();

        let result = organize(&src, parent.path(), &config());
        assert!(matches!(result, Err(OrganizeError::UnsafeDestination { .. })));
        let result = organize(&src, &src, &config());
        assert!(matches!(result, Err(OrganizeError::UnsafeDestination { .. })));
        assert!(src.join("home_iPhone_12_1170x2532.png").exists());
    }

    #[test]
    fn organize_missing_source_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = organize(&tmp.path().join("nope"), &tmp.path().join("o"), &config());
        assert!(matches!(result, Err(OrganizeError::SourceNotFound(_))));
    }

    #[test]
    fn guide_lists_classes_resolutions_and_upload_order() {
        let src = shots(&[
            "home_iPhone_12_1170x2532.png",
            "home_iPhone_XR_828x1792.png",
            "home_iPad_12_9_2048x2732.png",
        ]);
        let dest = TempDir::new().unwrap();
        let out = dest.path().join("o");
        organize(src.path(), &out, &config()).unwrap();

        let guide = fs::read_to_string(out.join(GUIDE_FILE)).unwrap();
        assert!(guide.starts_with("# App Store Screenshots\n"));
        assert!(guide.contains("Device catalog version: 2024.09"));
        assert!(guide.contains("1. **iPad_12_9/** - 2048x2732\n"));
        assert!(guide.contains("Not generated this run: iPhone_5_5_Plus"));
        assert!(guide.contains("- **iPhone_6_1/** - 828x1792 / 1170x2532 (2 files)\n"));
        assert!(guide.contains("- **iPad_12_9/** - 2048x2732 (1 file)\n"));
        assert!(guide.contains("for example `home_iPad_12_9_2048x2732.png`"));
    }
}
