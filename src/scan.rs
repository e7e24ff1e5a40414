//! Source image discovery.
//!
//! Lists the images directly inside the input folder. Subdirectories are not
//! descended into, and files whose extension has no compiled-in decoder are
//! ignored. Extension matching is case-insensitive (`IMG_0001.PNG` counts).
//!
//! ## Ordering
//!
//! Sources come back sorted by file name so output order, logs and tests are
//! stable across filesystems.
//!
//! ## Base name collisions
//!
//! Output names are built from the file stem, so `home.png` and `home.jpg`
//! would both write `home_{label}_{w}x{h}.png`. The first in sort order is
//! kept; later ones are returned in [`ScanResult::collisions`] and never
//! rendered, keeping every output path owned by exactly one source.

use crate::imaging::supported_input_extensions;
use crate::naming;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Input folder not found: {0}")]
    NotFound(PathBuf),
    #[error("Input path is not a folder: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to list {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// One discovered source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
    /// File stem, used as the `{base}` of output names.
    pub base_name: String,
}

impl SourceFile {
    pub fn from_path(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            base_name: naming::base_name(path),
        }
    }
}

/// Result of scanning an input folder.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Images to render, sorted by file name.
    pub sources: Vec<SourceFile>,
    /// Images skipped because an earlier source has the same base name.
    pub collisions: Vec<SourceFile>,
}

/// Whether `path` has an extension we can decode.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            supported_input_extensions()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Discover source images directly inside `input`.
pub fn scan(input: &Path) -> Result<ScanResult, ScanError> {
    if !input.exists() {
        return Err(ScanError::NotFound(input.to_path_buf()));
    }
    if !input.is_dir() {
        return Err(ScanError::NotADirectory(input.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: input.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_supported_image(entry.path()) {
            files.push(SourceFile::from_path(entry.path()));
        }
    }

    let mut result = ScanResult::default();
    let mut bases = HashSet::new();
    for file in files {
        if bases.insert(file.base_name.clone()) {
            result.sources.push(file);
        } else {
            tracing::warn!(
                file = %file.file_name,
                base = %file.base_name,
                "skipping source whose base name is already taken"
            );
            result.collisions.push(file);
        }
    }
    tracing::info!(
        input = %input.display(),
        sources = result.sources.len(),
        "scan complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{file_names, input_dir};
    use std::fs;

    #[test]
    fn finds_png_and_jpeg_sorted() {
        let tmp = input_dir(&[
            ("settings.png", 30, 20),
            ("home.jpg", 30, 20),
            ("detail.jpeg", 30, 20),
        ]);
        let result = scan(tmp.path()).unwrap();
        assert_eq!(
            file_names(&result.sources),
            ["detail.jpeg", "home.jpg", "settings.png"]
        );
        assert!(result.collisions.is_empty());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = input_dir(&[("IMG_4857.PNG", 10, 10), ("IMG_4858.JPG", 10, 10)]);
        let result = scan(tmp.path()).unwrap();
        assert_eq!(file_names(&result.sources), ["IMG_4857.PNG", "IMG_4858.JPG"]);
        assert_eq!(result.sources[0].base_name, "IMG_4857");
    }

    #[test]
    fn ignores_other_files_and_subfolders() {
        let tmp = input_dir(&[("shot.png", 10, 10)]);
        fs::write(tmp.path().join("notes.txt"), "hello").unwrap();
        fs::write(tmp.path().join("icon.svg"), "<svg/>").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested/inner.png"), "").unwrap();

        let result = scan(tmp.path()).unwrap();
        assert_eq!(file_names(&result.sources), ["shot.png"]);
    }

    #[test]
    fn colliding_base_names_keep_first() {
        let tmp = input_dir(&[("home.png", 10, 10), ("home.jpg", 10, 10)]);
        let result = scan(tmp.path()).unwrap();
        assert_eq!(file_names(&result.sources), ["home.jpg"]);
        assert_eq!(file_names(&result.collisions), ["home.png"]);
    }

    #[test]
    fn unreadable_content_is_still_listed() {
        // Decoding happens later and fails per pair, not here
        let tmp = input_dir(&[]);
        fs::write(tmp.path().join("broken.png"), b"nope").unwrap();
        let result = scan(tmp.path()).unwrap();
        assert_eq!(file_names(&result.sources), ["broken.png"]);
    }

    #[test]
    fn empty_folder_yields_nothing() {
        let tmp = input_dir(&[]);
        let result = scan(tmp.path()).unwrap();
        assert!(result.sources.is_empty());
    }

    #[test]
    fn missing_folder_is_error() {
        let tmp = input_dir(&[]);
        let result = scan(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ScanError::NotFound(_))));
    }

    #[test]
    fn file_instead_of_folder_is_error() {
        let tmp = input_dir(&[("shot.png", 10, 10)]);
        let result = scan(&tmp.path().join("shot.png"));
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }
}
