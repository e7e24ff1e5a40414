//! Verification pass over a folder of written screenshots.
//!
//! Every `*.png` directly in the folder is checked: the trailing
//! `_{width}x{height}` token of its name is compared with the size the file
//! actually decodes to. The whole file is decoded, so a truncated write fails
//! even when its header is intact. Problems are collected, never raised, so one bad file
//! does not hide the rest.
//!
//! | File | Outcome |
//! |---|---|
//! | `photo_iPhone_6_1_1170x2532.png` decoding to 1170x2532 | passed |
//! | same name decoding to 1169x2532 | [`VerifyError::DecodeVerification`] |
//! | `notes.png` | skipped, [`VerifyError::MissingDimensions`] |
//! | truncated or non-image bytes | [`VerifyError::Unreadable`] |

use crate::imaging::{ImageBackend, RustBackend};
use crate::naming;
use crate::types::Dimensions;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Per-file verification problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerifyError {
    #[error("decoded size {actual} does not match declared {expected}")]
    DecodeVerification {
        expected: Dimensions,
        actual: Dimensions,
    },
    #[error("no {{width}}x{{height}} token in file name")]
    MissingDimensions,
    #[error("unreadable: {0}")]
    Unreadable(String),
}

/// Folder-level failure: the pass could not run at all.
#[derive(Error, Debug)]
pub enum VerifyRunError {
    #[error("Output folder not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to list {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileCheck {
    pub file_name: String,
    pub result: Result<Dimensions, VerifyError>,
}

impl FileCheck {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct VerifyReport {
    /// One entry per PNG, sorted by file name.
    pub checks: Vec<FileCheck>,
}

impl VerifyReport {
    fn count(&self, pred: impl Fn(&FileCheck) -> bool) -> usize {
        self.checks.iter().filter(|&c| pred(c)).count()
    }

    pub fn passed(&self) -> usize {
        self.count(FileCheck::passed)
    }

    pub fn mismatched(&self) -> usize {
        self.count(|c| matches!(c.result, Err(VerifyError::DecodeVerification { .. })))
    }

    pub fn unreadable(&self) -> usize {
        self.count(|c| matches!(c.result, Err(VerifyError::Unreadable(_))))
    }

    pub fn skipped(&self) -> usize {
        self.count(|c| matches!(c.result, Err(VerifyError::MissingDimensions)))
    }

    /// Mismatched or unreadable files. Skipped names are not problems.
    pub fn problems(&self) -> impl Iterator<Item = &FileCheck> {
        self.checks.iter().filter(|c| {
            matches!(
                c.result,
                Err(VerifyError::DecodeVerification { .. } | VerifyError::Unreadable(_))
            )
        })
    }

    pub fn has_problems(&self) -> bool {
        self.problems().next().is_some()
    }
}

/// Check one file against the size declared in its name.
pub fn check_file(backend: &impl ImageBackend, path: &Path) -> FileCheck {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = match naming::parse_declared_dimensions(&file_name) {
        None => Err(VerifyError::MissingDimensions),
        Some(expected) => match backend.load(path).map(|image| image.dimensions()) {
            Err(err) => Err(VerifyError::Unreadable(err.to_string())),
            Ok(actual) if actual == expected => Ok(actual),
            Ok(actual) => Err(VerifyError::DecodeVerification { expected, actual }),
        },
    };

    match &result {
        Err(VerifyError::MissingDimensions) => {
            tracing::debug!(file = %file_name, "no size token, skipped")
        }
        Err(err) => tracing::warn!(file = %file_name, error = %err, "verification failed"),
        Ok(_) => {}
    }
    FileCheck { file_name, result }
}

/// Verify every PNG in `dir` with the `image`-crate backend.
pub fn verify(dir: &Path) -> Result<VerifyReport, VerifyRunError> {
    verify_with_backend(&RustBackend::new(), dir)
}

pub fn verify_with_backend(
    backend: &impl ImageBackend,
    dir: &Path,
) -> Result<VerifyReport, VerifyRunError> {
    if !dir.is_dir() {
        return Err(VerifyRunError::NotFound(dir.to_path_buf()));
    }

    let mut report = VerifyReport::default();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|source| VerifyRunError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_png(entry.path()) {
            report.checks.push(check_file(backend, entry.path()));
        }
    }
    tracing::info!(
        files = report.checks.len(),
        passed = report.passed(),
        "verification finished"
    );
    Ok(report)
}

fn is_png(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| naming::strip_output_extension(n).is_some())
}
