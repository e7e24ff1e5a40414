//! Screenshot stage: every source image × every catalog target.
//!
//! Takes the images found by [`scan`](crate::scan) and writes one PNG per
//! (image, target) pair into the output folder:
//!
//! ```text
//! screenshots/                    output/
//! ├── home.png        ──────▶     ├── home_iPhone_6_1_1170x2532.png
//! └── settings.jpg                ├── home_iPad_12_9_2048x2732.png
//!                                 ├── settings_iPhone_6_1_1170x2532.png
//!                                 └── ...
//! ```
//!
//! ## Failure handling
//!
//! A pair that cannot be produced is recorded as [`PairOutcome::Failed`] and
//! the loop moves on. An undecodable source fails all of its pairs with
//! [`ResizeError::InvalidInput`] and nothing is written for it. Only
//! folder-level problems (missing input, output folder not creatable) abort
//! the stage with a [`ProcessError`].
//!
//! ## Progress
//!
//! When a sender is supplied, a [`ProcessEvent`] is emitted as each image
//! starts and as each pair finishes, so the CLI can print while rayon works.
//! Sources are processed in parallel; pairs of one source run in catalog
//! order against a single decoded copy of the image.

use crate::imaging::{
    BackendError, Compression, ImageBackend, RenderError, RenderParams, ResizeError, RustBackend,
    render,
};
use crate::naming;
use crate::scan::{self, ScanError, SourceFile};
use crate::types::{Dimensions, TargetSpec};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Cannot create output folder {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single pair produced no file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PairFailure {
    #[error(transparent)]
    Resize(#[from] ResizeError),
    #[error("write failed: {0}")]
    Write(String),
}

impl From<RenderError> for PairFailure {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Resize(e) => PairFailure::Resize(e),
            RenderError::Write(e) => PairFailure::Write(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PairOutcome {
    Written { path: PathBuf, dimensions: Dimensions },
    Failed(PairFailure),
}

impl PairOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, PairOutcome::Written { .. })
    }
}

/// Result of one (source, target) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    /// Source file name, e.g. `home.png`.
    pub source: String,
    pub target: TargetSpec,
    pub outcome: PairOutcome,
}

/// Progress events emitted while the stage runs.
#[derive(Debug, Clone)]
pub enum ProcessEvent {
    ImageStarted {
        /// 1-based position in scan order.
        index: usize,
        total: usize,
        file_name: String,
    },
    PairFinished(PairReport),
}

/// What the screenshot stage did.
#[derive(Debug, Default)]
pub struct ProcessSummary {
    pub images: usize,
    /// All pairs, grouped by source in scan order, then catalog order.
    pub pairs: Vec<PairReport>,
    /// Sources skipped because their base name was already taken.
    pub collisions: Vec<SourceFile>,
}

impl ProcessSummary {
    pub fn succeeded(&self) -> usize {
        self.pairs.iter().filter(|p| p.outcome.is_written()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &PairReport> {
        self.pairs.iter().filter(|p| !p.outcome.is_written())
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Run the screenshot stage with the `image`-crate backend.
pub fn process(
    input: &Path,
    output: &Path,
    targets: &[TargetSpec],
    compression: Compression,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessSummary, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, input, output, targets, compression, events)
}

/// Run the screenshot stage against any backend (tests use a mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    input: &Path,
    output: &Path,
    targets: &[TargetSpec],
    compression: Compression,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessSummary, ProcessError> {
    let scanned = scan::scan(input)?;
    std::fs::create_dir_all(output).map_err(|source| ProcessError::OutputDir {
        path: output.to_path_buf(),
        source,
    })?;

    let total = scanned.sources.len();
    tracing::info!(
        images = total,
        targets = targets.len(),
        output = %output.display(),
        "screenshot stage started"
    );

    let pairs: Vec<PairReport> = scanned
        .sources
        .par_iter()
        .enumerate()
        .flat_map_iter(|(i, source)| {
            if let Some(tx) = &events {
                tx.send(ProcessEvent::ImageStarted {
                    index: i + 1,
                    total,
                    file_name: source.file_name.clone(),
                })
                .ok();
            }
            let reports = process_source(backend, source, output, targets, compression);
            if let Some(tx) = &events {
                for report in &reports {
                    tx.send(ProcessEvent::PairFinished(report.clone())).ok();
                }
            }
            reports
        })
        .collect();

    let summary = ProcessSummary {
        images: total,
        pairs,
        collisions: scanned.collisions,
    };
    tracing::info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "screenshot stage finished"
    );
    Ok(summary)
}

/// All pairs for one source, in catalog order.
fn process_source(
    backend: &impl ImageBackend,
    source: &SourceFile,
    output: &Path,
    targets: &[TargetSpec],
    compression: Compression,
) -> Vec<PairReport> {
    let report = |target: &TargetSpec, outcome: PairOutcome| PairReport {
        source: source.file_name.clone(),
        target: target.clone(),
        outcome,
    };

    let image = match backend.load(&source.path) {
        Ok(image) => image,
        Err(err) => {
            tracing::warn!(file = %source.file_name, error = %err, "cannot decode source");
            let failure = PairFailure::Resize(ResizeError::InvalidInput(decode_message(&err)));
            return targets
                .iter()
                .map(|t| report(t, PairOutcome::Failed(failure.clone())))
                .collect();
        }
    };

    targets
        .iter()
        .map(|target| {
            let params = RenderParams {
                target: target.clone(),
                output: output.join(naming::screenshot_file_name(&source.base_name, target)),
                compression,
            };
            let outcome = match render(backend, &image, &params) {
                Ok(dimensions) => PairOutcome::Written {
                    path: params.output,
                    dimensions,
                },
                Err(err) => {
                    tracing::warn!(
                        file = %source.file_name,
                        target = %target.label,
                        error = %err,
                        "pair skipped"
                    );
                    PairOutcome::Failed(err.into())
                }
            };
            report(target, outcome)
        })
        .collect()
}

fn decode_message(err: &BackendError) -> String {
    match err {
        BackendError::Decode { message, .. } => format!("cannot decode source: {message}"),
        other => format!("cannot read source: {other}"),
    }
}
