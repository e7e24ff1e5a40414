//! CLI output formatting for every stage.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Screenshots
//!
//! Sources run in parallel, so every pair line names its source:
//!
//! ```text
//! 001/002 home.png
//!     home.png → home_iPhone_12_1170x2532.png
//!     home.png ✗ iPhone_SE (0x1334): invalid input: target has empty dimensions 0x1334
//! Screenshots: 83 written, 1 failed (2 images × 42 targets)
//! ```
//!
//! ## Verify
//!
//! ```text
//! ✗ home_iPhone_12_1170x2532.png: decoded size 1169x2532 does not match declared 1170x2532
//! Verified 84 files: 83 passed, 1 mismatched, 0 unreadable, 0 skipped
//! ```
//!
//! ## Organize
//!
//! ```text
//! iPhone_6_1 (18 files: 828x1792 / 1170x2532 / 1179x2556)
//! ⭐ Recommended: iPhone_6_7_New, iPhone_6_5, iPad_12_9
//! Organized 84 files into 17 classes → organized/
//! ```

use crate::config::AppConfig;
use crate::icons::IconSummary;
use crate::organize::OrganizeReport;
use crate::process::{PairOutcome, PairReport, ProcessEvent, ProcessSummary};
use crate::scan::ScanResult;
use crate::verify::VerifyReport;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Screenshots
// ============================================================================

/// One line for a finished pair.
pub fn format_pair(report: &PairReport) -> String {
    match &report.outcome {
        PairOutcome::Written { path, .. } => {
            format!("{}{} → {}", indent(1), report.source, file_name(path))
        }
        PairOutcome::Failed(failure) => format!(
            "{}{} ✗ {} ({}): {}",
            indent(1),
            report.source,
            report.target.label,
            report.target.dimensions(),
            failure
        ),
    }
}

pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::ImageStarted {
            index,
            total,
            file_name,
        } => vec![format!(
            "{}/{} {}",
            format_index(*index),
            format_index(*total),
            file_name
        )],
        ProcessEvent::PairFinished(report) => vec![format_pair(report)],
    }
}

pub fn format_process_summary(summary: &ProcessSummary, targets: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for skipped in &summary.collisions {
        lines.push(format!(
            "Skipped {}: another source already uses the name '{}'",
            skipped.file_name, skipped.base_name
        ));
    }
    let failures: Vec<&PairReport> = summary.failures().collect();
    if !failures.is_empty() {
        lines.push("Failed pairs:".to_string());
        lines.extend(failures.into_iter().map(format_pair));
    }
    lines.push(format!(
        "Screenshots: {} written, {} failed ({} × {})",
        summary.succeeded(),
        summary.failed(),
        plural(summary.images, "image", "images"),
        plural(targets, "target", "targets"),
    ));
    lines
}

pub fn print_process_summary(summary: &ProcessSummary, targets: usize) {
    for line in format_process_summary(summary, targets) {
        println!("{}", line);
    }
}

// ============================================================================
// Verify
// ============================================================================

pub fn format_verify_report(report: &VerifyReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .problems()
        .filter_map(|check| {
            check
                .result
                .as_ref()
                .err()
                .map(|err| format!("✗ {}: {}", check.file_name, err))
        })
        .collect();
    lines.push(format!(
        "Verified {}: {} passed, {} mismatched, {} unreadable, {} skipped",
        plural(report.checks.len(), "file", "files"),
        report.passed(),
        report.mismatched(),
        report.unreadable(),
        report.skipped()
    ));
    lines
}

pub fn print_verify_report(report: &VerifyReport) {
    for line in format_verify_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Organize
// ============================================================================

pub fn format_organize_report(report: &OrganizeReport) -> Vec<String> {
    let mut lines = Vec::new();
    for group in &report.classes {
        let resolutions: Vec<String> = group.resolutions.iter().map(|d| d.to_string()).collect();
        lines.push(format!(
            "{} ({}: {})",
            group.class,
            plural(group.files.len(), "file", "files"),
            resolutions.join(" / ")
        ));
    }
    if !report.recommended.is_empty() {
        lines.push(format!("⭐ Recommended: {}", report.recommended.join(", ")));
    }
    if !report.recommended_missing.is_empty() {
        lines.push(format!(
            "Recommended but not generated: {}",
            report.recommended_missing.join(", ")
        ));
    }
    for name in &report.unassigned {
        lines.push(format!("Unassigned: {}", name));
    }
    lines.push(format!(
        "Organized {} into {} → {}",
        plural(report.file_count(), "file", "files"),
        plural(report.classes.len(), "class", "classes"),
        report.dest.display()
    ));
    lines
}

pub fn print_organize_report(report: &OrganizeReport) {
    for line in format_organize_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Icons
// ============================================================================

pub fn format_icon_summary(summary: &IconSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .icons
        .iter()
        .map(|icon| match &icon.outcome {
            PairOutcome::Written { .. } => {
                format!("{} ({}x{})", icon.file_name, icon.pixels, icon.pixels)
            }
            PairOutcome::Failed(failure) => format!("✗ {}: {}", icon.file_name, failure),
        })
        .collect();
    lines.push(format!(
        "Icons: {} written → {}",
        summary.written(),
        summary.out_dir.display()
    ));
    lines
}

pub fn print_icon_summary(summary: &IconSummary) {
    for line in format_icon_summary(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Catalog table: label, size, display class.
pub fn format_catalog(config: &AppConfig) -> Vec<String> {
    let width = config
        .screenshots
        .targets
        .iter()
        .map(|t| t.label.len())
        .max()
        .unwrap_or(0);
    let mut lines = vec![format!(
        "Catalog {} ({})",
        config.catalog_version,
        plural(config.screenshots.targets.len(), "target", "targets")
    )];
    for target in &config.screenshots.targets {
        let size = target.dimensions().to_string();
        lines.push(format!(
            "{}{:<width$}  {:>9}  → {}",
            indent(1),
            target.label,
            size,
            config.display_class(&target.label),
        ));
    }
    lines
}

pub fn format_check_output(config: &AppConfig, scan: &ScanResult, input: &Path) -> Vec<String> {
    let mut lines = format_catalog(config);
    lines.push(String::new());
    lines.push(format!(
        "Inputs in {} ({})",
        input.display(),
        plural(scan.sources.len(), "image", "images")
    ));
    for (i, source) in scan.sources.iter().enumerate() {
        lines.push(format!(
            "{}{} {}",
            indent(1),
            format_index(i + 1),
            source.file_name
        ));
    }
    for skipped in &scan.collisions {
        lines.push(format!(
            "{}Skipped {}: name '{}' already taken",
            indent(1),
            skipped.file_name,
            skipped.base_name
        ));
    }
    lines.push(format!(
        "Would write {} screenshots",
        scan.sources.len() * config.screenshots.targets.len()
    ));
    lines
}

pub fn print_check_output(config: &AppConfig, scan: &ScanResult, input: &Path) {
    for line in format_check_output(config, scan, input) {
        println!("{}", line);
    }
}
