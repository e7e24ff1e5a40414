//! # Appshots
//!
//! Prepares App Store assets at exact device resolutions: screenshots for
//! every device class in a catalog, and the iOS AppIcon set.
//!
//! # The Resize
//!
//! Every output comes from one operation, [`imaging::resize_to_fill`]: crop the
//! source symmetrically to the target's aspect ratio, then Lanczos3-scale to
//! the exact target size. Nothing is stretched and nothing is letterboxed.
//!
//! ```text
//! 3000x2000 source, target 750x1334
//!   crop 1124x2000 at (938, 0)  →  scale  →  750x1334
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 1. Screenshots  input/    →  output/     (every image × every catalog target)
//! 2. Verify       output/   →  report      (decoded size vs. size in the file name)
//! 3. Organize     output/   →  organized/  (display-class folders + README.md)
//! ```
//!
//! Output names carry their size (`home_iPhone_12_1170x2532.png`), which is
//! what lets stage 2 work from the folder alone and stage 3 sort files
//! without any manifest.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Finds source images in the input folder |
//! | [`process`] | Stage 1: renders every (image, target) pair, reports per pair |
//! | [`verify`] | Stage 2: re-decodes outputs and checks them against their names |
//! | [`organize`] | Stage 3: display-class folders, `Recommended/`, usage guide |
//! | [`icons`] | AppIcon set and its `Contents.json` |
//! | [`config`] | `appshots.toml` loading, stock device catalog, validation |
//! | [`imaging`] | Crop math, the resize, and the `image`-crate backend |
//! | [`naming`] | Output file names and parsing the size back out of them |
//! | [`types`] | `Dimensions`, `TargetSpec`, crop regions, image wrappers |
//! | [`output`] | CLI output formatting for every stage |
//!
//! # Device Catalog as Data
//!
//! Which label belongs to which display class is product knowledge that
//! changes with every hardware release. It lives in configuration tagged with
//! a `catalog_version`, with the stock tables compiled in as defaults. See
//! [`config`].

pub mod config;
pub mod icons;
pub mod imaging;
pub mod naming;
pub mod organize;
pub mod output;
pub mod process;
pub mod scan;
pub mod types;
pub mod verify;

#[cfg(test)]
pub(crate) mod test_helpers;
