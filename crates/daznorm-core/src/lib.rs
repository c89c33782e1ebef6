//! Asset-archive normalization library.
//!
//! `daznorm-core` turns archives of 3D-content-creation assets (zip/rar/7z)
//! into a consistent directory layout: extract, recursively unpack nested
//! archives, locate the content root by folder-name matching, copy its
//! contents (optionally filtering promo material), then re-zip per archive or
//! merge everything into one shared tree.
//!
//! # Examples
//!
//! ```no_run
//! use daznorm_core::NormalizeOptions;
//! use daznorm_core::run;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = NormalizeOptions::default();
//! let report = run(Path::new("downloads"), Path::new("library"), &options)?;
//! println!("{} archives normalized", report.succeeded());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod content;
pub mod copy;
pub mod error;
pub mod formats;
pub mod install;
pub mod locate;
pub mod normalize;
pub mod package;
pub mod unpack;

// Re-export main API types
pub use error::NormalizeError;
pub use error::Result;
pub use formats::ArchiveKind;
pub use formats::extract_archive;
pub use install::CopyStats;
pub use locate::find_content_root;
pub use normalize::ArchiveOutcome;
pub use normalize::ArchiveResult;
pub use normalize::BatchReport;
pub use normalize::NormalizeOptions;
pub use normalize::discover_archives;
pub use normalize::process_archive;
pub use normalize::run;
pub use unpack::UnpackReport;
pub use unpack::unpack_nested;
