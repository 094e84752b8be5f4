//! Edit-template extraction from before/after token sequences.
//!
//! Two sequences are aligned, every token both sides share is kept, and
//! every gap of deleted tokens is collapsed into one `ANY` wildcard. The
//! stable context around each gap is packaged as a [`Chunk`], and the
//! chunks chain together into a [`Template`].
//!
//! # Quick start
//!
//! ## Render a template from two sentences
//!
//! ```
//! let template = tmplrev::template_from_words(
//!     "Hello there, I was been there aaa",
//!     "Hello there, he was in there khs",
//! );
//! assert_eq!(template.len(), 3);
//! assert_eq!(template.to_string(), "Hello there, ... was, was ... there, there ... ");
//! ```
//!
//! ## Inspect the annotated diff stream
//!
//! ```
//! use tmplrev::{Element, Symbol, diff_text};
//!
//! let stream: Vec<_> = diff_text("abc", "adc").collect();
//! assert_eq!(stream[2], Element::Symbol(Symbol::Any));
//! assert_eq!(stream.len(), 5);
//! ```
//!
//! Every stage is a single-pass iterator: iterating again means running
//! the pipeline again from the original inputs.

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod diff;
pub mod render;
pub mod symbol;
pub mod template;
pub mod window;

use std::path::PathBuf;

pub use diff::{Algorithm, DiffOptions, Insertions, SymbolicDiff, diff, diff_text, diff_with};
pub use render::{render, render_chunk, render_with};
pub use symbol::{Element, Symbol};
pub use template::{Chunk, Detect, Template, detect, detect_text, detect_with};
pub use window::{
    Part, PartitionBySeparator, WindowError, Windows, overlapping_windows, partition_by_separator,
};

/// Unified error type for the library and the `tmplrev` binary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid windowing argument.
    #[error("{0}")]
    Window(#[from] WindowError),
    /// Output could not be serialized.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    /// An input file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Split both texts on whitespace and build their template in one step.
#[must_use]
pub fn template_from_words<'a>(before: &'a str, after: &'a str) -> Template<&'a str> {
    detect(before.split_whitespace(), after.split_whitespace()).collect()
}
