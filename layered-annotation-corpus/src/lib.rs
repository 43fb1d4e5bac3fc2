//! Corpus-level operations for layered-annotation.
//!
//! A corpus is a directory of sentence files, one encoded sentence on the
//! first line of each file. This crate loads such directories and applies
//! sentence operations across them.
//!
//! ## Core Types
//!
//! - [`AnnotatedCorpus`] - Sentences loaded from a directory, in file name order
//! - [`sentence_files`] - Files of a directory selected by a glob-style name pattern
//!
//! ## Example
//!
//! ```no_run
//! use layered_annotation::AnnotationConfig;
//! use layered_annotation_corpus::AnnotatedCorpus;
//! use std::path::Path;
//!
//! let config = AnnotationConfig::default();
//! let gold = AnnotatedCorpus::load(Path::new("gold"), Some("*.dev"), &config).unwrap();
//! let predicted = AnnotatedCorpus::load(Path::new("predicted"), Some("*.dev"), &config).unwrap();
//! let score = gold.compare_parses(&predicted);
//! println!("{} of {} heads correct", score.unlabeled_attachment, score.word_count);
//! ```

mod corpus;
mod loader;

pub use corpus::AnnotatedCorpus;
pub use loader::{sentence_files, DEFAULT_PATTERN};
