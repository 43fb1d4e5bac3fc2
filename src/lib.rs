//! Multi-layer linguistic annotation of sentences.
//!
//! Every word carries a surface form plus any subset of independent
//! annotation layers (morphology, senses, named entities, semantic roles,
//! chunks, dependency relations, frames, slots, polarity, CCG and POS tags).
//! Sentences derive phrase groups, predicate candidates and CoNLL-U output
//! from those layers, and two parses of a sentence can be scored against
//! each other.
//!
//! ## Core Types
//!
//! - [`AnnotatedWord`] - One word and its layers, with a `{key=value}` text codec
//! - [`AnnotatedSentence`] - Ordered words plus the derived views
//! - [`AnnotatedPhrase`] - Borrowed word groups from dependency or chunk layers
//! - [`ParseScore`] - Additive attachment scores
//!
//! ## Example
//!
//! ```
//! use layered_annotation::{AnnotatedSentence, Layer};
//!
//! let sentence: AnnotatedSentence =
//!     "{turkish=ev}{morphologicalAnalysis=ev+NOUN+A3SG+PNON+NOM}{universalDependency=0$ROOT} {turkish=.}"
//!         .parse()
//!         .unwrap();
//! assert_eq!(sentence.to_stems(), "ev .");
//! assert_eq!(
//!     sentence.word(0).map(|word| word.present_layers()),
//!     Some(vec![Layer::MorphologicalAnalysis, Layer::UniversalDependency])
//! );
//! ```

mod codec;
mod config;
mod display;
mod errors;
mod grouping;
mod phrase;
mod predicate;
mod resources;
mod score;
mod sentence;
mod word;

pub mod layers;
pub mod universal;

#[cfg(test)]
mod tests;

// Layer values
pub use layers::{
    Argument, ArgumentList, FrameElement, FrameElementList, InflectionalGroup, Language, Layer,
    MetamorphicParse, MorphologicalParse, NamedEntityType, PolarityType, Slot, SlotType,
    UniversalDependencyRelation,
};

// Words and sentences
pub use codec::WordCodec;
pub use phrase::AnnotatedPhrase;
pub use sentence::AnnotatedSentence;
pub use word::{turkish_lowercase, AnnotatedWord};

// Algorithms
pub use grouping::{group_by_governor, segment_by_shallow_tag};
pub use score::{compare_sentences, AttachmentComparator, ParseScore, RelationComparator};

// External resources
pub use resources::{
    FramesetResource, Gazetteer, LexicalUnitResource, SenseInventory, WordAnalysis,
};

// Ambient
pub use config::AnnotationConfig;
pub use display::SentenceDisplay;
pub use errors::{AnnotationError, AnnotationResult};
