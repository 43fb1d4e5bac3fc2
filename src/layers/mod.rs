//! Typed values for every annotation layer a word can carry.
//!
//! Each layer is independent: a word may hold any subset of them. The
//! [`Layer`] enumeration fixes the canonical order in which layers are
//! written by the codec, so encoding never depends on string dispatch.

mod dependency;
mod entity;
mod framenet;
mod morphology;
mod polarity;
mod propbank;

pub use dependency::UniversalDependencyRelation;
pub use entity::{NamedEntityType, Slot, SlotType};
pub use framenet::{FrameElement, FrameElementList};
pub use morphology::{InflectionalGroup, MetamorphicParse, MorphologicalParse};
pub use polarity::PolarityType;
pub use propbank::{Argument, ArgumentList};

use serde::{Deserialize, Serialize};

/// Language of a word's surface form.
///
/// The language segment doubles as the surface-form segment in the encoded
/// text: `{turkish=ev}` sets both the name and the language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Turkish,
    English,
    Persian,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Turkish, Language::English, Language::Persian];

    /// Key used for the surface-form segment.
    pub fn key(self) -> &'static str {
        match self {
            Language::Turkish => "turkish",
            Language::English => "english",
            Language::Persian => "persian",
        }
    }

    /// Accepts the lowercase key and its capitalized spelling.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "turkish" | "Turkish" => Some(Language::Turkish),
            "english" | "English" => Some(Language::English),
            "persian" | "Persian" => Some(Language::Persian),
            _ => None,
        }
    }
}

/// Annotation layers other than the surface form, in canonical encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    MorphologicalAnalysis,
    MetaMorphemes,
    Semantics,
    NamedEntity,
    Propbank,
    ShallowParse,
    UniversalDependency,
    Framenet,
    Slot,
    Polarity,
    Ccg,
    PosTag,
}

impl Layer {
    /// Every layer, in the order the codec writes them.
    pub const ALL: [Layer; 12] = [
        Layer::MorphologicalAnalysis,
        Layer::MetaMorphemes,
        Layer::Semantics,
        Layer::NamedEntity,
        Layer::Propbank,
        Layer::ShallowParse,
        Layer::UniversalDependency,
        Layer::Framenet,
        Layer::Slot,
        Layer::Polarity,
        Layer::Ccg,
        Layer::PosTag,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Layer::MorphologicalAnalysis => "morphologicalAnalysis",
            Layer::MetaMorphemes => "metaMorphemes",
            Layer::Semantics => "semantics",
            Layer::NamedEntity => "namedEntity",
            Layer::Propbank => "propbank",
            Layer::ShallowParse => "shallowParse",
            Layer::UniversalDependency => "universalDependency",
            Layer::Framenet => "framenet",
            Layer::Slot => "slot",
            Layer::Polarity => "polarity",
            Layer::Ccg => "ccg",
            Layer::PosTag => "posTag",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Layer::ALL.iter().copied().find(|layer| layer.key() == key)
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
