//! Query interfaces for the lexical resources this crate consults but does
//! not implement: frame inventories, gazetteers and sense inventories.

use std::collections::{BTreeSet, HashSet};

use crate::layers::{MetamorphicParse, MorphologicalParse};

/// PropBank frameset inventory.
pub trait FramesetResource {
    /// Whether a frameset exists for the sense identifier.
    fn frame_exists(&self, sense: &str) -> bool;
}

/// FrameNet lexical-unit inventory.
pub trait LexicalUnitResource {
    /// Whether a lexical unit exists for the sense identifier.
    fn lexical_unit_exists(&self, sense: &str) -> bool;
}

/// A named-entity word list.
pub trait Gazetteer {
    /// `word` is already lowercased.
    fn contains(&self, word: &str) -> bool;

    /// Named-entity label assigned to listed words, e.g. `LOCATION`.
    fn label(&self) -> &str;
}

/// One word's morphological view, as handed to a [`SenseInventory`].
#[derive(Debug, Clone, Copy)]
pub struct WordAnalysis<'a> {
    pub parse: &'a MorphologicalParse,
    pub metamorphic_parse: Option<&'a MetamorphicParse>,
}

/// Sense inventory (a wordnet) able to expand a word, or a multiword window,
/// into candidate literals and synsets.
pub trait SenseInventory {
    type Literal;
    type SynSet;

    /// Literals for the root forms of a single word.
    fn literals(&self, root: &str, word: WordAnalysis<'_>) -> Vec<Self::Literal>;

    /// Literals for an idiom spanning `words`, in sentence order.
    fn idiom_literals(&self, words: &[WordAnalysis<'_>]) -> Vec<Self::Literal>;

    /// Synsets for the root forms of a single word.
    fn synsets(&self, root: &str, word: WordAnalysis<'_>) -> Vec<Self::SynSet>;

    /// Synsets for an idiom spanning `words`, in sentence order.
    fn idiom_synsets(&self, words: &[WordAnalysis<'_>]) -> Vec<Self::SynSet>;
}

macro_rules! impl_set_resource {
    ($($set:ident),*) => {
        $(
            impl FramesetResource for $set<String> {
                fn frame_exists(&self, sense: &str) -> bool {
                    self.contains(sense)
                }
            }

            impl LexicalUnitResource for $set<String> {
                fn lexical_unit_exists(&self, sense: &str) -> bool {
                    self.contains(sense)
                }
            }
        )*
    };
}

impl_set_resource!(HashSet, BTreeSet);

impl<T: FramesetResource + ?Sized> FramesetResource for &T {
    fn frame_exists(&self, sense: &str) -> bool {
        (**self).frame_exists(sense)
    }
}

impl<T: LexicalUnitResource + ?Sized> LexicalUnitResource for &T {
    fn lexical_unit_exists(&self, sense: &str) -> bool {
        (**self).lexical_unit_exists(sense)
    }
}
