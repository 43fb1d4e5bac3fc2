//! Text encoding of a single annotated word.
//!
//! A word is written as a run of `{key=value}` segments, the surface form
//! first under its language key, then every present layer in [`Layer::ALL`]
//! order:
//!
//! ```text
//! {turkish=ev}{morphologicalAnalysis=ev+NOUN+A3SG+PNON+NOM}{universalDependency=2$OBJ}
//! ```
//!
//! Decoding is lenient. A segment without `=` is taken as the surface form,
//! and segments with an empty key, an unknown key or an unreadable value are
//! skipped. Decoding therefore never fails, which keeps old corpora readable.

use std::convert::Infallible;
use std::str::FromStr;

use crate::layers::{Language, Layer};
use crate::word::AnnotatedWord;

/// Encodes and decodes words, assigning `default_language` to words whose
/// encoding has no language segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCodec {
    pub default_language: Language,
}

impl WordCodec {
    pub fn new(default_language: Language) -> Self {
        Self { default_language }
    }

    pub fn decode(&self, text: &str) -> AnnotatedWord {
        let mut word = AnnotatedWord::new("", self.default_language);
        for segment in text.split(|c| c == '{' || c == '}') {
            if segment.is_empty() {
                continue;
            }
            let (key, value) = match segment.split_once('=') {
                Some(pair) => pair,
                None => {
                    word.set_name(segment);
                    continue;
                }
            };
            if let Some(language) = Language::from_key(key) {
                word.set_name(value);
                word.set_language(language);
            } else if let Some(layer) = Layer::from_key(key) {
                if !word.set_layer(layer, value) {
                    tracing::trace!(%layer, value, "skipping unreadable layer value");
                }
            } else {
                tracing::trace!(key, "skipping unknown layer segment");
            }
        }
        word
    }

    pub fn encode(&self, word: &AnnotatedWord) -> String {
        let mut result = format!("{{{}={}}}", word.language().key(), word.name());
        for layer in Layer::ALL {
            if let Some(value) = word.layer_info(layer) {
                result.push('{');
                result.push_str(layer.key());
                result.push('=');
                result.push_str(&value);
                result.push('}');
            }
        }
        result
    }
}

impl FromStr for AnnotatedWord {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(WordCodec::default().decode(s))
    }
}

impl std::fmt::Display for AnnotatedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&WordCodec::default().encode(self))
    }
}
