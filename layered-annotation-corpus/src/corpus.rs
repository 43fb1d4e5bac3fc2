use layered_annotation::{
    AnnotatedSentence, AnnotationConfig, AnnotationResult, AttachmentComparator, ParseScore,
    RelationComparator,
};
use std::path::Path;

use crate::loader::sentence_files;

/// Sentences read from the files of one directory, in file name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedCorpus {
    sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedCorpus {
    pub fn new(sentences: Vec<AnnotatedSentence>) -> Self {
        Self { sentences }
    }

    /// Loads every file in `dir` matching the glob-style `pattern`.
    ///
    /// The first file that cannot be read aborts the load.
    pub fn load(dir: &Path, pattern: Option<&str>, config: &AnnotationConfig) -> AnnotationResult<Self> {
        let codec = config.codec();
        let sentences = sentence_files(dir, pattern, config)?
            .iter()
            .map(|path| AnnotatedSentence::from_file_with(path, &codec))
            .collect::<AnnotationResult<Vec<_>>>()?;
        tracing::debug!(dir = %dir.display(), sentences = sentences.len(), "loaded corpus");
        Ok(Self { sentences })
    }

    pub fn sentences(&self) -> &[AnnotatedSentence] {
        &self.sentences
    }

    pub fn sentence(&self, index: usize) -> Option<&AnnotatedSentence> {
        self.sentences.get(index)
    }

    pub fn sentence_mut(&mut self, index: usize) -> Option<&mut AnnotatedSentence> {
        self.sentences.get_mut(index)
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Total number of words over all sentences.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(AnnotatedSentence::word_count).sum()
    }

    /// Attachment agreement of `other` against this corpus, sentence by
    /// sentence in load order.
    pub fn compare_parses(&self, other: &AnnotatedCorpus) -> ParseScore {
        self.compare_parses_with(other, &AttachmentComparator)
    }

    /// Sums the sentence scores. Sentences of this corpus with no counterpart
    /// at the same position in `other` are skipped.
    pub fn compare_parses_with<C: RelationComparator>(&self, other: &AnnotatedCorpus, comparator: &C) -> ParseScore {
        self.sentences
            .iter()
            .zip(other.sentences.iter())
            .map(|(gold, predicted)| gold.compare_parses_with(predicted, comparator))
            .sum()
    }

    /// Concatenated CoNLL-U blocks of every sentence.
    pub fn to_universal_dependency_format(&self, prefix: Option<&str>) -> String {
        self.sentences
            .iter()
            .map(|sentence| sentence.to_universal_dependency_format(prefix))
            .collect()
    }
}
