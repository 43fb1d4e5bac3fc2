use crate::word::AnnotatedWord;

/// A group of words from one sentence sharing a tag, such as a shallow-parse
/// chunk or the words governed by one child of a dependency root.
///
/// A phrase borrows its words from the sentence it was built from, so the
/// sentence cannot be mutated while the phrase is alive. Phrases are rebuilt
/// on every query; groupings computed before a mutation such as
/// [`remove_word`](crate::AnnotatedSentence::remove_word) are not carried over.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPhrase<'s> {
    word_index: usize,
    tag: String,
    positions: Vec<usize>,
    words: Vec<&'s AnnotatedWord>,
}

impl<'s> AnnotatedPhrase<'s> {
    /// `word_index` is the 0-based sentence position of the first word.
    pub fn new(word_index: usize, tag: impl Into<String>) -> Self {
        Self {
            word_index,
            tag: tag.into(),
            positions: Vec::new(),
            words: Vec::new(),
        }
    }

    pub(crate) fn add_word(&mut self, position: usize, word: &'s AnnotatedWord) {
        self.positions.push(position);
        self.words.push(word);
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    pub fn words(&self) -> &[&'s AnnotatedWord] {
        &self.words
    }

    /// 0-based sentence positions of the words, in sentence order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Surface forms joined by single spaces.
    pub fn to_words(&self) -> String {
        self.words
            .iter()
            .map(|word| word.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `TAG@index: surface forms`
impl std::fmt::Display for AnnotatedPhrase<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}: {}", self.tag, self.word_index, self.to_words())
    }
}
