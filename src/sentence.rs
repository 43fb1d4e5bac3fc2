//! An ordered sequence of annotated words and the views derived from it.

use std::convert::Infallible;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::codec::WordCodec;
use crate::errors::{AnnotationError, AnnotationResult};
use crate::grouping;
use crate::phrase::AnnotatedPhrase;
use crate::predicate;
use crate::resources::{FramesetResource, LexicalUnitResource, SenseInventory, WordAnalysis};
use crate::score::{self, AttachmentComparator, ParseScore, RelationComparator};
use crate::word::AnnotatedWord;

/// Word at 0-based position `i` is addressed as `i + 1` by dependency
/// relations, and `0` addresses the sentence root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotatedSentence {
    words: Vec<AnnotatedWord>,
    file_name: Option<String>,
}

impl AnnotatedSentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words(words: Vec<AnnotatedWord>) -> Self {
        Self {
            words,
            file_name: None,
        }
    }

    /// Decodes whitespace-separated encoded words. Blank text gives an empty
    /// sentence.
    pub fn parse_with(text: &str, codec: &WordCodec) -> Self {
        Self::from_words(text.split_whitespace().map(|token| codec.decode(token)).collect())
    }

    /// Reads the first line of a sentence file. The file name, without its
    /// directory, becomes the sentence identifier.
    pub fn from_file_with(path: &Path, codec: &WordCodec) -> AnnotationResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AnnotationError::load(path, e))?;
        let line = content.lines().next().unwrap_or_default().trim();
        let mut sentence = Self::parse_with(line, codec);
        sentence.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        tracing::debug!(path = %path.display(), words = sentence.word_count(), "loaded sentence");
        Ok(sentence)
    }

    pub fn from_file(path: &Path) -> AnnotationResult<Self> {
        Self::from_file_with(path, &WordCodec::default())
    }

    pub fn words(&self) -> &[AnnotatedWord] {
        &self.words
    }

    pub fn word(&self, index: usize) -> Option<&AnnotatedWord> {
        self.words.get(index)
    }

    pub fn word_mut(&mut self, index: usize) -> Option<&mut AnnotatedWord> {
        self.words.get_mut(index)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn push_word(&mut self, word: AnnotatedWord) {
        self.words.push(word);
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn set_file_name(&mut self, file_name: Option<String>) {
        self.file_name = file_name;
    }

    /// Removes the word at `index` and renumbers the remaining relations:
    /// relations headed by the removed word are cleared, later heads shift
    /// down by one. Returns `None` and changes nothing when `index` is out of
    /// range.
    pub fn remove_word(&mut self, index: usize) -> Option<AnnotatedWord> {
        if index >= self.words.len() {
            return None;
        }
        let removed = index + 1;
        for word in &mut self.words {
            let (to, label) = match word.universal_dependency() {
                Some(relation) => (relation.to(), relation.label().to_string()),
                None => continue,
            };
            if to == removed {
                word.clear_universal_dependency();
            } else if to > removed {
                word.set_universal_dependency(to as i64 - 1, &label);
            }
        }
        Some(self.words.remove(index))
    }

    /// Surface forms joined by single spaces.
    pub fn to_words(&self) -> String {
        self.words
            .iter()
            .map(AnnotatedWord::name)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Morphological roots joined by single spaces, falling back to the
    /// surface form for unparsed words.
    pub fn to_stems(&self) -> String {
        self.words
            .iter()
            .map(AnnotatedWord::stem)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Phrases governed by the direct dependents of the 1-based `root_index`.
    ///
    /// The phrases borrow this sentence and are not updated by later edits.
    pub fn dependency_groups(&self, root_index: usize) -> Vec<AnnotatedPhrase<'_>> {
        grouping::group_by_governor(self, root_index)
    }

    /// Maximal runs of one shallow-parse tag.
    pub fn shallow_parse_groups(&self) -> Vec<AnnotatedPhrase<'_>> {
        grouping::segment_by_shallow_tag(self)
    }

    /// Positions of the PropBank predicate candidates, in acceptance order.
    pub fn predicate_candidate_positions<R: FramesetResource + ?Sized>(&self, framesets: &R) -> Vec<usize> {
        predicate::candidate_positions(&self.words, |sense| framesets.frame_exists(sense))
    }

    /// Words that can anchor a PropBank annotation: verbs with a known
    /// frameset, plus the words chained to them as multiword predicates.
    pub fn predicate_candidates<R: FramesetResource + ?Sized>(&self, framesets: &R) -> Vec<&AnnotatedWord> {
        self.predicate_candidate_positions(framesets)
            .into_iter()
            .map(|i| &self.words[i])
            .collect()
    }

    pub fn predicate_frame_candidate_positions<R: LexicalUnitResource + ?Sized>(
        &self,
        lexical_units: &R,
    ) -> Vec<usize> {
        predicate::candidate_positions(&self.words, |sense| lexical_units.lexical_unit_exists(sense))
    }

    /// Same search as [`predicate_candidates`](Self::predicate_candidates)
    /// against a FrameNet lexical-unit inventory.
    pub fn predicate_frame_candidates<R: LexicalUnitResource + ?Sized>(
        &self,
        lexical_units: &R,
    ) -> Vec<&AnnotatedWord> {
        self.predicate_frame_candidate_positions(lexical_units)
            .into_iter()
            .map(|i| &self.words[i])
            .collect()
    }

    /// Surface form of the verb closest to `index`, the left one on ties.
    pub fn nearest_predicate(&self, index: usize) -> Option<&str> {
        predicate::nearest_verb(&self.words, index).map(|i| self.words[i].name())
    }

    /// Whether some word's PropBank layer marks a predicate.
    pub fn contains_predicate(&self) -> bool {
        self.words.iter().any(|word| {
            word.argument_list()
                .map_or(false, |arguments| arguments.contains_predicate())
        })
    }

    /// Whether some word's FrameNet layer marks a predicate.
    pub fn contains_frame_predicate(&self) -> bool {
        self.words.iter().any(|word| {
            word.frame_element_list()
                .map_or(false, |elements| elements.contains_predicate())
        })
    }

    /// Renames the predicate sense `previous` to `current` inside every
    /// PropBank or FrameNet list whose predicate carries it. Returns whether
    /// any list changed.
    pub fn update_connected_predicate(&mut self, previous: &str, current: &str) -> bool {
        let mut modified = false;
        for word in &mut self.words {
            if let Some(arguments) = word.argument_list_mut() {
                if arguments.contains_predicate_with_id(previous) {
                    arguments.update_connected_id(previous, current);
                    modified = true;
                }
            }
            if let Some(elements) = word.frame_element_list_mut() {
                if elements.contains_predicate_with_id(previous) {
                    elements.update_connected_id(previous, current);
                    modified = true;
                }
            }
        }
        modified
    }

    /// Attachment agreement of `other` against this sentence.
    pub fn compare_parses(&self, other: &AnnotatedSentence) -> ParseScore {
        self.compare_parses_with(other, &AttachmentComparator)
    }

    pub fn compare_parses_with<C: RelationComparator>(
        &self,
        other: &AnnotatedSentence,
        comparator: &C,
    ) -> ParseScore {
        score::compare_sentences(self, other, comparator)
    }

    /// CoNLL-U style block: two comment lines, one record per word, then a
    /// blank line. `prefix` is prepended to the file name in the sentence id.
    pub fn to_universal_dependency_format(&self, prefix: Option<&str>) -> String {
        let mut result = format!(
            "# sent_id = {}{}\n# text = {}\n",
            prefix.unwrap_or_default(),
            self.file_name().unwrap_or_default(),
            self.to_words()
        );
        for (i, word) in self.words.iter().enumerate() {
            result.push_str(&format!(
                "{}\t{}\n",
                i + 1,
                word.universal_dependency_format(self.word_count())
            ));
        }
        result.push('\n');
        result
    }

    /// Parsed words of the window `start..start + len`, or `None` when the
    /// window leaves the sentence or one of its words has no parse.
    fn analysis_window(&self, start: isize, len: usize) -> Option<Vec<WordAnalysis<'_>>> {
        let start = usize::try_from(start).ok()?;
        self.words
            .get(start..start + len)?
            .iter()
            .map(|word| {
                Some(WordAnalysis {
                    parse: word.parse()?,
                    metamorphic_parse: word.metamorphic_parse(),
                })
            })
            .collect()
    }

    /// Literal candidates for the word at `index`: its own root forms, then
    /// idioms starting at it (three words, then two).
    pub fn construct_literals<I: SenseInventory + ?Sized>(&self, inventory: &I, index: usize) -> Vec<I::Literal> {
        let own = match self.analysis_window(index as isize, 1) {
            Some(own) => own,
            None => return Vec::new(),
        };
        let mut literals = inventory.literals(own[0].parse.root(), own[0]);
        for (offset, len) in [(0, 3), (0, 2)] {
            if let Some(window) = self.analysis_window(index as isize + offset, len) {
                literals.extend(inventory.idiom_literals(&window));
            }
        }
        literals
    }

    /// Synset candidates for the word at `index`: its own root forms, then
    /// every two- and three-word idiom window containing it.
    pub fn construct_synsets<I: SenseInventory + ?Sized>(&self, inventory: &I, index: usize) -> Vec<I::SynSet> {
        let own = match self.analysis_window(index as isize, 1) {
            Some(own) => own,
            None => return Vec::new(),
        };
        let mut synsets = inventory.synsets(own[0].parse.root(), own[0]);
        for (offset, len) in [(-2, 3), (-1, 2), (-1, 3), (0, 3), (0, 2)] {
            if let Some(window) = self.analysis_window(index as isize + offset, len) {
                synsets.extend(inventory.idiom_synsets(&window));
            }
        }
        synsets
    }
}

impl FromStr for AnnotatedSentence {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_with(s, &WordCodec::default()))
    }
}

/// Encoded words joined by single spaces, the sentence file line format.
impl std::fmt::Display for AnnotatedSentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{Language, MorphologicalParse};

    fn chain(heads: &[i64]) -> AnnotatedSentence {
        let mut sentence = AnnotatedSentence::new();
        for (i, &head) in heads.iter().enumerate() {
            let mut word = AnnotatedWord::new(format!("w{}", i + 1), Language::Turkish);
            word.set_universal_dependency(head, "DEP");
            sentence.push_word(word);
        }
        sentence
    }

    fn heads(sentence: &AnnotatedSentence) -> Vec<Option<usize>> {
        sentence
            .words()
            .iter()
            .map(|word| word.universal_dependency().map(|r| r.to()))
            .collect()
    }

    #[test]
    fn remove_word_renumbers_relations() {
        let mut sentence = chain(&[3, 3, 0, 2, 5]);
        let removed = sentence.remove_word(1).unwrap();
        assert_eq!(removed.name(), "w2");
        assert_eq!(sentence.to_words(), "w1 w3 w4 w5");
        // w4 pointed at w2 and is detached, w5 was self-headed at 5
        assert_eq!(heads(&sentence), vec![Some(2), Some(0), None, Some(4)]);
    }

    #[test]
    fn remove_word_out_of_range() {
        let mut sentence = chain(&[0]);
        assert!(sentence.remove_word(1).is_none());
        assert_eq!(sentence.word_count(), 1);
    }

    #[test]
    fn blank_text_is_an_empty_sentence() {
        let sentence: AnnotatedSentence = "  \t ".parse().unwrap();
        assert!(sentence.is_empty());
        assert_eq!(sentence.to_stems(), "");
        assert_eq!(sentence.to_string(), "");
    }

    #[test]
    fn stems_fall_back_to_surface_form() {
        let sentence: AnnotatedSentence =
            "{turkish=evler}{morphologicalAnalysis=ev+NOUN+A3PL+PNON+NOM} {turkish=hızla}"
                .parse()
                .unwrap();
        assert_eq!(sentence.to_stems(), "ev hızla");
        assert_eq!(sentence.to_words(), "evler hızla");
    }

    #[test]
    fn sentence_file_uses_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("0042.train");
        fs::write(&path, "{turkish=ev} {turkish=.}\nsecond line\n").unwrap();
        let sentence = AnnotatedSentence::from_file(&path).unwrap();
        assert_eq!(sentence.to_words(), "ev .");
        assert_eq!(sentence.file_name(), Some("0042.train"));
    }

    #[test]
    fn missing_sentence_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = AnnotatedSentence::from_file(&dir.path().join("none.dev")).unwrap_err();
        assert!(matches!(error, AnnotationError::Load { .. }));
    }

    #[test]
    fn connected_predicates_are_renamed() {
        let mut sentence: AnnotatedSentence = "{turkish=ev}{propbank=ARG1$TUR10-1} \
             {turkish=gitti}{propbank=PREDICATE$TUR10-1}{framenet=PREDICATE$Motion$TUR10-1}"
            .parse()
            .unwrap();
        assert!(sentence.contains_predicate());
        assert!(sentence.contains_frame_predicate());
        assert!(sentence.update_connected_predicate("TUR10-1", "TUR10-2"));
        assert_eq!(
            sentence.to_string(),
            "{turkish=ev}{propbank=ARG1$TUR10-1} \
             {turkish=gitti}{propbank=PREDICATE$TUR10-2}{framenet=PREDICATE$Motion$TUR10-2}"
        );
        assert!(!sentence.update_connected_predicate("TUR10-1", "TUR10-3"));
    }

    struct Windows;

    impl SenseInventory for Windows {
        type Literal = String;
        type SynSet = String;

        fn literals(&self, root: &str, _word: WordAnalysis<'_>) -> Vec<String> {
            vec![root.to_string()]
        }

        fn idiom_literals(&self, words: &[WordAnalysis<'_>]) -> Vec<String> {
            vec![words.iter().map(|w| w.parse.root()).collect::<Vec<_>>().join("+")]
        }

        fn synsets(&self, root: &str, word: WordAnalysis<'_>) -> Vec<String> {
            self.literals(root, word)
        }

        fn idiom_synsets(&self, words: &[WordAnalysis<'_>]) -> Vec<String> {
            self.idiom_literals(words)
        }
    }

    fn parsed(roots: &[&str]) -> AnnotatedSentence {
        AnnotatedSentence::from_words(
            roots
                .iter()
                .map(|root| {
                    AnnotatedWord::with_parse(
                        *root,
                        Language::Turkish,
                        MorphologicalParse::new(format!("{}+NOUN+A3SG+PNON+NOM", root)),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn literal_windows_start_at_the_word() {
        let sentence = parsed(&["a", "b", "c", "d"]);
        assert_eq!(sentence.construct_literals(&Windows, 1), vec!["b", "b+c+d", "b+c"]);
        assert_eq!(sentence.construct_literals(&Windows, 3), vec!["d"]);
        assert!(sentence.construct_literals(&Windows, 4).is_empty());
    }

    #[test]
    fn synset_windows_surround_the_word() {
        let sentence = parsed(&["a", "b", "c", "d"]);
        assert_eq!(
            sentence.construct_synsets(&Windows, 2),
            vec!["c", "a+b+c", "b+c", "b+c+d", "c+d"]
        );
    }

    #[test]
    fn unparsed_neighbours_close_their_windows() {
        let mut sentence = parsed(&["a", "b", "c"]);
        sentence.push_word(AnnotatedWord::new("d", Language::Turkish));
        assert_eq!(sentence.construct_literals(&Windows, 1), vec!["b", "b+c"]);
        assert!(sentence.construct_literals(&Windows, 3).is_empty());
    }
}
