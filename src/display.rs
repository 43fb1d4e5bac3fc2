use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::layers::{Layer, UniversalDependencyRelation};
use crate::phrase::AnnotatedPhrase;
use crate::sentence::AnnotatedSentence;

/// Internal representation of an included row for display.
struct IncludedRow {
    /// First and last word position covered, inclusive.
    range: (usize, usize),
    value: String,
    arrow: bool,
}

/// Renders a sentence on one line with annotations drawn under the words.
///
/// ```text
/// Ali  büyük  okula  gitti
/// ╰─╯ÖZNE
///      ╰──────────╯DOLAYLI_TÜMLEÇ
///                    ╰───╯YÜKLEM
///      └─AMOD─>okula
/// ```
pub struct SentenceDisplay<'a> {
    sentence: &'a AnnotatedSentence,
    include_rows: Vec<IncludedRow>,
}

impl<'a> std::fmt::Display for SentenceDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut word_idx_to_start_display_char_idx = Vec::new();
        let mut word_idx_to_end_display_char_idx = Vec::new();
        let mut opening_line = String::new();
        for (i, word) in self.sentence.words().iter().enumerate() {
            if i > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            word_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(word.name());
            word_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for row in self.include_rows.iter() {
            f.write_char('\n')?;

            let start_char_idx = word_idx_to_start_display_char_idx[row.range.0];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            if row.arrow {
                write!(f, "└─{}", row.value)?;
                continue;
            }

            f.write_char('╰')?;

            let end_char_idx = word_idx_to_end_display_char_idx[row.range.1];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&row.value)?;
        }

        Ok(())
    }
}

impl<'a> SentenceDisplay<'a> {
    pub fn new(sentence: &'a AnnotatedSentence) -> Self {
        SentenceDisplay {
            sentence,
            include_rows: Vec::new(),
        }
    }

    /// Adds one row per word carrying `layer`, showing its encoded value.
    pub fn include_layer(&mut self, layer: Layer) {
        for (i, word) in self.sentence.words().iter().enumerate() {
            if let Some(value) = word.layer_info(layer) {
                self.include_rows.push(IncludedRow {
                    range: (i, i),
                    value,
                    arrow: false,
                });
            }
        }
    }

    /// Adds one row per phrase spanning its first to last word.
    ///
    /// Phrases must come from the displayed sentence.
    pub fn include_phrases(&mut self, phrases: &[AnnotatedPhrase<'_>]) {
        for phrase in phrases {
            let (first, last) = match (phrase.positions().first(), phrase.positions().last()) {
                (Some(&first), Some(&last)) => (first, last),
                _ => continue,
            };
            if last >= self.sentence.word_count() {
                continue;
            }
            self.include_rows.push(IncludedRow {
                range: (first, last),
                value: phrase.tag().to_string(),
                arrow: false,
            });
        }
    }

    /// Adds an arrow row from every word with a relation to its head.
    pub fn include_dependencies(&mut self) {
        let words = self.sentence.words();
        for (i, word) in words.iter().enumerate() {
            let relation = match word.universal_dependency() {
                Some(relation) => relation,
                None => continue,
            };
            let value = if relation.to() == UniversalDependencyRelation::ROOT {
                relation.label().to_string()
            } else {
                match words.get(relation.to() - 1) {
                    Some(head) => format!("{}─>{}", relation.label(), head.name()),
                    None => format!("{}─>[{}]", relation.label(), relation.to()),
                }
            };
            self.include_rows.push(IncludedRow {
                range: (i, i),
                value,
                arrow: true,
            });
        }
    }

    /// Takes self
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.include_layer(layer);
        self
    }

    /// Takes self
    pub fn with_phrases(mut self, phrases: &[AnnotatedPhrase<'_>]) -> Self {
        self.include_phrases(phrases);
        self
    }

    /// Takes self
    pub fn with_dependencies(mut self) -> Self {
        self.include_dependencies();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence() -> AnnotatedSentence {
        "{turkish=Ali}{shallowParse=ÖZNE}{universalDependency=4$NSUBJ} \
         {turkish=büyük}{shallowParse=DOLAYLI_TÜMLEÇ}{universalDependency=3$AMOD} \
         {turkish=okula}{shallowParse=DOLAYLI_TÜMLEÇ}{universalDependency=4$OBL} \
         {turkish=gitti}{shallowParse=YÜKLEM}{universalDependency=0$ROOT}"
            .parse()
            .unwrap()
    }

    #[test]
    fn layer_values_under_words() {
        let sentence = sentence();
        let display = SentenceDisplay::new(&sentence).with_layer(Layer::UniversalDependency);

        insta::assert_snapshot!(display, @r###"
        Ali  büyük  okula  gitti
        ╰─╯4$NSUBJ
             ╰───╯3$AMOD
                    ╰───╯4$OBL
                           ╰───╯0$ROOT
        "###);
    }

    #[test]
    fn phrases_and_dependencies() {
        let sentence = sentence();
        let chunks = sentence.shallow_parse_groups();
        let display = SentenceDisplay::new(&sentence)
            .with_phrases(&chunks)
            .with_dependencies();

        insta::assert_snapshot!(display, @r###"
        Ali  büyük  okula  gitti
        ╰─╯ÖZNE
             ╰──────────╯DOLAYLI_TÜMLEÇ
                           ╰───╯YÜKLEM
        └─NSUBJ─>gitti
             └─AMOD─>okula
                    └─OBL─>gitti
                           └─ROOT
        "###);
    }

    #[test]
    fn empty_sentence_renders_nothing() {
        let sentence = AnnotatedSentence::new();
        let display = SentenceDisplay::new(&sentence).with_dependencies();
        assert_eq!(display.to_string(), "");
    }
}
