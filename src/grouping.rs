//! Phrase reconstruction from per-word annotations.
//!
//! Both groupings borrow the sentence; see [`AnnotatedPhrase`] for the
//! invalidation rule.

use std::collections::{HashMap, HashSet};

use crate::layers::UniversalDependencyRelation;
use crate::phrase::AnnotatedPhrase;
use crate::sentence::AnnotatedSentence;
use crate::word::AnnotatedWord;

/// Follows head pointers from word `start` until reaching `root_index`.
///
/// Returns the 1-based index of the last word on the path before the root
/// (the root's direct dependent) together with that word's relation. Returns
/// `None` when the chain ends at the sentence root (`0`), when a word on the
/// chain has no relation, when a head points outside the sentence, or when the
/// chain revisits a word.
fn walk_to_root(
    words: &[AnnotatedWord],
    start: usize,
    root_index: usize,
) -> Option<(usize, &UniversalDependencyRelation)> {
    let mut index = start + 1;
    let mut relation = words[start].universal_dependency()?;
    let mut visited = HashSet::new();
    visited.insert(index);
    loop {
        let to = relation.to();
        if to == UniversalDependencyRelation::ROOT {
            return None;
        }
        if to == root_index {
            return Some((index, relation));
        }
        let head = match words.get(to - 1) {
            Some(head) => head,
            None => {
                tracing::warn!(word = start, head = to, "dependency head outside sentence");
                return None;
            }
        };
        if !visited.insert(to) {
            tracing::warn!(word = start, head = to, "dependency cycle");
            return None;
        }
        index = to;
        relation = head.universal_dependency()?;
    }
}

/// Groups words by the dependent of `root_index` (1-based) that governs them.
///
/// Every word whose head chain reaches `root_index` joins the phrase keyed by
/// the root's direct dependent on that chain. Phrases come out in the order
/// their first word appears, words inside a phrase in sentence order, and
/// each phrase is tagged with the relation label of that direct dependent.
/// Words whose chain ends at the sentence root instead, or never terminates,
/// belong to no phrase.
pub fn group_by_governor(sentence: &AnnotatedSentence, root_index: usize) -> Vec<AnnotatedPhrase<'_>> {
    let words = sentence.words();
    let mut phrases: Vec<AnnotatedPhrase<'_>> = Vec::new();
    let mut phrase_by_key: HashMap<usize, usize> = HashMap::new();

    for (i, word) in words.iter().enumerate() {
        let (key, relation) = match walk_to_root(words, i, root_index) {
            Some(found) => found,
            None => continue,
        };
        let slot = *phrase_by_key.entry(key).or_insert_with(|| {
            phrases.push(AnnotatedPhrase::new(i, relation.label()));
            phrases.len() - 1
        });
        phrases[slot].add_word(i, word);
    }

    phrases
}

/// Splits the sentence into maximal runs of one shallow-parse tag.
///
/// A word without a tag extends the open run. A tagged word starts a new run
/// when the run already carries a different tag. Every word lands in exactly
/// one run, and a non-empty sentence always yields at least one.
pub fn segment_by_shallow_tag(sentence: &AnnotatedSentence) -> Vec<AnnotatedPhrase<'_>> {
    let mut phrases = Vec::new();
    let mut current: Option<AnnotatedPhrase<'_>> = None;
    let mut open_tag: Option<&str> = None;

    for (i, word) in sentence.words().iter().enumerate() {
        let tag = word.shallow_parse();
        let boundary = match (open_tag, tag) {
            (Some(open), Some(tag)) => open != tag,
            _ => false,
        };
        if boundary || current.is_none() {
            phrases.extend(current.take());
            current = Some(AnnotatedPhrase::new(i, tag.unwrap_or_default()));
        } else if let (Some(phrase), None, Some(tag)) = (current.as_mut(), open_tag, tag) {
            // the run so far was untagged
            phrase.set_tag(tag);
        }
        if tag.is_some() {
            open_tag = tag;
        }
        if let Some(phrase) = current.as_mut() {
            phrase.add_word(i, word);
        }
    }

    phrases.extend(current);
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_with_heads(heads: &[i64]) -> AnnotatedSentence {
        let mut sentence = AnnotatedSentence::new();
        for (i, &head) in heads.iter().enumerate() {
            let mut word = AnnotatedWord::new(format!("w{}", i + 1), Default::default());
            word.set_universal_dependency(head, &format!("L{}", i + 1));
            sentence.push_word(word);
        }
        sentence
    }

    fn rendered(phrases: &[AnnotatedPhrase<'_>]) -> Vec<String> {
        phrases.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn groups_by_direct_dependent_of_root() {
        // w4 is the root; w1 -> w2 -> w4, w3 -> w4, w5 -> w3
        let sentence = sentence_with_heads(&[2, 4, 4, 0, 3]);
        let groups = group_by_governor(&sentence, 4);
        assert_eq!(rendered(&groups), vec!["L2@0: w1 w2", "L3@2: w3 w5"]);
        assert_eq!(groups[1].positions(), &[2, 4]);
    }

    #[test]
    fn cycles_and_self_loops_are_orphans() {
        // w1 <-> w2 cycle, w3 points at itself, w4 attaches to root w5
        let sentence = sentence_with_heads(&[2, 1, 3, 5, 0]);
        let groups = group_by_governor(&sentence, 5);
        assert_eq!(rendered(&groups), vec!["L4@3: w4"]);
    }

    #[test]
    fn dangling_heads_and_missing_relations_are_orphans() {
        let mut sentence = sentence_with_heads(&[9, 3, 0, -1]);
        sentence.push_word(AnnotatedWord::new("w5", Default::default()));
        let groups = group_by_governor(&sentence, 3);
        assert_eq!(rendered(&groups), vec!["L2@1: w2"]);
    }

    #[test]
    fn root_index_zero_groups_nothing() {
        let sentence = sentence_with_heads(&[2, 0]);
        assert!(group_by_governor(&sentence, 0).is_empty());
    }

    #[test]
    fn non_orphans_are_partitioned() {
        let sentence = sentence_with_heads(&[3, 3, 6, 5, 6, 0, 6, 7, 8]);
        let groups = group_by_governor(&sentence, 6);
        let mut seen: Vec<usize> = groups.iter().flat_map(|g| g.positions().to_vec()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 6, 7, 8]);
        assert_eq!(groups.len(), 3);
    }

    fn sentence_with_chunks(tags: &[Option<&str>]) -> AnnotatedSentence {
        let mut sentence = AnnotatedSentence::new();
        for (i, tag) in tags.iter().enumerate() {
            let mut word = AnnotatedWord::new(format!("w{}", i + 1), Default::default());
            word.set_shallow_parse(tag.map(String::from));
            sentence.push_word(word);
        }
        sentence
    }

    #[test]
    fn chunks_split_at_tag_changes() {
        let sentence = sentence_with_chunks(&[Some("NP"), Some("NP"), Some("VP"), Some("NP")]);
        assert_eq!(
            rendered(&segment_by_shallow_tag(&sentence)),
            vec!["NP@0: w1 w2", "VP@2: w3", "NP@3: w4"]
        );
    }

    #[test]
    fn untagged_words_extend_the_open_chunk() {
        let sentence = sentence_with_chunks(&[None, Some("NP"), None, Some("NP"), None, Some("VP")]);
        assert_eq!(
            rendered(&segment_by_shallow_tag(&sentence)),
            vec!["NP@0: w1 w2 w3 w4 w5", "VP@5: w6"]
        );
    }

    #[test]
    fn empty_and_untagged_sentences() {
        assert!(segment_by_shallow_tag(&AnnotatedSentence::new()).is_empty());
        let sentence = sentence_with_chunks(&[None, None]);
        assert_eq!(rendered(&segment_by_shallow_tag(&sentence)), vec!["@0: w1 w2"]);
    }
}
