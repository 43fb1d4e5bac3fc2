//! Predicate candidate search.

use crate::word::AnnotatedWord;

/// Positions of words that can anchor a semantic-role annotation, in the
/// order they were accepted.
///
/// The first pass accepts every verb (root and surface part of speech both
/// `VERB`) whose sense is known to `sense_exists`. Two promotion passes then
/// extend multiword predicates leftwards: a word that is not yet a candidate
/// joins when its right neighbour is one and both carry the same sense. The
/// second pass stops one word earlier than the first, and running it after
/// the first lets a three-word predicate grow one step at a time.
pub(crate) fn candidate_positions<F>(words: &[AnnotatedWord], sense_exists: F) -> Vec<usize>
where
    F: Fn(&str) -> bool,
{
    let mut candidates: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, word)| word.is_verb() && word.semantic().map_or(false, &sense_exists))
        .map(|(i, _)| i)
        .collect();
    let mut accepted = vec![false; words.len()];
    for &i in &candidates {
        accepted[i] = true;
    }

    for pass in 0..2 {
        for j in 0..words.len().saturating_sub(pass + 1) {
            if accepted[j] || !accepted[j + 1] {
                continue;
            }
            let sense = words[j].semantic();
            if sense.is_some() && sense == words[j + 1].semantic() {
                accepted[j] = true;
                candidates.push(j);
            }
        }
    }

    candidates
}

/// Position of the verb closest to `index`, preferring the left one on ties.
/// `None` when `index` is outside the sentence or there is no verb.
pub(crate) fn nearest_verb(words: &[AnnotatedWord], index: usize) -> Option<usize> {
    if index >= words.len() {
        return None;
    }
    let reach = index.max(words.len() - 1 - index);
    for distance in 0..=reach {
        if let Some(left) = index.checked_sub(distance) {
            if words[left].is_verb() {
                return Some(left);
            }
        }
        let right = index + distance;
        if distance > 0 && right < words.len() && words[right].is_verb() {
            return Some(right);
        }
    }
    None
}
