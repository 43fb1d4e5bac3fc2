//! Dependency-parse agreement between two annotations of the same sentence.
//!
//! Scores are raw counts and add component-wise: a sentence score is the sum
//! of its word comparisons, a corpus score the sum of its sentence scores.
//! Turning counts into ratios is left to the caller.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::layers::UniversalDependencyRelation;
use crate::sentence::AnnotatedSentence;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseScore {
    /// Same head and same label.
    pub labeled_attachment: usize,
    /// Same head.
    pub unlabeled_attachment: usize,
    /// Same label.
    pub label: usize,
    /// Number of compared relation pairs.
    pub word_count: usize,
}

impl ParseScore {
    pub fn new(labeled_attachment: usize, unlabeled_attachment: usize, label: usize, word_count: usize) -> Self {
        Self {
            labeled_attachment,
            unlabeled_attachment,
            label,
            word_count,
        }
    }
}

impl Add for ParseScore {
    type Output = ParseScore;

    fn add(self, other: ParseScore) -> ParseScore {
        ParseScore {
            labeled_attachment: self.labeled_attachment + other.labeled_attachment,
            unlabeled_attachment: self.unlabeled_attachment + other.unlabeled_attachment,
            label: self.label + other.label,
            word_count: self.word_count + other.word_count,
        }
    }
}

impl AddAssign for ParseScore {
    fn add_assign(&mut self, other: ParseScore) {
        *self = *self + other;
    }
}

impl Sum for ParseScore {
    fn sum<I: Iterator<Item = ParseScore>>(iter: I) -> ParseScore {
        iter.fold(ParseScore::default(), Add::add)
    }
}

/// Scores one pair of relations.
pub trait RelationComparator {
    fn compare(
        &self,
        gold: &UniversalDependencyRelation,
        predicted: &UniversalDependencyRelation,
    ) -> ParseScore;
}

/// Standard attachment scoring: head match, label match and both.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttachmentComparator;

impl RelationComparator for AttachmentComparator {
    fn compare(
        &self,
        gold: &UniversalDependencyRelation,
        predicted: &UniversalDependencyRelation,
    ) -> ParseScore {
        let same_head = gold.to() == predicted.to();
        let same_label = gold.label() == predicted.label();
        ParseScore::new(
            (same_head && same_label) as usize,
            same_head as usize,
            same_label as usize,
            1,
        )
    }
}

impl<C: RelationComparator + ?Sized> RelationComparator for &C {
    fn compare(
        &self,
        gold: &UniversalDependencyRelation,
        predicted: &UniversalDependencyRelation,
    ) -> ParseScore {
        (**self).compare(gold, predicted)
    }
}

/// Sums word-by-word comparisons over the positions of `gold`. Positions
/// where either sentence lacks a relation, or `predicted` has no word, are
/// skipped.
pub fn compare_sentences<C: RelationComparator>(
    gold: &AnnotatedSentence,
    predicted: &AnnotatedSentence,
    comparator: &C,
) -> ParseScore {
    gold.words()
        .iter()
        .enumerate()
        .filter_map(|(i, word)| {
            let gold_relation = word.universal_dependency()?;
            let predicted_relation = predicted.word(i)?.universal_dependency()?;
            Some(comparator.compare(gold_relation, predicted_relation))
        })
        .sum()
}
