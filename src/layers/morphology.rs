//! Morphological layer values.
//!
//! These are lightweight handles over the analyzer's output string. The
//! analyzer itself lives outside this crate; a parse is only split into its
//! root and inflectional groups so that part-of-speech queries can be answered.

const DERIVATION_BOUNDARY: &str = "^DB+";

/// Splits `root+rest` at the first `+` that is not the leading character,
/// so that a literal `+` root (as in `++PUNC`) survives.
fn split_root(text: &str) -> (&str, &str) {
    let first_len = text.chars().next().map_or(0, char::len_utf8);
    match text[first_len..].find('+') {
        Some(pos) => (&text[..first_len + pos], &text[first_len + pos + 1..]),
        None => (text, ""),
    }
}

/// Tags between two derivation boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionalGroup {
    pub tags: Vec<String>,
}

impl InflectionalGroup {
    fn from_tags(text: &str) -> Self {
        Self {
            tags: text
                .split('+')
                .filter(|tag| !tag.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// The part-of-speech tag of this group (its first tag).
    pub fn pos(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A morphological analysis such as `ev+NOUN+A3SG+PNON+NOM` or
/// `bulan+VERB^DB+VERB+CAUS+POS+PAST+A3SG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphologicalParse {
    raw: String,
    root: String,
    groups: Vec<InflectionalGroup>,
}

impl MorphologicalParse {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let mut pieces = raw.split(DERIVATION_BOUNDARY);
        let (root, first_tags) = split_root(pieces.next().unwrap_or(""));
        let mut groups = vec![InflectionalGroup::from_tags(first_tags)];
        groups.extend(pieces.map(InflectionalGroup::from_tags));
        Self {
            root: root.to_string(),
            raw,
            groups,
        }
    }

    /// The root (lemma) of the analysis.
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn inflectional_groups(&self) -> &[InflectionalGroup] {
        &self.groups
    }

    /// Part of speech of the root, the first tag of the first group.
    pub fn root_pos(&self) -> Option<&str> {
        self.groups.first().and_then(InflectionalGroup::pos)
    }

    /// Surface part of speech, the first tag of the last group.
    pub fn pos(&self) -> Option<&str> {
        self.groups.last().and_then(InflectionalGroup::pos)
    }

    /// Every tag of every group, in order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.tags.iter().map(String::as_str))
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.groups.iter().any(|group| group.contains_tag(tag))
    }

    /// True when the surface part of speech is `VERB`.
    pub fn is_verb(&self) -> bool {
        self.pos() == Some("VERB")
    }

    /// True when both the root and the surface part of speech are `VERB`.
    pub fn is_root_verb(&self) -> bool {
        self.root_pos() == Some("VERB") && self.is_verb()
    }

    pub fn is_proper_noun(&self) -> bool {
        self.pos() == Some("NOUN") && self.contains_tag("PROP")
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for MorphologicalParse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A metamorpheme segmentation such as `ev+lAr+DA`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetamorphicParse {
    raw: String,
    root: String,
}

impl MetamorphicParse {
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into();
        let root = split_root(&raw).0.to_string();
        Self { raw, root }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// The morphemes following the root.
    pub fn morphemes(&self) -> impl Iterator<Item = &str> {
        split_root(&self.raw)
            .1
            .split('+')
            .filter(|morpheme| !morpheme.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for MetamorphicParse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
