/// Separator between target and label in the encoded layer value.
pub(crate) const RELATION_SEPARATOR: char = '$';

/// A universal dependency arc from a word to its head.
///
/// `to` is the 1-based index of the head within the same sentence, with `0`
/// standing for the sentence root. The index is not checked against the
/// sentence here; consumers validate it. A word with no relation simply has
/// no value in this layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniversalDependencyRelation {
    to: usize,
    label: String,
}

impl UniversalDependencyRelation {
    /// Target index of the sentence root.
    pub const ROOT: usize = 0;

    pub fn new(to: usize, label: impl Into<String>) -> Self {
        Self {
            to,
            label: label.into(),
        }
    }

    /// Decodes `target$label`. Returns `None` when the separator is missing or
    /// the target is not a non-negative integer.
    pub fn parse(value: &str) -> Option<Self> {
        let (target, label) = value.split_once(RELATION_SEPARATOR)?;
        let to = target.trim().parse::<usize>().ok()?;
        Some(Self::new(to, label))
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_root(&self) -> bool {
        self.to == Self::ROOT
    }

    /// The `target$label` form used by the word codec.
    pub fn encode(&self) -> String {
        format!("{}{}{}", self.to, RELATION_SEPARATOR, self.label)
    }
}

impl std::fmt::Display for UniversalDependencyRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
