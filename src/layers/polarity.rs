/// Sentiment polarity of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarityType {
    Positive,
    Negative,
    Neutral,
}

impl PolarityType {
    /// `positive`/`pos` and `negative`/`neg` in any case; everything else is neutral.
    pub fn parse(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "positive" | "pos" => PolarityType::Positive,
            "negative" | "neg" => PolarityType::Negative,
            _ => PolarityType::Neutral,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PolarityType::Positive => "positive",
            PolarityType::Negative => "negative",
            PolarityType::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for PolarityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbreviations_and_case() {
        assert_eq!(PolarityType::parse("POS"), PolarityType::Positive);
        assert_eq!(PolarityType::parse("Negative"), PolarityType::Negative);
        assert_eq!(PolarityType::parse("meh"), PolarityType::Neutral);
        assert_eq!(PolarityType::Negative.to_string(), "negative");
    }
}
