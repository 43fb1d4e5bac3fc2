//! Named-entity and slot-filling layers.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedEntityType {
    None,
    Person,
    Organization,
    Location,
    Time,
    Money,
}

impl NamedEntityType {
    /// Unrecognized names map to [`NamedEntityType::None`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "PERSON" => NamedEntityType::Person,
            "ORGANIZATION" | "ORGANISATION" => NamedEntityType::Organization,
            "LOCATION" => NamedEntityType::Location,
            "TIME" => NamedEntityType::Time,
            "MONEY" => NamedEntityType::Money,
            _ => NamedEntityType::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedEntityType::None => "NONE",
            NamedEntityType::Person => "PERSON",
            NamedEntityType::Organization => "ORGANIZATION",
            NamedEntityType::Location => "LOCATION",
            NamedEntityType::Time => "TIME",
            NamedEntityType::Money => "MONEY",
        }
    }
}

impl std::fmt::Display for NamedEntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a token within a slot span (BIO scheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotType {
    Beginning,
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    pub slot_type: SlotType,
    pub tag: Option<String>,
}

impl Slot {
    /// Parses `O`, `B-tag` or `I-tag`. Anything else is read as outside.
    pub fn parse(text: &str) -> Self {
        match text.split_once('-') {
            Some(("B", tag)) => Self {
                slot_type: SlotType::Beginning,
                tag: Some(tag.to_string()),
            },
            Some(("I", tag)) => Self {
                slot_type: SlotType::Inside,
                tag: Some(tag.to_string()),
            },
            _ => Self {
                slot_type: SlotType::Outside,
                tag: None,
            },
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.slot_type, &self.tag) {
            (SlotType::Beginning, Some(tag)) => write!(f, "B-{}", tag),
            (SlotType::Inside, Some(tag)) => write!(f, "I-{}", tag),
            _ => f.write_str("O"),
        }
    }
}
