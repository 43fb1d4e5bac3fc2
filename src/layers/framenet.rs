//! FrameNet frame-element layer, encoded as `#`-separated `TYPE$FRAME$ID` items.

use super::propbank::PREDICATE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameElement {
    pub element_type: String,
    pub frame: Option<String>,
    pub id: Option<String>,
}

impl FrameElement {
    pub fn parse(text: &str) -> Self {
        let mut parts = text.splitn(3, '$');
        Self {
            element_type: parts.next().unwrap_or_default().to_string(),
            frame: parts.next().map(String::from),
            id: parts.next().map(String::from),
        }
    }

    pub fn is_predicate(&self) -> bool {
        self.element_type == PREDICATE
    }
}

impl std::fmt::Display for FrameElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.element_type)?;
        if let Some(frame) = &self.frame {
            write!(f, "${}", frame)?;
        }
        if let Some(id) = &self.id {
            write!(f, "${}", id)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameElementList {
    elements: Vec<FrameElement>,
}

impl FrameElementList {
    pub fn parse(text: &str) -> Self {
        Self {
            elements: text.split('#').map(FrameElement::parse).collect(),
        }
    }

    pub fn elements(&self) -> &[FrameElement] {
        &self.elements
    }

    pub fn contains_predicate(&self) -> bool {
        self.elements.iter().any(FrameElement::is_predicate)
    }

    pub fn contains_predicate_with_id(&self, id: &str) -> bool {
        self.elements
            .iter()
            .any(|element| element.is_predicate() && element.id.as_deref() == Some(id))
    }

    pub fn update_connected_id(&mut self, previous: &str, current: &str) {
        for element in &mut self.elements {
            if element.id.as_deref() == Some(previous) {
                element.id = Some(current.to_string());
            }
        }
    }
}

impl std::fmt::Display for FrameElementList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str("#")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_with_frames() {
        let list = FrameElementList::parse("Agent$Cause_harm$TUR10-01#PREDICATE$Cause_harm$TUR10-01");
        assert_eq!(list.elements()[0].frame.as_deref(), Some("Cause_harm"));
        assert!(list.contains_predicate_with_id("TUR10-01"));
        assert_eq!(
            list.to_string(),
            "Agent$Cause_harm$TUR10-01#PREDICATE$Cause_harm$TUR10-01"
        );
    }

    #[test]
    fn update_ids_keeps_frames() {
        let mut list = FrameElementList::parse("PREDICATE$Motion$A#NONE");
        assert!(list.contains_predicate());
        list.update_connected_id("A", "B");
        assert_eq!(list.to_string(), "PREDICATE$Motion$B#NONE");
    }
}
