//! PropBank semantic-role layer.
//!
//! Encoded as `#`-separated arguments, each `TYPE$PREDICATE_ID`, for example
//! `ARG0$TUR10-0112340#PREDICATE$TUR10-0112340`. An argument without an id
//! (`NONE`) is kept as a bare type.

/// Argument type marking the predicate itself.
pub const PREDICATE: &str = "PREDICATE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub arg_type: String,
    pub id: Option<String>,
}

impl Argument {
    pub fn parse(text: &str) -> Self {
        match text.split_once('$') {
            Some((arg_type, id)) => Self {
                arg_type: arg_type.to_string(),
                id: Some(id.to_string()),
            },
            None => Self {
                arg_type: text.to_string(),
                id: None,
            },
        }
    }

    pub fn is_predicate(&self) -> bool {
        self.arg_type == PREDICATE
    }
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}${}", self.arg_type, id),
            None => f.write_str(&self.arg_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentList {
    arguments: Vec<Argument>,
}

impl ArgumentList {
    pub fn parse(text: &str) -> Self {
        Self {
            arguments: text.split('#').map(Argument::parse).collect(),
        }
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn contains_predicate(&self) -> bool {
        self.arguments.iter().any(Argument::is_predicate)
    }

    pub fn contains_predicate_with_id(&self, id: &str) -> bool {
        self.arguments
            .iter()
            .any(|arg| arg.is_predicate() && arg.id.as_deref() == Some(id))
    }

    /// Replaces every argument id equal to `previous` with `current`.
    pub fn update_connected_id(&mut self, previous: &str, current: &str) {
        for arg in &mut self.arguments {
            if arg.id.as_deref() == Some(previous) {
                arg.id = Some(current.to_string());
            }
        }
    }
}

impl std::fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str("#")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}
