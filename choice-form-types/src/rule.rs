/// A validation rule attached to a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The field must hold a non-empty value; `message` is shown otherwise.
    Required { message: String },
}

impl Rule {
    /// Create a required rule with the given message.
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    /// The rule's kind as shown in the form state panel.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
        }
    }

    /// Check a value against this rule.
    ///
    /// Absent values and empty strings are both empty.
    pub fn check(&self, value: Option<&str>) -> Result<(), String> {
        match self {
            Self::Required { message } => match value {
                Some(v) if !v.is_empty() => Ok(()),
                _ => Err(message.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_absent_and_empty() {
        let rule = Rule::required("Please select a user");
        assert_eq!(rule.check(None), Err("Please select a user".to_string()));
        assert_eq!(rule.check(Some("")), Err("Please select a user".to_string()));
        assert_eq!(rule.check(Some("wade")), Ok(()));
    }

    #[test]
    fn kind_name() {
        assert_eq!(Rule::required("x").kind(), "required");
    }
}
