use serde::Serialize;

/// One selectable item.
///
/// `value` is the option's identity as far as the form is concerned; `id` is
/// only a display key and never used to match a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    id: u32,
    label: String,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    desc: Option<String>,
}

impl SelectOption {
    /// Create a new option without a description.
    pub fn new(id: u32, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            value: value.into(),
            desc: None,
        }
    }

    /// Attach a description, e.g. `"12GB"`.
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Get the display key.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the text shown to the user.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the scalar a widget reports when this option is chosen.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the secondary text, if any.
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }
}

/// An ordered list of options. List order is display order.
///
/// Values are expected to be unique but this is not enforced; lookups by
/// value resolve to the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionList {
    options: Vec<SelectOption>,
}

impl OptionList {
    /// Create a list from options in display order.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// Create an empty list.
    pub fn empty() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Get the option at a display position.
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Position of the first option whose `value` equals `value`.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|o| o.value == value)
    }

    /// The first option whose `value` equals `value`.
    pub fn find_by_value(&self, value: &str) -> Option<&SelectOption> {
        self.position_of(value).and_then(|idx| self.options.get(idx))
    }

    /// Positions of the options whose label contains `query`, ignoring case.
    ///
    /// An empty query matches every option.
    pub fn filter_by_label(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| o.label.to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Iterate over the options in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }

    /// Get the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check if the list has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<Vec<SelectOption>> for OptionList {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::new(options)
    }
}

impl FromIterator<SelectOption> for OptionList {
    fn from_iter<I: IntoIterator<Item = SelectOption>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
