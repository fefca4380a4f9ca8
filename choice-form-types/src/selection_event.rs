/// What a selection adapter reports to its consumer.
///
/// A change carries the chosen option's scalar `value` and nothing else, so a
/// consumer can never observe the option record through an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// An option was chosen; holds that option's `value`.
    Change(String),

    /// Focus left the control.
    Blur,
}

impl SelectionEvent {
    /// The committed scalar, if this is a change.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Change(value) => Some(value),
            Self::Blur => None,
        }
    }

    /// Check if this event is a blur.
    pub fn is_blur(&self) -> bool {
        matches!(self, Self::Blur)
    }
}
