//! Registry lookup errors.

use thiserror::Error;

/// A transition or lookup named a state that was never added to the owner.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("State '{name}' was never added. Call add_state(name, definition) first")]
pub struct StateNotFound {
    /// The name that was looked up.
    pub name: String,
}

impl StateNotFound {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_missing_state() {
        let err = StateNotFound::new("hover");
        assert_eq!(
            err.to_string(),
            "State 'hover' was never added. Call add_state(name, definition) first"
        );
    }
}
