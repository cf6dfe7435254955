//! Per-owner storage of named state definitions and the current state.

use super::definition::StateDefinition;
use super::error::StateNotFound;
use std::collections::HashMap;

/// Named state definitions plus the name of the state last entered.
///
/// Names are unique within a registry; adding under an existing name
/// replaces the previous definition. The current state is only ever set
/// by a completed transition, never by registration.
#[derive(Clone, Debug, Default)]
pub struct StateRegistry {
    states: HashMap<String, StateDefinition>,
    current: Option<String>,
}

impl StateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `definition` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, definition: StateDefinition) {
        self.states.insert(name.into(), definition);
    }

    /// Look up `name`, failing if it was never registered.
    pub fn get(&self, name: &str) -> Result<&StateDefinition, StateNotFound> {
        self.states.get(name).ok_or_else(|| StateNotFound::new(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Drop the entry for `name`. The current state is left untouched.
    pub fn remove(&mut self, name: &str) -> Option<StateDefinition> {
        self.states.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.states.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Name of the state last entered, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub(crate) fn set_current(&mut self, name: impl Into<String>) {
        self.current = Some(name.into());
    }
}
