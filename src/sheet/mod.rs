//! Declarative state sheets.
//!
//! A sheet describes the attribute bundles of several states as JSON, so
//! visual styling can live outside the code that wires up hooks and
//! handlers:
//!
//! ```json
//! {
//!   "idle":  { "attrs": { "fill": "#ccc", "r": 10 } },
//!   "hover": { "attrs": { "fill": "#f80", "r": 12 } },
//!   "gone":  {}
//! }
//! ```
//!
//! Validation uses Stillwater's `Validation` type so every problem in a
//! sheet is reported at once instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use stateful::engine::{Element, Stateful};
//! use stateful::render::{MemoryRenderer, Timeline};
//! use stateful::sheet::StateSheet;
//!
//! let sheet = StateSheet::from_json(r##"{ "hover": { "attrs": { "fill": "#f80" } } }"##).unwrap();
//! let timeline = Timeline::new();
//! let button = Element::new(MemoryRenderer::new(&timeline));
//!
//! assert_eq!(sheet.install(&button).unwrap(), 1);
//! assert!(button.has_state("hover"));
//! ```

pub mod error;

pub use error::SheetError;

use crate::core::{AttrMap, StateDefinition};
use crate::engine::Stateful;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// The serializable part of one state: its attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SheetEntry {
    #[serde(default)]
    pub attrs: AttrMap,
}

/// State name to attribute bundle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSheet {
    states: BTreeMap<String, SheetEntry>,
}

impl StateSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SheetError> {
        serde_json::from_str(json).map_err(|e| SheetError::Parse(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, SheetError> {
        serde_json::to_string_pretty(self).map_err(|e| SheetError::Serialize(e.to_string()))
    }

    /// Add or replace the entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, attrs: AttrMap) -> &mut Self {
        self.states.insert(name.into(), SheetEntry { attrs });
        self
    }

    pub fn get(&self, name: &str) -> Option<&SheetEntry> {
        self.states.get(name)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Check every entry, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<SheetError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<SheetError>>> = Vec::new();

        for (name, entry) in &self.states {
            if name.trim().is_empty() {
                checks.push(Validation::fail(SheetError::EmptyStateName));
            }
            for attr in entry.attrs.keys() {
                if attr.trim().is_empty() {
                    checks.push(Validation::fail(SheetError::EmptyAttributeName {
                        state: name.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, then register every entry on `owner`.
    ///
    /// Entries merge into definitions already registered under the same
    /// name, so hooks and handlers attached in code survive. Nothing is
    /// installed if validation fails. Returns the number of states installed.
    pub fn install<S>(&self, owner: &S) -> Result<usize, SheetError>
    where
        S: Stateful + ?Sized,
    {
        if let Validation::Failure(errors) = self.validate() {
            return Err(SheetError::Invalid(errors.iter().cloned().collect()));
        }

        for (name, entry) in &self.states {
            let definition = owner
                .get_state(name)
                .unwrap_or_default()
                .attrs(entry.attrs.clone());
            owner.put_state(name, definition);
        }

        debug!("installed {} states from sheet", self.states.len());
        Ok(self.states.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs;
    use crate::engine::{Element, Group, TransitionOptions};
    use crate::render::{MemoryRenderer, Timeline};
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    const BUTTON: &str = r##"{
        "idle":  { "attrs": { "fill": "#ccc", "r": 10 } },
        "hover": { "attrs": { "fill": "#f80", "r": 12 } },
        "gone":  {}
    }"##;

    #[test]
    fn parses_entries() {
        let sheet = StateSheet::from_json(BUTTON).unwrap();

        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.get("hover").unwrap().attrs["r"], json!(12));
        assert!(sheet.get("gone").unwrap().attrs.is_empty());
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(matches!(
            StateSheet::from_json("[1, 2]"),
            Err(SheetError::Parse(_))
        ));
        assert!(matches!(
            StateSheet::from_json(r##"{ "idle": { "colour": "red" } }"##),
            Err(SheetError::Parse(_))
        ));
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let mut sheet = StateSheet::new();
        sheet
            .insert("", attrs! { "x" => 1 })
            .insert("hover", attrs! { "" => 1, " " => 2 })
            .insert("idle", attrs! { "fill" => "red" });

        match sheet.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| matches!(e, SheetError::EmptyStateName)));
                assert_eq!(
                    errors
                        .iter()
                        .filter(|e| matches!(e, SheetError::EmptyAttributeName { state } if state == "hover"))
                        .count(),
                    2
                );
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn invalid_sheet_installs_nothing() {
        let mut sheet = StateSheet::new();
        sheet.insert("ok", AttrMap::new()).insert("", AttrMap::new());

        let timeline = Timeline::new();
        let button = Element::new(MemoryRenderer::new(&timeline));
        let err = sheet.install(&button).unwrap_err();

        assert_eq!(err, SheetError::Invalid(vec![SheetError::EmptyStateName]));
        assert!(!button.has_state("ok"));
    }

    #[test]
    fn install_merges_into_existing_definitions() {
        let sheet = StateSheet::from_json(BUTTON).unwrap();
        let timeline = Timeline::new();
        let button = Element::new(MemoryRenderer::new(&timeline));
        let entered = Rc::new(Cell::new(false));
        let flag = Rc::clone(&entered);
        button.add_state(
            "hover",
            StateDefinition::new()
                .attr("stroke", "black")
                .after(move || flag.set(true)),
        );

        assert_eq!(sheet.install(&button).unwrap(), 3);
        button.state("hover", TransitionOptions::default()).unwrap();

        assert!(entered.get());
        assert_eq!(button.attribute("fill"), Some(json!("#f80")));
        assert_eq!(button.attribute("stroke"), Some(json!("black")));
    }

    #[test]
    fn installs_on_trait_objects() {
        let sheet = StateSheet::from_json(BUTTON).unwrap();
        let timeline = Timeline::new();
        let leaf = Element::new(MemoryRenderer::new(&timeline));
        let nested = Group::new();
        nested.push(leaf.clone());
        let outer = Group::new();
        outer.push(nested.clone());

        for owner in outer.members() {
            assert_eq!(sheet.install(owner.as_ref()).unwrap(), 3);
        }
        let owner: &dyn Stateful = &leaf;
        assert_eq!(sheet.install(owner).unwrap(), 3);

        outer.state("hover", TransitionOptions::default()).unwrap();

        assert_eq!(nested.current_state().as_deref(), Some("hover"));
        assert_eq!(leaf.attribute("fill"), Some(json!("#f80")));
    }

    #[test]
    fn json_round_trip() {
        let sheet = StateSheet::from_json(BUTTON).unwrap();
        let json = sheet.to_json().unwrap();

        assert_eq!(StateSheet::from_json(&json).unwrap(), sheet);
    }
}
