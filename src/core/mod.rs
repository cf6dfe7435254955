//! Core data model: state definitions, the per-owner registry, event slots.
//!
//! This module contains everything the transition engine stores:
//! - State definitions (attributes, handlers, hooks)
//! - The registry mapping names to definitions, plus the current state
//! - The fixed set of event handler slots an element exposes
//!
//! Nothing here talks to a renderer; see [`crate::engine`] for transitions.

mod definition;
mod error;
mod event;
mod macros;
mod registry;

pub use definition::{AttrMap, AttrValue, Hook, StateDefinition};
pub use error::StateNotFound;
pub use event::{EventKind, Handler, HandlerSlots, UnknownEvent};
pub use registry::StateRegistry;
