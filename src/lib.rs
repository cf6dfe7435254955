//! Stateful: named visual states and safe transitions for scene elements
//!
//! Stateful lets a caller register named, declarative states on a drawable
//! element or a group of elements, and move them between those states,
//! optionally animated. The crate does not draw anything itself: attribute
//! writes, animation tweening and event slots belong to a [`render::Renderer`]
//! supplied by the caller.
//!
//! # Core Concepts
//!
//! - **State definition**: Target attributes, event handlers and before/after hooks
//! - **Stateful**: The capability shared by elements and groups (`add_state`,
//!   `get_state`, `has_state`, `state`)
//! - **Element**: One drawable, transitioned through its renderer
//! - **Group**: A collection that fans a transition out to every member that
//!   has the state registered
//! - **State sheet**: JSON-described attribute bundles installed onto owners
//!
//! # Example
//!
//! ```rust
//! use stateful::core::{EventKind, StateDefinition};
//! use stateful::engine::{Element, Stateful, TransitionOptions};
//! use stateful::render::{MemoryRenderer, Timeline};
//! use std::time::Duration;
//!
//! let timeline = Timeline::new();
//! let button = Element::new(MemoryRenderer::new(&timeline));
//!
//! button
//!     .add_state("idle", StateDefinition::new().attr("fill", "#ccc"))
//!     .add_state(
//!         "hover",
//!         StateDefinition::new()
//!             .attr("fill", "#f80")
//!             .handler(EventKind::MouseOut, |_| println!("pointer left")),
//!     );
//!
//! button
//!     .state("hover", TransitionOptions::new().time(Duration::from_millis(200)))
//!     .unwrap();
//!
//! // The transition completes when the renderer's animation does.
//! assert_eq!(button.current_state(), None);
//! timeline.finish();
//! assert_eq!(button.current_state().as_deref(), Some("hover"));
//! assert!(button.handler(EventKind::MouseOut).is_some());
//! ```

pub mod core;
pub mod engine;
pub mod render;
pub mod sheet;

// Re-export commonly used types
pub use crate::core::{StateDefinition, StateNotFound};
pub use engine::{Element, Group, Stateful, TransitionOptions};
