//! Boundary with the rendering collaborator.
//!
//! The engine never draws, interpolates or hit-tests. It only calls the
//! primitives below: read and write attributes, start an animation that
//! reports back once, and manage an element's event handler slots.
//!
//! [`MemoryRenderer`] and [`Timeline`] provide an in-process collaborator
//! that keeps attributes in a map and completes animations when the
//! timeline is advanced.

mod memory;

pub use memory::{MemoryRenderer, Timeline};

use crate::core::{AttrMap, AttrValue, EventKind, Handler};
use std::time::Duration;

/// Single-shot animation completion callback.
pub type Completion = Box<dyn FnOnce()>;

/// Primitives the transition engine needs from whatever draws an element.
///
/// Implementations must invoke the `on_complete` passed to
/// [`animate`](Renderer::animate) exactly once, after the animation has
/// finished. Invoking it from inside `animate` is allowed.
pub trait Renderer {
    /// Current value of a visual attribute.
    fn attribute(&self, name: &str) -> Option<AttrValue>;

    /// Apply every attribute in `attrs` immediately.
    fn set_attributes(&mut self, attrs: &AttrMap);

    /// Tween towards `attrs` over `duration`, then call `on_complete`.
    fn animate(&mut self, attrs: &AttrMap, duration: Duration, on_complete: Completion);

    /// Handler currently bound to `kind`, if any.
    fn handler(&self, kind: EventKind) -> Option<Handler>;

    /// Empty every handler slot.
    fn clear_handlers(&mut self);

    fn bind_handler(&mut self, kind: EventKind, handler: Handler);
}
