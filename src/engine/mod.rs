//! Transition engines for single elements and groups.
//!
//! A transition into a named state runs, in order:
//!
//! 1. the call's `before` hook, then the state's `before` hook
//! 2. attribute application, immediate or animated through the renderer
//! 3. clearing every handler slot and binding the state's handlers
//! 4. the state's `after` hook, then the call's `after` hook
//! 5. recording the state as current
//!
//! Steps 3 to 5 run inside the renderer's completion callback when the
//! transition is animated, so the order holds on both paths.
//!
//! Groups apply the same transition to every member that has the state.

mod element;
mod group;
mod options;
mod stateful;

pub use element::Element;
pub use group::Group;
pub use options::TransitionOptions;
pub use stateful::Stateful;
