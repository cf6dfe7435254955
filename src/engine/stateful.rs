//! The capability shared by elements and groups.

use super::options::TransitionOptions;
use crate::core::{StateDefinition, StateNotFound};

/// Owner of named states that can be transitioned between them.
///
/// Implemented by [`Element`](super::Element) for single drawables and by
/// [`Group`](super::Group) for collections. All methods take `&self`; owners
/// are handles with interior mutability so calls can be chained and hooks
/// may call back into the owner they belong to.
///
/// The required methods are object safe, so owners can be stored as
/// `Rc<dyn Stateful>`; the chaining forms are only available on concrete
/// types.
///
/// # Example
///
/// ```rust
/// use stateful::core::StateDefinition;
/// use stateful::engine::{Element, Stateful, TransitionOptions};
/// use stateful::render::{MemoryRenderer, Timeline};
///
/// let timeline = Timeline::new();
/// let rect = Element::new(MemoryRenderer::new(&timeline));
///
/// rect.add_state("tall", StateDefinition::new().attr("height", 100))
///     .add_state("flat", StateDefinition::new().attr("height", 0));
///
/// assert_eq!(rect.current_state(), None);
/// rect.state("tall", TransitionOptions::default()).unwrap();
/// assert_eq!(rect.current_state().as_deref(), Some("tall"));
/// assert_eq!(rect.attribute("height"), Some(100.into()));
/// ```
pub trait Stateful {
    /// Register `definition` under `name`, replacing any previous entry.
    fn put_state(&self, name: &str, definition: StateDefinition);

    /// The definition registered under `name`.
    fn get_state(&self, name: &str) -> Result<StateDefinition, StateNotFound>;

    /// Whether `name` is registered. Never fails.
    fn has_state(&self, name: &str) -> bool;

    /// Remove the definition registered under `name`.
    ///
    /// The current state is not touched, even if it names the removed entry.
    fn remove_state(&self, name: &str) -> Option<StateDefinition>;

    /// Name of the state most recently entered, `None` before any transition.
    fn current_state(&self) -> Option<String>;

    /// Transition into the state registered under `name`.
    fn enter(&self, name: &str, options: TransitionOptions) -> Result<(), StateNotFound>;

    /// Chaining form of [`put_state`](Stateful::put_state).
    fn add_state(&self, name: &str, definition: StateDefinition) -> &Self
    where
        Self: Sized,
    {
        self.put_state(name, definition);
        self
    }

    /// Register an empty definition under `name`.
    fn add_empty_state(&self, name: &str) -> &Self
    where
        Self: Sized,
    {
        self.add_state(name, StateDefinition::default())
    }

    /// Chaining form of [`enter`](Stateful::enter).
    fn state(&self, name: &str, options: TransitionOptions) -> Result<&Self, StateNotFound>
    where
        Self: Sized,
    {
        self.enter(name, options)?;
        Ok(self)
    }
}
