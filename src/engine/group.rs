//! Transition engine for collections of stateful members.

use super::options::TransitionOptions;
use super::stateful::Stateful;
use crate::core::{StateDefinition, StateNotFound, StateRegistry};
use log::{debug, trace, warn};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct GroupInner {
    members: RefCell<Vec<Rc<dyn Stateful>>>,
    registry: RefCell<StateRegistry>,
}

/// Ordered, mutable collection of stateful members.
///
/// A group keeps its own registry and current state for introspection.
/// Transitions fan out to every member that has the requested state
/// registered; members without it are skipped. The group's own registry
/// does not gate the fan-out.
///
/// Members may be any [`Stateful`] owner, including other groups. Like
/// [`Element`](super::Element), `Group` is a handle and clones share state.
///
/// # Example
///
/// ```rust
/// use stateful::core::StateDefinition;
/// use stateful::engine::{Element, Group, Stateful, TransitionOptions};
/// use stateful::render::{MemoryRenderer, Timeline};
///
/// let timeline = Timeline::new();
/// let circle = Element::new(MemoryRenderer::new(&timeline));
/// let label = Element::new(MemoryRenderer::new(&timeline));
/// circle.add_state("lit", StateDefinition::new().attr("fill", "yellow"));
///
/// let set = Group::new();
/// set.push(circle.clone()).push(label.clone());
/// set.state("lit", TransitionOptions::default()).unwrap();
///
/// assert_eq!(circle.current_state().as_deref(), Some("lit"));
/// assert_eq!(label.current_state(), None);
/// assert_eq!(set.current_state().as_deref(), Some("lit"));
/// ```
#[derive(Clone, Default)]
pub struct Group {
    inner: Rc<GroupInner>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member.
    pub fn push<M>(&self, member: M) -> &Self
    where
        M: Stateful + 'static,
    {
        self.inner.members.borrow_mut().push(Rc::new(member));
        self
    }

    /// Remove and return the member at `index`, if there is one.
    pub fn remove(&self, index: usize) -> Option<Rc<dyn Stateful>> {
        let mut members = self.inner.members.borrow_mut();
        (index < members.len()).then(|| members.remove(index))
    }

    pub fn clear(&self) {
        self.inner.members.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.members.borrow().is_empty()
    }

    /// Snapshot of the current members, in order.
    pub fn members(&self) -> Vec<Rc<dyn Stateful>> {
        self.inner.members.borrow().clone()
    }
}

impl Stateful for Group {
    fn put_state(&self, name: &str, definition: StateDefinition) {
        self.inner.registry.borrow_mut().insert(name, definition);
    }

    fn get_state(&self, name: &str) -> Result<StateDefinition, StateNotFound> {
        self.inner.registry.borrow().get(name).cloned()
    }

    fn has_state(&self, name: &str) -> bool {
        self.inner.registry.borrow().contains(name)
    }

    fn remove_state(&self, name: &str) -> Option<StateDefinition> {
        self.inner.registry.borrow_mut().remove(name)
    }

    fn current_state(&self) -> Option<String> {
        self.inner.registry.borrow().current().map(String::from)
    }

    fn enter(&self, name: &str, options: TransitionOptions) -> Result<(), StateNotFound> {
        // Membership is read once; hooks may add or remove members freely.
        let members = self.members();

        let mut entered = 0;
        for (index, member) in members.iter().enumerate() {
            if !member.has_state(name) {
                trace!("member {index} has no state '{name}', skipping");
                continue;
            }
            if let Err(err) = member.enter(name, options.clone()) {
                warn!("member {index} could not enter '{name}': {err}");
                continue;
            }
            entered += 1;
        }

        debug!(
            "group dispatched state '{name}' to {entered} of {} members",
            members.len()
        );
        self.inner.registry.borrow_mut().set_current(name);
        Ok(())
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("members", &self.len())
            .field("registry", &self.inner.registry)
            .finish()
    }
}
