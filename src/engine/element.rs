//! Transition engine for a single element.

use super::options::TransitionOptions;
use super::stateful::Stateful;
use crate::core::{
    AttrMap, AttrValue, EventKind, Handler, Hook, StateDefinition, StateNotFound, StateRegistry,
};
use crate::render::{Completion, Renderer};
use log::{debug, trace, warn};
use std::cell::{Cell, Ref, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Work left once attributes have been applied.
struct PendingFinish {
    name: String,
    handlers: BTreeMap<EventKind, Handler>,
    after: Vec<Hook>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Still inside the renderer's `animate` call.
    Dispatching,
    /// The renderer completed from inside `animate`.
    CompletedEarly,
    /// `animate` returned; completion finishes the transition itself.
    Detached,
}

struct ElementInner<R> {
    renderer: RefCell<R>,
    registry: RefCell<StateRegistry>,
}

/// A drawable with named states, backed by a [`Renderer`].
///
/// `Element` is a handle: clones share the same renderer and registry.
/// No internal borrow is held while hooks, handlers or the renderer's
/// completion callback run.
pub struct Element<R> {
    inner: Rc<ElementInner<R>>,
}

impl<R> Clone for Element<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: Renderer + 'static> Element<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                renderer: RefCell::new(renderer),
                registry: RefCell::new(StateRegistry::new()),
            }),
        }
    }

    /// Borrow the underlying renderer.
    ///
    /// Do not hold the guard across calls that transition this element.
    pub fn renderer(&self) -> Ref<'_, R> {
        self.inner.renderer.borrow()
    }

    pub fn attribute(&self, name: &str) -> Option<AttrValue> {
        self.inner.renderer.borrow().attribute(name)
    }

    /// Apply attributes directly, outside of any state.
    pub fn set_attributes(&self, attrs: &AttrMap) -> &Self {
        self.inner.renderer.borrow_mut().set_attributes(attrs);
        self
    }

    pub fn handler(&self, kind: EventKind) -> Option<Handler> {
        self.inner.renderer.borrow().handler(kind)
    }

    /// Bind a handler outside of any state. The next transition clears it.
    pub fn bind_handler<F>(&self, kind: EventKind, handler: F) -> &Self
    where
        F: Fn(EventKind) + 'static,
    {
        self.inner
            .renderer
            .borrow_mut()
            .bind_handler(kind, Rc::new(handler));
        self
    }

    /// Invoke the handler bound to `kind`. Returns whether one was bound.
    pub fn fire(&self, kind: EventKind) -> bool {
        let handler = self.inner.renderer.borrow().handler(kind);
        match handler {
            Some(handler) => {
                handler(kind);
                true
            }
            None => false,
        }
    }

    /// Registered state names, sorted.
    pub fn state_names(&self) -> Vec<String> {
        self.inner
            .registry
            .borrow()
            .names()
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn animate(&self, attrs: &AttrMap, duration: Duration, pending: PendingFinish) {
        let slot = Rc::new(RefCell::new(Some(pending)));
        let stage = Rc::new(Cell::new(Stage::Dispatching));

        let on_complete: Completion = {
            let slot = Rc::clone(&slot);
            let stage = Rc::clone(&stage);
            let element = Rc::downgrade(&self.inner);
            Box::new(move || match stage.get() {
                Stage::Dispatching => stage.set(Stage::CompletedEarly),
                Stage::CompletedEarly => {}
                Stage::Detached => {
                    let pending = slot.borrow_mut().take();
                    match (element.upgrade(), pending) {
                        (Some(inner), Some(pending)) => Element { inner }.finish(pending),
                        (None, Some(pending)) => {
                            trace!("element dropped before '{}' finished animating", pending.name)
                        }
                        _ => {}
                    }
                }
            })
        };

        self.inner
            .renderer
            .borrow_mut()
            .animate(attrs, duration, on_complete);

        if stage.replace(Stage::Detached) == Stage::CompletedEarly {
            let pending = slot.borrow_mut().take();
            if let Some(pending) = pending {
                self.finish(pending);
            }
        }
    }

    /// Rebind handlers, run `after` hooks, then record the state.
    fn finish(&self, pending: PendingFinish) {
        let PendingFinish {
            name,
            handlers,
            after,
        } = pending;

        {
            let mut renderer = self.inner.renderer.borrow_mut();
            renderer.clear_handlers();
            for (kind, handler) in handlers {
                trace!("binding {kind} handler for '{name}'");
                renderer.bind_handler(kind, handler);
            }
        }

        for hook in &after {
            hook();
        }

        debug!("entered state '{name}'");
        self.inner.registry.borrow_mut().set_current(name);
    }
}

impl<R: Renderer + 'static> Stateful for Element<R> {
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
        let definition = self.get_state(name).map_err(|err| {
            warn!("cannot enter state: {err}");
            err
        })?;
        let duration = options.animation();
        let TransitionOptions { before, after, .. } = options;

        debug!(
            "entering state '{name}' from {:?} ({})",
            self.current_state(),
            duration.map_or_else(|| "immediate".to_string(), |d| format!("{d:?}")),
        );

        for hook in before.iter().chain(definition.before.iter()) {
            trace!("running before hook for '{name}'");
            hook();
        }

        let pending = PendingFinish {
            name: name.to_string(),
            handlers: definition.handlers,
            after: definition.after.into_iter().chain(after).collect(),
        };

        match duration {
            Some(duration) => self.animate(&definition.attrs, duration, pending),
            None => {
                if !definition.attrs.is_empty() {
                    self.inner
                        .renderer
                        .borrow_mut()
                        .set_attributes(&definition.attrs);
                }
                self.finish(pending);
            }
        }

        Ok(())
    }
}

impl<R> fmt::Debug for Element<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("registry", &self.inner.registry)
            .finish_non_exhaustive()
    }
}
