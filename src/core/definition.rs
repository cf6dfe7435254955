//! State definitions: the bundle of attributes, handlers and hooks an owner
//! can be transitioned into.

use super::event::{EventKind, Handler};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Attribute value, opaque to the engine and handed as-is to the renderer.
pub type AttrValue = serde_json::Value;

/// Attribute name to target value.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// Zero-argument lifecycle callback.
pub type Hook = Rc<dyn Fn()>;

/// Named bundle of visual attributes, event handlers and lifecycle hooks.
///
/// Every field is optional. An empty `attrs` map leaves the element's
/// attributes alone; an empty `handlers` map still clears whatever was bound.
///
/// # Example
///
/// ```rust
/// use stateful::core::{EventKind, StateDefinition};
///
/// let hover = StateDefinition::new()
///     .attr("fill", "#f80")
///     .attr("stroke-width", 2)
///     .handler(EventKind::MouseOut, |_| println!("left"))
///     .after(|| println!("hovered"));
///
/// assert_eq!(hover.attrs.len(), 2);
/// assert!(hover.handlers.contains_key(&EventKind::MouseOut));
/// ```
#[derive(Clone, Default)]
pub struct StateDefinition {
    pub attrs: AttrMap,
    pub handlers: BTreeMap<EventKind, Handler>,
    /// Runs before any attribute is touched.
    pub before: Option<Hook>,
    /// Runs once attributes are applied and handlers rebound.
    pub after: Option<Hook>,
}

impl StateDefinition {
    /// An empty definition: no attributes, no handlers, no hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single target attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Merge a whole attribute map, later values winning.
    pub fn attrs(mut self, attrs: AttrMap) -> Self {
        self.attrs.extend(attrs);
        self
    }

    /// Bind `handler` under `kind` while this state is active.
    pub fn handler<F>(mut self, kind: EventKind, handler: F) -> Self
    where
        F: Fn(EventKind) + 'static,
    {
        self.handlers.insert(kind, Rc::new(handler));
        self
    }

    pub fn before<F>(mut self, hook: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.before = Some(Rc::new(hook));
        self
    }

    pub fn after<F>(mut self, hook: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.after = Some(Rc::new(hook));
        self
    }
}

fn same_hook(a: &Option<Hook>, b: &Option<Hook>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// Attributes compare by value; handlers and hooks by identity.
impl PartialEq for StateDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.attrs == other.attrs
            && self.handlers.len() == other.handlers.len()
            && self
                .handlers
                .iter()
                .zip(other.handlers.iter())
                .all(|((ka, ha), (kb, hb))| ka == kb && Rc::ptr_eq(ha, hb))
            && same_hook(&self.before, &other.before)
            && same_hook(&self.after, &other.after)
    }
}

impl fmt::Debug for StateDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDefinition")
            .field("attrs", &self.attrs)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_empty() {
        let def = StateDefinition::new();
        assert!(def.attrs.is_empty());
        assert!(def.handlers.is_empty());
        assert!(def.before.is_none());
        assert!(def.after.is_none());
    }

    #[test]
    fn builder_collects_attributes() {
        let def = StateDefinition::new()
            .attr("height", 100)
            .attr("fill", "red")
            .attr("height", 120);

        assert_eq!(def.attrs.get("height"), Some(&json!(120)));
        assert_eq!(def.attrs.get("fill"), Some(&json!("red")));
    }

    #[test]
    fn clone_shares_closures() {
        let def = StateDefinition::new()
            .handler(EventKind::Click, |_| {})
            .before(|| {});
        let copy = def.clone();

        assert_eq!(def, copy);
    }

    #[test]
    fn distinct_closures_are_not_equal() {
        let a = StateDefinition::new().after(|| {});
        let b = StateDefinition::new().after(|| {});

        assert_ne!(a, b);
        assert_ne!(a, StateDefinition::new());
    }

    #[test]
    fn debug_lists_handler_kinds() {
        let def = StateDefinition::new().handler(EventKind::MouseOver, |_| {});
        let rendered = format!("{def:?}");

        assert!(rendered.contains("MouseOver"));
        assert!(rendered.contains("before: false"));
    }
}
