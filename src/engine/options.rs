//! Per-call transition options.

use crate::core::Hook;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Options for a single call to [`Stateful::state`](super::Stateful::state).
///
/// Never stored. `before`/`after` here run in addition to the hooks on the
/// state definition, never instead of them.
#[derive(Clone, Default)]
pub struct TransitionOptions {
    /// Animation duration. `None` or zero applies attributes immediately.
    pub time: Option<Duration>,
    pub before: Option<Hook>,
    pub after: Option<Hook>,
}

impl TransitionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animate attribute changes over `duration`.
    pub fn time(mut self, duration: Duration) -> Self {
        self.time = Some(duration);
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

    /// The animation duration, if these options take the animated path.
    pub fn animation(&self) -> Option<Duration> {
        self.time.filter(|duration| !duration.is_zero())
    }
}

impl fmt::Debug for TransitionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionOptions")
            .field("time", &self.time)
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .finish()
    }
}
