//! Event kinds and the fixed set of handler slots on an element.
//!
//! Every element carries exactly one slot per [`EventKind`]. Transitions clear
//! all of them before binding the handlers of the entered state, so a slot is
//! never left holding a closure from a state the element has already left.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use thiserror::Error;

/// Handler bound to an event slot. Receives the kind of event that fired.
pub type Handler = Rc<dyn Fn(EventKind)>;

/// Recognized pointer and touch events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Click,
    DblClick,
    MouseDown,
    MouseMove,
    MouseOut,
    MouseOver,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
}

const SLOT_COUNT: usize = 11;

impl EventKind {
    /// Every kind, in slot order.
    pub const ALL: [EventKind; SLOT_COUNT] = [
        EventKind::Click,
        EventKind::DblClick,
        EventKind::MouseDown,
        EventKind::MouseMove,
        EventKind::MouseOut,
        EventKind::MouseOver,
        EventKind::MouseUp,
        EventKind::TouchStart,
        EventKind::TouchMove,
        EventKind::TouchEnd,
        EventKind::TouchCancel,
    ];

    /// The bare event name, e.g. `"click"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::DblClick => "dblclick",
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseOut => "mouseout",
            Self::MouseOver => "mouseover",
            Self::MouseUp => "mouseup",
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::TouchEnd => "touchend",
            Self::TouchCancel => "touchcancel",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event name that matches no [`EventKind`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown event '{0}'")]
pub struct UnknownEvent(pub String);

impl FromStr for EventKind {
    type Err = UnknownEvent;

    /// Accepts both the bare name (`"click"`) and the slot name (`"onclick"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        let bare = lowered.strip_prefix("on").unwrap_or(&lowered);
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == bare)
            .ok_or_else(|| UnknownEvent(s.to_string()))
    }
}

/// One optional handler per [`EventKind`].
#[derive(Clone, Default)]
pub struct HandlerSlots {
    slots: [Option<Handler>; SLOT_COUNT],
}

impl HandlerSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handler bound to `kind`, if any.
    pub fn get(&self, kind: EventKind) -> Option<Handler> {
        self.slots[kind.slot()].clone()
    }

    /// Bind `handler` to `kind`, replacing whatever was there.
    pub fn set(&mut self, kind: EventKind, handler: Handler) {
        self.slots[kind.slot()] = Some(handler);
    }

    /// Empty every slot, dropping the closures they held.
    pub fn clear_all(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// True when no slot holds a handler.
    pub fn is_clear(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Kinds that currently have a handler bound, in slot order.
    pub fn bound(&self) -> Vec<EventKind> {
        EventKind::ALL
            .into_iter()
            .filter(|kind| self.slots[kind.slot()].is_some())
            .collect()
    }
}

impl fmt::Debug for HandlerSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSlots")
            .field("bound", &self.bound())
            .finish()
    }
}
