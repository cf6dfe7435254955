//! In-process renderer: attributes in a map, animations on a manual clock.

use super::{Completion, Renderer};
use crate::core::{AttrMap, AttrValue, EventKind, Handler, HandlerSlots};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

struct Tween {
    target: Weak<RefCell<AttrMap>>,
    attrs: AttrMap,
    ends_at: Duration,
    seq: u64,
    on_complete: Completion,
}

impl Tween {
    fn complete(self) {
        if let Some(target) = self.target.upgrade() {
            target.borrow_mut().extend(self.attrs);
        }
        (self.on_complete)();
    }
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    tweens: Vec<Tween>,
    scheduled: Vec<Duration>,
}

impl Clock {
    /// Remove the earliest tween due at or before `now`.
    fn pop_due(&mut self) -> Option<Tween> {
        let now = self.now;
        let index = self
            .tweens
            .iter()
            .enumerate()
            .filter(|(_, tween)| tween.ends_at <= now)
            .min_by_key(|(_, tween)| (tween.ends_at, tween.seq))
            .map(|(index, _)| index)?;
        Some(self.tweens.remove(index))
    }
}

/// Shared animation clock for [`MemoryRenderer`]s.
///
/// Time only moves when [`advance`](Timeline::advance) or
/// [`finish`](Timeline::finish) is called. A tween snaps its element to the
/// target attributes when it completes; there is no interpolation.
///
/// Completion callbacks run with no borrow of the timeline or of any
/// renderer held, so they are free to start further animations.
#[derive(Clone, Default)]
pub struct Timeline {
    clock: Rc<RefCell<Clock>>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the timeline was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tweens still waiting to complete.
    pub fn pending(&self) -> usize {
        self.clock.borrow().tweens.len()
    }

    /// Durations of every tween ever scheduled, in scheduling order.
    pub fn scheduled(&self) -> Vec<Duration> {
        self.clock.borrow().scheduled.clone()
    }

    /// Move the clock forward by `dt`, completing every tween that is due.
    ///
    /// Due tweens complete in end-time order, ties broken by scheduling
    /// order. Returns how many completed.
    pub fn advance(&self, dt: Duration) -> usize {
        self.clock.borrow_mut().now += dt;

        let mut completed = 0;
        loop {
            let due = self.clock.borrow_mut().pop_due();
            let Some(tween) = due else {
                break;
            };
            tween.complete();
            completed += 1;
        }
        completed
    }

    /// Complete every tween that is outstanding right now.
    ///
    /// Tweens started by the completion callbacks are left pending.
    pub fn finish(&self) -> usize {
        let remaining = {
            let clock = self.clock.borrow();
            clock
                .tweens
                .iter()
                .map(|tween| tween.ends_at)
                .max()
                .map(|latest| latest.saturating_sub(clock.now))
        };
        remaining.map_or(0, |dt| self.advance(dt))
    }

    fn schedule(
        &self,
        target: &Rc<RefCell<AttrMap>>,
        attrs: AttrMap,
        duration: Duration,
        on_complete: Completion,
    ) {
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let ends_at = clock.now + duration;
        clock.scheduled.push(duration);
        clock.tweens.push(Tween {
            target: Rc::downgrade(target),
            attrs,
            ends_at,
            seq,
            on_complete,
        });
    }
}

impl fmt::Debug for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("Timeline")
            .field("now", &clock.now)
            .field("pending", &clock.tweens.len())
            .finish()
    }
}

/// Renderer that keeps attributes in memory and animates on a [`Timeline`].
#[derive(Debug)]
pub struct MemoryRenderer {
    attrs: Rc<RefCell<AttrMap>>,
    slots: HandlerSlots,
    timeline: Timeline,
}

impl MemoryRenderer {
    /// A renderer with no attributes, animating on `timeline`.
    pub fn new(timeline: &Timeline) -> Self {
        Self::with_attributes(timeline, AttrMap::new())
    }

    pub fn with_attributes(timeline: &Timeline, attrs: AttrMap) -> Self {
        Self {
            attrs: Rc::new(RefCell::new(attrs)),
            slots: HandlerSlots::new(),
            timeline: timeline.clone(),
        }
    }

    /// Snapshot of every attribute.
    pub fn attributes(&self) -> AttrMap {
        self.attrs.borrow().clone()
    }

    pub fn slots(&self) -> &HandlerSlots {
        &self.slots
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }
}

impl Renderer for MemoryRenderer {
    fn attribute(&self, name: &str) -> Option<AttrValue> {
        self.attrs.borrow().get(name).cloned()
    }

    fn set_attributes(&mut self, attrs: &AttrMap) {
        self.attrs
            .borrow_mut()
            .extend(attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    fn animate(&mut self, attrs: &AttrMap, duration: Duration, on_complete: Completion) {
        self.timeline
            .schedule(&self.attrs, attrs.clone(), duration, on_complete);
    }

    fn handler(&self, kind: EventKind) -> Option<Handler> {
        self.slots.get(kind)
    }

    fn clear_handlers(&mut self) {
        self.slots.clear_all();
    }

    fn bind_handler(&mut self, kind: EventKind, handler: Handler) {
        self.slots.set(kind, handler);
    }
}
