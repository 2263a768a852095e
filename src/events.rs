//! Change notifications for the shell.
//!
//! The presentation layer subscribes to an [`EventController`] and is told
//! whenever a menu collection, the selection, the status line, or the view
//! changed. Each event carries a set of [`EventKind`] flags
//! (bitflags-style) so a single occurrence can match multiple categories
//! (removing the selected device is both `ENTRY_REMOVED` and
//! `SELECTION_CHANGED`).
//!
//! Subscribers are plain callbacks, invoked synchronously at the end of the
//! mutating call that produced the event; by the time a callback runs, the
//! registry state it can observe via `list()` already reflects the change.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::data::registry::MenuId;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
///
/// A single [`ShellEvent`] may have several bits set. For example removing
/// the currently selected device produces an event with both
/// `ENTRY_REMOVED` and `SELECTION_CHANGED` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventKind(pub u32);

impl EventKind {
    // ── Menu collections ─────────────────────────────────────────────────
    /// An entry was added to a menu.
    pub const ENTRY_ADDED: Self = Self(1 << 0);
    /// An entry was removed from a menu.
    pub const ENTRY_REMOVED: Self = Self(1 << 1);
    /// The device selection changed (selected, deselected, or cleared).
    pub const SELECTION_CHANGED: Self = Self(1 << 2);

    // ── Status bar ──────────────────────────────────────────────────────
    /// The status message was replaced.
    pub const STATUS_CHANGED: Self = Self(1 << 3);
    /// Progress was reported.
    pub const PROGRESS_CHANGED: Self = Self(1 << 4);

    // ── View ────────────────────────────────────────────────────────────
    /// The diagram was zoomed (in, out, fit, or default).
    pub const ZOOM: Self = Self(1 << 5);
    /// The diagram was scrolled to a sample position.
    pub const NAVIGATE: Self = Self(1 << 6);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u32::MAX);

    /// Combine two event kinds (bitwise OR).
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        // Known kinds with their string names in declaration order.
        let pairs: &[(EventKind, &str)] = &[
            (EventKind::ENTRY_ADDED, "ENTRY_ADDED"),
            (EventKind::ENTRY_REMOVED, "ENTRY_REMOVED"),
            (EventKind::SELECTION_CHANGED, "SELECTION_CHANGED"),
            (EventKind::STATUS_CHANGED, "STATUS_CHANGED"),
            (EventKind::PROGRESS_CHANGED, "PROGRESS_CHANGED"),
            (EventKind::ZOOM, "ZOOM"),
            (EventKind::NAVIGATE, "NAVIGATE"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u32 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }

        // Bits that weren't covered by the known list
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }

        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ShellEvent – the top-level event type
// ─────────────────────────────────────────────────────────────────────────────

/// A change notification emitted by the shell.
///
/// `kinds` is a bitflag set of [`EventKind`] categories. The optional
/// fields carry metadata relevant to the kinds that are set; subscribers
/// that redraw a menu typically ignore them and re-pull `list()` instead.
#[derive(Debug, Clone, Serialize)]
pub struct ShellEvent {
    /// Bitflag set of categories this event belongs to.
    pub kinds: EventKind,
    /// Monotonic timestamp (seconds since controller creation).
    pub timestamp: f64,

    // ── Optional metadata ────────────────────────────────────────────────
    /// Menu the event pertains to, for entry/selection events.
    pub menu: Option<MenuId>,
    /// Name of the entry that was added, removed, or selected.
    pub entry: Option<String>,
    /// Name of the selected device after the change (`None` = no selection).
    pub selected: Option<String>,
    /// New status text, for `STATUS_CHANGED`.
    pub message: Option<String>,
    /// Reported percentage, for `PROGRESS_CHANGED`.
    pub progress: Option<u8>,
    /// Target sample position, for `NAVIGATE`.
    pub sample: Option<u64>,
}

impl ShellEvent {
    /// Create a new event with the given kinds and no metadata.
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0, // set by the controller on emit
            menu: None,
            entry: None,
            selected: None,
            message: None,
            progress: None,
            sample: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// A filter that selects which event categories a subscriber receives.
///
/// The filter is an OR-mask: an event is delivered when
/// `event.kinds.intersects(filter.mask)`.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    /// Accept all events.
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    /// Accept only the specified event kinds.
    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    /// Check whether an event passes this filter.
    #[inline]
    pub fn matches(&self, event: &ShellEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

type EventCallback = Box<dyn FnMut(&ShellEvent) + Send>;

struct Subscriber {
    filter: EventFilter,
    callback: EventCallback,
}

/// Controller that distributes shell events to subscribers.
///
/// Attach one via [`ShellConfig`](crate::config::ShellConfig) (or let the
/// shell create its own) and call [`subscribe`](Self::subscribe) with an
/// optional filter. Callbacks run synchronously on the thread performing
/// the mutation, before the mutating call returns.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

impl EventController {
    /// Create a new event controller.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    ///
    /// The callback is invoked for every event whose `kinds` intersect with
    /// the filter mask. Callbacks must not call back into the shell's
    /// mutating operations; pull `list()` projections instead. Calling
    /// `subscribe` or `emit` on this controller from inside a callback is
    /// allowed (see [`emit`](Self::emit) for the delivery rules).
    pub fn subscribe<F>(&self, filter: EventFilter, callback: F)
    where
        F: FnMut(&ShellEvent) + Send + 'static,
    {
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.push(Subscriber {
            filter,
            callback: Box::new(callback),
        });
    }

    /// Subscribe to *all* events (no filtering).
    pub fn subscribe_all<F>(&self, callback: F)
    where
        F: FnMut(&ShellEvent) + Send + 'static,
    {
        self.subscribe(EventFilter::all(), callback);
    }

    /// Emit an event to all matching subscribers.
    ///
    /// Called internally at the end of every mutating operation. Public so
    /// embedding code can inject synthetic events.
    ///
    /// The subscriber list is taken out of the lock before dispatch, so a
    /// callback may call `subscribe` or `emit` on this controller without
    /// deadlocking. A subscriber added during dispatch starts receiving
    /// events with the *next* emit; an event emitted from within a
    /// callback is not redelivered to the subscribers currently being
    /// dispatched.
    pub fn emit(&self, mut event: ShellEvent) {
        let mut subscribers = {
            let mut inner = self.inner.lock().unwrap();
            event.timestamp = inner.start_instant.elapsed().as_secs_f64();
            std::mem::take(&mut inner.subscribers)
        };

        for sub in subscribers.iter_mut() {
            if sub.filter.matches(&event) {
                (sub.callback)(&event);
            }
        }

        // Put the list back; anything that subscribed while the lock was
        // released is appended after the pre-existing subscribers.
        let mut inner = self.inner.lock().unwrap();
        let added = std::mem::replace(&mut inner.subscribers, subscribers);
        inner.subscribers.extend(added);
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────
