//! FIFO notification queue with a single active slot.
//!
//! Producers (the rule functions) only append. The consumer calls
//! [`NotificationQueue::advance`] with its own clock to rotate the active
//! notification: a transient one expires after the display duration, a
//! persistent one stays until a newer persistent notification arrives.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// A queued message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub event: GameEvent,
    /// Persistent notifications never expire on their own.
    pub persistent: bool,
}

impl Notification {
    #[must_use]
    pub fn transient(event: GameEvent) -> Self {
        Self { event, persistent: false }
    }

    #[must_use]
    pub fn persistent(event: GameEvent) -> Self {
        Self { event, persistent: true }
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.event.text()
    }
}

#[derive(Clone, Debug)]
struct Active {
    notification: Notification,
    /// `None` for persistent notifications.
    expires_at: Option<Duration>,
}

/// Pending notifications plus the one currently displayed.
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
    active: Option<Active>,
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transient notification.
    pub fn push(&mut self, event: GameEvent) {
        log::trace!("notify: {}", event);
        self.pending.push_back(Notification::transient(event));
    }

    /// Append a persistent notification.
    pub fn push_persistent(&mut self, event: GameEvent) {
        log::trace!("notify (persistent): {}", event);
        self.pending.push_back(Notification::persistent(event));
    }

    /// Drop everything, including the active notification.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.active = None;
    }

    /// Number of notifications waiting behind the active one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Waiting notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.pending.iter()
    }

    /// Waiting events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.pending.iter().map(|n| &n.event)
    }

    /// The notification currently displayed, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Notification> {
        self.active.as_ref().map(|a| &a.notification)
    }

    /// Rotate the active slot at time `now`.
    ///
    /// `display` is how long a transient notification stays active once
    /// promoted.
    pub fn advance(&mut self, now: Duration, display: Duration) -> Option<&Notification> {
        if let Some(active) = &self.active {
            match active.expires_at {
                Some(expires_at) if now >= expires_at => self.active = None,
                Some(_) => {}
                None => {
                    // Only a newer persistent notification can replace a persistent one.
                    if let Some(pos) = self.pending.iter().position(|n| n.persistent) {
                        self.pending.drain(..pos);
                        self.active = None;
                    }
                }
            }
        }

        if self.active.is_none() {
            if let Some(next) = self.pending.pop_front() {
                let expires_at = (!next.persistent).then(|| now + display);
                self.active = Some(Active { notification: next, expires_at });
            }
        }

        self.active()
    }
}
