//! Outcome notifications.
//!
//! Rule functions append [`GameEvent`]s to the [`NotificationQueue`] held in
//! the game state, in the exact order the steps happen. Display pacing is
//! driven from outside through [`NotificationQueue::advance`].

mod event;
mod queue;

pub use event::GameEvent;
pub use queue::{Notification, NotificationQueue};
