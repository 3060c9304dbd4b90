//! Transient notifications ("Mug added to cart!").
//!
//! Each notice walks Entering -> Shown -> Leaving -> removed on its own
//! timer chain. Timers are never cancelled; a chain only ever touches the
//! notice id it created.

use std::time::Duration;

/// Delay before the notice gets its `show` class (lets the CSS transition run).
pub const SHOW_DELAY: Duration = Duration::from_millis(10);

/// How long a notice stays fully visible.
pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

/// Fade-out time between losing `show` and removal.
pub const FADE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticePhase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub phase: NoticePhase,
}

impl Notice {
    pub fn class(&self) -> &'static str {
        match self.phase {
            NoticePhase::Shown => "cart-notification show",
            NoticePhase::Entering | NoticePhase::Leaving => "cart-notification",
        }
    }
}

/// Notices currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    /// Add a notice in the Entering phase and return its id.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            message: message.into(),
            phase: NoticePhase::Entering,
        });
        id
    }

    /// Move a notice to `phase`. Unknown ids are ignored.
    pub fn set_phase(&mut self, id: u64, phase: NoticePhase) {
        if let Some(notice) = self.notices.iter_mut().find(|n| n.id == id) {
            notice.phase = phase;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// Sleep on whichever timer the current target has.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
pub async fn sleep(_duration: Duration) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_lifecycle() {
        let mut queue = NoticeQueue::default();
        let id = queue.push("Mug added to cart!");

        let notice = queue.iter().next().unwrap();
        assert_eq!(notice.phase, NoticePhase::Entering);
        assert_eq!(notice.class(), "cart-notification");

        queue.set_phase(id, NoticePhase::Shown);
        assert_eq!(queue.iter().next().unwrap().class(), "cart-notification show");

        queue.set_phase(id, NoticePhase::Leaving);
        assert_eq!(queue.iter().next().unwrap().class(), "cart-notification");

        queue.remove(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_notices_are_independent() {
        let mut queue = NoticeQueue::default();
        let first = queue.push("Cart cleared");
        let second = queue.push("Item removed from cart");
        assert_ne!(first, second);

        queue.remove(first);
        queue.set_phase(first, NoticePhase::Shown);

        assert_eq!(queue.len(), 1);
        let remaining = queue.iter().next().unwrap();
        assert_eq!(remaining.id, second);
        assert_eq!(remaining.phase, NoticePhase::Entering);
    }

    #[test]
    fn test_timing_constants() {
        assert!(SHOW_DELAY < DISMISS_AFTER);
        assert_eq!(FADE_OUT, Duration::from_millis(300));
    }
}
