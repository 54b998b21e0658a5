//! Toast notifications.
//!
//! At most one toast is on screen: showing a new one replaces the old one.
//! A toast is dismissed either by the user or after a timeout, then slides
//! out for a short exit transition before it is removed.
//!
//! ```text
//! show ──► Visible ──dismiss / timeout──► Leaving ──exit elapsed──► removed
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Auto-dismiss delay
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);
/// Slide-out transition length
pub const DEFAULT_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Background color of the toast
    pub fn accent(&self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
            Severity::Info => "#3b82f6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

/// Holds the toast currently on screen.
///
/// The center does not keep time. After [`show`](Self::show) the shell
/// schedules [`dismiss`](Self::dismiss) after [`timeout`](Self::timeout);
/// after a successful `dismiss` it schedules [`remove`](Self::remove) after
/// [`exit_duration`](Self::exit_duration). Calls carrying the id of a toast
/// that has since been replaced do nothing.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
    timeout: Duration,
    exit: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_EXIT)
    }
}

impl NotificationCenter {
    pub fn new(timeout: Duration, exit: Duration) -> Self {
        Self {
            current: None,
            next_id: 1,
            timeout,
            exit,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn exit_duration(&self) -> Duration {
        self.exit
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Show a toast, replacing whatever is on screen
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = self.current.take() {
            tracing::debug!(replaced = previous.id.0, "notification replaced");
        }

        let message = message.into();
        tracing::info!(severity = severity.label(), %message, "notification shown");
        self.current = Some(Notification {
            id,
            message,
            severity,
            phase: NotificationPhase::Visible,
        });
        id
    }

    /// Start the exit transition.
    ///
    /// Returns true if the toast was visible and is now leaving.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.current.as_mut() {
            Some(n) if n.id == id && n.phase == NotificationPhase::Visible => {
                n.phase = NotificationPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop a toast whose exit transition has finished
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let leaving = matches!(
            &self.current,
            Some(n) if n.id == id && n.phase == NotificationPhase::Leaving
        );
        if leaving {
            self.current = None;
        }
        leaving
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ManualScheduler, Scheduler};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn severity_accents() {
        assert_eq!(Severity::Success.accent(), "#10b981");
        assert_eq!(Severity::Error.accent(), "#ef4444");
        assert_eq!(Severity::Info.accent(), "#3b82f6");
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn new_toast_replaces_old() {
        let mut center = NotificationCenter::default();
        let first = center.show("one", Severity::Info);
        let second = center.show("two", Severity::Error);

        let current = center.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "two");

        // Timers of the replaced toast must not touch the new one.
        assert!(!center.dismiss(first));
        assert_eq!(center.current().unwrap().phase, NotificationPhase::Visible);
    }

    #[test]
    fn dismiss_then_remove() {
        let mut center = NotificationCenter::default();
        let id = center.show("hello", Severity::Success);

        assert!(!center.remove(id), "cannot remove a visible toast");
        assert!(center.dismiss(id));
        assert!(!center.dismiss(id), "second dismiss is a no-op");
        assert!(center.remove(id));
        assert!(center.current().is_none());
    }

    #[test]
    fn auto_dismiss_with_scheduler() {
        let scheduler = Rc::new(ManualScheduler::new());
        let center = Rc::new(RefCell::new(NotificationCenter::default()));

        let id = center.borrow_mut().show("saved", Severity::Success);
        let timeout = center.borrow().timeout();

        let c = center.clone();
        let s = scheduler.clone();
        scheduler.schedule_after(
            timeout,
            Box::new(move || {
                if c.borrow_mut().dismiss(id) {
                    let exit = c.borrow().exit_duration();
                    let c2 = c.clone();
                    s.schedule_after(exit, Box::new(move || {
                        c2.borrow_mut().remove(id);
                    }));
                }
            }),
        );

        scheduler.advance(Duration::from_millis(4999));
        assert!(center.borrow().current().is_some());

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(
            center.borrow().current().unwrap().phase,
            NotificationPhase::Leaving
        );

        scheduler.advance(Duration::from_millis(300));
        assert!(center.borrow().current().is_none());
    }
}
