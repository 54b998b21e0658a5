//! Shell context for the Folio desktop app.
//!
//! Page-wide state (current section, mounted element handles, the toast on
//! screen) lives in one [`ShellContext`] provided at the root and read with
//! [`use_shell`].
//!
//! ## Usage
//!
//! ```ignore
//! let shell = use_shell();
//! shell.notify("Copied #336699 to clipboard!", Severity::Success);
//! shell.scroll_to("#contact");
//! ```

use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use folio_core::{
    FocusMode, FolioConfig, NotificationCenter, NotificationId, RevealPlan, Scheduler,
    SectionTracker, Severity, DEFAULT_SECTIONS,
};

/// Id of the scroll container, target of the skip link
pub const MAIN_CONTENT: &str = "main-content";

/// Runs deferred callbacks on the Dioxus task runtime.
///
/// Tasks are spawned on the root scope, so they outlive the component
/// that scheduled them.
#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopScheduler;

impl Scheduler for DesktopScheduler {
    fn schedule_after(&self, delay: Duration, task: folio_core::scheduler::Task) {
        spawn_forever(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

/// An element revealed when its section scrolls into view
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTarget {
    pub section: String,
    pub order: usize,
    pub key: String,
}

/// Shell-wide state, all of it in signals so the handle is `Copy`.
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub config: Signal<FolioConfig>,
    pub notifications: Signal<NotificationCenter>,
    pub sections: Signal<SectionTracker>,
    pub reveal: Signal<RevealPlan>,
    pub focus: Signal<FocusMode>,
    /// Mounted section elements, keyed by id
    anchors: Signal<HashMap<String, Rc<MountedData>>>,
    reveal_targets: Signal<Vec<RevealTarget>>,
}

impl ShellContext {
    /// Must run inside a component scope.
    pub fn new(config: FolioConfig) -> Self {
        let notifications =
            NotificationCenter::new(config.notification_timeout(), config.notification_exit());
        let sections = SectionTracker::new(DEFAULT_SECTIONS, config.observer_band);
        let reveal = RevealPlan::new(config.reveal_stagger());

        Self {
            config: Signal::new(config),
            notifications: Signal::new(notifications),
            sections: Signal::new(sections),
            reveal: Signal::new(reveal),
            focus: Signal::new(FocusMode::default()),
            anchors: Signal::new(HashMap::new()),
            reveal_targets: Signal::new(Vec::new()),
        }
    }

    pub fn scheduler(&self) -> DesktopScheduler {
        DesktopScheduler
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Show a toast and schedule its auto-dismiss
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let mut center = self.notifications;
        let id = center.write().show(message, severity);
        let timeout = center.read().timeout();

        let shell = *self;
        self.scheduler()
            .schedule_after(timeout, Box::new(move || shell.dismiss(id)));
    }

    /// Start the exit transition; the toast is removed once it ends
    pub fn dismiss(&self, id: NotificationId) {
        let mut center = self.notifications;
        if !center.write().dismiss(id) {
            return;
        }
        let exit = center.read().exit_duration();
        self.scheduler().schedule_after(
            exit,
            Box::new(move || {
                center.write().remove(id);
            }),
        );
    }

    // ------------------------------------------------------------------
    // Sections and anchors
    // ------------------------------------------------------------------

    pub fn register_anchor(&self, id: impl Into<String>, element: Rc<MountedData>) {
        let mut anchors = self.anchors;
        anchors.write().insert(id.into(), element);
    }

    pub fn anchor(&self, id: &str) -> Option<Rc<MountedData>> {
        self.anchors.read().get(id).cloned()
    }

    /// Mounted elements of the tracked sections, in section order
    pub fn section_elements(&self) -> Vec<(String, Rc<MountedData>)> {
        let anchors = self.anchors.read();
        self.sections
            .read()
            .sections()
            .iter()
            .filter_map(|id| anchors.get(id).map(|el| (id.clone(), el.clone())))
            .collect()
    }

    /// Smooth-scroll to an in-page link target.
    ///
    /// Returns false when the href does not name a known, mounted section,
    /// in which case the caller leaves the click alone.
    pub fn scroll_to(&self, href: &str) -> bool {
        let Some(id) = self.sections.read().resolve_anchor(href).map(str::to_string) else {
            return false;
        };
        let Some(element) = self.anchor(&id) else {
            return false;
        };

        tracing::debug!(section = %id, "scrolling to section");
        spawn(async move {
            if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                tracing::warn!(section = %id, error = ?e, "scroll failed");
            }
        });
        true
    }

    /// Skip link target: focus the main content and bring it into view
    pub fn focus_main(&self) {
        let Some(element) = self.anchor(MAIN_CONTENT) else {
            return;
        };
        spawn(async move {
            let _ = element.set_focus(true).await;
            let _ = element.scroll_to(ScrollBehavior::Smooth).await;
        });
    }

    // ------------------------------------------------------------------
    // Scroll reveal
    // ------------------------------------------------------------------

    pub fn register_reveal(&self, target: RevealTarget) {
        let mut registry = self.reveal_targets;
        let mut targets = registry.write();
        if !targets.iter().any(|t| t.key == target.key) {
            targets.push(target);
        }
    }

    /// Schedule the staggered reveal of a section that just scrolled in
    pub fn reveal_section(&self, section: &str) {
        let mut targets: Vec<RevealTarget> = self
            .reveal_targets
            .read()
            .iter()
            .filter(|t| t.section == section)
            .cloned()
            .collect();
        targets.sort_by_key(|t| t.order);

        let mut reveal = self.reveal;
        let planned = reveal
            .write()
            .plan(targets.iter().map(|t| t.key.as_str()));

        for (key, delay) in planned {
            self.scheduler().schedule_after(
                delay,
                Box::new(move || {
                    reveal.write().reveal(&key);
                }),
            );
        }
    }
}

/// Hook to access the shell context.
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>()
}
