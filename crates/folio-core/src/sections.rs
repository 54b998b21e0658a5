//! Page sections: which one is in view, anchor navigation, scroll reveal
//! and keyboard focus mode.
//!
//! Visibility works like an intersection observer whose root is shrunk to
//! a single horizontal line `band` of the way down the viewport (20% by
//! default). A section is "in view" while it straddles that line.

use std::collections::HashSet;
use std::time::Duration;

/// Section ids of the portfolio, in document order
pub const DEFAULT_SECTIONS: [&str; 6] = ["home", "about", "projects", "skills", "tools", "contact"];

/// Visible part of the scroll container, in the same coordinates as
/// [`SectionLayout`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub top: f64,
    pub height: f64,
}

/// Vertical extent of one section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionLayout {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }
}

/// Tracks the section currently in view.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<String>,
    current: String,
    band: f64,
    intersecting: HashSet<String>,
}

impl SectionTracker {
    /// `band` is the observation line as a fraction of viewport height.
    /// The first section is current until something else scrolls in.
    pub fn new<I, S>(sections: I, band: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections: Vec<String> = sections.into_iter().map(Into::into).collect();
        let current = sections.first().cloned().unwrap_or_default();
        Self {
            sections,
            current,
            band: band.clamp(0.0, 1.0),
            intersecting: HashSet::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    /// Feed fresh layouts after a scroll or resize.
    ///
    /// Returns the sections that started straddling the observation line,
    /// in the order given. The last of them becomes current. Layouts for
    /// unknown ids are ignored.
    pub fn observe(&mut self, viewport: Viewport, layouts: &[SectionLayout]) -> Vec<String> {
        let line = viewport.top + viewport.height * self.band;
        let mut entered = Vec::new();

        for layout in layouts {
            if !self.contains(&layout.id) {
                continue;
            }
            let inside = layout.top <= line && line < layout.bottom;
            if inside {
                if self.intersecting.insert(layout.id.clone()) {
                    entered.push(layout.id.clone());
                }
            } else {
                self.intersecting.remove(&layout.id);
            }
        }

        if let Some(last) = entered.last() {
            if *last != self.current {
                tracing::debug!(from = %self.current, to = %last, "current section changed");
            }
            self.current = last.clone();
        }
        entered
    }

    /// Resolve an in-page link like `#about` to a known section.
    ///
    /// A bare `#`, a non-fragment href or an unknown target resolves to
    /// nothing, and the link keeps its default behavior.
    pub fn resolve_anchor<'a>(&self, href: &'a str) -> Option<&'a str> {
        let id = href.strip_prefix('#')?;
        if id.is_empty() || !self.contains(id) {
            return None;
        }
        Some(id)
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SECTIONS, 0.2)
    }
}

/// Staggered reveal of elements as their section scrolls into view.
///
/// Each element is revealed once. Elements that are already revealed or
/// already scheduled are skipped when their section is entered again.
#[derive(Debug, Clone)]
pub struct RevealPlan {
    stagger: Duration,
    scheduled: HashSet<String>,
    revealed: HashSet<String>,
}

impl RevealPlan {
    pub fn new(stagger: Duration) -> Self {
        Self {
            stagger,
            scheduled: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    /// Delays for the not-yet-revealed elements of an entered section.
    ///
    /// The n-th pending element waits `n × stagger`.
    pub fn plan<'a, I>(&mut self, elements: I) -> Vec<(String, Duration)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pending: Vec<String> = elements
            .into_iter()
            .filter(|key| !self.revealed.contains(*key) && !self.scheduled.contains(*key))
            .map(str::to_string)
            .collect();

        pending
            .into_iter()
            .enumerate()
            .map(|(index, key)| {
                self.scheduled.insert(key.clone());
                (key, self.stagger * index as u32)
            })
            .collect()
    }

    /// Mark an element revealed once its timer fires
    pub fn reveal(&mut self, key: &str) {
        self.scheduled.remove(key);
        self.revealed.insert(key.to_string());
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }
}

/// Keyboard-navigation outline mode: on after Tab, off after any mouse press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusMode {
    keyboard: bool,
}

impl FocusMode {
    pub fn on_key(&mut self, key: &str) {
        if key == "Tab" {
            self.keyboard = true;
        }
    }

    pub fn on_mouse_down(&mut self) {
        self.keyboard = false;
    }

    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }

    /// Class applied to the page root
    pub fn class(&self) -> &'static str {
        if self.keyboard {
            "keyboard-navigation"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layouts(scroll: f64) -> Vec<SectionLayout> {
        // Six sections, 800px tall each, stacked from the top of the page.
        DEFAULT_SECTIONS
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * 800.0 - scroll;
                SectionLayout::new(*id, top, top + 800.0)
            })
            .collect()
    }

    const VIEWPORT: Viewport = Viewport {
        top: 0.0,
        height: 1000.0,
    };

    #[test]
    fn starts_at_home() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.current(), "home");
    }

    #[test]
    fn tracks_section_at_observation_line() {
        let mut tracker = SectionTracker::default();

        // Line sits at 200px: home covers it.
        assert_eq!(tracker.observe(VIEWPORT, &layouts(0.0)), vec!["home"]);
        assert_eq!(tracker.current(), "home");

        // Scrolling inside home reports nothing new.
        assert!(tracker.observe(VIEWPORT, &layouts(100.0)).is_empty());

        // At scroll 700 the line is at page y 900: about.
        assert_eq!(tracker.observe(VIEWPORT, &layouts(700.0)), vec!["about"]);
        assert_eq!(tracker.current(), "about");

        // Jump back up: home enters again.
        assert_eq!(tracker.observe(VIEWPORT, &layouts(0.0)), vec!["home"]);
        assert_eq!(tracker.current(), "home");
    }

    #[test]
    fn ignores_unknown_sections() {
        let mut tracker = SectionTracker::default();
        let entered = tracker.observe(VIEWPORT, &[SectionLayout::new("footer", 0.0, 500.0)]);
        assert!(entered.is_empty());
        assert_eq!(tracker.current(), "home");
    }

    #[test]
    fn anchors() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.resolve_anchor("#contact"), Some("contact"));
        assert_eq!(tracker.resolve_anchor("#"), None);
        assert_eq!(tracker.resolve_anchor("#missing"), None);
        assert_eq!(tracker.resolve_anchor("https://example.com"), None);
    }

    #[test]
    fn reveal_staggers_and_never_repeats() {
        let mut plan = RevealPlan::new(Duration::from_millis(100));

        let first = plan.plan(["card-1", "card-2", "card-3"]);
        assert_eq!(
            first,
            vec![
                ("card-1".to_string(), Duration::ZERO),
                ("card-2".to_string(), Duration::from_millis(100)),
                ("card-3".to_string(), Duration::from_millis(200)),
            ]
        );

        // Re-entering before the timers fire schedules nothing twice.
        assert!(plan.plan(["card-1", "card-2", "card-3"]).is_empty());

        plan.reveal("card-1");
        assert!(plan.is_revealed("card-1"));
        assert!(plan.plan(["card-1", "card-4"]) == vec![("card-4".to_string(), Duration::ZERO)]);
    }

    #[test]
    fn focus_mode_toggles() {
        let mut mode = FocusMode::default();
        assert_eq!(mode.class(), "");

        mode.on_key("a");
        assert!(!mode.is_keyboard());

        mode.on_key("Tab");
        assert_eq!(mode.class(), "keyboard-navigation");

        mode.on_mouse_down();
        assert!(!mode.is_keyboard());
    }
}
