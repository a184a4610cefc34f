//! Section navigation for the tabbed layout.
//!
//! Switching sections passes through a fixed fake-loading delay. The
//! navigator itself owns no timer: [`SectionNavigator::begin`] tells the
//! caller whether to schedule [`SectionNavigator::finish`] after
//! [`SectionNavigator::delay`].

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default fake-loading delay between panels.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(800);

/// A content panel in the tabbed layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dev,
    Work,
    Projects,
    Contact,
}

impl Section {
    /// All sections in sidebar order.
    pub fn all() -> &'static [Section] {
        &[
            Section::Dev,
            Section::Work,
            Section::Projects,
            Section::Contact,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dev => "Dev",
            Section::Work => "Work",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dev => "⌨",
            Section::Work => "💼",
            Section::Projects => "🛠",
            Section::Contact => "✉",
        }
    }

    /// Message shown on the loading screen while this section loads.
    pub fn loading_message(&self) -> &'static str {
        match self {
            Section::Dev => "Compiling about_me.rs...",
            Section::Work => "Fetching employment history...",
            Section::Projects => "Mounting /projects...",
            Section::Contact => "Dialing up the modem...",
        }
    }
}

/// Active section plus the in-flight transition, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionNavigator {
    current: Section,
    pending: Option<Section>,
    delay: Duration,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new(Section::default())
    }
}

impl SectionNavigator {
    pub fn new(initial: Section) -> Self {
        Self::with_delay(initial, DEFAULT_LOADING_DELAY)
    }

    pub fn with_delay(initial: Section, delay: Duration) -> Self {
        Self {
            current: initial,
            pending: None,
            delay,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Section being loaded, while transitioning.
    pub fn pending(&self) -> Option<Section> {
        self.pending
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Requests a switch to `target`.
    ///
    /// Returns `true` when a transition started and the caller must call
    /// [`finish`](Self::finish) once the delay has elapsed. Requests for
    /// the current section or made mid-transition are dropped.
    pub fn begin(&mut self, target: Section) -> bool {
        if let Some(pending) = self.pending {
            trace!(?target, ?pending, "Switch ignored while loading");
            return false;
        }
        if target == self.current {
            trace!(?target, "Switch to active section ignored");
            return false;
        }
        debug!(from = ?self.current, to = ?target, "Section transition started");
        self.pending = Some(target);
        true
    }

    /// Completes the in-flight transition and returns the new section.
    pub fn finish(&mut self) -> Option<Section> {
        let target = self.pending.take()?;
        self.current = target;
        debug!(section = ?target, "Section transition finished");
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle_on_dev() {
        let nav = SectionNavigator::default();
        assert_eq!(nav.current(), Section::Dev);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.delay(), Duration::from_millis(800));
    }

    #[test]
    fn test_switch_to_current_is_noop() {
        let mut nav = SectionNavigator::new(Section::Work);
        assert!(!nav.begin(Section::Work));
        assert!(!nav.is_transitioning());
        assert_eq!(nav.finish(), None);
    }

    #[test]
    fn test_switch_while_transitioning_is_dropped() {
        let mut nav = SectionNavigator::default();
        assert!(nav.begin(Section::Projects));
        assert!(!nav.begin(Section::Contact));
        assert!(!nav.begin(Section::Dev));
        assert_eq!(nav.pending(), Some(Section::Projects));
        assert_eq!(nav.current(), Section::Dev);
    }

    #[test]
    fn test_exactly_one_transition_completes() {
        let mut nav = SectionNavigator::default();
        assert!(nav.begin(Section::Contact));
        assert_eq!(nav.finish(), Some(Section::Contact));
        assert_eq!(nav.current(), Section::Contact);
        assert!(!nav.is_transitioning());
        assert_eq!(nav.finish(), None);
    }

    #[test]
    fn test_sections_have_distinct_labels() {
        let labels: std::collections::HashSet<_> =
            Section::all().iter().map(|s| s.label()).collect();
        assert_eq!(labels.len(), 4);
    }
}
