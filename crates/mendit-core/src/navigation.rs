//! View transitions.
//!
//! Completion events move the user along mediate → healing → archive, and
//! quiz → mediate. Explicit navigation may jump to any view at any time.

use mendit_types::view::View;

/// Something that happened in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The user picked a view directly.
    Navigate(View),
    MediationCompleted,
    HealingCompleted,
    QuizCompleted,
}

/// The view an event leads to. Completion events are accepted from any view.
pub fn next_view(event: NavEvent) -> View {
    match event {
        NavEvent::Navigate(view) => view,
        NavEvent::MediationCompleted => View::Healing,
        NavEvent::HealingCompleted => View::Archive,
        NavEvent::QuizCompleted => View::Mediate,
    }
}

/// Tracks the current view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Apply an event and return the new view.
    pub fn apply(&mut self, event: NavEvent) -> View {
        let from = self.current;
        self.current = next_view(event);
        if from != self.current {
            tracing::debug!(%from, to = %self.current, "view changed");
        }
        self.current
    }
}
