use tracing::{debug, instrument};

use crate::model::ScreenId;

/// Outcome of a navigation, so the shell can decide what else to dismiss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: ScreenId,
    pub to: ScreenId,
}

impl Transition {
    #[must_use]
    pub fn changed_screen(self) -> bool {
        self.from != self.to
    }
}

/// Holds the active top-level screen. Every `ScreenId` is a valid target,
/// including those with no view of their own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreenRouter {
    current: ScreenId,
}

impl ScreenRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    #[instrument(level = "debug", skip(self), fields(from = %self.current))]
    pub fn navigate(&mut self, screen: ScreenId) -> Transition {
        let from = self.current;
        self.current = screen;
        if !screen.has_view() {
            debug!("no dedicated view, placeholder will render");
        }
        Transition { from, to: screen }
    }

    pub fn back_to_default(&mut self) -> Transition {
        self.navigate(ScreenId::default())
    }
}
