//! Navigation state machine
//!
//! The router owns the current [`Screen`] and the back-stack of screens that
//! led to it. All transitions are synchronous; an action that the current
//! screen does not offer is rejected and leaves the router unchanged.

use std::fmt;

use tracing::{debug, instrument};

use super::Screen;
use crate::models::Category;
use crate::{Result, TourError};

/// User-initiated navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    StartTour,
    SelectCategory(Category),
    SelectLocation(u32),
    Back,
    GoHome,
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::StartTour => write!(f, "start the tour"),
            NavAction::SelectCategory(category) => write!(f, "select {category}"),
            NavAction::SelectLocation(id) => write!(f, "select location {id}"),
            NavAction::Back => write!(f, "go back"),
            NavAction::GoHome => write!(f, "go home"),
        }
    }
}

/// What a successful action did to the back-stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The previous screen was pushed onto the history
    Pushed,
    /// One screen was popped off the history
    Popped,
    /// History was cleared and the router is back on the home screen
    Reset,
    /// Back was requested with nothing to pop
    AtRoot,
}

/// Current screen plus history, passed around explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Screen,
    history: Vec<Screen>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Start on the home screen with an empty history
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Screen::Home,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Previously visited screens, oldest first
    #[must_use]
    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Apply a user action to the current screen
    #[instrument(level = "debug", skip(self), fields(from = %self.current))]
    pub fn apply(&mut self, action: NavAction) -> Result<Transition> {
        let transition = match (self.current, action) {
            (_, NavAction::GoHome) => self.go_home(),
            (_, NavAction::Back) => self.back(),
            (Screen::Home, NavAction::StartTour) => self.navigate(Screen::Categories),
            (Screen::Categories, NavAction::SelectCategory(category)) => {
                self.navigate(Screen::LocationList { category })
            }
            (Screen::LocationList { category }, NavAction::SelectLocation(location_id)) => self
                .navigate(Screen::LocationDetail {
                    category,
                    location_id,
                }),
            (screen, action) => return Err(TourError::invalid_transition(action, screen)),
        };
        debug!(to = %self.current, depth = self.history.len(), "navigated");
        Ok(transition)
    }

    /// Push `screen`, keeping the current one in history
    pub fn navigate(&mut self, screen: Screen) -> Transition {
        let previous = std::mem::replace(&mut self.current, screen);
        self.history.push(previous);
        Transition::Pushed
    }

    /// Pop exactly one screen; no-op on an empty history
    pub fn back(&mut self) -> Transition {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                Transition::Popped
            }
            None => Transition::AtRoot,
        }
    }

    /// Drop the whole history and land on the home screen
    pub fn go_home(&mut self) -> Transition {
        self.history.clear();
        self.current = Screen::Home;
        Transition::Reset
    }
}
