//! The auth gate: which screen is shown and whether the user signed in.

use nour_core::Screen;
use serde::Serialize;
use tracing::{debug, info};

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavOutcome {
    /// The target is now the current screen.
    Applied,
    /// The gate refused the target; the current screen is kept.
    Refused,
    /// The target already is the current screen.
    Unchanged,
}

/// Root navigation state.
///
/// While signed out only the auth screens are reachable; once signed in
/// they are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppState {
    screen: Screen,
    authenticated: bool,
}

impl AppState {
    /// A signed-out session on `initial`, or on sign-up when `initial` sits
    /// behind the gate.
    pub fn new(initial: Screen) -> Self {
        let screen = if initial.is_auth() { initial } else { Screen::SignUp };
        Self {
            screen,
            authenticated: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether `target` may be shown in the current session.
    pub fn allows(&self, target: Screen) -> bool {
        target.is_auth() != self.authenticated
    }

    pub fn navigate(&mut self, target: Screen) -> NavOutcome {
        if target == self.screen {
            return NavOutcome::Unchanged;
        }
        if !self.allows(target) {
            debug!(from = %self.screen, to = %target, authenticated = self.authenticated, "navigation refused");
            return NavOutcome::Refused;
        }
        debug!(from = %self.screen, to = %target, "navigation applied");
        self.screen = target;
        NavOutcome::Applied
    }

    /// Sign in and land on the dashboard.
    pub fn authenticate(&mut self) {
        info!("session authenticated");
        self.authenticated = true;
        self.screen = Screen::Dashboard;
    }

    pub fn sign_out(&mut self) {
        info!("session signed out");
        self.authenticated = false;
        self.screen = Screen::SignIn;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Screen::SignUp)
    }
}
