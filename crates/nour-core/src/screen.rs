//! Screen: the closed set of top-level views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// One top-level navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Screen {
    SignUp,
    SignIn,
    Dashboard,
    Upload,
    Checklist,
    Wallet,
    Progress,
    Security,
    Help,
    Share,
    EnbdIntegration,
    Account,
    Home,
    Transfer,
    Compliance,
    Admin,
}

impl Screen {
    /// Every screen, in declaration order.
    pub const ALL: [Screen; 16] = [
        Screen::SignUp,
        Screen::SignIn,
        Screen::Dashboard,
        Screen::Upload,
        Screen::Checklist,
        Screen::Wallet,
        Screen::Progress,
        Screen::Security,
        Screen::Help,
        Screen::Share,
        Screen::EnbdIntegration,
        Screen::Account,
        Screen::Home,
        Screen::Transfer,
        Screen::Compliance,
        Screen::Admin,
    ];

    /// The string tag of this screen.
    pub const fn tag(self) -> &'static str {
        match self {
            Screen::SignUp => "signup",
            Screen::SignIn => "signin",
            Screen::Dashboard => "dashboard",
            Screen::Upload => "upload",
            Screen::Checklist => "checklist",
            Screen::Wallet => "wallet",
            Screen::Progress => "progress",
            Screen::Security => "security",
            Screen::Help => "help",
            Screen::Share => "share",
            Screen::EnbdIntegration => "enbd-integration",
            Screen::Account => "account",
            Screen::Home => "home",
            Screen::Transfer => "transfer",
            Screen::Compliance => "compliance",
            Screen::Admin => "admin",
        }
    }

    /// Sign-up and sign-in: the only screens reachable while signed out.
    pub const fn is_auth(self) -> bool {
        matches!(self, Screen::SignUp | Screen::SignIn)
    }

    /// Whether the bottom navigation bar is shown on this screen.
    ///
    /// Auth screens never show it; the ENBD onboarding sequence hides it.
    pub const fn shows_bottom_nav(self) -> bool {
        !self.is_auth() && !matches!(self, Screen::EnbdIntegration)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Screen {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The home screen links to the wallet as "identity".
        if s == "identity" {
            return Ok(Screen::Wallet);
        }
        Screen::ALL
            .into_iter()
            .find(|screen| screen.tag() == s)
            .ok_or_else(|| CoreError::UnknownScreen(s.to_string()))
    }
}

impl TryFrom<String> for Screen {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Screen> for &'static str {
    fn from(screen: Screen) -> Self {
        screen.tag()
    }
}

/// A tab of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTab {
    Home,
    Share,
    Wallet,
    Help,
    Account,
}

impl NavTab {
    /// Tabs in display order.
    pub const ALL: [NavTab; 5] = [
        NavTab::Home,
        NavTab::Share,
        NavTab::Wallet,
        NavTab::Help,
        NavTab::Account,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            NavTab::Home => "Home",
            NavTab::Share => "Share",
            NavTab::Wallet => "Wallet",
            NavTab::Help => "Help",
            NavTab::Account => "Account",
        }
    }

    /// The screen this tab navigates to.
    pub const fn target(self) -> Screen {
        match self {
            NavTab::Home => Screen::Dashboard,
            NavTab::Share => Screen::Share,
            NavTab::Wallet => Screen::Wallet,
            NavTab::Help => Screen::Help,
            NavTab::Account => Screen::Account,
        }
    }
}

/// A rendered bottom navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub tab: NavTab,
    pub label: &'static str,
    pub active: bool,
}

/// Build the bottom navigation for the given screen, or `None` when the
/// screen hides it.
pub fn bottom_nav(current: Screen) -> Option<Vec<NavItem>> {
    if !current.shows_bottom_nav() {
        return None;
    }
    Some(
        NavTab::ALL
            .into_iter()
            .map(|tab| NavItem {
                tab,
                label: tab.label(),
                active: tab.target() == current,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for screen in Screen::ALL {
            assert_eq!(screen.tag().parse::<Screen>().unwrap(), screen);
        }
    }

    #[test]
    fn test_identity_alias() {
        assert_eq!("identity".parse::<Screen>().unwrap(), Screen::Wallet);
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "settings".parse::<Screen>(),
            Err(CoreError::UnknownScreen("settings".into()))
        );
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&Screen::EnbdIntegration).unwrap();
        assert_eq!(json, "\"enbd-integration\"");
        let back: Screen = serde_json::from_str("\"signin\"").unwrap();
        assert_eq!(back, Screen::SignIn);
        assert!(serde_json::from_str::<Screen>("\"nowhere\"").is_err());
    }

    #[test]
    fn test_bottom_nav_visibility() {
        assert!(bottom_nav(Screen::SignUp).is_none());
        assert!(bottom_nav(Screen::EnbdIntegration).is_none());

        let items = bottom_nav(Screen::Dashboard).unwrap();
        assert_eq!(items.len(), 5);
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.tab).collect();
        assert_eq!(active, vec![NavTab::Home]);

        // Screens without a tab still show the bar, with nothing active.
        let items = bottom_nav(Screen::Upload).unwrap();
        assert!(items.iter().all(|i| !i.active));
    }
}
