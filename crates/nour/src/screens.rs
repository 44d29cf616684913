//! The mounted screen and the actions a front-end can send it.

use nour_core::{Document, NavTab, Screen};
use nour_flows::{
    AccountOverview, AdminOverview, ChecklistEvent, ChecklistFlow, Command, ComplianceEvent, ComplianceFlow,
    Dashboard, DashboardEvent, EnbdEvent, EnbdFlow, HelpEvent, HelpFlow, HomeEvent, HomeOverview,
    ProgressOverview, SecurityOverview, ShareEvent, ShareFlow, SignInEvent, SignInFlow, SignUpEvent, SignUpFlow,
    TimerKey, TransferEvent, TransferFlow, UploadEvent, UploadFlow, WalletEvent, WalletFlow,
};

use crate::config::AppConfig;

/// A user action, addressed either to the shell or to one screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Navigate by tag-level target (header links, back buttons).
    Navigate(Screen),
    /// Tap a bottom navigation tab.
    Tab(NavTab),
    SignUp(SignUpEvent),
    SignIn(SignInEvent),
    Dashboard(DashboardEvent),
    Upload(UploadEvent),
    Checklist(ChecklistEvent),
    Wallet(WalletEvent),
    Help(HelpEvent),
    Share(ShareEvent),
    Enbd(EnbdEvent),
    Home(HomeEvent),
    Transfer(TransferEvent),
    Compliance(ComplianceEvent),
}

impl Action {
    /// The screen a screen action is meant for. `None` for shell actions.
    pub fn screen(&self) -> Option<Screen> {
        let screen = match self {
            Action::Navigate(_) | Action::Tab(_) => return None,
            Action::SignUp(_) => Screen::SignUp,
            Action::SignIn(_) => Screen::SignIn,
            Action::Dashboard(_) => Screen::Dashboard,
            Action::Upload(_) => Screen::Upload,
            Action::Checklist(_) => Screen::Checklist,
            Action::Wallet(_) => Screen::Wallet,
            Action::Help(_) => Screen::Help,
            Action::Share(_) => Screen::Share,
            Action::Enbd(_) => Screen::EnbdIntegration,
            Action::Home(_) => Screen::Home,
            Action::Transfer(_) => Screen::Transfer,
            Action::Compliance(_) => Screen::Compliance,
        };
        Some(screen)
    }
}

/// State of the one screen currently shown.
#[derive(Debug, Clone)]
pub enum MountedScreen {
    SignUp(SignUpFlow),
    SignIn(SignInFlow),
    Dashboard(Dashboard),
    Upload(UploadFlow),
    Checklist(ChecklistFlow),
    Wallet(WalletFlow),
    Progress(ProgressOverview),
    Security(SecurityOverview),
    Help(HelpFlow),
    Share(ShareFlow),
    EnbdIntegration(EnbdFlow),
    Account(AccountOverview),
    Home(HomeOverview),
    Transfer(TransferFlow),
    Compliance(ComplianceFlow),
    Admin(AdminOverview),
}

impl MountedScreen {
    /// Fresh state for `screen`. The wallet sees the documents saved during
    /// this session.
    pub fn mount(screen: Screen, config: &AppConfig, session: &[Document]) -> Self {
        match screen {
            Screen::SignUp => MountedScreen::SignUp(SignUpFlow::new()),
            Screen::SignIn => MountedScreen::SignIn(SignInFlow::new()),
            Screen::Dashboard => MountedScreen::Dashboard(Dashboard),
            Screen::Upload => MountedScreen::Upload(UploadFlow::new(config.validation_delay())),
            Screen::Checklist => MountedScreen::Checklist(ChecklistFlow::new()),
            Screen::Wallet => MountedScreen::Wallet(WalletFlow::new(config.wallet_pin.clone(), session)),
            Screen::Progress => MountedScreen::Progress(ProgressOverview),
            Screen::Security => MountedScreen::Security(SecurityOverview),
            Screen::Help => MountedScreen::Help(HelpFlow::new()),
            Screen::Share => MountedScreen::Share(ShareFlow::new()),
            Screen::EnbdIntegration => MountedScreen::EnbdIntegration(EnbdFlow::new(config.enbd_durations())),
            Screen::Account => MountedScreen::Account(AccountOverview),
            Screen::Home => MountedScreen::Home(HomeOverview),
            Screen::Transfer => MountedScreen::Transfer(TransferFlow::new(config.transfer_settings())),
            Screen::Compliance => MountedScreen::Compliance(ComplianceFlow::new()),
            Screen::Admin => MountedScreen::Admin(AdminOverview),
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            MountedScreen::SignUp(_) => Screen::SignUp,
            MountedScreen::SignIn(_) => Screen::SignIn,
            MountedScreen::Dashboard(_) => Screen::Dashboard,
            MountedScreen::Upload(_) => Screen::Upload,
            MountedScreen::Checklist(_) => Screen::Checklist,
            MountedScreen::Wallet(_) => Screen::Wallet,
            MountedScreen::Progress(_) => Screen::Progress,
            MountedScreen::Security(_) => Screen::Security,
            MountedScreen::Help(_) => Screen::Help,
            MountedScreen::Share(_) => Screen::Share,
            MountedScreen::EnbdIntegration(_) => Screen::EnbdIntegration,
            MountedScreen::Account(_) => Screen::Account,
            MountedScreen::Home(_) => Screen::Home,
            MountedScreen::Transfer(_) => Screen::Transfer,
            MountedScreen::Compliance(_) => Screen::Compliance,
            MountedScreen::Admin(_) => Screen::Admin,
        }
    }

    /// Commands to run right after mounting.
    pub fn start(&self) -> Vec<Command> {
        match self {
            MountedScreen::EnbdIntegration(flow) => flow.start(),
            _ => Vec::new(),
        }
    }

    /// Apply a screen action. `None` when the action is for another screen.
    pub fn apply(&mut self, action: Action) -> Option<Vec<Command>> {
        let commands = match (self, action) {
            (MountedScreen::SignUp(flow), Action::SignUp(event)) => flow.apply(event),
            (MountedScreen::SignIn(flow), Action::SignIn(event)) => flow.apply(event),
            (MountedScreen::Dashboard(view), Action::Dashboard(event)) => view.apply(event),
            (MountedScreen::Upload(flow), Action::Upload(event)) => flow.apply(event),
            (MountedScreen::Checklist(flow), Action::Checklist(event)) => {
                flow.apply(event);
                Vec::new()
            }
            (MountedScreen::Wallet(flow), Action::Wallet(event)) => {
                flow.apply(event);
                Vec::new()
            }
            (MountedScreen::Help(flow), Action::Help(event)) => {
                flow.apply(event);
                Vec::new()
            }
            (MountedScreen::Share(flow), Action::Share(event)) => flow.apply(event),
            (MountedScreen::EnbdIntegration(flow), Action::Enbd(event)) => flow.apply(event),
            (MountedScreen::Home(view), Action::Home(event)) => view.apply(event),
            (MountedScreen::Transfer(flow), Action::Transfer(event)) => flow.apply(event),
            (MountedScreen::Compliance(flow), Action::Compliance(event)) => {
                flow.apply(event);
                Vec::new()
            }
            _ => return None,
        };
        Some(commands)
    }

    /// Translate a fired timer into the action it stands for on this screen.
    pub fn timer_action(&self, key: TimerKey) -> Option<Action> {
        match (self, key) {
            (MountedScreen::Upload(_), TimerKey::UploadValidation) => Some(Action::Upload(UploadEvent::ValidationDue)),
            (MountedScreen::EnbdIntegration(_), TimerKey::EnbdStep(index)) => {
                Some(Action::Enbd(EnbdEvent::StepElapsed(index)))
            }
            (MountedScreen::Transfer(_), TimerKey::TransferTick) => Some(Action::Transfer(TransferEvent::Tick)),
            _ => None,
        }
    }

    pub fn upload(&self) -> Option<&UploadFlow> {
        match self {
            MountedScreen::Upload(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn wallet(&self) -> Option<&WalletFlow> {
        match self {
            MountedScreen::Wallet(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn share(&self) -> Option<&ShareFlow> {
        match self {
            MountedScreen::Share(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn sign_in(&self) -> Option<&SignInFlow> {
        match self {
            MountedScreen::SignIn(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn sign_up(&self) -> Option<&SignUpFlow> {
        match self {
            MountedScreen::SignUp(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn enbd(&self) -> Option<&EnbdFlow> {
        match self {
            MountedScreen::EnbdIntegration(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn transfer(&self) -> Option<&TransferFlow> {
        match self {
            MountedScreen::Transfer(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn help(&self) -> Option<&HelpFlow> {
        match self {
            MountedScreen::Help(flow) => Some(flow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_matches_screen() {
        let config = AppConfig::default();
        for screen in Screen::ALL {
            assert_eq!(MountedScreen::mount(screen, &config, &[]).screen(), screen);
        }
    }

    #[test]
    fn test_only_enbd_starts_timers() {
        let config = AppConfig::default();
        for screen in Screen::ALL {
            let started = MountedScreen::mount(screen, &config, &[]).start();
            assert_eq!(started.is_empty(), screen != Screen::EnbdIntegration, "{screen}");
        }
    }

    #[test]
    fn test_action_for_other_screen_is_not_applied() {
        let mut mounted = MountedScreen::mount(Screen::Help, &AppConfig::default(), &[]);
        assert!(mounted.apply(Action::Wallet(WalletEvent::Unlock)).is_none());
        assert_eq!(mounted.apply(Action::Help(HelpEvent::ToggleFaq(0))), Some(Vec::new()));
        assert_eq!(mounted.help().unwrap().expanded(), Some(0));
    }

    #[test]
    fn test_action_screens_have_a_mount() {
        let action = Action::Enbd(EnbdEvent::Finish);
        assert_eq!(action.screen(), Some(Screen::EnbdIntegration));
        assert_eq!(Action::Tab(NavTab::Wallet).screen(), None);
    }

    #[test]
    fn test_timer_keys_map_to_their_screen() {
        let config = AppConfig::default();
        let upload = MountedScreen::mount(Screen::Upload, &config, &[]);
        assert_eq!(
            upload.timer_action(TimerKey::UploadValidation),
            Some(Action::Upload(UploadEvent::ValidationDue))
        );
        assert_eq!(upload.timer_action(TimerKey::TransferTick), None);
    }
}
