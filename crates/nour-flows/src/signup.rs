//! Two-step sign-up wizard.
//!
//! Nothing typed here is checked. `Continue` on the last step always
//! authenticates.

use nour_core::{Language, Screen};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::command::Command;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwoFactorMethod {
    #[default]
    Sms,
    Email,
    App,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignUpStep {
    Profile,
    Security,
}

/// Text fields of the profile step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpEvent {
    Edit(ProfileField, String),
    SetLanguage(Language),
    TogglePasswordVisible,
    ToggleConfirmVisible,
    SetTwoFactor(TwoFactorMethod),
    ToggleBiometric,
    Continue,
    Back,
    SwitchToSignIn,
}

#[derive(Debug, Clone)]
pub struct SignUpFlow {
    step: SignUpStep,
    profile: Profile,
    show_password: bool,
    show_confirm: bool,
    two_factor: TwoFactorMethod,
    biometric: bool,
}

impl SignUpFlow {
    pub fn new() -> Self {
        Self {
            step: SignUpStep::Profile,
            profile: Profile::default(),
            show_password: false,
            show_confirm: false,
            two_factor: TwoFactorMethod::default(),
            biometric: false,
        }
    }

    pub fn step(&self) -> SignUpStep {
        self.step
    }

    /// One-based step number for the progress indicator.
    pub fn step_number(&self) -> u8 {
        match self.step {
            SignUpStep::Profile => 1,
            SignUpStep::Security => 2,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    pub fn confirm_visible(&self) -> bool {
        self.show_confirm
    }

    pub fn two_factor(&self) -> TwoFactorMethod {
        self.two_factor
    }

    pub fn biometric(&self) -> bool {
        self.biometric
    }

    pub fn apply(&mut self, event: SignUpEvent) -> Vec<Command> {
        match event {
            SignUpEvent::Edit(field, value) => {
                let slot = match field {
                    ProfileField::FullName => &mut self.profile.full_name,
                    ProfileField::Email => &mut self.profile.email,
                    ProfileField::Phone => &mut self.profile.phone,
                    ProfileField::Password => &mut self.profile.password,
                    ProfileField::ConfirmPassword => &mut self.profile.confirm_password,
                };
                *slot = value;
            }
            SignUpEvent::SetLanguage(language) => self.profile.language = language,
            SignUpEvent::TogglePasswordVisible => self.show_password = !self.show_password,
            SignUpEvent::ToggleConfirmVisible => self.show_confirm = !self.show_confirm,
            SignUpEvent::SetTwoFactor(method) => self.two_factor = method,
            SignUpEvent::ToggleBiometric => self.biometric = !self.biometric,
            SignUpEvent::Continue => match self.step {
                SignUpStep::Profile => self.step = SignUpStep::Security,
                SignUpStep::Security => {
                    info!(two_factor = ?self.two_factor, biometric = self.biometric, "sign-up complete");
                    return vec![Command::Authenticate];
                }
            },
            SignUpEvent::Back => self.step = SignUpStep::Profile,
            SignUpEvent::SwitchToSignIn => return vec![Command::Navigate(Screen::SignIn)],
        }
        Vec::new()
    }
}

impl Default for SignUpFlow {
    fn default() -> Self {
        Self::new()
    }
}
