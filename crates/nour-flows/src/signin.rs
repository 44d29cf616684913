//! Sign-in with a mandatory (and unchecked) second factor.

use nour_core::Screen;
use tracing::info;

use crate::command::Command;

/// Number of one-time-code boxes.
pub const OTP_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInEvent {
    SetEmail(String),
    SetPassword(String),
    TogglePasswordVisible,
    /// Type into one OTP box. Only the first character is kept.
    SetOtpDigit { index: usize, value: String },
    Continue,
    Verify,
    ResendCode,
    Back,
    Biometric,
    SwitchToSignUp,
}

#[derive(Debug, Clone, Default)]
pub struct SignInFlow {
    email: String,
    password: String,
    show_password: bool,
    needs_2fa: bool,
    otp: [Option<char>; OTP_LENGTH],
    resends: u32,
}

impl SignInFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    pub fn needs_2fa(&self) -> bool {
        self.needs_2fa
    }

    pub fn otp(&self) -> &[Option<char>; OTP_LENGTH] {
        &self.otp
    }

    pub fn resends(&self) -> u32 {
        self.resends
    }

    pub fn apply(&mut self, event: SignInEvent) -> Vec<Command> {
        match event {
            SignInEvent::SetEmail(email) => self.email = email,
            SignInEvent::SetPassword(password) => self.password = password,
            SignInEvent::TogglePasswordVisible => self.show_password = !self.show_password,
            SignInEvent::SetOtpDigit { index, value } => {
                if let Some(slot) = self.otp.get_mut(index) {
                    *slot = value.chars().next();
                }
            }
            SignInEvent::Continue if !self.needs_2fa => self.needs_2fa = true,
            SignInEvent::Continue | SignInEvent::Verify => {
                if self.needs_2fa {
                    info!("sign-in verified");
                    return vec![Command::Authenticate];
                }
            }
            SignInEvent::ResendCode => {
                if self.needs_2fa {
                    self.resends += 1;
                }
            }
            SignInEvent::Back => {
                self.needs_2fa = false;
                self.otp = [None; OTP_LENGTH];
            }
            SignInEvent::Biometric => {
                info!("sign-in by biometric");
                return vec![Command::Authenticate];
            }
            SignInEvent::SwitchToSignUp => return vec![Command::Navigate(Screen::SignUp)],
        }
        Vec::new()
    }
}
