//! Read-only screens: dashboard, progress, security, account, admin, home.
//!
//! These hold no state of their own. Each exposes its fixtures plus the
//! derived numbers the screen shows, and maps taps to navigation.

use nour_core::catalog::{
    AccountInfo, Alert, BalanceChange, CorridorStat, IntegrationPartner, MonthlyVolume, Notification, PrivacyControl,
    QuickAction, SecurityFeature, SettingsSection, TimelineEvent, TodoItem, Transaction, ACCOUNT, ALERTS, CORRIDORS,
    HOME_BALANCES, NOTIFICATIONS, PARTNERS, PRIVACY_CONTROLS, QUICK_ACTIONS, RECENT_TRANSACTIONS, SECURITY_FEATURES,
    SETTINGS_SECTIONS, TIMELINE, TODO_ITEMS, TRANSACTION_SERIES,
};
use nour_core::{Screen, VerificationStatus};
use serde::Serialize;

use crate::command::Command;

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// The bell in the header.
    OpenAlerts,
    OpenNotification(u32),
    OpenTodo(u32),
    QuickAction(Screen),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn notifications(&self) -> &'static [Notification] {
        &NOTIFICATIONS
    }

    pub fn todos(&self) -> &'static [TodoItem] {
        &TODO_ITEMS
    }

    pub fn quick_actions(&self) -> &'static [QuickAction] {
        &QUICK_ACTIONS
    }

    pub fn apply(&self, event: DashboardEvent) -> Vec<Command> {
        let target = match event {
            DashboardEvent::OpenAlerts => Some(Screen::Progress),
            DashboardEvent::OpenNotification(id) => {
                NOTIFICATIONS.iter().any(|n| n.id == id).then_some(Screen::Progress)
            }
            DashboardEvent::OpenTodo(id) => TODO_ITEMS.iter().find(|t| t.id == id).map(|todo| todo.target),
            DashboardEvent::QuickAction(screen) => QUICK_ACTIONS
                .iter()
                .any(|a| a.target == screen)
                .then_some(screen),
        };
        target.map(Command::Navigate).into_iter().collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Progress tracking
// ─────────────────────────────────────────────────────────────────────────────

/// Status counts over the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub verified: usize,
    pub pending: usize,
    pub rejected: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressOverview;

impl ProgressOverview {
    pub fn timeline(&self) -> &'static [TimelineEvent] {
        &TIMELINE
    }

    pub fn alerts(&self) -> &'static [Alert] {
        &ALERTS
    }

    pub fn counts(&self) -> StatusCounts {
        let count = |status: VerificationStatus| TIMELINE.iter().filter(|e| e.status == status).count();
        StatusCounts {
            verified: count(VerificationStatus::Verified),
            pending: count(VerificationStatus::Pending),
            rejected: count(VerificationStatus::Rejected),
            total: TIMELINE.len(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Security & account
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityOverview;

impl SecurityOverview {
    pub fn features(&self) -> &'static [SecurityFeature] {
        &SECURITY_FEATURES
    }

    pub fn controls(&self) -> &'static [PrivacyControl] {
        &PRIVACY_CONTROLS
    }

    pub fn active_features(&self) -> usize {
        SECURITY_FEATURES.iter().filter(|f| f.active).count()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AccountOverview;

impl AccountOverview {
    pub fn info(&self) -> &'static AccountInfo {
        &ACCOUNT
    }

    pub fn sections(&self) -> &'static [SettingsSection] {
        &SETTINGS_SECTIONS
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Admin portal
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminTotals {
    pub transactions: u64,
    pub volume: u64,
    pub corridor_transactions: u64,
    pub partner_connections: u32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AdminOverview;

impl AdminOverview {
    pub fn series(&self) -> &'static [MonthlyVolume] {
        &TRANSACTION_SERIES
    }

    pub fn corridors(&self) -> &'static [CorridorStat] {
        &CORRIDORS
    }

    pub fn partners(&self) -> &'static [IntegrationPartner] {
        &PARTNERS
    }

    pub fn totals(&self) -> AdminTotals {
        AdminTotals {
            transactions: TRANSACTION_SERIES.iter().map(|m| m.transactions).sum(),
            volume: TRANSACTION_SERIES.iter().map(|m| m.volume).sum(),
            corridor_transactions: CORRIDORS.iter().map(|c| c.transactions).sum(),
            partner_connections: PARTNERS.iter().map(|p| p.connections).sum(),
        }
    }

    /// Month-over-month growth of the last month, in percent.
    pub fn latest_growth_percent(&self) -> Option<f64> {
        match TRANSACTION_SERIES {
            [.., prev, last] if prev.transactions > 0 => Some(
                (last.transactions as f64 - prev.transactions as f64) / prev.transactions as f64 * 100.0,
            ),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEvent {
    Send,
    ViewIdentity,
    OpenCompliance,
    OpenAdmin,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HomeOverview;

impl HomeOverview {
    pub fn balances(&self) -> &'static [BalanceChange] {
        &HOME_BALANCES
    }

    pub fn transactions(&self) -> &'static [Transaction] {
        &RECENT_TRANSACTIONS
    }

    pub fn apply(&self, event: HomeEvent) -> Vec<Command> {
        let target = match event {
            HomeEvent::Send => Screen::Transfer,
            HomeEvent::ViewIdentity => Screen::Wallet,
            HomeEvent::OpenCompliance => Screen::Compliance,
            HomeEvent::OpenAdmin => Screen::Admin,
        };
        vec![Command::Navigate(target)]
    }
}
