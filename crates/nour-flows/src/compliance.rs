//! Compliance router: the routing path of a payment and its checks.

use nour_core::catalog::{ComplianceCheck, HopStatus, RoutingHop, COMPLIANCE_CHECKS, ROUTING_HOPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceEvent {
    TogglePrivacyMode,
}

#[derive(Debug, Clone)]
pub struct ComplianceFlow {
    privacy_mode: bool,
}

impl ComplianceFlow {
    pub fn new() -> Self {
        Self { privacy_mode: true }
    }

    pub fn privacy_mode(&self) -> bool {
        self.privacy_mode
    }

    pub fn hops(&self) -> &'static [RoutingHop] {
        &ROUTING_HOPS
    }

    pub fn active_hop(&self) -> Option<&'static RoutingHop> {
        ROUTING_HOPS.iter().find(|hop| hop.status == HopStatus::Active)
    }

    pub fn checks(&self) -> &'static [ComplianceCheck] {
        &COMPLIANCE_CHECKS
    }

    pub fn all_checks_passed(&self) -> bool {
        COMPLIANCE_CHECKS.iter().all(|c| c.passed)
    }

    pub fn apply(&mut self, event: ComplianceEvent) {
        match event {
            ComplianceEvent::TogglePrivacyMode => self.privacy_mode = !self.privacy_mode,
        }
    }
}

impl Default for ComplianceFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privacy_mode_defaults_on() {
        let mut flow = ComplianceFlow::new();
        assert!(flow.privacy_mode());
        flow.apply(ComplianceEvent::TogglePrivacyMode);
        assert!(!flow.privacy_mode());
    }

    #[test]
    fn test_route() {
        let flow = ComplianceFlow::new();
        assert_eq!(flow.hops().len(), 4);
        assert_eq!(flow.active_hop().unwrap().name, "CBDC Gateway");
        assert!(flow.all_checks_passed());
    }
}
