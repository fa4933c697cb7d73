//! Built-in SuiteInspect inspectors
//!
//! The check bodies behind the descriptor documents shipped in the
//! repository's `inspectors/` directory. Deployments can register further
//! checks into the same [`CheckSet`] before opening the registry.

pub mod email;
pub mod identity;
pub mod sharing;
mod value;

use std::sync::Arc;
use suiteinspect_core::CheckSet;

/// The built-in check bodies, keyed by the ids of their descriptor
/// documents.
pub fn builtin_checks() -> CheckSet {
    let mut checks = CheckSet::new();
    checks.register("mfa_registration", Arc::new(identity::MfaRegistration));
    checks.register("global_admin_count", Arc::new(identity::GlobalAdminCount));
    checks.register("legacy_auth_protocols", Arc::new(email::LegacyAuthProtocols));
    checks.register("mailbox_auditing", Arc::new(email::MailboxAuditing));
    checks.register(
        "anonymous_link_sharing",
        Arc::new(sharing::AnonymousLinkSharing),
    );
    checks
}

#[cfg(test)]
pub(crate) mod tests {
    use serde_json::Value;
    use std::sync::Arc;
    use suiteinspect_core::{services, Result, ServiceClient};

    /// Test client that answers every query with one canned document
    pub struct StubClient {
        service: &'static str,
        response: Value,
    }

    impl StubClient {
        pub fn directory(response: Value) -> Arc<dyn ServiceClient> {
            Arc::new(Self {
                service: services::DIRECTORY,
                response,
            })
        }

        pub fn exchange(response: Value) -> Arc<dyn ServiceClient> {
            Arc::new(Self {
                service: services::EXCHANGE,
                response,
            })
        }

        pub fn sharepoint(response: Value) -> Arc<dyn ServiceClient> {
            Arc::new(Self {
                service: services::SHAREPOINT,
                response,
            })
        }
    }

    impl ServiceClient for StubClient {
        fn service(&self) -> &str {
            self.service
        }

        fn query(&self, _request: &str) -> Result<Value> {
            Ok(self.response.clone())
        }
    }

    #[test]
    fn builtin_ids_are_unique_and_complete() {
        let checks = super::builtin_checks();
        assert_eq!(checks.len(), 5);
        for id in [
            "mfa_registration",
            "global_admin_count",
            "legacy_auth_protocols",
            "mailbox_auditing",
            "anonymous_link_sharing",
        ] {
            assert!(checks.contains(id), "missing builtin check {id}");
        }
    }
}
