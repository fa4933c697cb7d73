//! Directory / identity checks

use crate::value::{as_array, bool_field, str_field};
use suiteinspect_core::{
    services, AffectedObject, InspectorCheck, Result, ServiceContext,
};

/// Flag after this many directory role holders
const GLOBAL_ADMIN_LIMIT: usize = 4;

/// Users with no registered second authentication factor
pub struct MfaRegistration;

impl InspectorCheck for MfaRegistration {
    fn run(&self, ctx: &ServiceContext) -> Result<Vec<AffectedObject>> {
        let directory = ctx.client(services::DIRECTORY)?;
        let request = "/users?select=userPrincipalName,mfaRegistered,accountEnabled";
        let users = as_array(&directory.query(request)?, request)?;

        Ok(users
            .iter()
            .filter(|user| bool_field(user, "accountEnabled", true))
            .filter(|user| !bool_field(user, "mfaRegistered", false))
            .map(|user| AffectedObject::text(str_field(user, "userPrincipalName")))
            .collect())
    }
}

/// More privileged administrator accounts than the tenant should carry
pub struct GlobalAdminCount;

impl InspectorCheck for GlobalAdminCount {
    fn run(&self, ctx: &ServiceContext) -> Result<Vec<AffectedObject>> {
        let directory = ctx.client(services::DIRECTORY)?;
        let request = "/directoryRoles/globalAdministrators";
        let admins = as_array(&directory.query(request)?, request)?;

        if admins.len() <= GLOBAL_ADMIN_LIMIT {
            return Ok(Vec::new());
        }

        Ok(admins
            .iter()
            .map(|admin| AffectedObject::text(str_field(admin, "userPrincipalName")))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::StubClient;
    use serde_json::json;

    #[test]
    fn reports_enabled_users_without_mfa() {
        let ctx = ServiceContext::new("Contoso").with_client(StubClient::directory(json!([
            {"userPrincipalName": "alice@contoso.com", "mfaRegistered": true, "accountEnabled": true},
            {"userPrincipalName": "bob@contoso.com", "mfaRegistered": false, "accountEnabled": true},
            {"userPrincipalName": "stale@contoso.com", "mfaRegistered": false, "accountEnabled": false},
        ])));

        let affected = MfaRegistration.run(&ctx).unwrap();
        assert_eq!(affected, vec![AffectedObject::text("bob@contoso.com")]);
    }

    #[test]
    fn admin_count_at_limit_does_not_trigger() {
        let admins = json!([
            {"userPrincipalName": "a1@contoso.com"},
            {"userPrincipalName": "a2@contoso.com"},
            {"userPrincipalName": "a3@contoso.com"},
            {"userPrincipalName": "a4@contoso.com"},
        ]);
        let ctx = ServiceContext::new("Contoso").with_client(StubClient::directory(admins));
        assert!(GlobalAdminCount.run(&ctx).unwrap().is_empty());
    }

    #[test]
    fn admin_count_over_limit_reports_every_holder() {
        let admins = json!([
            {"userPrincipalName": "a1@contoso.com"},
            {"userPrincipalName": "a2@contoso.com"},
            {"userPrincipalName": "a3@contoso.com"},
            {"userPrincipalName": "a4@contoso.com"},
            {"userPrincipalName": "a5@contoso.com"},
        ]);
        let ctx = ServiceContext::new("Contoso").with_client(StubClient::directory(admins));
        assert_eq!(GlobalAdminCount.run(&ctx).unwrap().len(), 5);
    }
}
