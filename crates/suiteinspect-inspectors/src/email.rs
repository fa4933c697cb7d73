//! Email service checks

use crate::value::{as_array, bool_field, str_field};
use suiteinspect_core::{
    services, AffectedObject, InspectorCheck, Result, ServiceContext,
};

/// Authentication policies that still allow legacy protocols
pub struct LegacyAuthProtocols;

impl InspectorCheck for LegacyAuthProtocols {
    fn run(&self, ctx: &ServiceContext) -> Result<Vec<AffectedObject>> {
        let exchange = ctx.client(services::EXCHANGE)?;
        let request = "/authPolicies";
        let policies = as_array(&exchange.query(request)?, request)?;

        Ok(policies
            .iter()
            .filter(|policy| {
                bool_field(policy, "allowBasicAuthSmtp", false)
                    || bool_field(policy, "allowBasicAuthImap", false)
                    || bool_field(policy, "allowBasicAuthPop", false)
            })
            .map(|policy| AffectedObject::text(str_field(policy, "name")))
            .collect())
    }
}

/// Mailboxes with audit logging disabled
pub struct MailboxAuditing;

impl InspectorCheck for MailboxAuditing {
    fn run(&self, ctx: &ServiceContext) -> Result<Vec<AffectedObject>> {
        let exchange = ctx.client(services::EXCHANGE)?;
        let request = "/mailboxes?select=primarySmtpAddress,auditEnabled";
        let mailboxes = as_array(&exchange.query(request)?, request)?;

        Ok(mailboxes
            .iter()
            .filter(|mailbox| !bool_field(mailbox, "auditEnabled", true))
            .map(|mailbox| AffectedObject::text(str_field(mailbox, "primarySmtpAddress")))
            .collect())
    }
}
