//! File sharing and collaboration checks

use crate::value::{as_array, str_field};
use suiteinspect_core::{
    services, AffectedObject, InspectorCheck, Result, ServiceContext,
};

/// Sites that allow anonymous sharing links
pub struct AnonymousLinkSharing;

impl InspectorCheck for AnonymousLinkSharing {
    fn run(&self, ctx: &ServiceContext) -> Result<Vec<AffectedObject>> {
        let sharepoint = ctx.client(services::SHAREPOINT)?;
        let request = "/sites?select=url,sharingCapability";
        let sites = as_array(&sharepoint.query(request)?, request)?;

        Ok(sites
            .iter()
            .filter(|site| str_field(site, "sharingCapability") == "ExternalUserAndGuestSharing")
            .map(|site| AffectedObject::text(str_field(site, "url")))
            .collect())
    }
}
