use serde::Serialize;

use crate::common::AgencyId;
use crate::domains::agencies::models::Agency;
use crate::domains::providers::data::ProviderData;

/// Agency response shape with its providers nested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyData {
    pub id: AgencyId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub providers: Vec<ProviderData>,
}

impl AgencyData {
    pub fn with_providers(agency: Agency, providers: Vec<ProviderData>) -> Self {
        Self {
            id: agency.id,
            name: agency.name,
            phone: agency.phone,
            email: agency.email,
            providers,
        }
    }
}

impl From<Agency> for AgencyData {
    fn from(agency: Agency) -> Self {
        Self::with_providers(agency, Vec::new())
    }
}
