use serde::Serialize;

use crate::common::{AgencyId, ProviderId};
use crate::domains::providers::models::Provider;

/// Provider response shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderData {
    pub id: ProviderId,
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    pub rating: f64,
    pub reviews: i32,
    pub location: String,
    pub spots_available: i32,
    pub max_capacity: i32,
    pub ages_served: Vec<String>,
    pub meals_provided: bool,
    pub snack_provided: bool,
    pub registered_with_city: bool,
    pub image: String,
    pub tags: Vec<String>,
    pub description: String,
    pub agency_id: Option<AgencyId>,
}

impl From<Provider> for ProviderData {
    fn from(provider: Provider) -> Self {
        Self {
            id: provider.id,
            name: provider.name,
            provider_type: provider.provider_type,
            rating: provider.rating,
            reviews: provider.reviews,
            location: provider.location,
            spots_available: provider.spots_available,
            max_capacity: provider.max_capacity,
            ages_served: provider.ages_served,
            meals_provided: provider.meals_provided,
            snack_provided: provider.snack_provided,
            registered_with_city: provider.registered_with_city,
            image: provider.image,
            tags: provider.tags,
            description: provider.description,
            agency_id: provider.agency_id,
        }
    }
}
