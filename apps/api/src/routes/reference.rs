//! GET /api/v1/reference — the static catalogue a client needs to render
//! the request form without duplicating the reference tables.

use axum::Json;
use serde::Serialize;

use crate::models::farming::{Resource, RiskPreference, Season, SoilType};
use crate::reference;

#[derive(Debug, Serialize)]
pub struct ReferenceCatalogue {
    pub regions: Vec<&'static str>,
    pub soil_types: Vec<&'static str>,
    pub seasons: Vec<&'static str>,
    pub risk_preferences: Vec<&'static str>,
    pub resources: Vec<&'static str>,
}

pub async fn reference_handler() -> Json<ReferenceCatalogue> {
    Json(ReferenceCatalogue {
        regions: reference::region_keys(),
        soil_types: SoilType::ALL.iter().map(|s| s.as_str()).collect(),
        seasons: Season::ALL.iter().map(|s| s.as_str()).collect(),
        risk_preferences: RiskPreference::ALL.iter().map(|r| r.as_str()).collect(),
        resources: Resource::ALL.iter().map(|r| r.as_str()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalogue_is_complete() {
        let Json(catalogue) = reference_handler().await;
        assert_eq!(catalogue.regions.len(), 9);
        assert_eq!(catalogue.soil_types.len(), 10);
        assert_eq!(catalogue.seasons.len(), 4);
        assert_eq!(catalogue.risk_preferences.len(), 3);
        assert_eq!(catalogue.resources.len(), 8);
    }

    #[tokio::test]
    async fn test_catalogue_labels_are_human_readable() {
        let Json(catalogue) = reference_handler().await;
        assert!(catalogue.soil_types.contains(&"Red Soil"));
        assert!(catalogue.resources.contains(&"Organic Fertilizer"));
        assert!(catalogue.regions.contains(&"Punjab, Pakistan"));
    }
}
