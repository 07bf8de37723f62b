//! Domain model for one recommendation request: the user-supplied farming
//! parameters plus the enumerations backing the selectable inputs.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::reference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Sandy,
    Clay,
    Loamy,
    Silt,
    Peaty,
    Saline,
    Chalky,
    #[serde(rename = "Red Soil")]
    RedSoil,
    #[serde(rename = "Black Soil")]
    BlackSoil,
    #[serde(rename = "Alluvial Soil")]
    AlluvialSoil,
}

impl SoilType {
    pub const ALL: [SoilType; 10] = [
        SoilType::Sandy,
        SoilType::Clay,
        SoilType::Loamy,
        SoilType::Silt,
        SoilType::Peaty,
        SoilType::Saline,
        SoilType::Chalky,
        SoilType::RedSoil,
        SoilType::BlackSoil,
        SoilType::AlluvialSoil,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Clay => "Clay",
            SoilType::Loamy => "Loamy",
            SoilType::Silt => "Silt",
            SoilType::Peaty => "Peaty",
            SoilType::Saline => "Saline",
            SoilType::Chalky => "Chalky",
            SoilType::RedSoil => "Red Soil",
            SoilType::BlackSoil => "Black Soil",
            SoilType::AlluvialSoil => "Alluvial Soil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

/// The user's return expectation, which doubles as their risk appetite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskPreference {
    High,
    Medium,
    Low,
}

impl RiskPreference {
    pub const ALL: [RiskPreference; 3] =
        [RiskPreference::High, RiskPreference::Medium, RiskPreference::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskPreference::High => "High",
            RiskPreference::Medium => "Medium",
            RiskPreference::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resource {
    Water,
    Fertilizers,
    Machinery,
    Labor,
    Pesticides,
    Electricity,
    Seeds,
    #[serde(rename = "Organic Fertilizer")]
    OrganicFertilizer,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::Water,
        Resource::Fertilizers,
        Resource::Machinery,
        Resource::Labor,
        Resource::Pesticides,
        Resource::Electricity,
        Resource::Seeds,
        Resource::OrganicFertilizer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Water => "Water",
            Resource::Fertilizers => "Fertilizers",
            Resource::Machinery => "Machinery",
            Resource::Labor => "Labor",
            Resource::Pesticides => "Pesticides",
            Resource::Electricity => "Electricity",
            Resource::Seeds => "Seeds",
            Resource::OrganicFertilizer => "Organic Fertilizer",
        }
    }
}

/// Upper bound on cultivable area accepted per request, in hectares.
pub const MAX_AREA_HECTARES: f64 = 1000.0;

/// One user's farming scenario. Built once per recommendation request from
/// the request body, validated, then read-only for the rest of the pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct FarmingContext {
    /// Curated region key, e.g. "Punjab, Pakistan". Must exist in the
    /// reference coordinate table.
    pub region: String,
    pub soil_type: SoilType,
    pub season: Season,
    pub risk_preference: RiskPreference,
    /// In local currency.
    pub investment_amount: f64,
    pub available_area_hectares: f64,
    pub resources: Vec<Resource>,
}

impl FarmingContext {
    /// Checks field-level constraints and that the region is curated.
    /// Rejecting unknown regions here keeps every downstream table lookup
    /// infallible.
    pub fn validate(&self) -> Result<(), AppError> {
        if reference::coordinates(&self.region).is_none() {
            return Err(AppError::UnknownRegion(self.region.clone()));
        }
        if !(self.investment_amount > 0.0) {
            return Err(AppError::Validation(
                "investment_amount must be a positive number".to_string(),
            ));
        }
        if !(self.available_area_hectares > 0.0
            && self.available_area_hectares <= MAX_AREA_HECTARES)
        {
            return Err(AppError::Validation(format!(
                "available_area_hectares must be in (0, {MAX_AREA_HECTARES}]"
            )));
        }
        Ok(())
    }

    /// Comma-joined resource labels for prompt embedding.
    pub fn resources_joined(&self) -> String {
        self.resources
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
