// Prompt constants and builder for the recommendation pipeline.
// The output-format block is rendered from `format` — never inline the
// label set here.

use crate::models::farming::FarmingContext;
use crate::recommend::format::format_instructions;
use crate::recommend::signals::RegionalSignals;

/// System persona for every recommendation completion call.
pub const RECOMMENDATION_SYSTEM: &str = "You are an expert agricultural consultant with \
    decades of experience in crop selection and farming strategies.";

/// Recommendation prompt template. Slots are filled by `build_prompt`.
const RECOMMENDATION_PROMPT_TEMPLATE: &str = "\
Given the following farming scenario:
- Region: {region}
- Soil Type: {soil_type}
- Season: {season}
- Return Expectation: {risk_preference}
- Investment Amount: {investment_amount}
- Available Area: {available_area} hectares
- Available Resources: {resources}

Real-time data:
- Market Prices: {market_prices}
- Weather Data: {weather}
- Agricultural Statistics: {land_stats}

{format_instructions}";

/// Deterministically renders the scenario facts and regional signals into
/// one instruction. Same inputs produce a byte-identical prompt.
pub fn build_prompt(context: &FarmingContext, signals: &RegionalSignals) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{region}", &context.region)
        .replace("{soil_type}", context.soil_type.as_str())
        .replace("{season}", context.season.as_str())
        .replace("{risk_preference}", context.risk_preference.as_str())
        .replace("{investment_amount}", &context.investment_amount.to_string())
        .replace(
            "{available_area}",
            &context.available_area_hectares.to_string(),
        )
        .replace("{resources}", &context.resources_joined())
        .replace("{market_prices}", &signals.market_prices)
        .replace("{weather}", &signals.weather)
        .replace("{land_stats}", &signals.land_stats)
        .replace("{format_instructions}", &format_instructions())
}
