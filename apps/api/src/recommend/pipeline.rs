//! Recommendation pipeline — orchestrates one request end to end.
//!
//! Flow: validate FarmingContext → gather_signals → build_prompt →
//!       completion call → parse → respond.
//!
//! A weather failure has already degraded to a sentinel inside
//! `gather_signals`; a completion failure aborts the request and surfaces
//! verbatim. Recovering fewer than the expected three records is NOT an
//! error — the caller reads the shortfall off the list length.

use serde::Serialize;
use tracing::{info, warn};

use crate::completion::CompletionClient;
use crate::errors::AppError;
use crate::models::farming::FarmingContext;
use crate::recommend::format::EXPECTED_RECOMMENDATIONS;
use crate::recommend::parser::{parse_recommendations, CropRecommendation};
use crate::recommend::prompts::{build_prompt, RECOMMENDATION_SYSTEM};
use crate::recommend::signals::gather_signals;
use crate::weather::WeatherClient;

/// Response from the recommendation pipeline. `expected` is always the
/// instructed count; a shorter `recommendations` list means the reply was
/// partially unusable and the caller should say so.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<CropRecommendation>,
    pub expected: usize,
}

/// Runs the full pipeline for one validated farming context.
pub async fn recommend_crops(
    completion: &CompletionClient,
    weather: &WeatherClient,
    context: &FarmingContext,
) -> Result<RecommendationSet, AppError> {
    context.validate()?;

    info!("Gathering regional signals for {}", context.region);
    let signals = gather_signals(&context.region, weather).await;

    let prompt = build_prompt(context, &signals);
    let reply = completion.complete(RECOMMENDATION_SYSTEM, &prompt).await?;

    let recommendations = parse_recommendations(&reply);
    if recommendations.len() < EXPECTED_RECOMMENDATIONS {
        warn!(
            "Recovered {}/{} recommendations for {} — reply drifted from the instructed format",
            recommendations.len(),
            EXPECTED_RECOMMENDATIONS,
            context.region
        );
    } else {
        info!(
            "Recovered {} recommendations for {}",
            recommendations.len(),
            context.region
        );
    }

    Ok(RecommendationSet {
        recommendations,
        expected: EXPECTED_RECOMMENDATIONS,
    })
}
