//! Response parser — recovers structured recommendation records from the
//! model's free-text reply.
//!
//! The reply format is whatever `format::format_instructions` asked for:
//! numbered segments, five `label: value` lines each. Real replies drift,
//! so the parser is tolerant: it keys attributes by literal label text and
//! silently drops a segment whose name line is unparsable rather than
//! failing the batch.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::recommend::format::{
    EXPECTED_RECOMMENDATIONS, EXPLANATION_LABEL, FIELD_SEPARATOR, INVESTMENT_RATIO_LABEL,
    PROJECTED_RETURN_LABEL, RISK_LEVEL_LABEL,
};

// Matches the model's own "1." / "2." / "3." numbering: a newline, optional
// whitespace, digits, then a period.
static SEGMENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\d+\.").expect("segment marker regex is valid"));

/// One `label: value` line recovered from a recommendation segment.
/// The label is kept as literal text to survive upstream label drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub label: String,
    pub value: String,
}

/// One recovered recommendation: a named crop plus its free-text attributes,
/// in reply order. Constructed only by `parse_recommendations`, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropRecommendation {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

// Label accessors for in-process consumers; the HTTP surface serializes the
// full attribute list instead.
#[allow(dead_code)]
impl CropRecommendation {
    /// First attribute value recorded under exactly this label, if any.
    pub fn attribute(&self, label: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.label == label)
            .map(|a| a.value.as_str())
    }

    pub fn explanation(&self) -> Option<&str> {
        self.attribute(EXPLANATION_LABEL)
    }

    pub fn projected_return(&self) -> Option<&str> {
        self.attribute(PROJECTED_RETURN_LABEL)
    }

    pub fn investment_ratio(&self) -> Option<&str> {
        self.attribute(INVESTMENT_RATIO_LABEL)
    }

    pub fn risk_level(&self) -> Option<&str> {
        self.attribute(RISK_LEVEL_LABEL)
    }
}

/// Parses the raw reply into at most three recommendations, in reply order
/// (first == highest priority).
///
/// A segment whose first line has no `": "` separator carries no usable
/// identity and is dropped entirely; callers never see an unnamed record.
/// Fewer than three numbered segments yields fewer records, never an error
/// and never padding. Pure function: identical input produces an identical
/// record list.
pub fn parse_recommendations(raw: &str) -> Vec<CropRecommendation> {
    SEGMENT_MARKER
        .split(raw)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(EXPECTED_RECOMMENDATIONS)
        .filter_map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Option<CropRecommendation> {
    let mut lines = segment.lines();

    // Name = text after the first ": " on the first line. No separator, or
    // nothing after it, means no identity: drop the segment.
    let name = lines
        .next()?
        .split_once(FIELD_SEPARATOR)
        .map(|(_, rest)| rest.trim())
        .filter(|name| !name.is_empty())?
        .to_string();

    let attributes = lines
        .filter_map(|line| {
            line.split_once(FIELD_SEPARATOR).map(|(label, value)| Attribute {
                label: label.to_string(),
                value: value.to_string(),
            })
        })
        .collect();

    Some(CropRecommendation { name, attributes })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED_REPLY: &str = "\
1. Crop: Wheat
Explanation: Winter staple well suited to alluvial soil
Projected Return: 18%
Investment Ratio: 0.4
Risk Level: Low
2. Crop: Mustard
Explanation: Short duration oilseed
Projected Return: 22%
Investment Ratio: 0.35
Risk Level: Medium
3. Crop: Chickpeas
Explanation: Fixes nitrogen, low water demand
Projected Return: 25%
Investment Ratio: 0.25
Risk Level: Medium";

    #[test]
    fn test_well_formed_reply_yields_three_records_in_order() {
        let records = parse_recommendations(WELL_FORMED_REPLY);
        assert_eq!(records.len(), 3);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Wheat", "Mustard", "Chickpeas"]);
        assert!(records.iter().all(|r| !r.name.is_empty()));
    }

    #[test]
    fn test_attributes_are_extracted_by_label() {
        let records = parse_recommendations(WELL_FORMED_REPLY);
        let wheat = &records[0];
        assert_eq!(
            wheat.explanation(),
            Some("Winter staple well suited to alluvial soil")
        );
        assert_eq!(wheat.projected_return(), Some("18%"));
        assert_eq!(wheat.investment_ratio(), Some("0.4"));
        assert_eq!(wheat.risk_level(), Some("Low"));
    }

    #[test]
    fn test_two_segments_yield_two_records_never_padded() {
        let reply = "\n1. Crop: Rice\nRisk Level: High\n2. Crop: Maize\nRisk Level: Low";
        let records = parse_recommendations(reply);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Rice");
        assert_eq!(records[1].name, "Maize");
    }

    #[test]
    fn test_more_than_three_segments_are_capped_at_three() {
        let reply = "\n1. Crop: A\n2. Crop: B\n3. Crop: C\n4. Crop: D";
        let records = parse_recommendations(reply);
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].name, "C");
    }

    #[test]
    fn test_segment_without_name_separator_is_dropped() {
        let reply = "\n1. CropOnlyNoColon\nExplanation: x\n2. Crop: Rice\nExplanation: good";
        let records = parse_recommendations(reply);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Rice");
        assert_eq!(records[0].explanation(), Some("good"));
    }

    #[test]
    fn test_empty_name_after_separator_is_dropped() {
        let reply = "\n1. Crop: \nExplanation: x\n2. Crop: Cotton\nExplanation: y";
        let records = parse_recommendations(reply);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Cotton");
    }

    #[test]
    fn test_attribute_split_is_first_separator_only() {
        let reply = "\n1. Crop: Rice\nExplanation: good for loam: high yield";
        let records = parse_recommendations(reply);
        assert_eq!(
            records[0].explanation(),
            Some("good for loam: high yield")
        );
    }

    #[test]
    fn test_separator_less_lines_contribute_nothing() {
        let reply = "\n1. Crop: Rice\nthis line has no separator\nRisk Level: Low";
        let records = parse_recommendations(reply);
        assert_eq!(records[0].attributes.len(), 1);
        assert_eq!(records[0].risk_level(), Some("Low"));
    }

    #[test]
    fn test_numbering_with_leading_whitespace_still_splits() {
        let reply = "\n  1. Crop: Rice\nRisk Level: Low\n\n   2. Crop: Maize\nRisk Level: High";
        let records = parse_recommendations(reply);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_preamble_consumes_a_segment_slot_and_is_dropped() {
        // Commentary before "1." becomes the first non-empty segment: it
        // occupies one of the three slots, then is dropped for lacking a
        // name line. The prompt forbids such commentary for this reason.
        let reply = format!("Here are my recommendations:\n{WELL_FORMED_REPLY}");
        let records = parse_recommendations(&reply);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Wheat");
        assert_eq!(records[1].name, "Mustard");
    }

    #[test]
    fn test_empty_and_unnumbered_replies_yield_nothing_usable() {
        assert!(parse_recommendations("").is_empty());
        assert!(parse_recommendations("\n\n  \n").is_empty());
        // A single unnumbered blob with no name line parses to zero records.
        assert!(parse_recommendations("no structure here at all").is_empty());
    }

    #[test]
    fn test_unknown_labels_are_preserved_verbatim() {
        let reply = "\n1. Crop: Rice\nWater Requirement: heavy";
        let records = parse_recommendations(reply);
        assert_eq!(records[0].attribute("Water Requirement"), Some("heavy"));
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let first = parse_recommendations(WELL_FORMED_REPLY);
        let second = parse_recommendations(WELL_FORMED_REPLY);
        assert_eq!(first, second);
    }
}
