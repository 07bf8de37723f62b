//! The shared reply-format contract between the prompt builder and the
//! response parser. Both sides consume this module; neither duplicates the
//! label set, so a format change cannot drift out of sync.

/// How many recommendations the model is instructed to return, and the
/// maximum the parser will ever yield.
pub const EXPECTED_RECOMMENDATIONS: usize = 3;

/// The `label: value` separator used on every field line.
pub const FIELD_SEPARATOR: &str = ": ";

/// The label carrying the crop name on each recommendation's first line.
pub const NAME_LABEL: &str = "Crop";

pub const EXPLANATION_LABEL: &str = "Explanation";
pub const PROJECTED_RETURN_LABEL: &str = "Projected Return";
pub const INVESTMENT_RATIO_LABEL: &str = "Investment Ratio";
pub const RISK_LEVEL_LABEL: &str = "Risk Level";

/// The five contract fields in required order, with the placeholder text
/// shown to the model for each.
pub const FIELDS: [(&str, &str); 5] = [
    (NAME_LABEL, "[Crop Name]"),
    (EXPLANATION_LABEL, "[Detailed explanation of why it's suitable]"),
    (PROJECTED_RETURN_LABEL, "[Percentage]"),
    (INVESTMENT_RATIO_LABEL, "[Decimal]"),
    (RISK_LEVEL_LABEL, "[Low/Medium/High]"),
];

/// Renders the output-format block embedded in the prompt: the five labeled
/// lines plus the exactly-three / numbered-1-to-3 directive the parser
/// relies on.
pub fn format_instructions() -> String {
    let field_lines = FIELDS
        .iter()
        .map(|(label, placeholder)| format!("{label}{FIELD_SEPARATOR}{placeholder}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Recommend the top {EXPECTED_RECOMMENDATIONS} crops to cultivate and provide detailed \
         explanations. For each crop, use the following format:\n\n{field_lines}\n\n\
         Ensure you provide exactly {EXPECTED_RECOMMENDATIONS} recommendations, numbered from 1 \
         to {EXPECTED_RECOMMENDATIONS}. Do not include additional placeholder text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_the_contract_order() {
        let labels: Vec<&str> = FIELDS.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Crop",
                "Explanation",
                "Projected Return",
                "Investment Ratio",
                "Risk Level"
            ]
        );
    }

    #[test]
    fn test_instructions_name_every_field_once() {
        let block = format_instructions();
        for (label, placeholder) in FIELDS {
            assert!(block.contains(&format!("{label}: {placeholder}")));
        }
    }

    #[test]
    fn test_instructions_pin_count_and_numbering() {
        let block = format_instructions();
        assert!(block.contains("exactly 3 recommendations"));
        assert!(block.contains("numbered from 1 to 3"));
    }
}
