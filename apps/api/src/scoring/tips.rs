//! Tip assembly — flattens per-category suggestions into the report's tip
//! list: model order, deduplicated, capped, with a positive fallback.

use std::collections::HashSet;

use crate::scoring::model::Thresholds;
use crate::scoring::report::CategoryResult;

const POSITIVE_FALLBACK: &str =
    "Your resume looks good! Consider adding more specific achievements and metrics.";

/// Flattens category suggestions in breakdown order. Duplicate strings keep
/// their first occurrence; output never exceeds `max_tips` and is never
/// empty.
pub fn assemble_tips(results: &[CategoryResult], thresholds: &Thresholds) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tips = Vec::new();

    'categories: for result in results {
        for suggestion in &result.suggestions {
            if tips.len() >= thresholds.max_tips {
                break 'categories;
            }
            if seen.insert(suggestion.as_str()) {
                tips.push(suggestion.clone());
            }
        }
    }

    if tips.is_empty() {
        tips.push(POSITIVE_FALLBACK.to_string());
    }
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::report::{CategoryDetail, CategoryKey, TierDetail};

    fn result_with(suggestions: Vec<&str>) -> CategoryResult {
        CategoryResult {
            key: CategoryKey::Metrics,
            points: 0,
            max_points: 20,
            detail: CategoryDetail::Tier(TierDetail {
                count: 0,
                recommended_min: 2,
            }),
            suggestions: suggestions.into_iter().map(str::to_string).collect(),
        }
    }

    #[test]
    fn test_no_suggestions_yields_positive_fallback() {
        let tips = assemble_tips(&[result_with(vec![])], &Thresholds::default());
        assert_eq!(tips, vec![POSITIVE_FALLBACK.to_string()]);
    }

    #[test]
    fn test_preserves_category_order() {
        let tips = assemble_tips(
            &[result_with(vec!["first", "second"]), result_with(vec!["third"])],
            &Thresholds::default(),
        );
        assert_eq!(tips, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let tips = assemble_tips(
            &[
                result_with(vec!["shared tip", "unique a"]),
                result_with(vec!["shared tip", "unique b"]),
            ],
            &Thresholds::default(),
        );
        assert_eq!(tips, vec!["shared tip", "unique a", "unique b"]);
    }

    #[test]
    fn test_cap_enforced() {
        let many: Vec<String> = (0..40).map(|i| format!("tip {i}")).collect();
        let result = CategoryResult {
            suggestions: many,
            ..result_with(vec![])
        };
        let tips = assemble_tips(&[result], &Thresholds::default());
        assert_eq!(tips.len(), Thresholds::default().max_tips);
    }
}
