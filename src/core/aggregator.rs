use crate::core::{AggregatedResult, InteractionPair};
use std::collections::BTreeSet;

pub const EXPLANATION_SEPARATOR: &str = " — ";
pub const SEVERITY_SEPARATOR: &str = ", ";

/// Merges the pairs of one query into a display payload.
///
/// Severities are lowercased, deduplicated and sorted. Each pair contributes at
/// most one explanation, in input order; pairs without description and comment
/// contribute none.
pub fn aggregate(pairs: &[InteractionPair]) -> AggregatedResult {
    let severities: BTreeSet<String> = pairs
        .iter()
        .map(|pair| pair.severity.to_lowercase())
        .collect();

    let explanations = pairs.iter().filter_map(explanation).collect();

    AggregatedResult {
        severity: severities
            .into_iter()
            .collect::<Vec<_>>()
            .join(SEVERITY_SEPARATOR),
        explanations,
    }
}

fn explanation(pair: &InteractionPair) -> Option<String> {
    match (pair.description.is_empty(), pair.comment.is_empty()) {
        (true, true) => None,
        (false, true) => Some(pair.description.clone()),
        (true, false) => Some(pair.comment.clone()),
        (false, false) => Some(format!(
            "{}{}{}",
            pair.description, EXPLANATION_SEPARATOR, pair.comment
        )),
    }
}
