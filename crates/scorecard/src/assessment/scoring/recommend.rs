use super::aggregate::{CriterionAggregate, QuestionOutcome};
use serde::Serialize;

/// A ranked improvement suggestion, traced back to the question whose
/// chosen option produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub text: String,
    pub question_id: String,
    pub question_text: String,
    pub deficit: f64,
}

/// Derive the prioritized recommendation list for one criterion.
///
/// Only answered questions participate: an absent answer means no chosen
/// option and therefore no advice to surface, not a deficit against the
/// maximum. Qualifying entries sort by deficit descending (stable, so ties
/// keep catalog order), then duplicates by recommendation text are dropped
/// keeping the first occurrence, up to `cap` items.
pub fn select(aggregate: &CriterionAggregate, cap: usize) -> Vec<Recommendation> {
    let mut candidates: Vec<&QuestionOutcome> = aggregate
        .entries
        .iter()
        .filter(|entry| entry.option_index.is_some())
        .filter(|entry| entry.deficit() > 0.0 && entry.recommendation.is_some())
        .collect();

    candidates.sort_by(|a, b| b.deficit().total_cmp(&a.deficit()));

    let mut selected: Vec<Recommendation> = Vec::new();
    for entry in candidates {
        if selected.len() >= cap {
            break;
        }

        let Some(text) = entry.recommendation.as_deref() else {
            continue;
        };
        if selected.iter().any(|kept| kept.text == text) {
            continue;
        }

        selected.push(Recommendation {
            text: text.to_string(),
            question_id: entry.question_id.clone(),
            question_text: entry.question_text.clone(),
            deficit: entry.deficit(),
        });
    }

    selected
}
