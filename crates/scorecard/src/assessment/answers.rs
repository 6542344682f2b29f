use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The pair stored for an answered question: the chosen option's value and
/// its index within the question's option list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChosenAnswer {
    pub value: f64,
    pub option_index: usize,
}

/// Per-position answer storage owned by the session driver. Unanswered
/// positions are absent, not zero; downstream scoring decides what absence
/// means. The store performs no range validation against the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerStore {
    answers: BTreeMap<usize, ChosenAnswer>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, overwriting any prior one at the same position.
    ///
    /// This is the single point of defensive coercion in the system: a
    /// non-finite value is stored as 0.0 so that scoring degrades silently
    /// instead of propagating NaN/inf through every aggregate. Intentional
    /// policy, not an error path.
    pub fn record(&mut self, position: usize, value: f64, option_index: usize) {
        let value = if value.is_finite() { value } else { 0.0 };
        self.answers.insert(
            position,
            ChosenAnswer {
                value,
                option_index,
            },
        );
    }

    pub fn get(&self, position: usize) -> Option<&ChosenAnswer> {
        self.answers.get(&position)
    }

    /// Clear every recorded answer, returning the store to its initial state.
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}
