use super::super::scoring::{Level, Recommendation};
use serde::Serialize;

/// One criterion's row in the results table, with its ranked advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionReport {
    pub criterion: String,
    pub score: f64,
    pub max_score: f64,
    /// Display percentage, rounded half-up. The level is classified from
    /// the unrounded ratio, not from this value.
    pub pct: u8,
    pub level: Level,
    pub level_label: &'static str,
    pub recommendations: Vec<Recommendation>,
}

/// The fully computed, immutable output every renderer and exporter
/// consumes. Structurally identical for identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_score: f64,
    pub total_max: f64,
    pub total_pct: u8,
    pub per_criterion: Vec<CriterionReport>,
}
