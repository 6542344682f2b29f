pub mod views;

pub use views::{CriterionReport, Report};

use super::answers::AnswerStore;
use super::catalog::Catalog;
use super::scoring::{self, Level};

/// Single entry point for every external consumer. Composes aggregation,
/// classification, and recommendation selection into one immutable report;
/// performs no independent computation of its own.
///
/// Recomputed from scratch on each call, so repeated calls over unchanged
/// inputs yield structurally equal reports.
pub fn assemble(catalog: &Catalog, answers: &AnswerStore, cap: usize) -> Report {
    let breakdown = scoring::aggregate(catalog, answers);

    let per_criterion = breakdown
        .by_criterion
        .iter()
        .map(|aggregate| {
            let level = Level::classify(aggregate.score, aggregate.max_score);
            CriterionReport {
                criterion: aggregate.criterion.clone(),
                score: aggregate.score,
                max_score: aggregate.max_score,
                pct: scoring::rounded_percent(aggregate.score, aggregate.max_score),
                level,
                level_label: level.label(),
                recommendations: scoring::select(aggregate, cap),
            }
        })
        .collect();

    Report {
        total_score: breakdown.total_score,
        total_max: breakdown.total_max,
        total_pct: scoring::rounded_percent(breakdown.total_score, breakdown.total_max),
        per_criterion,
    }
}
