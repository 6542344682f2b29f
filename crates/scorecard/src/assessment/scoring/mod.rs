mod aggregate;
mod level;
mod recommend;

pub use aggregate::{aggregate, CriterionAggregate, QuestionOutcome, ScoreBreakdown};
pub use level::{percent, rounded_percent, Level};
pub use recommend::{select, Recommendation};
