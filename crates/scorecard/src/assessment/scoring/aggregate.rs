use super::super::answers::AnswerStore;
use super::super::catalog::Catalog;
use serde::Serialize;

/// One question's contribution to its criterion. `option_index` is `None`
/// for unanswered questions: they score 0 but carry no chosen option and
/// therefore never produce a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionOutcome {
    pub position: usize,
    pub question_id: String,
    pub question_text: String,
    pub value: f64,
    pub max_value: f64,
    pub option_index: Option<usize>,
    /// Recommendation text of the chosen option, if any was chosen and the
    /// option carries one.
    pub recommendation: Option<String>,
}

impl QuestionOutcome {
    pub fn deficit(&self) -> f64 {
        self.max_value - self.value
    }
}

/// Running score for one criterion, with its per-question entries in
/// catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionAggregate {
    pub criterion: String,
    pub score: f64,
    pub max_score: f64,
    pub entries: Vec<QuestionOutcome>,
}

/// Complete aggregation snapshot. Criteria appear in first-seen catalog
/// order; the collection is built once per call and never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub total_score: f64,
    pub total_max: f64,
    pub by_criterion: Vec<CriterionAggregate>,
}

impl ScoreBreakdown {
    pub fn criterion(&self, name: &str) -> Option<&CriterionAggregate> {
        self.by_criterion
            .iter()
            .find(|aggregate| aggregate.criterion == name)
    }
}

/// Fold the catalog and answer store into totals and per-criterion
/// aggregates. Pure and O(n) in the number of questions; absent answers
/// count as 0.
pub fn aggregate(catalog: &Catalog, answers: &AnswerStore) -> ScoreBreakdown {
    let mut by_criterion: Vec<CriterionAggregate> = Vec::new();
    let mut total_score = 0.0;
    let mut total_max = 0.0;

    for (position, question) in catalog.questions().iter().enumerate() {
        let chosen = answers.get(position);
        let value = chosen.map_or(0.0, |answer| answer.value);
        let option_index = chosen.map(|answer| answer.option_index);
        let max_value = question.max_value();

        total_score += value;
        total_max += max_value;

        let recommendation = option_index
            .and_then(|index| question.options.get(index))
            .map(|option| option.recommendation.as_str())
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        let outcome = QuestionOutcome {
            position,
            question_id: question.id.clone(),
            question_text: question.text.clone(),
            value,
            max_value,
            option_index,
            recommendation,
        };

        match by_criterion
            .iter()
            .position(|aggregate| aggregate.criterion == question.criterion)
        {
            Some(index) => {
                let aggregate = &mut by_criterion[index];
                aggregate.score += value;
                aggregate.max_score += max_value;
                aggregate.entries.push(outcome);
            }
            None => by_criterion.push(CriterionAggregate {
                criterion: question.criterion.clone(),
                score: value,
                max_score: max_value,
                entries: vec![outcome],
            }),
        }
    }

    ScoreBreakdown {
        total_score,
        total_max,
        by_criterion,
    }
}
