use super::answers::AnswerStore;
use super::catalog::Catalog;
use super::scoring::{self, ScoreBreakdown};
use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Session metadata attached to an export by the hosting application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub organization_name: String,
    pub user_email: Option<String>,
}

/// Per-criterion totals inside the export document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionExport {
    pub score: f64,
    pub max_score: f64,
    pub pct: u8,
}

/// One answered (or skipped) question as it appears in the export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerExport {
    pub id: String,
    pub criterion: String,
    pub question: String,
    pub value: f64,
}

/// The machine-readable result document handed to download/clipboard
/// collaborators. Field names follow the published JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub organization_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub generated_on: NaiveDate,
    pub total_score: f64,
    pub total_max: f64,
    pub total_pct: u8,
    #[serde(serialize_with = "serialize_by_criterion")]
    pub by_criterion: Vec<(String, CriterionExport)>,
    pub answers: Vec<AnswerExport>,
}

// `byCriterion` is a JSON object keyed by criterion name, emitted in
// first-seen catalog order rather than the sorted order a BTreeMap would
// impose.
fn serialize_by_criterion<S>(
    entries: &[(String, CriterionExport)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, export) in entries {
        map.serialize_entry(name, export)?;
    }
    map.end()
}

impl ExportDocument {
    /// Build the export from the same inputs the report assembler uses plus
    /// session metadata. `generated_on` is caller-supplied so documents stay
    /// reproducible under test.
    pub fn build(
        catalog: &Catalog,
        answers: &AnswerStore,
        metadata: SessionMetadata,
        generated_on: NaiveDate,
    ) -> Self {
        let breakdown = scoring::aggregate(catalog, answers);
        Self::from_breakdown(&breakdown, metadata, generated_on)
    }

    fn from_breakdown(
        breakdown: &ScoreBreakdown,
        metadata: SessionMetadata,
        generated_on: NaiveDate,
    ) -> Self {
        let by_criterion = breakdown
            .by_criterion
            .iter()
            .map(|aggregate| {
                (
                    aggregate.criterion.clone(),
                    CriterionExport {
                        score: aggregate.score,
                        max_score: aggregate.max_score,
                        pct: scoring::rounded_percent(aggregate.score, aggregate.max_score),
                    },
                )
            })
            .collect();

        // entries are grouped by criterion; restore catalog order for the
        // answers list
        let mut positioned: Vec<(usize, AnswerExport)> = breakdown
            .by_criterion
            .iter()
            .flat_map(|aggregate| {
                aggregate.entries.iter().map(move |entry| {
                    (
                        entry.position,
                        AnswerExport {
                            id: entry.question_id.clone(),
                            criterion: aggregate.criterion.clone(),
                            question: entry.question_text.clone(),
                            value: entry.value,
                        },
                    )
                })
            })
            .collect();
        positioned.sort_by_key(|(position, _)| *position);
        let answers = positioned.into_iter().map(|(_, answer)| answer).collect();

        Self {
            organization_name: metadata.organization_name,
            user_email: metadata.user_email,
            generated_on,
            total_score: breakdown.total_score,
            total_max: breakdown.total_max,
            total_pct: scoring::rounded_percent(breakdown.total_score, breakdown.total_max),
            by_criterion,
            answers,
        }
    }
}
