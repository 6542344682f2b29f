use metrics_exporter_prometheus::PrometheusHandle;
use scorecard::assessment::catalog::{AnswerOption, Catalog, CatalogError, Question};
use scorecard::assessment::AnswerStore;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One recorded choice from a session driver: the question position and the
/// index of the option picked there.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RecordedChoice {
    pub(crate) position: usize,
    pub(crate) option: usize,
}

/// Fold driver choices into an answer store, resolving each option's value
/// through the catalog. Later choices for the same position overwrite
/// earlier ones, matching the store's last-write-wins contract.
pub(crate) fn fold_choices(
    catalog: &Catalog,
    choices: &[RecordedChoice],
) -> Result<AnswerStore, CatalogError> {
    let mut answers = AnswerStore::new();
    for choice in choices {
        let value = catalog.resolve_choice(choice.position, choice.option)?;
        answers.record(choice.position, value, choice.option);
    }
    Ok(answers)
}

fn option(value: f64, text: &str, recommendation: &str) -> AnswerOption {
    AnswerOption {
        value,
        text: text.to_string(),
        recommendation: recommendation.to_string(),
    }
}

fn question(id: &str, criterion: &str, text: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        criterion: criterion.to_string(),
        text: text.to_string(),
        options,
    }
}

/// Built-in process maturity questionnaire used by the demo and as the
/// default catalog when a request supplies none.
pub(crate) fn sample_catalog() -> Catalog {
    let questions = vec![
        question(
            "proc-1",
            "Processes",
            "Are your delivery processes documented and repeatable?",
            vec![
                option(0.0, "No documentation exists", "Document the core delivery processes and keep them current"),
                option(2.0, "Partially documented", "Extend process documentation to cover every recurring activity"),
                option(5.0, "Fully documented and reviewed", ""),
            ],
        ),
        question(
            "proc-2",
            "Processes",
            "Is work tracked through a shared backlog with clear priorities?",
            vec![
                option(0.0, "Work arrives ad hoc", "Introduce a single prioritized backlog for all incoming work"),
                option(3.0, "Backlog exists but priorities drift", "Hold a regular prioritization review to keep the backlog honest"),
                option(5.0, "Backlog is prioritized and respected", ""),
            ],
        ),
        question(
            "proc-3",
            "Processes",
            "Do releases follow an automated, repeatable pipeline?",
            vec![
                option(0.0, "Releases are manual", "Automate the release pipeline end to end"),
                option(2.0, "Partially automated", "Close the manual gaps in the release pipeline"),
                option(5.0, "Fully automated with rollback", ""),
            ],
        ),
        question(
            "people-1",
            "People",
            "Do new team members follow a structured onboarding path?",
            vec![
                option(0.0, "Onboarding is improvised", "Create a structured onboarding checklist with an assigned buddy"),
                option(3.0, "A checklist exists but is stale", "Refresh the onboarding materials each quarter"),
                option(5.0, "Structured and regularly refreshed", ""),
            ],
        ),
        question(
            "people-2",
            "People",
            "Are roles and decision ownership clearly defined?",
            vec![
                option(0.0, "Ownership is unclear", "Define decision ownership for every recurring decision type"),
                option(5.0, "Ownership is documented and known", ""),
            ],
        ),
        question(
            "tech-1",
            "Technology",
            "Is production behavior observable through logs and metrics?",
            vec![
                option(0.0, "No structured observability", "Adopt structured logging and a baseline metrics dashboard"),
                option(2.0, "Logs only, no metrics", "Add service level metrics next to the existing logs"),
                option(5.0, "Logs, metrics, and alerting in place", ""),
            ],
        ),
        question(
            "tech-2",
            "Technology",
            "Are dependencies and infrastructure kept up to date?",
            vec![
                option(0.0, "Updates happen only on breakage", "Schedule recurring dependency and infrastructure updates"),
                option(3.0, "Updated irregularly", "Automate update proposals so they arrive continuously"),
                option(5.0, "Continuously updated", ""),
            ],
        ),
        question(
            "tech-3",
            "Technology",
            "Is there an automated test suite gating changes?",
            vec![
                option(0.0, "No automated tests", "Build an automated test suite and wire it into the merge gate"),
                option(2.0, "Tests exist but do not gate merges", "Make the test suite a required merge gate"),
                option(5.0, "Tests gate every change", ""),
            ],
        ),
    ];

    Catalog::from_questions(questions).expect("built-in catalog satisfies catalog invariants")
}
