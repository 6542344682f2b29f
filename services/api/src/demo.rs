use crate::infra::{fold_choices, sample_catalog, RecordedChoice};
use chrono::{Local, NaiveDate};
use clap::Args;
use scorecard::assessment::catalog::{Catalog, CatalogImportError, CatalogImporter};
use scorecard::assessment::export::{ExportDocument, SessionMetadata};
use scorecard::assessment::report::Report;
use scorecard::assessment::{self, AnswerStore};
use scorecard::config::AppConfig;
use scorecard::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Organization name stamped on the export document.
    #[arg(long, default_value = "Demo Organization")]
    pub(crate) organization: String,
    /// Per-criterion recommendation cap.
    #[arg(long)]
    pub(crate) cap: Option<usize>,
    /// Also print the machine-readable export document.
    #[arg(long)]
    pub(crate) export: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Catalog JSON document ({"questions": [...]}); built-in questionnaire when omitted.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Recorded choices as a JSON array of {"position": N, "option": M}.
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Per-criterion recommendation cap.
    #[arg(long)]
    pub(crate) cap: Option<usize>,
    /// Organization name for the export document.
    #[arg(long)]
    pub(crate) organization: Option<String>,
    /// Print the export document instead of the human-readable report.
    #[arg(long)]
    pub(crate) export: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        catalog,
        answers,
        cap,
        organization,
        export,
    } = args;

    let catalog = match catalog {
        Some(path) => CatalogImporter::from_path(path)?,
        None => sample_catalog(),
    };

    let file = std::fs::File::open(answers)?;
    let choices: Vec<RecordedChoice> =
        serde_json::from_reader(file).map_err(AppError::Answers)?;
    let answers = fold_choices(&catalog, &choices)
        .map_err(CatalogImportError::from)?;

    let cap = match cap {
        Some(cap) => cap,
        None => AppConfig::load()?.scoring.recommendation_cap,
    };
    let report = assessment::assemble(&catalog, &answers, cap);

    if export {
        let document = build_export(
            &catalog,
            &answers,
            organization.unwrap_or_else(|| "Unnamed Organization".to_string()),
            Local::now().date_naive(),
        );
        print_export(&document);
    } else {
        render_report(&catalog, &answers, &report);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        organization,
        cap,
        export,
    } = args;

    println!("Maturity scorecard demo");

    let catalog = sample_catalog();

    // A mid-maturity answer pattern: some strengths, some gaps, one skipped
    // question.
    let choices = [
        RecordedChoice { position: 0, option: 1 },
        RecordedChoice { position: 1, option: 2 },
        RecordedChoice { position: 2, option: 0 },
        RecordedChoice { position: 3, option: 1 },
        RecordedChoice { position: 4, option: 1 },
        RecordedChoice { position: 5, option: 1 },
        RecordedChoice { position: 7, option: 0 },
    ];
    let answers = fold_choices(&catalog, &choices)
        .map_err(CatalogImportError::from)?;

    let cap = match cap {
        Some(cap) => cap,
        None => AppConfig::load()?.scoring.recommendation_cap,
    };
    let report = assessment::assemble(&catalog, &answers, cap);
    render_report(&catalog, &answers, &report);

    if export {
        let document = build_export(&catalog, &answers, organization, Local::now().date_naive());
        print_export(&document);
    }

    Ok(())
}

fn build_export(
    catalog: &Catalog,
    answers: &AnswerStore,
    organization_name: String,
    generated_on: NaiveDate,
) -> ExportDocument {
    ExportDocument::build(
        catalog,
        answers,
        SessionMetadata {
            organization_name,
            user_email: None,
        },
        generated_on,
    )
}

fn print_export(document: &ExportDocument) {
    match serde_json::to_string_pretty(document) {
        Ok(json) => println!("\nExport document:\n{json}"),
        Err(err) => println!("\nExport document unavailable: {err}"),
    }
}

pub(crate) fn render_report(catalog: &Catalog, answers: &AnswerStore, report: &Report) {
    println!(
        "Answered {} of {} questions",
        answers.answered_count(),
        catalog.len()
    );
    println!(
        "Overall: {} / {} ({}%)",
        report.total_score, report.total_max, report.total_pct
    );

    println!("\nResults by criterion");
    for criterion in &report.per_criterion {
        println!(
            "- {}: {} / {} ({}%) -> {}",
            criterion.criterion,
            criterion.score,
            criterion.max_score,
            criterion.pct,
            criterion.level_label
        );
    }

    println!("\nRecommendations");
    for criterion in &report.per_criterion {
        println!(
            "\nCriterion: {} ({}%, {})",
            criterion.criterion, criterion.pct, criterion.level_label
        );
        println!("{}", criterion.level.hint());

        if criterion.recommendations.is_empty() {
            println!("No priority recommendations for the given answers.");
            continue;
        }

        println!("Priority steps:");
        for (index, recommendation) in criterion.recommendations.iter().enumerate() {
            println!(
                "  {}. {} - {}",
                index + 1,
                recommendation.question_id,
                recommendation.question_text
            );
            println!("     {}", recommendation.text);
        }
    }
}
