use scorecard::assessment::catalog::{AnswerOption, Catalog, Question};
use scorecard::assessment::scoring::{self, Level};
use scorecard::assessment::{assemble, AnswerStore};

fn option(value: f64, recommendation: &str) -> AnswerOption {
    AnswerOption {
        value,
        text: format!("option worth {value}"),
        recommendation: recommendation.to_string(),
    }
}

fn question(id: &str, criterion: &str, options: Vec<AnswerOption>) -> Question {
    Question {
        id: id.to_string(),
        criterion: criterion.to_string(),
        text: format!("Question {id}"),
        options,
    }
}

/// The two-question, single-criterion catalog used by the scoring
/// scenarios: options worth {0, 5} and {0, 10}.
fn scenario_catalog() -> Catalog {
    Catalog::from_questions(vec![
        question(
            "a1",
            "A",
            vec![option(0.0, "Close the five point gap"), option(5.0, "")],
        ),
        question(
            "a2",
            "A",
            vec![option(0.0, "Close the ten point gap"), option(10.0, "")],
        ),
    ])
    .expect("valid scenario catalog")
}

fn mixed_catalog() -> Catalog {
    Catalog::from_questions(vec![
        question(
            "gov1",
            "Governance",
            vec![option(0.0, "Define ownership"), option(2.0, ""), option(5.0, "")],
        ),
        question(
            "del1",
            "Delivery",
            vec![option(0.0, "Automate deployments"), option(10.0, "")],
        ),
        question(
            "gov2",
            "Governance",
            vec![option(0.0, "Track decisions"), option(3.0, "")],
        ),
        question(
            "del2",
            "Delivery",
            vec![option(0.0, "Add release checklists"), option(7.0, "")],
        ),
    ])
    .expect("valid mixed catalog")
}

#[test]
fn criterion_scores_stay_within_bounds_for_any_answer_pattern() {
    let catalog = mixed_catalog();

    let patterns: Vec<Vec<(usize, usize)>> = vec![
        vec![],
        vec![(0, 2), (1, 1), (2, 1), (3, 1)],
        vec![(0, 0), (3, 0)],
        vec![(1, 1)],
    ];

    for pattern in patterns {
        let mut answers = AnswerStore::new();
        for (position, option_index) in pattern {
            let value = catalog
                .resolve_choice(position, option_index)
                .expect("choice within catalog");
            answers.record(position, value, option_index);
        }

        let report = assemble(&catalog, &answers, 3);

        let mut score_sum = 0.0;
        let mut max_sum = 0.0;
        for criterion in &report.per_criterion {
            assert!(criterion.score >= 0.0);
            assert!(criterion.score <= criterion.max_score);
            score_sum += criterion.score;
            max_sum += criterion.max_score;
        }
        assert_eq!(report.total_score, score_sum);
        assert_eq!(report.total_max, max_sum);
    }
}

#[test]
fn all_absent_answers_still_cover_the_full_maximum() {
    let report = assemble(&mixed_catalog(), &AnswerStore::new(), 3);

    assert_eq!(report.total_score, 0.0);
    assert_eq!(report.total_max, 25.0);
    assert_eq!(report.total_pct, 0);
    for criterion in &report.per_criterion {
        assert_eq!(criterion.score, 0.0);
        assert_eq!(criterion.level, Level::Low);
        // nothing was chosen, so there is no advice to give
        assert!(criterion.recommendations.is_empty());
    }
}

#[test]
fn worst_answers_scenario_scores_zero_and_ranks_by_deficit() {
    let mut answers = AnswerStore::new();
    answers.record(0, 0.0, 0);
    answers.record(1, 0.0, 0);

    let report = assemble(&scenario_catalog(), &answers, 10);

    assert_eq!(report.total_score, 0.0);
    assert_eq!(report.total_max, 15.0);

    let criterion = &report.per_criterion[0];
    assert_eq!(criterion.criterion, "A");
    assert_eq!(criterion.score, 0.0);
    assert_eq!(criterion.max_score, 15.0);
    assert_eq!(criterion.pct, 0);
    assert_eq!(criterion.level, Level::Low);

    let texts: Vec<&str> = criterion
        .recommendations
        .iter()
        .map(|r| r.text.as_str())
        .collect();
    assert_eq!(texts, ["Close the ten point gap", "Close the five point gap"]);
}

#[test]
fn best_answers_scenario_scores_full_marks_with_no_recommendations() {
    let mut answers = AnswerStore::new();
    answers.record(0, 5.0, 1);
    answers.record(1, 10.0, 1);

    let report = assemble(&scenario_catalog(), &answers, 10);

    assert_eq!(report.total_score, 15.0);
    assert_eq!(report.total_max, 15.0);
    assert_eq!(report.total_pct, 100);

    let criterion = &report.per_criterion[0];
    assert_eq!(criterion.level, Level::High);
    assert_eq!(criterion.level_label, "High");
    assert!(criterion.recommendations.is_empty());
}

#[test]
fn cap_of_one_keeps_only_the_largest_deficit() {
    let catalog = Catalog::from_questions(vec![
        question("c1", "C", vec![option(0.0, "deficit three"), option(3.0, "")]),
        question("c2", "C", vec![option(0.0, "deficit seven"), option(7.0, "")]),
        question("c3", "C", vec![option(0.0, "deficit two"), option(2.0, "")]),
    ])
    .expect("valid catalog");

    let mut answers = AnswerStore::new();
    answers.record(0, 0.0, 0);
    answers.record(1, 0.0, 0);
    answers.record(2, 0.0, 0);

    let report = assemble(&catalog, &answers, 1);
    let recommendations = &report.per_criterion[0].recommendations;

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].text, "deficit seven");
}

#[test]
fn selector_output_is_deduplicated_and_sorted_regardless_of_cap() {
    let catalog = mixed_catalog();
    let mut answers = AnswerStore::new();
    for position in 0..catalog.len() {
        answers.record(position, 0.0, 0);
    }

    for cap in [1usize, 2, 3, 10] {
        let report = assemble(&catalog, &answers, cap);
        for criterion in &report.per_criterion {
            assert!(criterion.recommendations.len() <= cap);
            assert!(criterion
                .recommendations
                .windows(2)
                .all(|pair| pair[0].deficit >= pair[1].deficit));

            for (index, recommendation) in criterion.recommendations.iter().enumerate() {
                assert!(
                    !criterion.recommendations[..index]
                        .iter()
                        .any(|other| other.text == recommendation.text),
                    "duplicate recommendation text surfaced"
                );
            }
        }
    }
}

#[test]
fn repeated_assembly_yields_structurally_equal_reports() {
    let catalog = mixed_catalog();
    let mut answers = AnswerStore::new();
    answers.record(0, 2.0, 1);
    answers.record(3, 0.0, 0);

    let first = assemble(&catalog, &answers, 3);
    let second = assemble(&catalog, &answers, 3);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).expect("report serializes"),
        serde_json::to_value(&second).expect("report serializes"),
    );
}

#[test]
fn classification_in_reports_matches_direct_classification() {
    let catalog = mixed_catalog();
    let mut answers = AnswerStore::new();
    answers.record(0, 5.0, 2);
    answers.record(2, 3.0, 1);

    let report = assemble(&catalog, &answers, 3);
    for criterion in &report.per_criterion {
        assert_eq!(
            criterion.level,
            Level::classify(criterion.score, criterion.max_score)
        );
        assert_eq!(
            criterion.pct,
            scoring::rounded_percent(criterion.score, criterion.max_score)
        );
    }

    // Governance chose 8 of 8: pct 100, High. Delivery absent: Low.
    assert_eq!(report.per_criterion[0].level, Level::High);
    assert_eq!(report.per_criterion[1].level, Level::Low);
}
