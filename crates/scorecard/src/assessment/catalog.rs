use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One selectable answer for a question. The recommendation text may be
/// empty, in which case choosing this option never surfaces advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: f64,
    pub text: String,
    #[serde(default)]
    pub recommendation: String,
}

/// A scored question belonging to one criterion. Criteria repeat across
/// questions and act as the grouping key during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub criterion: String,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Best achievable value for this question. Only defined because the
    /// catalog guarantees at least one option per question.
    pub fn max_value(&self) -> f64 {
        self.options
            .iter()
            .map(|option| option.value)
            .fold(0.0, f64::max)
    }
}

/// Immutable, validated question catalog. Fixed for the lifetime of a
/// session; all scoring iterates it in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct RawCatalog {
    questions: Vec<Question>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Catalog::from_questions(raw.questions)
    }
}

impl Catalog {
    /// Build a catalog, enforcing the structural preconditions the rest of
    /// the core relies on. A question without options has no defined best
    /// value and is rejected here rather than defaulted.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, CatalogError> {
        for question in &questions {
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions {
                    question_id: question.id.clone(),
                });
            }

            for option in &question.options {
                if !option.value.is_finite() || option.value < 0.0 {
                    return Err(CatalogError::InvalidOptionValue {
                        question_id: question.id.clone(),
                        value: option.value,
                    });
                }
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Resolve a session driver's choice to the option's value, for feeding
    /// the answer store. Range checks live here, not in the store.
    pub fn resolve_choice(
        &self,
        position: usize,
        option_index: usize,
    ) -> Result<f64, CatalogError> {
        let question = self
            .questions
            .get(position)
            .ok_or(CatalogError::QuestionOutOfRange { position })?;

        let option = question.options.get(option_index).ok_or_else(|| {
            CatalogError::OptionOutOfRange {
                question_id: question.id.clone(),
                option_index,
            }
        })?;

        Ok(option.value)
    }
}

/// Structural violations detected while building or addressing a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("question '{question_id}' has no options")]
    NoOptions { question_id: String },
    #[error("question '{question_id}' has an option with invalid value {value}")]
    InvalidOptionValue { question_id: String, value: f64 },
    #[error("question position {position} is outside the catalog")]
    QuestionOutOfRange { position: usize },
    #[error("question '{question_id}' has no option at index {option_index}")]
    OptionOutOfRange {
        question_id: String,
        option_index: usize,
    },
}

/// Loads the preloaded `{"questions": [...]}` document supplied by the
/// hosting application.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
        let catalog = serde_json::from_reader(reader)?;
        Ok(catalog)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Catalog, CatalogImportError> {
        let catalog = serde_json::from_slice(bytes)?;
        Ok(catalog)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog document: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog violates a structural invariant: {0}")]
    Catalog(#[from] CatalogError),
}
