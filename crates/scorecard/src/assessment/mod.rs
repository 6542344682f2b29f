pub mod answers;
pub mod catalog;
pub mod export;
pub mod report;
pub mod scoring;

pub use answers::{AnswerStore, ChosenAnswer};
pub use catalog::{AnswerOption, Catalog, CatalogError, CatalogImportError, CatalogImporter, Question};
pub use export::{ExportDocument, SessionMetadata};
pub use report::{assemble, CriterionReport, Report};
pub use scoring::{Level, Recommendation};
