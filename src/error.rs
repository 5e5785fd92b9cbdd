use crate::catalog::DatasetSide;
use thiserror::Error;

/// Errors that can occur while reading pipeline or dataset documents.
#[derive(Error, Debug, Clone)]
pub enum DefinitionError {
    #[error("Failed to parse pipeline definition JSON: {0}")]
    InvalidPipeline(String),

    #[error("Failed to parse dataset definition JSON: {0}")]
    InvalidDataset(String),
}

/// Non-fatal conditions observed while transforming a pipeline.
///
/// The transform never fails outright: anything it cannot resolve is left
/// in place (or skipped) and reported here, so callers can decide what an
/// incomplete mapping means for their deployment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformWarning {
    #[error(
        "Copy activity '{activity}' references dataset '{reference_name}' as its {side}, but no such dataset exists"
    )]
    UnresolvedDataset {
        activity: String,
        side: DatasetSide,
        reference_name: String,
    },

    #[error("Dataset parameter '{parameter}' is null; the referencing expression was left unresolved")]
    NullParameterValue { parameter: String },

    #[error("Global parameter '{parameter}' is referenced but not present in the supplied context")]
    UnknownGlobalParameter { parameter: String },
}
