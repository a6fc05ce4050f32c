use strum_macros::Display;
use thiserror::Error;

/// The scoring-table namespace a slug failed to resolve in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScoreNamespace {
    Category,
    Skill,
    Context,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    // A definition references a slug with no entry in its scoring
    // namespace. Shaping fails whole rather than defaulting the score.
    #[error("No {namespace} score entry for slug '{slug}'")]
    MissingScore {
        namespace: ScoreNamespace,
        slug: String,
    },
}

pub type SrResult<T> = Result<T, ReportError>;
