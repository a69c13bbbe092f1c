use tally_render_core::RenderError;
use tally_types::TaxPercentError;
use thiserror::Error;

/// Errors from reading invoice input and producing the document.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv file {0} does not exist")]
    InputNotFound(String),

    #[error("invalid file type: {0:?}, only .csv files are accepted")]
    InvalidInputType(String),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

impl From<TaxPercentError> for PipelineError {
    fn from(e: TaxPercentError) -> Self {
        PipelineError::Config(e.to_string())
    }
}
