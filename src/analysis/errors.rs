use std::path::PathBuf;

use crate::corpus::CorpusError;

// ============================================================================
// Analysis Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{path} not found. Please run the generator first to create the dataset.")]
    MissingInput { path: PathBuf },

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
