pub mod cli;
pub mod document;
pub mod normalizer;
pub mod utils;

// Re-export frequently used items for easier access
pub use document::{load_document, parse_document, save_document, Document};
pub use normalizer::{normalize, normalize_with_report, NormalizeReport};

use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Document error: {0}")]
    DocumentError(#[from] document::DocumentError),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Options for writing the cleaned document
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    /// Pretty-print the output instead of writing compact JSON
    pub pretty: bool,
}

/// Clean a Swagger specification file and write the result to `output_file`
pub fn clean_spec_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_file: P,
    output_file: Q,
    options: &CleanOptions,
) -> Result<NormalizeReport> {
    let input_file = input_file.as_ref();
    let output_file = output_file.as_ref();

    // Read the raw specification
    let document = document::load_document(input_file)?;
    info!(
        input = %input_file.display(),
        paths = document.paths.len(),
        operations = document.operation_count(),
        definitions = document.definitions.len(),
        "loaded specification"
    );

    // Apply the cleanup rules
    let (document, report) = normalizer::normalize_with_report(document);
    info!("normalized specification: {}", report);

    // Write the cleaned specification
    document::save_document(&document, output_file, options.pretty)?;
    info!(output = %output_file.display(), "wrote cleaned specification");

    Ok(report)
}
