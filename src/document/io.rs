// src/document/io.rs

use serde_json::Error as JsonError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::model::Document;
use crate::utils::write_to_file;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] JsonError),
}

pub type Result<T> = std::result::Result<T, DocumentError>;

/// Load a specification document from a file
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    debug!(path = %path.display(), bytes = content.len(), "read specification document");
    parse_document(&content)
}

/// Parse a specification document from a string
pub fn parse_document(content: &str) -> Result<Document> {
    let document = serde_json::from_str(content)?;
    Ok(document)
}

/// Serialize a document to a JSON string
pub fn document_to_string(document: &Document, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Write a document to a file, creating parent directories if needed
pub fn save_document<P: AsRef<Path>>(document: &Document, path: P, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = document_to_string(document, pretty)?;
    write_to_file(path, &json)?;

    debug!(path = %path.display(), bytes = json.len(), "wrote specification document");
    Ok(())
}
