use std::io::{Cursor, Read};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::models::RawDocument;

const JSON_SUFFIX: &str = ".json";
const SCHEMA_SUFFIX: &str = ".schema.json";

/// Input is neither direct JSON nor a ZIP archive holding a qualifying JSON member
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("input is neither valid JSON nor a readable ZIP archive: {0}")]
    InvalidArchive(#[source] ZipError),
    #[error("ZIP archive contains no .json member (schema files are ignored)")]
    NoJsonMember,
    #[error("failed to read ZIP member {name}: {source}")]
    ReadMember {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("ZIP member {name} is not valid UTF-8 JSON: {reason}")]
    InvalidMember { name: String, reason: String },
}

/// Parse an export from raw bytes.
///
/// The bytes are first decoded as UTF-8 JSON. If that fails they are reinterpreted as a
/// ZIP archive and the first member (in archive order) whose lowercase name ends in
/// `.json` but not `.schema.json` is parsed instead. Members are never merged.
pub fn load_document(bytes: &[u8]) -> Result<RawDocument, FormatError> {
    match parse_json(bytes) {
        Ok(value) => Ok(RawDocument::from(value)),
        Err(reason) => {
            debug!(%reason, "input is not direct JSON, trying ZIP archive");
            load_from_zip(bytes).map(RawDocument::from)
        }
    }
}

fn parse_json(bytes: &[u8]) -> Result<Value, String> {
    let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
    serde_json::from_str(text).map_err(|e| e.to_string())
}

fn load_from_zip(bytes: &[u8]) -> Result<Value, FormatError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(FormatError::InvalidArchive)?;

    for index in 0..archive.len() {
        let mut member = archive.by_index(index).map_err(FormatError::InvalidArchive)?;
        let name = member.name().to_string();
        if !is_export_member(&name) {
            continue;
        }

        debug!(member = %name, "parsing JSON member from ZIP archive");
        let mut contents = Vec::new();
        member
            .read_to_end(&mut contents)
            .map_err(|source| FormatError::ReadMember { name: name.clone(), source })?;

        return parse_json(&contents).map_err(|reason| {
            warn!(member = %name, %reason, "first JSON member in archive failed to parse");
            FormatError::InvalidMember { name, reason }
        });
    }

    Err(FormatError::NoJsonMember)
}

/// Whether a ZIP member name qualifies as the export document
fn is_export_member(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(JSON_SUFFIX) && !lower.ends_with(SCHEMA_SUFFIX)
}
