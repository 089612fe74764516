use super::{has_extension, ImportFormat};
use crate::error::{ImportError, Result};
use crate::models::SessionRow;
use std::fs;
use std::path::Path;

/// Reads a JSON array of session rows, as exported by the app backend
pub struct JsonImporter;

impl ImportFormat for JsonImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "json")
    }

    fn import_file(&self, file_path: &Path) -> Result<Vec<SessionRow>> {
        let content = fs::read_to_string(file_path)?;
        let sessions = serde_json::from_str(&content).map_err(|e| ImportError::ParseError {
            format: "json".to_string(),
            reason: e.to_string(),
        })?;
        Ok(sessions)
    }

    fn get_format_name(&self) -> &'static str {
        "JSON"
    }
}
