use super::{has_extension, ImportFormat};
use crate::error::{ImportError, Result};
use crate::models::SessionRow;
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// CSV importer for session logs with a header row
///
/// Columns are matched by name; `intensity`, `soreness_level` and
/// `sleep_hours` may be left out.
pub struct CsvImporter {
    delimiter: u8,
}

impl CsvImporter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFormat for CsvImporter {
    fn can_import(&self, file_path: &Path) -> bool {
        has_extension(file_path, "csv")
    }

    fn import_file(&self, file_path: &Path) -> Result<Vec<SessionRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .trim(Trim::All)
            .from_path(file_path)
            .map_err(|e| parse_error(&e))?;

        let mut sessions = Vec::new();
        for record in reader.deserialize::<SessionRow>() {
            sessions.push(record.map_err(|e| parse_error(&e))?);
        }

        Ok(sessions)
    }

    fn get_format_name(&self) -> &'static str {
        "CSV"
    }
}

fn parse_error(error: &csv::Error) -> ImportError {
    ImportError::ParseError {
        format: "csv".to_string(),
        reason: error.to_string(),
    }
}
