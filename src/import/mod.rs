use crate::error::{ImportError, Result};
use crate::models::SessionRow;
use std::path::Path;
use tracing::{info, warn};

pub mod csv;
pub mod json;

/// Trait for reading session rows from an export file
pub trait ImportFormat {
    /// Check if this importer can handle the given file
    fn can_import(&self, file_path: &Path) -> bool;

    /// Read every session row in the file
    fn import_file(&self, file_path: &Path) -> Result<Vec<SessionRow>>;

    /// Get the format name for this importer
    fn get_format_name(&self) -> &'static str;
}

pub(crate) fn has_extension(file_path: &Path, wanted: &str) -> bool {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// Reject rows whose values cannot come from the logging form
pub fn validate_session(session: &SessionRow) -> std::result::Result<(), ImportError> {
    let invalid = |reason: String| ImportError::InvalidSession {
        id: session.id.clone(),
        reason,
    };

    if !(1..=10).contains(&session.rpe) {
        return Err(invalid(format!("rpe {} outside 1-10", session.rpe)));
    }
    if session.soreness_level > 10 {
        return Err(invalid(format!(
            "soreness {} outside 0-10",
            session.soreness_level
        )));
    }
    if !session.sleep_hours.is_finite() || session.sleep_hours < 0.0 {
        return Err(invalid(format!("sleep hours {} is negative", session.sleep_hours)));
    }
    Ok(())
}

/// Dispatches a session file to the importer for its format
pub struct ImportManager {
    importers: Vec<Box<dyn ImportFormat>>,
}

impl Default for ImportManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportManager {
    pub fn new() -> Self {
        Self::with_csv_delimiter(b',')
    }

    /// Manager whose CSV importer splits fields on `delimiter`
    pub fn with_csv_delimiter(delimiter: u8) -> Self {
        let importers: Vec<Box<dyn ImportFormat>> = vec![
            Box::new(json::JsonImporter),
            Box::new(csv::CsvImporter::with_delimiter(delimiter)),
        ];

        Self { importers }
    }

    /// Import and validate a session file, auto-detecting the format
    pub fn import_file(&self, file_path: &Path) -> Result<Vec<SessionRow>> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound {
                path: file_path.to_path_buf(),
            }
            .into());
        }

        let importer = self
            .importers
            .iter()
            .find(|importer| importer.can_import(file_path))
            .ok_or_else(|| ImportError::UnsupportedFormat {
                format: file_path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            })?;

        info!(
            file = %file_path.display(),
            format = importer.get_format_name(),
            "Importing sessions"
        );

        let sessions = importer.import_file(file_path)?;
        for session in &sessions {
            if let Err(err) = validate_session(session) {
                warn!(error = %err, "Rejecting session file");
                return Err(err.into());
            }
        }

        info!(count = sessions.len(), "Imported sessions");
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FightCampError;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_unsupported_extension() {
        let mut file = Builder::new().suffix(".fit").tempfile().unwrap();
        writeln!(file, "binary").unwrap();

        let result = ImportManager::new().import_file(file.path());
        assert!(matches!(
            result,
            Err(FightCampError::Import(ImportError::UnsupportedFormat { .. }))
        ));
    }

    #[test]
    fn test_csv_delimiter_reaches_importer() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "id;date;session_type;duration_minutes;rpe").unwrap();
        writeln!(file, "s1;2024-04-01;Run;40;5").unwrap();

        let sessions = ImportManager::with_csv_delimiter(b';')
            .import_file(file.path())
            .unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].duration_minutes, 40);

        // the default comma importer sees one unknown column
        assert!(ImportManager::new().import_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = ImportManager::new().import_file(Path::new("/nonexistent/sessions.json"));
        assert!(matches!(
            result,
            Err(FightCampError::Import(ImportError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn test_invalid_rpe_rejected() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"id":"x","date":"2024-01-01","session_type":"BJJ","duration_minutes":60,"rpe":12}}]"#
        )
        .unwrap();

        let result = ImportManager::new().import_file(file.path());
        assert!(matches!(
            result,
            Err(FightCampError::Import(ImportError::InvalidSession { .. }))
        ));
    }
}
