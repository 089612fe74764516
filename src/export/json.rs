use crate::error::{FightCampError, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Serialize a plan or metrics snapshot to the JSON blob kept by storage
pub fn to_json_blob<T: Serialize>(data: &T) -> Result<String> {
    serde_json::to_string_pretty(data).map_err(|e| FightCampError::Export(e.to_string()))
}

/// Export any serializable data structure to a JSON file
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json_data = to_json_blob(data)?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fight_week::compute_fight_week_plan;
    use crate::models::{ProjectionInput, ProjectionResult, Sex};
    use tempfile::NamedTempFile;

    fn plan() -> ProjectionResult {
        compute_fight_week_plan(&ProjectionInput {
            current_weight_kg: 80.0,
            target_weight_kg: 70.3,
            days_until_weigh_in: 7,
            sex: Sex::Male,
        })
    }

    #[test]
    fn test_blob_uses_lowercase_zones() {
        let blob = to_json_blob(&plan()).unwrap();

        assert!(blob.contains("\"dehydration_safety\": \"red\""));
        assert!(blob.contains("\"label\": \"Weigh-In Day\""));

        let restored: ProjectionResult = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored.timeline.len(), 7);
        assert_eq!(restored.overall_safety, plan().overall_safety);
    }

    #[test]
    fn test_export_json_file() {
        let temp_file = NamedTempFile::new().unwrap();
        export_json(&plan(), temp_file.path()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("\"sauna_sessions\": 11"));
    }
}
