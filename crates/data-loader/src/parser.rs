//! Parser for catalog JSON files.
//!
//! Each file holds one record collection, either as a bare array:
//!
//! ```json
//! [{"id": 1, "name": "Luna"}]
//! ```
//!
//! or wrapped the way the backend API returns lists:
//!
//! ```json
//! {"data": [{"id": 1, "name": "Luna"}]}
//! ```

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// The `{"data": [...]}` wrapper the backend API returns lists in.
#[derive(Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

/// Parse a record collection from JSON text.
///
/// The shape is picked from the first non-whitespace character so serde
/// reports record-level errors with their real line and message. `file` is
/// only used to label errors.
pub fn parse_str<T: DeserializeOwned>(content: &str, file: &str) -> Result<Vec<T>> {
    let parsed = if content.trim_start().starts_with('{') {
        serde_json::from_str::<Envelope<T>>(content).map(|envelope| envelope.data)
    } else {
        serde_json::from_str::<Vec<T>>(content)
    };
    parsed.map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line: e.line(),
        reason: e.to_string(),
    })
}

/// Read and parse a record collection file.
pub fn parse_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.is_file() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let content = fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_str(&content, &file)
}

pub fn parse_pets(path: &Path) -> Result<Vec<Pet>> {
    parse_records(path)
}

pub fn parse_shelters(path: &Path) -> Result<Vec<Shelter>> {
    parse_records(path)
}

pub fn parse_users(path: &Path) -> Result<Vec<User>> {
    parse_records(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_bare_array() {
        let pets: Vec<Pet> =
            parse_str(r#"[{"id": 1, "name": "Luna"}, {"id": 2, "name": "Max"}]"#, "pets.json")
                .unwrap();
        assert_eq!(pets.len(), 2);
        assert_eq!(pets[1].name, "Max");
    }

    #[test]
    fn test_parse_envelope() {
        let shelters: Vec<Shelter> =
            parse_str(r#"{"data": [{"id": 3, "name": "Huellitas", "city": "Cali"}]}"#, "shelters.json")
                .unwrap();
        assert_eq!(shelters.len(), 1);
        assert_eq!(shelters[0].city.as_deref(), Some("Cali"));
    }

    #[test]
    fn test_parse_error_reports_file() {
        let err = parse_str::<User>("[{\"id\": }]", "users.json").unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, .. } => {
                assert_eq!(file, "users.json");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_record_error_reports_line() {
        let content = "[\n{\"id\": 1},\n{\"id\": 2},\n{\"id\": 3, \"isActive\": \"yes\"}\n]";
        let err = parse_str::<Pet>(content, "pets.json").unwrap_err();
        match err {
            DataLoadError::ParseError { file, line, reason } => {
                assert_eq!(file, "pets.json");
                assert_eq!(line, 4);
                assert!(reason.contains("expected a boolean"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_envelope_record_error_reports_line() {
        let content = "{\"data\": [\n{\"id\": 1},\n{\"id\": \"two\"}\n]}";
        let err = parse_str::<Shelter>(content, "shelters.json").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 3, .. }), "{err}");
    }

    #[test]
    fn test_null_fields_tolerated() {
        let pets: Vec<Pet> = parse_str(
            r#"[{"id": 1, "name": "Luna", "isVaccinated": null},
                {"id": 2, "name": null, "isActive": null, "breed": null}]"#,
            "pets.json",
        )
        .unwrap();
        assert_eq!(pets.len(), 2);
        assert!(!pets[0].is_vaccinated);
        assert_eq!(pets[1].name, "");
        assert_eq!(pets[1].breed_name(), None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_pets(&dir.path().join("pets.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_parse_records_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"[{{"id": 1, "firstName": "Ana", "isSiteAdmin": true}}]"#).unwrap();

        let users = parse_users(&path).unwrap();
        assert_eq!(users.len(), 1);
        assert!(users[0].is_site_admin);
    }
}
