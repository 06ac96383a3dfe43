//! Service loading from files and strings.

use std::path::Path;

use crate::error::LoadError;
use crate::types::Service;

/// Load a service definition from a JSON file.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if it isn't a valid service document.
pub fn load_service(path: &Path) -> Result<Service, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let service = load_service_str(&content)?;
    tracing::debug!(
        service = %service.name,
        models = service.models.len(),
        enums = service.enums.len(),
        path = %path.display(),
        "loaded service"
    );
    Ok(service)
}

/// Load a service definition from a JSON string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't a valid service document.
pub fn load_service_str(content: &str) -> Result<Service, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_string() {
        let service = load_service_str(
            r#"{
                "name": "api",
                "models": [{ "name": "user", "fields": [{ "name": "id", "type": "uuid" }] }]
            }"#,
        )
        .unwrap();
        assert_eq!(service.name, "api");
        assert_eq!(service.models[0].fields[0].field_type, "uuid");
    }

    #[test]
    fn load_missing_file() {
        let err = load_service(Path::new("/nonexistent/service.json")).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }

    #[test]
    fn load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = load_service(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn load_requires_name() {
        assert!(load_service_str(r#"{ "models": [] }"#).is_err());
    }
}
