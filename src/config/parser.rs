//! Generic TOML file parsing with file-path context.
//!
//! Read and parse failures are reported as [`ScriptseqError`] variants so
//! that [`user_friendly_error`](crate::core::user_friendly_error) can attach
//! suggestions, and are wrapped in an `anyhow` context naming the file.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::ScriptseqError;

/// Read a TOML file and deserialize it into `T`.
///
/// # Errors
///
/// - [`ScriptseqError::ManifestNotFound`] if `path` does not exist
/// - [`ScriptseqError::IoError`] for any other read failure
/// - [`ScriptseqError::ManifestParseError`] if the TOML is invalid or does
///   not match `T`
pub async fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScriptseqError::ManifestNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        Err(e) => {
            return Err(ScriptseqError::IoError(e))
                .with_context(|| format!("Failed to read config file: {}", path.display()));
        }
    };

    parse_config_str(&content, path)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML text; `origin` is only used in the error.
pub fn parse_config_str<T>(content: &str, origin: &Path) -> Result<T, ScriptseqError>
where
    T: serde::de::DeserializeOwned,
{
    toml::from_str(content).map_err(|e| ScriptseqError::ManifestParseError {
        file: origin.display().to_string(),
        reason: e.to_string().trim_end().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct TestConfig {
        name: String,
        value: i32,
    }

    #[tokio::test]
    async fn test_parse_config() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("test.toml");
        tokio::fs::write(&config_path, "name = \"test\"\nvalue = 42\n").await.unwrap();

        let config: TestConfig = parse_config(&config_path).await.unwrap();
        assert_eq!(config.name, "test");
        assert_eq!(config.value, 42);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope.toml");

        let err = parse_config::<TestConfig>(&missing).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScriptseqError>(),
            Some(ScriptseqError::ManifestNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_toml_names_file() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("broken.toml");
        tokio::fs::write(&config_path, "name = [unclosed").await.unwrap();

        let err = parse_config::<TestConfig>(&config_path).await.unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
        assert!(matches!(
            err.downcast_ref::<ScriptseqError>(),
            Some(ScriptseqError::ManifestParseError { .. })
        ));
    }
}
