use std::fs;
use std::path::Path;

use anyhow::Context;
use ketav_config::Config;

/// Picked up from the working directory when no config file is given
const DEFAULT_CONFIG_FILE: &str = "ketav.json";

/// Config file (explicit or default) with `KETAV_*` overrides applied.
///
/// An explicit path must exist; without any file the env-driven defaults apply.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let default = Path::new(DEFAULT_CONFIG_FILE);
    let path = match path {
        Some(path) => path,
        None if default.exists() => default,
        None => return Ok(Config::new()),
    };

    let mut config = read_config(path)?;
    config.apply_env();
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"speech": {{"rate": 1.5}}}}"#).unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.speech.rate, 1.5);
        assert!(config.speech.enabled);
        assert_eq!(config.speech.preferred_languages, vec!["he", "ar", "en"]);
        assert!(config.dictionary.embedded);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_no_file_uses_defaults() {
        // the crate directory has no ketav.json
        let config = load_config(None).unwrap();
        assert!(config.dictionary.embedded);
        assert!(config.speech.enabled);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/ketav.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/ketav.json"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(read_config(file.path()).is_err());
    }
}
