use crate::config::models::FileConfig;
use crate::constants;
use crate::error::Error;
use crate::fs::{FileSystem, OsFileSystem};
use std::path::PathBuf;

pub struct ConfigManager<F: FileSystem> {
    fs: F,
    config_dir: PathBuf,
}

impl ConfigManager<OsFileSystem> {
    /// Creates a new `ConfigManager` with the default filesystem and config directory.
    ///
    /// `SEARCH_RADAR_CONFIG_DIR` takes precedence over `~/.config/search-radar`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, Error> {
        let config_dir = match std::env::var(constants::ENV_CONFIG_DIR) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => get_config_dir()?,
        };
        Ok(Self {
            fs: OsFileSystem,
            config_dir,
        })
    }
}

impl<F: FileSystem> ConfigManager<F> {
    pub const fn with_fs(fs: F, config_dir: PathBuf) -> Self {
        Self { fs, config_dir }
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }

    /// Loads `config.toml`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<FileConfig, Error> {
        let config_path = self.config_path();
        if !self.fs.is_file(&config_path) {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(FileConfig::default());
        }
        let content = self.fs.read_to_string(&config_path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("failed to parse {}: {e}", config_path.display()))
        })
    }
}

/// Default configuration directory, `~/.config/search-radar`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf, Error> {
    let home_dir = dirs::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
    Ok(home_dir.join(".config").join(constants::CONFIG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::path::Path;

    struct MemoryFs(HashMap<PathBuf, String>);

    impl FileSystem for MemoryFs {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn is_file(&self, path: &Path) -> bool {
            self.0.contains_key(path)
        }
    }

    fn manager_with(content: Option<&str>) -> ConfigManager<MemoryFs> {
        let dir = PathBuf::from("/cfg");
        let mut files = HashMap::new();
        if let Some(content) = content {
            files.insert(dir.join("config.toml"), content.to_string());
        }
        ConfigManager::with_fs(MemoryFs(files), dir)
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = manager_with(None).load().unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_loads_all_keys() {
        let config = manager_with(Some(
            "base_url = \"https://radar.example.com\"\n\
             timeout_secs = 5\n\
             signon_command = \"/usr/bin/curl\"\n\
             access_token = \"abc\"\n",
        ))
        .load()
        .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://radar.example.com"));
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.signon_command.as_deref(), Some("/usr/bin/curl"));
        assert_eq!(config.access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let err = manager_with(Some("timeout_secs = \"soon\"")).load().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = manager_with(Some("base_uri = \"x\"")).load().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
