use crate::error::{ModelError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// StoreConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_file")]
    pub file: String,
    /// Never write the store back, even after a change.
    #[serde(default)]
    pub read_only: bool,
}

fn default_store_file() -> String {
    paths::STORE_FILE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: default_store_file(),
            read_only: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub namespace: String,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default = "default_catalog")]
    pub catalog: String,
}

fn default_version() -> u32 {
    1
}

fn default_catalog() -> String {
    paths::CATALOG_FILE.to_string()
}

impl Config {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            version: 1,
            namespace: namespace.into(),
            store: StoreConfig::default(),
            catalog: default_catalog(),
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(ModelError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn store_path(&self, root: &Path) -> std::path::PathBuf {
        paths::resolve(root, &self.store.file)
    }

    pub fn catalog_path(&self, root: &Path) -> std::path::PathBuf {
        paths::resolve(root, &self.catalog)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self, root: &Path) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if paths::validate_model_part(&self.namespace).is_err() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "namespace '{}' cannot be used in a model id (empty, ':' or whitespace)",
                    self.namespace
                ),
            });
        }

        let store = Path::new(&self.store.file);
        if store.is_absolute() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "store file '{}' is absolute; it will not move with the project",
                    self.store.file
                ),
            });
        } else if !store.starts_with(paths::AMODEL_DIR) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "store file '{}' lives outside {}/",
                    self.store.file,
                    paths::AMODEL_DIR
                ),
            });
        }

        if !self.catalog_path(root).exists() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("catalog '{}' does not exist", self.catalog),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::new("app.desktop");
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.namespace, "app.desktop");
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.store.file, paths::STORE_FILE);
        assert!(!parsed.store.read_only);
    }

    #[test]
    fn minimal_yaml_fills_defaults() {
        let parsed: Config = serde_yaml::from_str("namespace: ns\n").unwrap();
        assert_eq!(parsed.version, 1);
        assert_eq!(parsed.catalog, paths::CATALOG_FILE);
        assert_eq!(parsed.store.file, paths::STORE_FILE);
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(ModelError::NotInitialized)
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::new("ns");
        cfg.store.read_only = true;
        cfg.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert!(loaded.store.read_only);
    }

    #[test]
    fn validate_flags_bad_namespace_as_error() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::new("bad:ns");
        let warnings = cfg.validate(dir.path());
        assert!(warnings.iter().any(|w| w.level == WarnLevel::Error));
    }

    #[test]
    fn validate_warns_on_store_outside_dir_and_missing_catalog() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::new("ns");
        cfg.store.file = "elsewhere/store.yaml".to_string();
        let warnings = cfg.validate(dir.path());
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.level == WarnLevel::Warning));
    }

    #[test]
    fn validate_clean_config() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(paths::AMODEL_DIR)).unwrap();
        std::fs::write(dir.path().join(paths::CATALOG_FILE), "actions: []\n").unwrap();
        let cfg = Config::new("ns");
        assert!(cfg.validate(dir.path()).is_empty());
    }
}
