use crate::error::{ModelError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const AMODEL_DIR: &str = ".amodel";
pub const CONFIG_FILE: &str = ".amodel/config.yaml";
pub const STORE_FILE: &str = ".amodel/action-models.yaml";
pub const CATALOG_FILE: &str = ".amodel/actions.yaml";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn amodel_dir(root: &Path) -> PathBuf {
    root.join(AMODEL_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a configured file relative to the project root. Absolute paths are
/// taken as-is.
pub fn resolve(root: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

// ---------------------------------------------------------------------------
// Model ids
// ---------------------------------------------------------------------------

static MODEL_PART_RE: OnceLock<Regex> = OnceLock::new();

fn model_part_re() -> &'static Regex {
    MODEL_PART_RE.get_or_init(|| Regex::new(r"^[^:\s]+$").unwrap())
}

pub fn validate_model_part(part: &str) -> Result<()> {
    if !model_part_re().is_match(part) {
        return Err(ModelError::InvalidModelPart(part.to_string()));
    }
    Ok(())
}

/// The stable id of an action model: `"{namespace}:{site}"`.
pub fn model_id(namespace: &str, site: &str) -> Result<String> {
    validate_model_part(namespace)?;
    validate_model_part(site)?;
    Ok(format!("{namespace}:{site}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
