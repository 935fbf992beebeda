use crate::action_path::{ResourceResolver, TableResolver};
use crate::descriptor::ActionDescriptor;
use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// ActionDeclaration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ActionDeclaration {
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub former_ids: Vec<String>,
    pub path: String,
    #[serde(default)]
    pub group_hint: Option<String>,
    #[serde(default = "default_true")]
    pub persistent: bool,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystroke: Option<String>,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Actions registered by an application, plus the string table used to
/// localize their path segments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub actions: Vec<ActionDeclaration>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub strings: HashMap<String, String>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_yaml::from_str(&data)?;
        catalog.check_unique()?;
        Ok(catalog)
    }

    fn check_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for action in &self.actions {
            if !seen.insert(action.id.as_str()) {
                return Err(ModelError::DuplicateAction(action.id.clone()));
            }
        }
        Ok(())
    }

    /// Build every declared action.
    pub fn descriptors(&self) -> Result<Vec<ActionDescriptor>> {
        let resolver: Arc<dyn ResourceResolver> = Arc::new(TableResolver::new(self.strings.clone()));
        self.actions
            .iter()
            .map(|d| {
                ActionDescriptor::builder(&d.id, &d.path)
                    .former_ids(d.former_ids.iter().cloned())
                    .group_hint(d.group_hint.as_deref())
                    .persistent(d.persistent)
                    .available(d.available)
                    .keystroke(d.keystroke.clone())
                    .resolver(Arc::clone(&resolver))
                    .build()
            })
            .collect()
    }

    /// The declared actions whose path starts at `site`.
    pub fn actions_for_site(&self, site: &str) -> Result<Vec<ActionDescriptor>> {
        Ok(self
            .descriptors()?
            .into_iter()
            .filter(|a| a.path().site() == Some(site))
            .collect())
    }

    /// Distinct sites, in first-declared order.
    pub fn sites(&self) -> Result<Vec<String>> {
        let mut sites: Vec<String> = Vec::new();
        for action in self.descriptors()? {
            if let Some(site) = action.path().site() {
                if !sites.iter().any(|s| s == site) {
                    sites.push(site.to_string());
                }
            }
        }
        Ok(sites)
    }
}
