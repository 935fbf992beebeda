pub mod config;
pub mod export;
pub mod import_xml;
pub mod init;
pub mod models;
pub mod sync;
pub mod tree;

use amodel_core::{catalog::Catalog, config::Config, store::ActionModelStore};
use anyhow::Context;
use std::path::Path;

/// Load the config and open the store it points at.
pub(crate) fn open_store(root: &Path) -> anyhow::Result<(Config, ActionModelStore)> {
    let config = Config::load(root).context("failed to load config")?;
    let store = ActionModelStore::open(config.store_path(root));
    if store.is_temporary() {
        eprintln!("warning: action model store could not be read; changes will not be saved");
    }
    Ok((config, store))
}

pub(crate) fn load_catalog(root: &Path, config: &Config) -> anyhow::Result<Catalog> {
    let path = config.catalog_path(root);
    Catalog::load(&path).with_context(|| format!("failed to load catalog {}", path.display()))
}
