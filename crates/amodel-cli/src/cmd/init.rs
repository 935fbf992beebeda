use amodel_core::{config::Config, io, paths, store::StoreDocument};
use anyhow::Context;
use std::path::Path;

const EMPTY_CATALOG: &str = "# Actions declared by the application.\n\
# - id: file.open\n\
#   path: global-menus/MenuFile/Open\n\
#   group-hint: File.Open\n\
actions: []\n";

pub fn run(root: &Path, namespace: Option<&str>) -> anyhow::Result<()> {
    let namespace = match namespace {
        Some(ns) => ns.to_string(),
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string()),
    };
    paths::validate_model_part(&namespace)
        .with_context(|| format!("'{namespace}' cannot be used as a namespace"))?;

    println!("Initializing action models in: {}", root.display());

    let dir = paths::amodel_dir(root);
    io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let config = if paths::config_path(root).exists() {
        println!("  exists:  {}", paths::CONFIG_FILE);
        Config::load(root).context("failed to load config")?
    } else {
        let cfg = Config::new(&namespace);
        cfg.save(root).context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
        cfg
    };

    let store = serde_yaml::to_string(&StoreDocument::default())?;
    report(root, &config.store_path(root), store.as_bytes())?;
    report(root, &config.catalog_path(root), EMPTY_CATALOG.as_bytes())?;

    Ok(())
}

fn report(root: &Path, path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let created = io::write_if_missing(path, data)
        .with_context(|| format!("failed to write {}", path.display()))?;
    let shown = path.strip_prefix(root).unwrap_or(path).display();
    if created {
        println!("  created: {shown}");
    } else {
        println!("  exists:  {shown}");
    }
    Ok(())
}
