use super::{load_catalog, open_store};
use crate::output::print_json;
use amodel_core::sync;
use anyhow::Context;
use std::path::Path;

pub fn run(
    root: &Path,
    site: &str,
    namespace: Option<&str>,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let (config, mut store) = open_store(root)?;
    let namespace = namespace.unwrap_or(&config.namespace);
    let catalog = load_catalog(root, &config)?;
    let actions = catalog.actions_for_site(site)?;

    let result = sync::build_and_synchronize(&mut store, namespace, site, &actions)
        .with_context(|| format!("failed to synchronize site '{site}'"))?;

    let saved = if result.changed && !dry_run && !config.store.read_only {
        store.save().context("failed to save action model store")?
    } else {
        false
    };
    tracing::debug!(
        model = %result.model.id,
        changed = result.changed,
        saved,
        "synchronized"
    );

    if json {
        let value = serde_json::json!({
            "model": result.model.id,
            "changed": result.changed,
            "saved": saved,
            "tree": result.root,
        });
        print_json(&value)?;
        return Ok(());
    }

    print!("{}", result.root.render());
    match (result.changed, saved) {
        (false, _) => println!("\nModel '{}' is up to date.", result.model.id),
        (true, true) => println!("\nModel '{}' updated and saved.", result.model.id),
        (true, false) => println!("\nModel '{}' changed (not saved).", result.model.id),
    }
    Ok(())
}
