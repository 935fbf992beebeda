use super::open_store;
use crate::output::print_json;
use amodel_core::store::import_xml;
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let imported = import_xml(&text)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let (config, mut store) = open_store(root)?;
    if config.store.read_only {
        anyhow::bail!("store is configured read-only; refusing to import");
    }
    let ids: Vec<String> = imported.models.iter().map(|m| m.id.clone()).collect();
    store.document_mut().merge_document(imported);
    if !store.save().context("failed to save action model store")? {
        anyhow::bail!("action model store is temporary; import was not saved");
    }

    if json {
        print_json(&serde_json::json!({ "imported": ids }))?;
    } else {
        for id in &ids {
            println!("  imported: {id}");
        }
        let target = store
            .location()
            .map(|p| p.strip_prefix(root).unwrap_or(p).display().to_string())
            .unwrap_or_default();
        println!("Imported {} model(s) into {target}.", ids.len());
    }
    Ok(())
}
