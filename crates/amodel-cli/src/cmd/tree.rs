use super::{load_catalog, open_store};
use crate::output::print_json;
use amodel_core::sync;
use std::path::Path;

pub fn run(root: &Path, site: &str, namespace: Option<&str>, json: bool) -> anyhow::Result<()> {
    let (config, mut store) = open_store(root)?;
    let namespace = namespace.unwrap_or(&config.namespace);
    let catalog = load_catalog(root, &config)?;
    let actions = catalog.actions_for_site(site)?;

    // never saved, even when the model did not exist yet
    let tree = sync::build_abstract_action_model(&mut store, namespace, site, &actions)?;

    if json {
        print_json(&tree)?;
    } else {
        print!("{}", tree.render());
    }
    Ok(())
}
