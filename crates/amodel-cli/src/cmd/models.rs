use super::open_store;
use crate::output::{print_json, print_table};
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (_, store) = open_store(root)?;
    let models = store.models();

    if json {
        let value: Vec<serde_json::Value> = models
            .iter()
            .map(|m| {
                serde_json::json!({
                    "id": m.id,
                    "actions": m.actions().count(),
                    "separators": m.separator_count(),
                })
            })
            .collect();
        print_json(&value)?;
        return Ok(());
    }

    if models.is_empty() {
        println!("No action models.");
        return Ok(());
    }

    let rows = models
        .iter()
        .map(|m| {
            vec![
                m.id.clone(),
                m.actions().count().to_string(),
                m.separator_count().to_string(),
            ]
        })
        .collect();
    print_table(&["MODEL", "ACTIONS", "SEPARATORS"], rows);
    Ok(())
}
