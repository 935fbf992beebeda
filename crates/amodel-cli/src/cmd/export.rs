use super::open_store;
use amodel_core::store::ExportFormat;
use std::path::Path;

pub fn run(root: &Path, format: &str) -> anyhow::Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let (_, store) = open_store(root)?;
    let text = store.export(format)?;
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
