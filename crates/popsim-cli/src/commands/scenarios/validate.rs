use std::path::Path;

use anyhow::Result;
use popsim_scenarios::{load_spec_from_path, validate};
use tracing::info;

pub fn handle(spec: &str) -> Result<()> {
    let path = Path::new(spec);
    let set = load_spec_from_path(path)?;
    validate(&set)?;
    info!("Validated scenario spec {}", spec);
    println!("Scenario spec validated successfully");
    Ok(())
}
