//! Loading and saving design documents and rule configs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use adforge_core::{Design, RuleConfig, TraversalScope};

/// Read a design document from JSON.
pub fn load_design(path: &Path) -> Result<Design> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse design {}", path.display()))
}

/// Rule thresholds from an optional JSON file; missing keys keep their defaults.
///
/// `recursive` overrides the scope from the file.
pub fn load_rule_config(path: Option<&Path>, recursive: bool) -> Result<RuleConfig> {
    let mut config = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => RuleConfig::default(),
    };

    if recursive {
        config.scope = TraversalScope::Recursive;
    }
    Ok(config)
}

/// Write a design as pretty JSON to `output`, or to stdout when no path is given.
pub fn write_design(design: &Design, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(design)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
