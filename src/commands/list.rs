//! Implementation of `daydial list`.

use anyhow::Result;

use crate::config::Config;
use crate::sketches::SketchRegistry;

/// One line per sketch: name and canvas size.
pub fn list_lines(registry: &SketchRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|(name, (w, h))| format!("{:<16} {}x{}", name, w, h))
        .collect()
}

pub fn handle_list_command(config: &Config) -> Result<()> {
    let registry = SketchRegistry::with_defaults(config)?;
    for line in list_lines(&registry) {
        println!("{}", line);
    }
    Ok(())
}
