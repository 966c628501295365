//! Startup-time template loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use handlebars::Handlebars;
use tracing::debug;

/// Registers every `*.hbs` file in `dir` under its file stem. The home page
/// expects a template named `index`.
pub fn load_templates(dir: &Path) -> Result<Handlebars<'static>> {
    let mut registry = Handlebars::new();

    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading template directory {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("listing template directory {}", dir.display()))?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("hbs") {
            continue;
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("template name is not valid UTF-8: {}", path.display()))?
            .to_string();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading template {}", path.display()))?;
        registry
            .register_template_string(&name, content)
            .with_context(|| format!("registering template {name}"))?;
        debug!(template = %name, "registered template");
    }

    Ok(registry)
}
