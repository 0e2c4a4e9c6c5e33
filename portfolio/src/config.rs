//! Content file loading.
//!
//! Content files are JSON or TOML, picked by extension. Anything else is
//! rejected up front instead of guessing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use portfolio_leptos::types::SiteContent;
use tracing::debug;

/// Supported content file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Format implied by the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

/// Parse content text in the given format.
pub fn parse_content(text: &str, format: Format) -> Result<SiteContent> {
    let content = match format {
        Format::Json => serde_json::from_str(text).context("invalid JSON content")?,
        Format::Toml => toml::from_str(text).context("invalid TOML content")?,
    };
    Ok(content)
}

/// Read and parse a content file.
pub fn load_content(path: &Path) -> Result<SiteContent> {
    let Some(format) = Format::from_path(path) else {
        bail!(
            "unsupported content file {} (expected .json or .toml)",
            path.display()
        );
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read content file {}", path.display()))?;
    let content = parse_content(&text, format)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    debug!(
        path = %path.display(),
        projects = content.projects.len(),
        skills = content.skills.len(),
        "loaded content file"
    );
    Ok(content)
}
