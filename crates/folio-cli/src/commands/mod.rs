pub mod check;
pub mod run;
pub mod sections;
pub mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use folio_core::Portfolio;

/// Load the portfolio content, falling back to the built-in profile
pub fn load_portfolio(content_path: Option<PathBuf>) -> Result<Portfolio> {
    match content_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading portfolio content");
            Portfolio::load(&path)
                .with_context(|| format!("failed to load content from {}", path.display()))
        }
        None => {
            tracing::debug!("no content file configured; using the built-in profile");
            Ok(Portfolio::default())
        }
    }
}
