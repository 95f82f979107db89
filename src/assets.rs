//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const DASHBOARD: &str = include_str!("../assets/dashboard.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    write_bundled(assets_dir, "dashboard.css", &[BASE, DASHBOARD])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_css_assets() {
        // Arrange
        let dir = tempfile::tempdir().expect("Should create temp directory");

        // Act
        write_css_assets(dir.path()).expect("Should write assets");

        // Assert
        let dashboard = fs::read_to_string(dir.path().join("dashboard.css"))
            .expect("dashboard.css should exist");
        assert!(dashboard.contains(".container"), "Base styles bundled in");
        assert!(dashboard.contains(".badge"), "Dashboard styles bundled in");
        assert!(dir.path().join("markdown.css").exists());
    }
}
