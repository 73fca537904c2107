//! Project initialization command.
//!
//! Creates a new documentation project: starter `sidelight.toml`, the
//! content directories its autogenerated sections reference, and ignore
//! files.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{SiteConfig, SidebarSection};
use crate::log;

/// Default config filename
const CONFIG_FILE: &str = "sidelight.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Root of the content tree the external generator reads.
const CONTENT_DIR: &str = "content";

/// Starter descriptor body. Parses to the canonical structure:
/// one docs integration with four sidebar sections.
const STARTER_CONFIG: &str = r#"# Absolute base URL of the deployed site
site = "https://f-gillmann.github.io"
# Root-relative URL path prefix (derived from the `site` path when omitted)
base = "/hytale-docker"

[[integrations]]
kind = "docs"
title = "Hytale Docker"

[[integrations.social]]
icon = "github"
label = "GitHub"
href = "https://github.com/f-gillmann/hytale-docker"

[[integrations.sidebar]]
label = "Getting Started"
link = "/"

[[integrations.sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }

[[integrations.sidebar]]
label = "Guides"
autogenerate = { directory = "guides" }

[[integrations.sidebar]]
label = "Official Hytale Resources"
items = [
    { label = "Hytale Server Manual", link = "https://support.hytale.com/hc/en-us/articles/45326769420827-Hytale-Server-Manual" },
    { label = "Server Provider Auth Guide", link = "https://support.hytale.com/hc/en-us/articles/45328341414043-Server-Provider-Authentication-Guide" },
]
"#;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `sidelight init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `sidelight init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Create a new documentation project with the starter descriptor
///
/// # Steps
/// 1. Validate target directory
/// 2. Write starter sidelight.toml
/// 3. Create content directories for autogenerated sections
/// 4. Write ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    write_config(root)?;
    create_content_dirs(root)?;
    write_ignore_files(root)?;

    log!("init"; "project initialized successfully");
    Ok(())
}

/// Generate sidelight.toml content with header comments
pub fn generate_config_template() -> String {
    format!(
        "# Sidelight configuration file (v{})\n# https://github.com/sidelight-rs/sidelight\n\n{}",
        env!("CARGO_PKG_VERSION"),
        STARTER_CONFIG
    )
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: directory must be empty (or not exist)
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if !is_empty(root)? {
                bail!(
                    "Current directory is not empty.\n\
                     Use `sidelight init <name>` to create in a new subdirectory."
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

/// Write the starter sidelight.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    let content = generate_config_template();
    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Create content directories referenced by the starter's autogenerated
/// sidebar sections.
pub fn create_content_dirs(root: &Path) -> Result<()> {
    let starter = SiteConfig::from_str(STARTER_CONFIG)?;

    let content_root = root.join(CONTENT_DIR);
    fs::create_dir_all(&content_root).with_context(|| {
        format!("Failed to create directory '{}'", content_root.display())
    })?;

    for docs in starter.docs_integrations() {
        for section in &docs.sidebar {
            if let SidebarSection::Autogenerate { autogenerate, .. } = section {
                let path = content_root.join(&autogenerate.directory);
                fs::create_dir_all(&path)
                    .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
            }
        }
    }

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/dist/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
