//! Site configuration management for `sidelight.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/        # Configuration section definitions
//! │   ├── integration # [[integrations]] tagged entries
//! │   ├── sidebar     # [[integrations.sidebar]]
//! │   └── social      # [[integrations.social]]
//! ├── types/          # Utility types
//! │   ├── error       # ConfigError, ConfigDiagnostics
//! │   └── field       # FieldPath
//! └── mod.rs          # SiteConfig (this file)
//! ```
//!
//! # Fields
//!
//! | Field              | Purpose                                      |
//! |--------------------|----------------------------------------------|
//! | `site`             | Absolute base URL of the deployed site       |
//! | `base`             | Root-relative URL path prefix                |
//! | `integrations`     | Ordered integration entries (docs theme)     |

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

// Re-export from section/
pub use section::{Autogenerate, DocsConfig, Integration, SidebarEntry, SidebarSection, SocialLink};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

fn default_base() -> String {
    "/".to_string()
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sidelight.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Absolute base URL of the deployed site (e.g., "https://example.github.io")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Root-relative URL path prefix (e.g., "/hytale-docker")
    #[serde(default = "default_base")]
    pub base: String,

    /// Ordered integration entries; order determines consumer order
    #[serde(default)]
    pub integrations: Vec<Integration>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: None,
            base: default_base(),
            integrations: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'sidelight init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Set paths and apply CLI options
        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        self.set_root(&root);

        // Derive base from site URL for subdirectory deployments
        // (e.g., GitHub Pages project sites), unless base was set explicitly.
        self.sync_base_from_site();
    }

    /// Derive `base` from the path component of `site`.
    ///
    /// Only applies when `base` is still the default `/`, so an explicit
    /// `base` always wins over the URL path.
    fn sync_base_from_site(&mut self) {
        if self.base != "/" {
            return;
        }
        if let Some(ref url) = self.site
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.base = format!("/{path}");
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    ///
    /// Fields inside `[[integrations]]` tables are buffered during tag
    /// and variant selection, so only top-level typos are reported.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (sidelight.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get CLI arguments reference
    pub const fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Iterate over docs integrations in declaration order.
    pub fn docs_integrations(&self) -> impl Iterator<Item = &DocsConfig> {
        self.integrations.iter().map(Integration::as_docs)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.validate_site(&mut diag);
        self.validate_base(&mut diag);

        if self.integrations.is_empty() {
            diag.hint(
                FieldPath::new("integrations"),
                "no integrations configured; the generator will produce an empty site",
            );
        }
        for integration in &self.integrations {
            integration.validate(&mut diag);
        }

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the `site` base URL.
    ///
    /// # Checks
    /// - valid absolute URL with http/https scheme and host
    /// - no trailing slash (would double up when joined with `base`)
    fn validate_site(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.site else { return };

        section::social::validate_absolute_url(url_str, FieldPath::new("site"), diag);

        if url::Url::parse(url_str).is_ok() && url_str.ends_with('/') {
            diag.warn(
                FieldPath::new("site"),
                "trailing slash will be ignored when joining with `base`".to_string(),
            );
        }
    }

    /// Validate the `base` path prefix.
    ///
    /// # Checks
    /// - begins with `/`
    /// - no trailing slash (except `/` itself)
    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        if !self.base.starts_with('/') {
            diag.error_with_hint(
                FieldPath::new("base"),
                format!("'{}' must begin with '/'", self.base),
                "use a root-relative prefix like \"/my-project\"",
            );
            return;
        }
        if self.base.len() > 1 && self.base.ends_with('/') {
            diag.error_with_hint(
                FieldPath::new("base"),
                format!("'{}' must not end with '/'", self.base),
                format!("write \"{}\"", self.base.trim_end_matches('/')),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[integrations\nbase = \"/\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert!(config.site.is_none());
        assert_eq!(config.base, "/");
        assert!(config.integrations.is_empty());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        // Default root is empty PathBuf, set during config loading
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "base = \"/\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.base, "/");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "site = \"https://example.com\"\nbase = \"/docs\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_base_derived_from_site_url() {
        let mut config =
            test_parse_config("site = \"https://f-gillmann.github.io/hytale-docker\"\n");
        config.sync_base_from_site();
        assert_eq!(config.base, "/hytale-docker");
    }

    #[test]
    fn test_explicit_base_wins_over_site_path() {
        let mut config = test_parse_config(
            "site = \"https://f-gillmann.github.io/hytale-docker\"\nbase = \"/other\"\n",
        );
        config.sync_base_from_site();
        assert_eq!(config.base, "/other");
    }

    #[test]
    fn test_validate_accepts_minimal_config() {
        let config = test_parse_config(
            r#"
site = "https://f-gillmann.github.io"
base = "/hytale-docker"

[[integrations]]
kind = "docs"
title = "Hytale Docker"
"#,
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_base_without_slash() {
        let config = test_parse_config("base = \"docs\"\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must begin with '/'"));
    }

    #[test]
    fn test_validate_rejects_base_trailing_slash() {
        let config = test_parse_config("base = \"/docs/\"\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not end with '/'"));
    }

    #[test]
    fn test_validate_rejects_invalid_site_url() {
        let config = test_parse_config("site = \"not a url\"\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_collects_multiple_errors() {
        let config = test_parse_config(
            r#"
site = "gopher://example.com"
base = "docs"
"#,
        );
        let err = config.validate().unwrap_err();
        let display = err.to_string();
        assert!(display.contains("2"), "expected 2 errors: {display}");
    }

    #[test]
    fn test_roundtrip_identity() {
        let config = test_parse_config(
            r#"
site = "https://f-gillmann.github.io"
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
"#,
        );

        let serialized = toml::to_string(&config).unwrap();
        let reparsed = SiteConfig::from_str(&serialized).unwrap();
        assert_eq!(reparsed.site, config.site);
        assert_eq!(reparsed.base, config.base);
        assert_eq!(reparsed.integrations, config.integrations);
    }
}
