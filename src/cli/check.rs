//! Check command implementation.
//!
//! The descriptor is already parsed and validated by the time this runs;
//! this command reports a summary and optionally verifies that
//! autogenerate directories exist under the content root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::args::CheckArgs;
use crate::config::{SidebarSection, SiteConfig};
use crate::log;
use crate::utils::{plural_count, plural_s};

/// An autogenerate directory that does not exist under the content root.
#[derive(Debug)]
pub struct MissingDirectory {
    /// Sidebar section label that references the directory.
    pub label: String,
    /// Directory as written in the config.
    pub directory: String,
    /// Absolute path that was checked.
    pub searched: PathBuf,
}

/// Execute check command
pub fn run_check(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    print_summary(config);

    if !args.directories {
        return Ok(());
    }

    let content = config
        .cli
        .and_then(|cli| cli.content.clone())
        .unwrap_or_else(|| PathBuf::from("content"));
    let content_root = config.root_join(content);

    let missing = collect_missing_directories(config, &content_root);
    if missing.is_empty() {
        log!("check"; "all autogenerate directories exist");
        return Ok(());
    }

    print_missing(&missing);

    let summary = format!(
        "{} missing autogenerate director{}",
        missing.len(),
        if missing.len() == 1 { "y" } else { "ies" }
    );
    if args.warn_only {
        log!("warning"; "{} (ignored with --warn-only)", summary);
        return Ok(());
    }
    anyhow::bail!("found {}", summary);
}

/// Log a summary of the descriptor contents.
fn print_summary(config: &SiteConfig) {
    log!("check"; "{}", plural_count(config.integrations.len(), "integration"));

    for docs in config.docs_integrations() {
        let links = count_kind(&docs.sidebar, "link");
        let autogenerated = count_kind(&docs.sidebar, "autogenerated");
        let groups = count_kind(&docs.sidebar, "group");

        log!(
            "check";
            "'{}': {} ({} link{}, {} autogenerated, {} group{}), {}",
            docs.title,
            plural_count(docs.sidebar.len(), "sidebar section"),
            links,
            plural_s(links),
            autogenerated,
            groups,
            plural_s(groups),
            plural_count(docs.social.len(), "social link")
        );
    }
}

fn count_kind(sections: &[SidebarSection], kind: &str) -> usize {
    sections.iter().filter(|s| s.kind() == kind).count()
}

/// Collect autogenerate directories that do not exist under `content_root`.
pub fn collect_missing_directories(
    config: &SiteConfig,
    content_root: &Path,
) -> Vec<MissingDirectory> {
    let mut missing = Vec::new();

    for docs in config.docs_integrations() {
        for section in &docs.sidebar {
            let SidebarSection::Autogenerate { label, autogenerate } = section else {
                continue;
            };
            let searched = content_root.join(&autogenerate.directory);
            let is_dir = fs::metadata(&searched).map(|m| m.is_dir()).unwrap_or(false);
            if !is_dir {
                missing.push(MissingDirectory {
                    label: label.clone(),
                    directory: autogenerate.directory.clone(),
                    searched,
                });
            }
        }
    }

    missing
}

/// Print missing directories grouped by sidebar section.
fn print_missing(missing: &[MissingDirectory]) {
    eprintln!();
    eprintln!(
        "{} {}",
        "directories".red().bold(),
        format!("({} missing)", missing.len()).dimmed()
    );
    for entry in missing {
        eprintln!("{}{}{}", "[".dimmed(), entry.label.cyan(), "]".dimmed());
        eprintln!(
            "{} `{}` not found {}",
            "→".red(),
            entry.directory,
            format!("(searched at {})", entry.searched.display()).dimmed()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn sample_config() -> SiteConfig {
        test_parse_config(
            r#"
[[integrations]]
kind = "docs"
title = "Docs"

[[integrations.sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }

[[integrations.sidebar]]
label = "Guides"
autogenerate = { directory = "guides" }

[[integrations.sidebar]]
label = "Getting Started"
link = "/"
"#,
        )
    }

    #[test]
    fn test_all_directories_present() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("reference")).unwrap();
        std::fs::create_dir_all(temp.path().join("guides")).unwrap();

        let missing = collect_missing_directories(&sample_config(), temp.path());
        assert!(missing.is_empty());
    }

    #[test]
    fn test_missing_directory_reported() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("reference")).unwrap();

        let missing = collect_missing_directories(&sample_config(), temp.path());
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].label, "Guides");
        assert_eq!(missing[0].directory, "guides");
        assert_eq!(missing[0].searched, temp.path().join("guides"));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("reference")).unwrap();
        std::fs::write(temp.path().join("guides"), "not a dir").unwrap();

        let missing = collect_missing_directories(&sample_config(), temp.path());
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].directory, "guides");
    }

    #[test]
    fn test_static_links_never_checked() {
        // Only autogenerated sections touch the filesystem
        let temp = TempDir::new().unwrap();
        let config = test_parse_config(
            r#"
[[integrations]]
kind = "docs"
title = "Docs"

[[integrations.sidebar]]
label = "Getting Started"
link = "/"
"#,
        );
        let missing = collect_missing_directories(&config, temp.path());
        assert!(missing.is_empty());
    }
}
