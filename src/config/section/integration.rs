//! Integration descriptors.
//!
//! Integrations are an ordered array of tables, tagged by `kind`. The
//! only recognized kind is `docs`: the documentation theme that renders
//! the site header, social icons, and sidebar navigation.
//!
//! # Example
//!
//! ```toml
//! [[integrations]]
//! kind = "docs"
//! title = "Hytale Docker"
//!
//! [[integrations.social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/f-gillmann/hytale-docker"
//! ```

use super::sidebar::{SidebarSection, validate_sidebar};
use super::social::SocialLink;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// One entry of the `integrations` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Integration {
    /// Documentation theme integration.
    Docs(DocsConfig),
}

impl Integration {
    /// The docs configuration carried by this integration.
    pub const fn as_docs(&self) -> &DocsConfig {
        match self {
            Self::Docs(docs) => docs,
        }
    }

    /// Validate this integration entry.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self {
            Self::Docs(docs) => docs.validate(diag),
        }
    }
}

/// Configuration of the documentation theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Site title shown in the header and page titles.
    pub title: String,

    /// Social links rendered as header icons.
    #[serde(default)]
    pub social: Vec<SocialLink>,

    /// Sidebar navigation sections, in render order.
    #[serde(default)]
    pub sidebar: Vec<SidebarSection>,
}

impl DocsConfig {
    /// Validate the docs theme configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(
                FieldPath::new("integrations.title"),
                "title must not be empty",
            );
        }

        for (index, link) in self.social.iter().enumerate() {
            link.validate(index, diag);
        }

        if self.sidebar.is_empty() {
            diag.hint(
                FieldPath::new("integrations.sidebar"),
                "no sidebar configured; the generator derives navigation from content order",
            );
        }
        validate_sidebar(&self.sidebar, diag);
    }
}

// ============================================================================
// tests
// ============================================================================
