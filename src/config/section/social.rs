//! Social link entries for the docs integration.
//!
//! Each entry renders as an icon button in the generated site header.
//! The icon identifier must name an icon the external generator ships.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Icon identifiers recognized by the external docs generator.
///
/// Sorted for binary search.
pub const KNOWN_ICONS: &[&str] = &[
    "bitbucket",
    "blueSky",
    "codeberg",
    "discord",
    "discourse",
    "email",
    "facebook",
    "github",
    "gitlab",
    "gitter",
    "instagram",
    "linkedin",
    "mastodon",
    "matrix",
    "patreon",
    "reddit",
    "rss",
    "signal",
    "slack",
    "stackOverflow",
    "telegram",
    "threads",
    "twitch",
    "twitter",
    "x.com",
    "youtube",
];

/// A social media link shown in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon identifier (e.g., "github", "discord").
    pub icon: String,

    /// Accessible label for the link.
    pub label: String,

    /// Absolute URL of the profile or channel.
    pub href: String,
}

impl SocialLink {
    /// Validate a single social link.
    ///
    /// # Checks
    /// - `icon` names a known icon identifier
    /// - `label` is non-empty
    /// - `href` is an absolute http/https URL with a host
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if KNOWN_ICONS.binary_search(&self.icon.as_str()).is_err() {
            diag.error_with_hint(
                FieldPath::indexed("integrations.social", index),
                format!("unknown icon '{}'", self.icon),
                format!("known icons include: {}", sample_icons()),
            );
        }

        if self.label.trim().is_empty() {
            diag.error(
                FieldPath::indexed("integrations.social", index),
                "label must not be empty",
            );
        }

        validate_absolute_url(
            &self.href,
            FieldPath::indexed("integrations.social", index),
            diag,
        );
    }
}

/// Validate that a string is an absolute http/https URL with a host.
///
/// Shared by social links, the `site` field, and absolute sidebar links.
pub fn validate_absolute_url(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

/// Short sample of known icons for error hints.
fn sample_icons() -> String {
    format!(
        "{}, ... ({} total)",
        KNOWN_ICONS[..6].join(", "),
        KNOWN_ICONS.len()
    )
}

// ============================================================================
// tests
// ============================================================================
