//! Sidebar navigation structure.
//!
//! The sidebar is an ordered sequence of sections; author order determines
//! rendered navigation order. Each section is one of three shapes,
//! distinguished by which fields are present:
//!
//! ```toml
//! [[integrations.sidebar]]
//! label = "Getting Started"
//! link = "/"
//!
//! [[integrations.sidebar]]
//! label = "Reference"
//! autogenerate = { directory = "reference" }
//!
//! [[integrations.sidebar]]
//! label = "Links"
//! items = [{ label = "Manual", link = "https://example.com/manual" }]
//! ```

use crate::config::section::social::validate_absolute_url;
use crate::config::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One sidebar section.
///
/// Untagged: the variant is picked by field shape. `Autogenerate` and
/// `Group` come first so a table carrying `autogenerate` or `items` can
/// never fall through to the plain `Link` variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarSection {
    /// Group whose entries are enumerated from a content directory
    /// by the external generator at build time.
    Autogenerate {
        label: String,
        autogenerate: Autogenerate,
    },

    /// Group with manually listed entries.
    Group {
        label: String,
        items: Vec<SidebarEntry>,
    },

    /// Single navigation link.
    Link { label: String, link: String },
}

/// Directory expansion directive for an autogenerated group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Autogenerate {
    /// Content directory to enumerate, relative to the content root.
    pub directory: String,
}

/// A single entry inside a manual group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    pub label: String,
    pub link: String,
}

impl SidebarSection {
    /// Display label of this section.
    pub fn label(&self) -> &str {
        match self {
            Self::Autogenerate { label, .. } | Self::Group { label, .. } | Self::Link { label, .. } => {
                label
            }
        }
    }

    /// Variant name for summaries and logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Autogenerate { .. } => "autogenerated",
            Self::Group { .. } => "group",
            Self::Link { .. } => "link",
        }
    }
}

/// Validate an ordered sidebar sequence.
///
/// # Checks
/// - labels non-empty and unique across sibling sections
/// - links are absolute http/https URLs or root-relative paths
/// - autogenerate directories are relative, without `..` components
/// - manual group items follow the same label/link rules within the group
pub fn validate_sidebar(sections: &[SidebarSection], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();

    for (index, section) in sections.iter().enumerate() {
        let field = FieldPath::indexed("integrations.sidebar", index);
        validate_label(section.label(), &mut seen, field, diag);

        match section {
            SidebarSection::Link { link, .. } => validate_link(link, field, diag),
            SidebarSection::Autogenerate { autogenerate, .. } => {
                validate_directory(&autogenerate.directory, field, diag);
            }
            SidebarSection::Group { items, .. } => validate_group(items, index, field, diag),
        }
    }
}

/// Validate a non-empty, sibling-unique label.
fn validate_label(
    label: &str,
    seen: &mut FxHashSet<String>,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    if label.trim().is_empty() {
        diag.error(field, "label must not be empty");
        return;
    }
    if !seen.insert(label.to_string()) {
        diag.error(field, format!("duplicate label '{}'", label));
    }
}

/// Validate a navigation link: absolute http/https URL or root-relative path.
fn validate_link(link: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if link.starts_with('/') {
        return;
    }
    if link.contains("://") {
        validate_absolute_url(link, field, diag);
        return;
    }
    diag.error_with_hint(
        field,
        format!("invalid link '{}'", link),
        "use an absolute URL (https://...) or a root-relative path (/...)",
    );
}

/// Validate an autogenerate directory path.
fn validate_directory(directory: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if directory.trim().is_empty() {
        diag.error(field, "autogenerate.directory must not be empty");
        return;
    }
    if directory.starts_with('/') {
        diag.error_with_hint(
            field,
            format!("autogenerate.directory '{}' must be relative", directory),
            "paths are resolved against the content root",
        );
        return;
    }
    let has_parent_refs = Path::new(directory)
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir));
    if has_parent_refs {
        diag.error(
            field,
            format!(
                "autogenerate.directory '{}' must not contain '..'",
                directory
            ),
        );
    }
}

/// Validate a manual group's items.
fn validate_group(
    items: &[SidebarEntry],
    section_index: usize,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    if items.is_empty() {
        diag.hint(field, "group has no items and will render empty");
    }

    let base = format!("integrations.sidebar[{section_index}].items");
    let mut seen = FxHashSet::default();
    for (index, item) in items.iter().enumerate() {
        let item_field = FieldPath::indexed(&base, index);
        validate_label(&item.label, &mut seen, item_field, diag);
        validate_link(&item.link, item_field, diag);
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_sections(toml: &str) -> Vec<SidebarSection> {
        #[derive(Deserialize)]
        struct Wrapper {
            sidebar: Vec<SidebarSection>,
        }
        toml::from_str::<Wrapper>(toml).unwrap().sidebar
    }

    #[test]
    fn test_parse_link_variant() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Getting Started"
link = "/"
"#,
        );
        assert_eq!(
            sections,
            vec![SidebarSection::Link {
                label: "Getting Started".into(),
                link: "/".into(),
            }]
        );
    }

    #[test]
    fn test_parse_autogenerate_variant() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }
"#,
        );
        assert_eq!(
            sections,
            vec![SidebarSection::Autogenerate {
                label: "Reference".into(),
                autogenerate: Autogenerate {
                    directory: "reference".into()
                },
            }]
        );
    }

    #[test]
    fn test_parse_group_variant() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Links"
items = [
    { label = "Manual", link = "https://example.com/manual" },
    { label = "Guide", link = "/guide" },
]
"#,
        );
        assert_eq!(sections.len(), 1);
        match &sections[0] {
            SidebarSection::Group { label, items } => {
                assert_eq!(label, "Links");
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].link, "/guide");
            }
            other => panic!("expected group, got {}", other.kind()),
        }
    }

    #[test]
    fn test_valid_sidebar_passes() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Getting Started"
link = "/"

[[sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }

[[sidebar]]
label = "Links"
items = [{ label = "Manual", link = "https://example.com/manual" }]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert!(diag.is_empty(), "{:?}", diag.errors());
    }

    #[test]
    fn test_duplicate_sibling_labels() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Guides"
link = "/"

[[sidebar]]
label = "Guides"
autogenerate = { directory = "guides" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("duplicate label"));
        assert_eq!(diag.errors()[0].field.as_str(), "integrations.sidebar[1]");
    }

    #[test]
    fn test_duplicate_labels_allowed_across_groups() {
        // Uniqueness is per sibling scope: a group item may reuse a
        // top-level section label.
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Manual"
link = "/"

[[sidebar]]
label = "Links"
items = [{ label = "Manual", link = "https://example.com/manual" }]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert!(diag.is_empty(), "{:?}", diag.errors());
    }

    #[test]
    fn test_empty_label_rejected() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = ""
link = "/"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_bad_link_rejected() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Broken"
link = "docs/page.html"
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("invalid link"));
    }

    #[test]
    fn test_absolute_directory_rejected() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Reference"
autogenerate = { directory = "/reference" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("must be relative"));
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Reference"
autogenerate = { directory = "../outside" }
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_duplicate_item_labels_in_group() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Links"
items = [
    { label = "Manual", link = "https://example.com/a" },
    { label = "Manual", link = "https://example.com/b" },
]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        validate_sidebar(&sections, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "integrations.sidebar[0].items[1]"
        );
    }

    #[test]
    fn test_roundtrip_preserves_variants() {
        let sections = parse_sections(
            r#"
[[sidebar]]
label = "Getting Started"
link = "/"

[[sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }

[[sidebar]]
label = "Links"
items = [{ label = "Manual", link = "https://example.com/manual" }]
"#,
        );

        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            sidebar: Vec<SidebarSection>,
        }
        let serialized = toml::to_string(&Wrapper {
            sidebar: sections.clone(),
        })
        .unwrap();
        let reparsed: Wrapper = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.sidebar, sections);
    }
}
