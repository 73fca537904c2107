//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Field paths are dot-separated TOML paths, with `[n]` suffixes for
/// entries inside arrays of tables.
///
/// # Example
///
/// ```ignore
/// diag.error(FieldPath::new("site"), "must be an absolute URL");
/// diag.error(FieldPath::indexed("integrations.sidebar", 2), "duplicate label");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Build a path for the `index`-th entry of an array-of-tables field.
    ///
    /// Each path is reported at most once per diagnostic pass, so leaking
    /// the formatted string keeps `FieldPath` a plain `&'static str` wrapper.
    pub fn indexed(base: &str, index: usize) -> Self {
        Self(Box::leak(format!("{base}[{index}]").into_boxed_str()))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
