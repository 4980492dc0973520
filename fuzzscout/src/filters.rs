use std::collections::HashSet;
use std::path::Path;

/// An inclusion filter over file extensions.
///
/// Entries are stored verbatim and must include the leading dot
/// (e.g. `.go`); comparison is exact and case-sensitive. An empty set
/// includes every file. Built once at startup and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct ExtensionSet {
    extensions: HashSet<String>,
}

impl ExtensionSet {
    /// Parses a comma-separated extension list (e.g. `.go,.txt`).
    /// Whitespace around entries is trimmed and empty entries dropped.
    pub fn parse(list: &str) -> Self {
        let extensions = list
            .split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(str::to_string)
            .collect();
        Self { extensions }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Whether a file passes the filter. Files without an extension only
    /// pass when the set is empty.
    pub fn includes(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        match path.extension() {
            Some(ext) => {
                let dotted = format!(".{}", ext.to_string_lossy());
                self.extensions.contains(&dotted)
            }
            None => false,
        }
    }
}
