use std::fmt;
use std::path::PathBuf;

/// A single matching line found by a scan worker.
///
/// Created once on a positive match and owned by the reporter from then
/// on; line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// The file the match was found in
    pub path: PathBuf,
    /// The 1-based line number of the matching line
    pub line_number: usize,
    /// The content of the matching line, without the trailing newline
    pub line_content: String,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found in {}:{}: {}",
            self.path.display(),
            self.line_number,
            self.line_content
        )
    }
}
