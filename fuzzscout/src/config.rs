use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::filters::ExtensionSet;

/// Configuration for the search operation
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// The fuzzy pattern to search for (case-sensitive)
    pub pattern: String,

    /// The root directory to start searching from
    pub root_path: PathBuf,

    /// Number of scan workers to run in parallel
    pub worker_count: NonZeroUsize,

    /// File extensions to include; empty means no filtering
    pub extensions: ExtensionSet,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            pattern: String::new(),
            root_path: PathBuf::from("."),
            worker_count: NonZeroUsize::new(num_cpus::get()).unwrap(),
            extensions: ExtensionSet::default(),
        }
    }
}

impl SearchConfig {
    /// Creates a new configuration with the given pattern and root path
    pub fn new(pattern: impl Into<String>, root_path: impl Into<PathBuf>) -> Self {
        SearchConfig {
            pattern: pattern.into(),
            root_path: root_path.into(),
            ..Default::default()
        }
    }

    /// Builder method to set the number of scan workers
    pub fn with_worker_count(mut self, count: NonZeroUsize) -> Self {
        self.worker_count = count;
        self
    }

    /// Builder method to set the extension filter
    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }
}
