use crossbeam_channel::{Receiver, Sender};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::matcher::PatternMatcher;
use crate::results::SearchResult;

const BUFFER_CAPACITY: usize = 8192; // Initial buffer size for reading files

/// Scans individual files line by line against a pattern matcher.
#[derive(Debug, Clone)]
pub struct FileScanner {
    matcher: PatternMatcher,
}

impl FileScanner {
    pub fn new(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    /// Scans one file, sending a result for every matching line.
    ///
    /// Line numbers are 1-based and strictly increasing; the trailing
    /// `\n`/`\r\n` is stripped from the reported content. The file handle
    /// is released when this returns, normally or on error. A send may
    /// block while the reporter catches up.
    pub fn scan_file(&self, path: &Path, results: &Sender<SearchResult>) -> io::Result<()> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(BUFFER_CAPACITY, file);
        let mut line_buffer = String::with_capacity(256);
        let mut line_number = 0;

        while reader.read_line(&mut line_buffer)? > 0 {
            line_number += 1;
            let content = trim_line_ending(&line_buffer);
            if self.matcher.is_match(content) {
                let result = SearchResult {
                    path: path.to_path_buf(),
                    line_number,
                    line_content: content.to_string(),
                };
                results
                    .send(result)
                    .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "result channel closed"))?;
            }
            line_buffer.clear();
        }

        Ok(())
    }
}

/// Worker loop: pulls paths until the path channel is exhausted and
/// closed. A file that cannot be opened or read is logged and skipped;
/// it never terminates the worker.
pub(crate) fn scan_worker(
    scanner: &FileScanner,
    paths: Receiver<PathBuf>,
    results: Sender<SearchResult>,
) {
    for path in paths {
        if let Err(err) = scanner.scan_file(&path, &results) {
            warn!("Error scanning file {}: {}", path.display(), err);
        }
    }
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
