use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::filters::ExtensionSet;

/// Walks the tree rooted at `root` and sends every regular file that
/// passes the extension filter into the path channel, exactly once each.
///
/// Per-entry errors (permission denied, broken entries, a nonexistent
/// root) are logged and skipped; the walk never aborts on them. The
/// channel is closed by dropping the sender once every discovered path
/// has been handed off. A send may block while the worker pool is busy.
pub(crate) fn walk(root: &Path, extensions: &ExtensionSet, paths: Sender<PathBuf>) {
    let mut builder = WalkBuilder::new(root);
    // Every regular file is a candidate: no gitignore, hidden-file, or
    // parent-directory semantics.
    builder.standard_filters(false);

    let mut offered = 0usize;
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Error accessing path: {}", err);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if !extensions.includes(entry.path()) {
            continue;
        }
        if paths.send(entry.into_path()).is_err() {
            warn!("Path channel closed before the walk finished");
            return;
        }
        offered += 1;
    }

    debug!("Walk of {} complete, {} files offered", root.display(), offered);
}
