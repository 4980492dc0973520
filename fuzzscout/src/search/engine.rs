use crossbeam_channel::bounded;
use std::thread;
use tracing::{debug, info};

use super::matcher::PatternMatcher;
use super::scanner::{scan_worker, FileScanner};
use super::walker;
use crate::config::SearchConfig;
use crate::errors::SearchError;
use crate::results::SearchResult;

/// Capacity of the path and result channels. Bounded so a slow stage
/// applies backpressure instead of buffering without bound.
const CHANNEL_CAPACITY: usize = 1024;

/// Runs the search pipeline, handing each match to `on_match` as it is
/// found.
///
/// Spawns one walker thread, `worker_count` scan workers, and one
/// reporter thread that invokes `on_match`. Matches arrive in whatever
/// order the workers produce them; within a single file line numbers are
/// strictly increasing. Returns once the walk has completed, every
/// worker has drained, and the reporter has consumed every result.
pub fn search_with<F>(config: &SearchConfig, on_match: F) -> Result<(), SearchError>
where
    F: FnMut(SearchResult) + Send,
{
    if config.pattern.is_empty() {
        return Err(SearchError::invalid_pattern(
            "search pattern must not be empty",
        ));
    }

    info!(
        "Starting search for {:?} under {}",
        config.pattern,
        config.root_path.display()
    );

    let matcher = PatternMatcher::new(config.pattern.clone());
    let worker_count = config.worker_count.get();

    let (path_tx, path_rx) = bounded(CHANNEL_CAPACITY);
    let (result_tx, result_rx) = bounded::<SearchResult>(CHANNEL_CAPACITY);

    thread::scope(|scope| -> Result<(), SearchError> {
        let root = &config.root_path;
        let extensions = &config.extensions;
        let walker_handle = thread::Builder::new()
            .name("walker".to_string())
            .spawn_scoped(scope, move || walker::walk(root, extensions, path_tx))?;

        let mut worker_handles = Vec::with_capacity(worker_count);
        for i in 0..worker_count {
            let scanner = FileScanner::new(matcher.clone());
            let paths = path_rx.clone();
            let results = result_tx.clone();
            let handle = thread::Builder::new()
                .name(format!("scan-worker-{}", i))
                .spawn_scoped(scope, move || scan_worker(&scanner, paths, results))?;
            worker_handles.push(handle);
        }
        drop(path_rx);

        let reporter_handle = thread::Builder::new()
            .name("reporter".to_string())
            .spawn_scoped(scope, move || {
                let mut on_match = on_match;
                for result in result_rx {
                    on_match(result);
                }
            })?;

        walker_handle
            .join()
            .map_err(|_| SearchError::pipeline("walker thread panicked"))?;
        for handle in worker_handles {
            handle
                .join()
                .map_err(|_| SearchError::pipeline("scan worker panicked"))?;
        }

        // The workers' sender clones are gone once they exit; dropping
        // the last sender closes the result channel, which is the sole
        // trigger for reporter termination. Closing any earlier would
        // drop in-flight results.
        drop(result_tx);
        reporter_handle
            .join()
            .map_err(|_| SearchError::pipeline("reporter thread panicked"))
    })?;

    debug!("Search pipeline complete");
    Ok(())
}

/// Runs the pipeline and collects every match into a vector.
pub fn search(config: &SearchConfig) -> Result<Vec<SearchResult>, SearchError> {
    let mut results = Vec::new();
    search_with(config, |result| results.push(result))?;
    Ok(results)
}
