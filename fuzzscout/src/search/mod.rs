//! Concurrent search pipeline.
//!
//! One walker thread discovers candidate files and feeds a bounded path
//! channel; a pool of scan workers pulls paths, scans them line by line
//! against the fuzzy matcher, and sends matches into a bounded result
//! channel; a single reporter thread drains the results as they arrive.
//! The engine owns the lifecycle: it joins the walker and every worker
//! before closing the result channel, which is the only thing that stops
//! the reporter.

pub mod engine;
pub mod matcher;
pub mod scanner;
pub mod walker;

pub use engine::{search, search_with};
pub use matcher::PatternMatcher;
pub use scanner::FileScanner;
