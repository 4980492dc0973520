pub mod config;
pub mod errors;
pub mod filters;
pub mod results;
pub mod search;

pub use config::SearchConfig;
pub use errors::SearchError;
pub use filters::ExtensionSet;
pub use results::SearchResult;
pub use search::{search, search_with};
