//! 그 뭐더라 - fuzzy tool search / 도구 검색
//!
//! Routes a free-text Korean or English query to the most relevant tool of a catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod feature_request;
pub mod search;

pub use catalog::Tool;
pub use error::{Error, Result};
pub use feature_request::{FeatureRequest, FeatureRequestLog};
pub use search::{search, search_async, OwnedSearchResult, SearchResult, Searchable};
