//! Search module - fuzzy tool matching, stateless / 검색 모듈 - 상태 없는 도구 매칭
//!
//! Architecture principles / 아키텍처 원칙:
//! - Caller passes the query and the catalog on every call, nothing is cached
//! - Scoring of each entry is independent (scored in parallel)
//! - Call direction: Caller → Search (unidirectional) / 호출 방향
//!
//! Matching features / 매칭 특성:
//! - Name / description / keyword containment
//! - Levenshtein similarity for typos
//! - Chosung (초성) search for Korean names

pub mod engine;
pub mod schema;
pub mod scorer;
pub mod similarity;
pub mod tokenizer;

pub use engine::{
    confidence, decide, rank, search, search_async, search_ranked, ALTERNATIVE_MIN_SCORE,
    MATCH_THRESHOLD, MAX_ALTERNATIVES, MAX_SCORE,
};
pub use schema::{OwnedSearchResult, ScoredEntry, SearchResult, Searchable};
pub use scorer::{score, PreparedQuery};
pub use similarity::{levenshtein, similarity};
pub use tokenizer::{chosung, normalize, query_words};
