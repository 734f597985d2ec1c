//! Search engine - ranking and match decision / 검색 엔진 - 순위 및 매칭 판정
//!
//! Architecture principle: the catalog is always passed in, the engine holds no state / 아키텍처 원칙
//! - rank: score and sort every entry / 전체 항목 점수 계산 및 정렬
//! - decide: pick top and alternatives from a ranked list / 순위 목록에서 최적 항목과 후보 선택
//! - search: rank + decide / 검색
//! - search_ranked: search, also returning the ranking / 순위 포함 검색
//! - search_async: search on the blocking pool / 비동기 검색

use std::cmp::Ordering;
use std::sync::Arc;

use rayon::prelude::*;

use super::schema::{OwnedSearchResult, ScoredEntry, SearchResult, Searchable};
use super::scorer::PreparedQuery;
use crate::error::Result;

/// Theoretical score ceiling used for confidence / 신뢰도 계산용 이론상 최대 점수
pub const MAX_SCORE: f64 = 250.0;
/// Confidence strictly below this is a no-match / 이 값 미만이면 매칭 실패
pub const MATCH_THRESHOLD: f64 = 0.15;
/// Alternatives must score strictly above this / 차순위 후보 최소 점수 (초과)
pub const ALTERNATIVE_MIN_SCORE: f64 = 10.0;
/// Maximum number of alternatives / 최대 차순위 후보 수
pub const MAX_ALTERNATIVES: usize = 4;

/// Normalize a raw score into [0, 1] / 점수를 0~1로 정규화
pub fn confidence(score: f64) -> f64 {
    (score.min(MAX_SCORE) / MAX_SCORE).clamp(0.0, 1.0)
}

/// Score every entry and sort descending / 전체 항목 점수 계산 후 내림차순 정렬
///
/// Equal scores keep catalog order.
pub fn rank<'a, T: Searchable + Sync>(query: &str, catalog: &'a [T]) -> Vec<ScoredEntry<'a, T>> {
    let prepared = PreparedQuery::new(query);

    let mut ranked: Vec<ScoredEntry<'a, T>> = catalog
        .par_iter()
        .map(|entry| ScoredEntry {
            entry,
            score: prepared.score(entry),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

/// Turn a ranked list into a decision / 순위 목록으로 판정
pub fn decide<'a, T>(query: &str, ranked: &[ScoredEntry<'a, T>]) -> SearchResult<'a, T> {
    let Some(top) = ranked.first() else {
        return SearchResult::no_match(query);
    };

    let confidence = confidence(top.score);
    if confidence < MATCH_THRESHOLD {
        return SearchResult {
            confidence,
            ..SearchResult::no_match(query)
        };
    }

    let alternatives = ranked
        .iter()
        .skip(1)
        .take(MAX_ALTERNATIVES)
        .filter(|scored| scored.score > ALTERNATIVE_MIN_SCORE)
        .map(|scored| scored.entry)
        .collect();

    SearchResult {
        top: Some(top.entry),
        alternatives,
        confidence,
        no_match: false,
        query: query.to_string(),
    }
}

/// Find the best matching entry for a free-text query / 자유 입력 검색어에 가장 알맞은 항목 찾기
pub fn search<'a, T: Searchable + Sync>(query: &str, catalog: &'a [T]) -> SearchResult<'a, T> {
    search_ranked(query, catalog).0
}

/// Search and keep the full ranking / 전체 순위와 함께 검색
///
/// A blank query returns an empty ranking, nothing is scored.
pub fn search_ranked<'a, T: Searchable + Sync>(
    query: &str,
    catalog: &'a [T],
) -> (SearchResult<'a, T>, Vec<ScoredEntry<'a, T>>) {
    if query.trim().is_empty() {
        return (SearchResult::no_match(query), Vec::new());
    }

    let ranked = rank(query, catalog);
    let result = decide(query, &ranked);

    tracing::debug!(
        query = %query,
        catalog_size = catalog.len(),
        top_score = ranked.first().map(|s| s.score).unwrap_or(0.0),
        confidence = result.confidence,
        no_match = result.no_match,
        "search decided"
    );

    (result, ranked)
}

/// Promise-style wrapper running [`search`] on tokio's blocking pool / 비동기 래퍼
pub async fn search_async<T>(query: String, catalog: Arc<[T]>) -> Result<OwnedSearchResult<T>>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    let result = tokio::task::spawn_blocking(move || search(&query, &catalog[..]).into_owned()).await?;
    Ok(result)
}
