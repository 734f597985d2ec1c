//! Search schema definition / 검색 스키마 정의

use serde::{Deserialize, Serialize};

/// Matching-relevant view of a catalog entry / 매칭에 필요한 카탈로그 항목 인터페이스
///
/// Presentation fields (icon, route, ...) stay on the implementing type and are never read here.
pub trait Searchable {
    /// Stable unique identifier / 고유 식별자
    fn id(&self) -> &str;
    /// Primary name used for matching / 매칭용 대표 이름
    fn display_name(&self) -> &str;
    /// Secondary free text / 보조 설명
    fn description(&self) -> &str;
    /// Synonyms and related terms / 동의어, 관련어
    fn keywords(&self) -> &[String];
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn keywords(&self) -> &[String] {
        (**self).keywords()
    }
}

/// Entry with its relevance score for one search call / 검색 1회의 점수가 매겨진 항목
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEntry<'a, T> {
    pub entry: &'a T,
    pub score: f64,
}

/// Search decision / 검색 결과
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a, T> {
    /// Best entry, `None` on no-match / 최적 항목
    pub top: Option<&'a T>,
    /// Up to 4 runners-up, best first / 차순위 후보 (최대 4개)
    pub alternatives: Vec<&'a T>,
    /// Normalized top score in [0, 1] / 신뢰도
    pub confidence: f64,
    /// True iff confidence is below the match threshold / 매칭 실패 여부
    pub no_match: bool,
    /// Original query, unmodified / 원본 검색어
    pub query: String,
}

impl<'a, T> SearchResult<'a, T> {
    /// No-match result for a query / 매칭 실패 결과
    pub fn no_match(query: impl Into<String>) -> Self {
        Self {
            top: None,
            alternatives: Vec::new(),
            confidence: 0.0,
            no_match: true,
            query: query.into(),
        }
    }

    /// Clone referenced entries into an owned result / 소유권 있는 결과로 변환
    pub fn into_owned(self) -> OwnedSearchResult<T>
    where
        T: Clone,
    {
        OwnedSearchResult {
            top: self.top.cloned(),
            alternatives: self.alternatives.into_iter().cloned().collect(),
            confidence: self.confidence,
            no_match: self.no_match,
            query: self.query,
        }
    }
}

/// Owned search result, returned by the async adapter / 비동기 어댑터용 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedSearchResult<T> {
    pub top: Option<T>,
    pub alternatives: Vec<T>,
    pub confidence: f64,
    pub no_match: bool,
    pub query: String,
}
