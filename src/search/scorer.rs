//! Relevance scorer / 관련도 점수 계산
//!
//! Every signal is additive; one query may trigger several at once. / 모든 신호는 누적됨
//! The weights are hand-calibrated against a ceiling of [`super::engine::MAX_SCORE`],
//! changing them changes which query resolves to which tool.

use super::schema::Searchable;
use super::similarity::similarity;
use super::tokenizer::{chosung, normalize, query_words};

/// Signal weights / 신호 가중치
pub mod weights {
    /// Normalized name contains the query / 이름에 검색어 포함
    pub const NAME_CONTAINS: f64 = 100.0;
    /// Multiplier for name similarity / 이름 유사도 배수
    pub const NAME_SIMILARITY: f64 = 50.0;
    /// Normalized description contains the query / 설명에 검색어 포함
    pub const DESCRIPTION_CONTAINS: f64 = 30.0;
    /// Keyword equals the query / 키워드 완전 일치
    pub const KEYWORD_EXACT: f64 = 80.0;
    /// Keyword and query contain one another / 키워드-검색어 상호 포함
    pub const KEYWORD_CONTAINS: f64 = 40.0;
    /// Keyword and a query word contain one another / 키워드-단어 상호 포함
    pub const KEYWORD_WORD_CONTAINS: f64 = 25.0;
    /// Multiplier for keyword/word similarity above [`KEYWORD_WORD_SIMILARITY_MIN`] / 키워드-단어 유사도 배수
    pub const KEYWORD_WORD_SIMILARITY: f64 = 20.0;
    /// Keyword/word similarity must be strictly above this / 유사도 하한 (초과)
    pub const KEYWORD_WORD_SIMILARITY_MIN: f64 = 0.6;
    /// Name chosung contains query chosung / 초성 일치
    pub const CHOSUNG_CONTAINS: f64 = 30.0;
    /// Query chosung needs at least this many consonants / 최소 초성 개수
    pub const CHOSUNG_MIN_LEN: usize = 2;
}

/// Substring check where an empty needle never matches / 빈 문자열은 포함으로 취급하지 않음
fn contains(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

/// Either side contains the other / 양방향 포함
fn contains_either(a: &str, b: &str) -> bool {
    contains(a, b) || contains(b, a)
}

/// Pre-processed query, shared across all entries of one search / 한 번의 검색에서 공유되는 전처리된 검색어
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    normalized: String,
    words: Vec<String>,
    chosung: String,
}

impl PreparedQuery {
    pub fn new(query: &str) -> Self {
        Self {
            normalized: normalize(query),
            words: query_words(query).iter().map(|w| normalize(w)).collect(),
            chosung: chosung(query),
        }
    }

    /// Normalized query / 정규화된 검색어
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Chosung of the raw query / 검색어 초성
    pub fn chosung(&self) -> &str {
        &self.chosung
    }

    /// Score one entry / 항목 하나의 점수 계산
    pub fn score<T: Searchable + ?Sized>(&self, entry: &T) -> f64 {
        let nq = self.normalized.as_str();
        let name = normalize(entry.display_name());
        let mut score = 0.0;

        if contains(&name, nq) {
            score += weights::NAME_CONTAINS;
        }
        score += similarity(&name, nq) * weights::NAME_SIMILARITY;

        if contains(&normalize(entry.description()), nq) {
            score += weights::DESCRIPTION_CONTAINS;
        }

        for keyword in entry.keywords() {
            score += self.keyword_score(&normalize(keyword));
        }

        if self.chosung.chars().count() >= weights::CHOSUNG_MIN_LEN
            && chosung(entry.display_name()).contains(&self.chosung)
        {
            score += weights::CHOSUNG_CONTAINS;
        }

        score
    }

    fn keyword_score(&self, nk: &str) -> f64 {
        // a keyword of symbols or foreign script has nothing left to match
        if nk.is_empty() {
            return 0.0;
        }

        let nq = self.normalized.as_str();
        if nk == nq {
            return weights::KEYWORD_EXACT;
        }
        if contains_either(nk, nq) {
            return weights::KEYWORD_CONTAINS;
        }

        let mut score = 0.0;
        for nw in &self.words {
            if contains_either(nk, nw) {
                score += weights::KEYWORD_WORD_CONTAINS;
            }
            let sim = similarity(nk, nw);
            if sim > weights::KEYWORD_WORD_SIMILARITY_MIN {
                score += sim * weights::KEYWORD_WORD_SIMILARITY;
            }
        }
        score
    }
}

/// Score one entry against a raw query / 원본 검색어로 항목 점수 계산
pub fn score<T: Searchable + ?Sized>(entry: &T, query: &str) -> f64 {
    PreparedQuery::new(query).score(entry)
}
