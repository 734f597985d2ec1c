//! Representative queries against the bundled tool catalog / 내장 도구 목록 검색

use mwodeora::catalog;
use mwodeora::search::{rank, search};

fn top_id(query: &str) -> Option<String> {
    search(query, catalog::builtin()).top.map(|t| t.id.clone())
}

fn score_of(query: &str, id: &str) -> f64 {
    rank(query, catalog::builtin())
        .into_iter()
        .find(|s| s.entry.id == id)
        .map(|s| s.score)
        .unwrap()
}

#[test]
fn test_queries_route_to_expected_tool() {
    let cases = [
        ("QR 생성기", "qr-generator"),
        ("큐알", "qr-generator"),
        ("사진 PDF로", "image-to-pdf"),
        ("pdf 합치기", "pdf-merge"),
        ("사다리", "ladder-game"),
        ("디데이", "date-calculator"),
        ("연봉 계산", "salary-calculator"),
        ("이미지 용량 줄이기", "image-compress"),
        ("점심 메뉴 고르기", "roulette"),
        ("평수 계산", "unit-converter"),
        ("글자수 세기", "character-counter"),
        ("환율", "exchange-rate"),
    ];

    for (query, expected) in cases {
        assert_eq!(top_id(query).as_deref(), Some(expected), "query: {query}");
    }
}

#[test]
fn test_unrelated_queries_are_no_match() {
    for query in ["zzqqxx123", "ㅅㄷ", "", "   "] {
        let result = search(query, catalog::builtin());
        assert!(result.no_match, "query: {query}");
        assert!(result.top.is_none());
        assert!(result.alternatives.is_empty());
    }
}

#[test]
fn test_alternatives_skip_low_scores() {
    let result = search("QR 생성기", catalog::builtin());
    let ids: Vec<&str> = result.alternatives.iter().map(|t| t.id.as_str()).collect();
    // rank 5 only reaches a score of 10, the floor is strict
    assert_eq!(ids, vec!["password-generator", "lotto-generator", "character-counter"]);
    assert_eq!(result.confidence, 245.0 / 250.0);
}

#[test]
fn test_pinned_scores() {
    let cases = [
        ("큐알", "qr-generator", 120.0),
        ("사다리", "ladder-game", 270.0),
        ("QR 생성기", "qr-generator", 245.0),
    ];
    for (query, id, expected) in cases {
        let actual = score_of(query, id);
        assert!((actual - expected).abs() < 1e-9, "{query} / {id}: {actual}");
    }
}

#[test]
fn test_confidence_clamped_for_high_scores() {
    let result = search("사다리", catalog::builtin());
    assert_eq!(result.confidence, 1.0);
    assert!(!result.no_match);
}

#[test]
fn test_presentation_fields_pass_through() {
    let result = search("환율", catalog::builtin());
    let top = result.top.unwrap();
    assert_eq!(top.route, "/tools/exchange-rate");
    assert_eq!(top.category, "calculator");
}
