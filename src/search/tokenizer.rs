//! Korean-aware text normalization / 한글 인식 텍스트 정규화
//!
//! Supports / 지원:
//! - Normalization for matching (lowercase, strip spaces and punctuation) / 매칭용 정규화
//! - Query word splitting / 검색어 단어 분리
//! - Chosung (initial consonant) extraction / 초성 추출

/// First complete Hangul syllable (가) / 첫 한글 음절
const HANGUL_BASE: u32 = 0xAC00;
/// Last complete Hangul syllable offset (힣 - 가) / 마지막 음절 오프셋
const HANGUL_LAST_OFFSET: u32 = 11171;
/// Syllables per initial consonant (21 vowels × 28 finals) / 초성당 음절 수
const SYLLABLES_PER_CHOSUNG: u32 = 588;

/// Initial consonants in Unicode decomposition order / 유니코드 분해 순서의 초성 19자
const CHOSUNG_TABLE: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Check if char is a complete Hangul syllable (가-힣) / 완성형 한글 음절 여부
pub fn is_hangul_syllable(c: char) -> bool {
    matches!(c, '\u{ac00}'..='\u{d7a3}')
}

/// Check if char is a Hangul compatibility jamo (ㄱ-ㅣ) / 호환용 자모 여부
pub fn is_hangul_jamo(c: char) -> bool {
    matches!(c, '\u{3131}'..='\u{3163}')
}

/// Normalize text for matching / 매칭용 텍스트 정규화
/// - Lowercase ASCII / ASCII 소문자화
/// - Drop whitespace and punctuation / 공백과 문장부호 제거
/// - Keep ASCII alphanumerics, Hangul syllables and jamo / 영숫자, 한글 음절, 자모만 유지
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || is_hangul_syllable(*c) || is_hangul_jamo(*c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Split query into lowercase words / 검색어를 소문자 단어로 분리
pub fn query_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Extract chosung of every Hangul syllable / 각 음절의 초성 추출
///
/// Anything that is not a complete syllable is skipped, e.g. "사다리 game" -> "ㅅㄷㄹ".
pub fn chosung(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            let code = (c as u32).checked_sub(HANGUL_BASE)?;
            if code > HANGUL_LAST_OFFSET {
                return None;
            }
            CHOSUNG_TABLE.get((code / SYLLABLES_PER_CHOSUNG) as usize).copied()
        })
        .collect()
}
