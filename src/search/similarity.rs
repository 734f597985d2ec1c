//! Edit-distance similarity / 편집 거리 유사도

/// Compute Levenshtein edit distance over chars / 문자 단위 Levenshtein 편집 거리
///
/// Keeps only the previous and current DP rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0usize; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b_chars.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

/// Normalized similarity in [0, 1] / 0~1 사이의 정규화 유사도
///
/// `1 - distance / max(len)`; two empty strings are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", "abd"), 1);
        assert_eq!(levenshtein("abc", "abcd"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_levenshtein_either_side_longer() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("sitting", "kitten"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("이미지pdf만들기", "사진pdf로"), 6);
    }

    #[test]
    fn test_levenshtein_counts_hangul_as_single_chars() {
        assert_eq!(levenshtein("계산기", "계산"), 1);
        assert_eq!(levenshtein("사다리", "사다리타기"), 2);
    }

    #[test]
    fn test_similarity_identity_and_empty() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("qr생성기", "qr생성기"), 1.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_similarity_values() {
        assert!((similarity("abc", "abd") - 2.0 / 3.0).abs() < 1e-12);
        assert!((similarity("계산기", "계산") - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_similarity_symmetric_and_bounded() {
        let samples = ["", "a", "qr", "qr생성기", "사다리타기", "pdf합치기", "zzqqxx123", "ㅅㄷ"];
        for a in samples {
            assert_eq!(similarity(a, a), 1.0);
            for b in samples {
                let ab = similarity(a, b);
                assert_eq!(ab, similarity(b, a), "{a} / {b}");
                assert!((0.0..=1.0).contains(&ab), "{a} / {b} = {ab}");
            }
        }
    }
}
