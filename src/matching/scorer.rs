//! 영문 이름과 한글 이름 항목 사이의 발음 유사도 점수
//!
//! 항목의 로마자 표기 후보마다 시퀀스 유사도를 구하고
//! 첫 글자/끝 글자 가산점과 길이 차 감점을 적용한 뒤 최댓값을 취합니다.
//! 점수는 [0, 1]로 자르지 않으므로 가산점 때문에 1.0을 넘을 수 있습니다.

use crate::catalog::NameEntry;
use crate::core::normalize::normalize_romanization;
use crate::core::romanizer::romanize_korean_text;

use super::sequence::similarity_ratio;

/// 첫 글자 일치 가산점
pub const FIRST_CHAR_BONUS: f64 = 0.08;
/// 끝 글자 일치 가산점
pub const LAST_CHAR_BONUS: f64 = 0.04;
/// 길이 차 1글자당 감점
pub const LENGTH_PENALTY_PER_CHAR: f64 = 0.015;
/// 길이 차 감점 상한
pub const LENGTH_PENALTY_MAX: f64 = 0.15;
/// `initial` 일치 가산점
pub const INITIAL_BONUS: f64 = 0.03;

/// 항목의 로마자 표기 후보
///
/// 카탈로그 표기(빈 문자열 제외) 다음에 한글 이름의 자동 변환 결과를 붙이고,
/// 대소문자 무시 중복을 먼저 나온 순서대로 제거합니다.
/// 후보가 하나도 없으면 `name` 자체를 유일한 후보로 씁니다.
pub fn candidate_romanizations(entry: &NameEntry) -> Vec<String> {
    let mut candidates: Vec<String> = entry
        .romanization
        .iter()
        .filter(|value| !value.is_empty())
        .cloned()
        .collect();

    if !entry.name.is_empty() {
        candidates.push(romanize_korean_text(&entry.name));
    }

    let mut seen: Vec<String> = Vec::with_capacity(candidates.len());
    let mut deduped = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let key = candidate.to_lowercase();
        if !seen.contains(&key) {
            seen.push(key);
            deduped.push(candidate);
        }
    }

    if deduped.is_empty() {
        deduped.push(entry.name.clone());
    }
    deduped
}

/// 정규화된 두 표기 사이의 보정된 유사도
fn adjusted_ratio(input: &str, variant: &str) -> f64 {
    let mut ratio = similarity_ratio(input, variant);

    if input.chars().next() == variant.chars().next() {
        ratio += FIRST_CHAR_BONUS;
    }
    if input.chars().last() == variant.chars().last() {
        ratio += LAST_CHAR_BONUS;
    }

    let length_gap = input.chars().count().abs_diff(variant.chars().count());
    ratio -= LENGTH_PENALTY_MAX.min(length_gap as f64 * LENGTH_PENALTY_PER_CHAR);
    ratio
}

/// 소수점 6자리 반올림
///
/// `value * 1e6`을 0에서 먼 쪽으로 반올림. 십진수 기준 정확히 절반인 값은
/// 짝수 쪽 반올림과 마지막 자리가 다를 수 있으나 순위 비교에는 영향 없음
fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// 영문 이름과 항목의 유사도 점수
///
/// 입력이 정규화 후 비어 있으면 0.0
///
/// # Examples
/// ```
/// use naeilum::{compute_similarity_score, NameEntry};
/// let entry = NameEntry::new("지훈").with_romanization(["Jihun"]).with_initial("J");
/// // 완전 일치 1.0 + 첫 글자 0.08 + 끝 글자 0.04 + initial 0.03
/// assert_eq!(compute_similarity_score("Jihun", &entry), 1.15);
/// ```
pub fn compute_similarity_score(english_name: &str, entry: &NameEntry) -> f64 {
    let input = normalize_romanization(english_name);
    let Some(first) = input.chars().next() else {
        return 0.0;
    };

    let best = candidate_romanizations(entry)
        .iter()
        .map(|candidate| normalize_romanization(candidate))
        .filter(|variant| !variant.is_empty())
        .map(|variant| adjusted_ratio(&input, &variant))
        .fold(0.0_f64, f64::max);

    let initial_bonus = if entry.initial.to_uppercase() == first.to_uppercase().to_string() {
        INITIAL_BONUS
    } else {
        0.0
    };

    round6(best + initial_bonus)
}
