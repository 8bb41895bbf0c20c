//! 이름 비교용 문자열 정규화
//!
//! NFD로 분해한 뒤 결합 문자(발음 구별 기호)를 버리고,
//! ASCII 영문자(와 숫자)만 남겨 소문자로 만듭니다.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 발음 구별 기호 제거 후 `keep`을 만족하는 문자만 소문자로 남김
fn fold(input: &str, keep: impl Fn(char) -> bool) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| keep(*c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// 특수 매칭용 이름 정규화 (영문자 + 숫자)
///
/// # Examples
/// ```
/// use naeilum::normalize_name;
/// assert_eq!(normalize_name("Zoë O'Brien-2"), "zoeobrien2");
/// ```
pub fn normalize_name(input: &str) -> String {
    fold(input, |c| c.is_ascii_alphanumeric())
}

/// 유사도 비교용 로마자 정규화 (영문자만)
///
/// # Examples
/// ```
/// use naeilum::normalize_romanization;
/// assert_eq!(normalize_romanization("Ji-hoon 2"), "jihoon");
/// ```
pub fn normalize_romanization(input: &str) -> String {
    fold(input, |c| c.is_ascii_alphabetic())
}
