//! 한글 → 로마자 변환 (국어의 로마자 표기법 자모 대응 기준)
//!
//! 음절 하나를 초성/중성/종성으로 분해한 뒤 각 자모를 고정 표에 따라
//! 로마자 조각으로 바꿔 이어 붙입니다. 음운 변동(연음, 비음화 등)은
//! 반영하지 않으며, 음절마다 독립적으로 변환합니다.
//!
//! 11,172개 음절의 변환 결과는 처음 사용할 때 한 번 계산해 두고
//! 이후에는 읽기 전용으로 공유합니다.

use lazy_static::lazy_static;

use super::unicode::{decompose_syllable, syllable_at, HANGUL_SYLLABLE_BASE, SYLLABLE_COUNT};

/// 초성 로마자 (19개)
// ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const CHOSEONG_ROMAN: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "",
    "j", "jj", "ch", "k", "t", "p", "h",
];

/// 중성 로마자 (21개)
// ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
#[rustfmt::skip]
pub const JUNGSEONG_ROMAN: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe",
    "yo", "u", "wo", "we", "wi", "yu", "eu", "ui", "i",
];

/// 종성 로마자 (28개, 0 = 종성 없음)
// 없음 ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ
#[rustfmt::skip]
pub const JONGSEONG_ROMAN: [&str; 28] = [
    "", "k", "k", "ks", "n", "nj", "nh", "t", "l", "lk", "lm", "lp", "ls", "lt",
    "lp", "lh", "m", "p", "ps", "t", "t", "ng", "t", "t", "k", "t", "p", "h",
];

lazy_static! {
    /// 음절 오프셋 → 로마자
    static ref SYLLABLE_TABLE: Vec<String> = (0..SYLLABLE_COUNT)
        .map(|offset| syllable_at(offset).map(compute_syllable).unwrap_or_default())
        .collect();
}

/// 표를 거치지 않고 음절 하나를 직접 변환
fn compute_syllable(c: char) -> String {
    match decompose_syllable(c) {
        Some((cho, jung, jong)) => {
            let mut roman = String::with_capacity(8);
            roman.push_str(CHOSEONG_ROMAN[cho as usize]);
            roman.push_str(JUNGSEONG_ROMAN[jung as usize]);
            roman.push_str(JONGSEONG_ROMAN[jong as usize]);
            roman.trim_end().to_string()
        }
        None => c.to_string(),
    }
}

/// 한글 음절 하나의 로마자 표기
///
/// 완성형 한글 음절이 아니면 None
///
/// # Examples
/// ```
/// use naeilum::core::romanizer::romanize_syllable;
/// assert_eq!(romanize_syllable('훈'), Some("hun"));
/// assert_eq!(romanize_syllable('x'), None);
/// ```
pub fn romanize_syllable(c: char) -> Option<&'static str> {
    decompose_syllable(c)?;
    let offset = (c as u32 - HANGUL_SYLLABLE_BASE) as usize;
    SYLLABLE_TABLE.get(offset).map(String::as_str)
}

/// 한글 문자열을 로마자로 변환
/// 한글 음절이 아닌 문자는 그대로 유지
///
/// # Examples
/// ```
/// use naeilum::romanize_korean_text;
/// assert_eq!(romanize_korean_text("지훈"), "jihun");
/// assert_eq!(romanize_korean_text("서윤 Kim"), "seoyun Kim");
/// ```
pub fn romanize_korean_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        match romanize_syllable(c) {
            Some(roman) => result.push_str(roman),
            None => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unicode::compose_syllable;

    #[test]
    fn test_simple_syllables() {
        assert_eq!(romanize_syllable('가'), Some("ga"));
        assert_eq!(romanize_syllable('지'), Some("ji"));
        assert_eq!(romanize_syllable('훈'), Some("hun"));
        assert_eq!(romanize_syllable('서'), Some("seo"));
        // 초성 ㅇ은 소리가 없음
        assert_eq!(romanize_syllable('윤'), Some("yun"));
        assert_eq!(romanize_syllable('아'), Some("a"));
    }

    #[test]
    fn test_double_consonants() {
        assert_eq!(romanize_syllable('까'), Some("kka"));
        assert_eq!(romanize_syllable('따'), Some("tta"));
        assert_eq!(romanize_syllable('빠'), Some("ppa"));
        assert_eq!(romanize_syllable('싸'), Some("ssa"));
        assert_eq!(romanize_syllable('짜'), Some("jja"));
    }

    #[test]
    fn test_complex_vowels() {
        assert_eq!(romanize_syllable('와'), Some("wa"));
        assert_eq!(romanize_syllable('왜'), Some("wae"));
        assert_eq!(romanize_syllable('외'), Some("oe"));
        assert_eq!(romanize_syllable('워'), Some("wo"));
        assert_eq!(romanize_syllable('위'), Some("wi"));
        assert_eq!(romanize_syllable('의'), Some("ui"));
        assert_eq!(romanize_syllable('으'), Some("eu"));
    }

    #[test]
    fn test_jongseong() {
        assert_eq!(romanize_syllable('각'), Some("gak"));
        assert_eq!(romanize_syllable('강'), Some("gang"));
        assert_eq!(romanize_syllable('닭'), Some("dalk"));
        assert_eq!(romanize_syllable('값'), Some("gaps"));
        assert_eq!(romanize_syllable('삶'), Some("salm"));
        assert_eq!(romanize_syllable('힣'), Some("hih"));
        // ㅅ, ㅆ, ㅈ, ㅊ, ㅌ 받침은 모두 t
        assert_eq!(romanize_syllable('옷'), Some("ot"));
        assert_eq!(romanize_syllable('있'), Some("it"));
        assert_eq!(romanize_syllable('낮'), Some("nat"));
    }

    #[test]
    fn test_jongseong_every_index() {
        // 각 종성을 '가' 뒤에 붙여 확인 (겹받침은 자모를 그대로 옮김)
        let expected = [
            "ga", "gak", "gak", "gaks", "gan", "ganj", "ganh", "gat", "gal", "galk", "galm", "galp", "gals", "galt",
            "galp", "galh", "gam", "gap", "gaps", "gat", "gat", "gang", "gat", "gat", "gak", "gat", "gap", "gah",
        ];
        for (jong, expected) in expected.iter().enumerate() {
            let c = compose_syllable(0, 0, jong as u32).unwrap();
            assert_eq!(romanize_syllable(c), Some(*expected), "종성 {}", jong);
        }
    }

    #[test]
    fn test_common_name_syllables() {
        assert_eq!(romanize_syllable('영'), Some("yeong"));
        assert_eq!(romanize_syllable('성'), Some("seong"));
        assert_eq!(romanize_syllable('범'), Some("beom"));
        assert_eq!(romanize_syllable('섭'), Some("seop"));
        assert_eq!(romanize_syllable('잃'), Some("ilh"));
        assert_eq!(romanize_korean_text("성민"), "seongmin");
    }

    #[test]
    fn test_non_hangul_passthrough() {
        assert_eq!(romanize_syllable('A'), None);
        assert_eq!(romanize_syllable('ㄱ'), None);
        assert_eq!(romanize_korean_text("志勳"), "志勳");
        assert_eq!(romanize_korean_text("민-준!"), "min-jun!");
        assert_eq!(romanize_korean_text(""), "");
    }

    #[test]
    fn test_words() {
        assert_eq!(romanize_korean_text("지훈"), "jihun");
        assert_eq!(romanize_korean_text("서윤"), "seoyun");
        assert_eq!(romanize_korean_text("민준"), "minjun");
        // 음절 단위 변환이므로 연음하지 않음
        assert_eq!(romanize_korean_text("한글"), "hangeul");
        assert_eq!(romanize_korean_text("은아"), "euna");
    }

    #[test]
    fn test_table_matches_direct_computation() {
        for cho in 0..19 {
            for jung in 0..21 {
                for jong in 0..28 {
                    let c = compose_syllable(cho, jung, jong).unwrap();
                    let expected = format!(
                        "{}{}{}",
                        CHOSEONG_ROMAN[cho as usize],
                        JUNGSEONG_ROMAN[jung as usize],
                        JONGSEONG_ROMAN[jong as usize]
                    );
                    assert_eq!(romanize_syllable(c), Some(expected.as_str()));
                    assert_eq!(compute_syllable(c), expected);
                }
            }
        }
    }

    #[test]
    fn test_every_syllable_is_ascii_letters() {
        for offset in 0..SYLLABLE_COUNT {
            let c = syllable_at(offset).unwrap();
            let roman = romanize_syllable(c).unwrap();
            assert!(!roman.is_empty());
            assert!(roman.chars().all(|ch| ch.is_ascii_lowercase()), "{} -> {}", c, roman);
        }
    }
}
