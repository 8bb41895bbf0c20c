//! 오늘의 운세
//!
//! `이름 + 날짜(YYYY-MM-DD)`의 SHA-256 값을 시드로 호출마다 새 난수 생성기를 만들어
//! 분류별로 메시지 하나씩 고릅니다. 같은 이름, 같은 날짜는 항상 같은 결과입니다.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::FortuneCategory;

/// 시드에 쓰는 날짜 형식
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 분류 하나의 운세
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FortuneResult {
    pub category: String,
    pub category_ko: String,
    pub message: String,
    pub message_ko: String,
}

/// 이름과 날짜로 만든 32바이트 시드
pub fn fortune_seed(korean_name: &str, date: NaiveDate) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(korean_name.as_bytes());
    hasher.update(date.format(DATE_FORMAT).to_string().as_bytes());
    hasher.finalize().into()
}

/// 주어진 날짜의 운세
/// 메시지가 없는 분류는 건너뜀
pub fn daily_fortune(categories: &[FortuneCategory], korean_name: &str, date: NaiveDate) -> Vec<FortuneResult> {
    let mut rng = StdRng::from_seed(fortune_seed(korean_name, date));

    categories
        .iter()
        .filter_map(|category| {
            let message = category.messages.choose(&mut rng)?;
            Some(FortuneResult {
                category: category.category.clone(),
                category_ko: category.localized_label().to_string(),
                message: message.primary().to_string(),
                message_ko: message.secondary().to_string(),
            })
        })
        .collect()
}

/// 오늘(로컬 날짜) 운세
pub fn daily_fortune_today(categories: &[FortuneCategory], korean_name: &str) -> Vec<FortuneResult> {
    daily_fortune(categories, korean_name, Local::now().date_naive())
}

/// `YYYY-MM-DD` 문자열을 날짜로 변환
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}
