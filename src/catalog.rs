//! 이름/운세 카탈로그
//!
//! 시작 시 JSON 파일에서 한 번 읽고 이후에는 읽기 전용으로 공유합니다.
//! 파일이 없거나 형식이 잘못되면 내장 기본 데이터를 사용합니다.
//!
//! # 파일 형식
//! ```json
//! [
//!   {
//!     "name": "지훈",
//!     "hanja": "志勳",
//!     "romanization": ["Jihun", "Ji-hoon"],
//!     "category": "Honor",
//!     "meaning": "Ambitious and meritorious",
//!     "initial": "J"
//!   }
//! ]
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NaeilumError;

/// 남성 이름 파일
pub const MALE_NAMES_FILE: &str = "names_male.json";
/// 여성 이름 파일
pub const FEMALE_NAMES_FILE: &str = "names_female.json";
/// 운세 파일
pub const FORTUNES_FILE: &str = "fortunes.json";

/// 성별
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// 해당 성별의 이름 파일명
    pub fn names_file(&self) -> &'static str {
        match self {
            Gender::Male => MALE_NAMES_FILE,
            Gender::Female => FEMALE_NAMES_FILE,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = NaeilumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(NaeilumError::InvalidGender(other.to_string())),
        }
    }
}

/// 카탈로그의 이름 하나
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameEntry {
    /// 한글 이름
    pub name: String,
    /// 한자 (표시용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hanja: Option<String>,
    /// 카탈로그가 제공하는 로마자 표기 (문자열 하나 또는 목록)
    #[serde(default, deserialize_with = "deserialize_romanization")]
    pub romanization: Vec<String>,
    /// 다양성 판정용 분류 (예: "Wisdom")
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub meaning: String,
    /// 대략적인 음운 버킷 (대문자 영문 한 글자)
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub initial: String,
    /// 정확히 일치하는 입력에만 반환되는 영문 이름
    #[serde(default, alias = "specialMatch", skip_serializing_if = "Option::is_none")]
    pub special_match: Option<String>,
}

impl NameEntry {
    /// 필수 필드만으로 생성
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hanja: None,
            romanization: Vec::new(),
            category: String::new(),
            meaning: String::new(),
            initial: String::new(),
            special_match: None,
        }
    }

    pub fn with_romanization<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.romanization = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into();
        self
    }

    pub fn with_hanja(mut self, hanja: impl Into<String>) -> Self {
        self.hanja = Some(hanja.into());
        self
    }

    pub fn with_special_match(mut self, special: impl Into<String>) -> Self {
        self.special_match = Some(special.into());
        self
    }

    /// 특수 매칭 전용 항목인지 (빈 문자열은 없는 것으로 취급)
    pub fn is_special(&self) -> bool {
        self.special_match.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// `"romanization"`은 문자열, 문자열 목록, null 모두 허용
/// 목록 안의 문자열이 아닌 값과 빈 문자열은 버림
fn deserialize_romanization<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let values = match value {
        serde_json::Value::String(s) => vec![s],
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(values.into_iter().filter(|s| !s.is_empty()).collect())
}

/// 문자열이 아닌 값(null 포함)은 빈 문자열
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// 성별별 이름 카탈로그
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameCatalog {
    #[serde(default)]
    pub male: Vec<NameEntry>,
    #[serde(default)]
    pub female: Vec<NameEntry>,
}

impl NameCatalog {
    pub fn new(male: Vec<NameEntry>, female: Vec<NameEntry>) -> Self {
        Self { male, female }
    }

    /// 성별에 해당하는 이름 목록
    pub fn names(&self, gender: Gender) -> &[NameEntry] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// 파일이 없을 때 사용하는 내장 카탈로그
    pub fn fallback() -> Self {
        Self {
            male: vec![NameEntry::new("지훈")
                .with_hanja("志勳")
                .with_romanization(["Jihun", "Ji-hoon"])
                .with_category("Honor")
                .with_meaning("Ambitious and meritorious")
                .with_initial("J")],
            female: vec![NameEntry::new("서윤")
                .with_hanja("瑞允")
                .with_romanization(["Seoyun", "Seo-yoon"])
                .with_category("Grace")
                .with_meaning("A graceful blessing that shines brightly")
                .with_initial("S")],
        }
    }

    /// 디렉토리에서 성별별 이름 파일 로드
    ///
    /// 성별마다 독립적으로 처리하며, 읽기에 실패한 성별은 내장 데이터를 유지
    pub fn load(dir: &Path) -> Self {
        let mut catalog = Self::fallback();

        for gender in [Gender::Male, Gender::Female] {
            let path = dir.join(gender.names_file());
            if let Some(items) = read_json_array(&path) {
                let entries = parse_name_entries(items, gender);
                log::info!("{}: {}개 이름 로드", path.display(), entries.len());
                match gender {
                    Gender::Male => catalog.male = entries,
                    Gender::Female => catalog.female = entries,
                }
            }
        }

        catalog
    }
}

/// JSON 배열을 이름 항목으로 변환 (잘못된 항목은 경고 후 건너뜀)
fn parse_name_entries(items: Vec<serde_json::Value>, gender: Gender) -> Vec<NameEntry> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<NameEntry>(item) {
            Ok(entry) if entry.name.is_empty() => {
                log::warn!("{} 이름 {}번 항목: 빈 이름, 건너뜀", gender, i);
                None
            }
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("{} 이름 {}번 항목 파싱 실패: {}", gender, i, e);
                None
            }
        })
        .collect()
}

/// 운세 메시지 (영문/한글 쌍 또는 영문 문자열)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FortuneMessage {
    Pair {
        #[serde(default)]
        en: String,
        #[serde(default)]
        ko: String,
    },
    Text(String),
}

impl FortuneMessage {
    pub fn new(en: impl Into<String>, ko: impl Into<String>) -> Self {
        FortuneMessage::Pair {
            en: en.into(),
            ko: ko.into(),
        }
    }

    /// 기본 문구 (영문)
    pub fn primary(&self) -> &str {
        match self {
            FortuneMessage::Pair { en, .. } => en,
            FortuneMessage::Text(text) => text,
        }
    }

    /// 보조 문구 (한글, 없으면 빈 문자열)
    pub fn secondary(&self) -> &str {
        match self {
            FortuneMessage::Pair { ko, .. } => ko,
            FortuneMessage::Text(_) => "",
        }
    }
}

/// 운세 분류 하나와 그 메시지들
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FortuneCategory {
    #[serde(default)]
    pub category: String,
    /// 한글 분류명 (없으면 `category` 사용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_ko: Option<String>,
    #[serde(default)]
    pub messages: Vec<FortuneMessage>,
}

impl FortuneCategory {
    pub fn new(category: impl Into<String>, category_ko: impl Into<String>, messages: Vec<FortuneMessage>) -> Self {
        Self {
            category: category.into(),
            category_ko: Some(category_ko.into()),
            messages,
        }
    }

    /// 표시용 한글 분류명
    pub fn localized_label(&self) -> &str {
        self.category_ko.as_deref().unwrap_or(&self.category)
    }
}

/// 파일이 없을 때 사용하는 내장 운세
pub fn fallback_fortunes() -> Vec<FortuneCategory> {
    vec![
        FortuneCategory::new(
            "Love",
            "사랑",
            vec![FortuneMessage::new(
                "Love finds you when you're true to yourself",
                "진정한 나 자신일 때 사랑이 찾아옵니다",
            )],
        ),
        FortuneCategory::new(
            "Career",
            "직업",
            vec![FortuneMessage::new(
                "Your dedication will be recognized soon",
                "당신의 헌신이 곧 인정받을 것입니다",
            )],
        ),
        FortuneCategory::new(
            "Wealth",
            "재물",
            vec![FortuneMessage::new(
                "Financial wisdom comes through patient planning",
                "재정적 지혜는 인내심 있는 계획에서 옵니다",
            )],
        ),
        FortuneCategory::new(
            "Health",
            "건강",
            vec![FortuneMessage::new(
                "Your body thanks you for mindful choices",
                "당신의 몸이 현명한 선택에 감사합니다",
            )],
        ),
        FortuneCategory::new(
            "Wisdom",
            "지혜",
            vec![FortuneMessage::new(
                "A lesson from the past illuminates your path",
                "과거의 교훈이 당신의 길을 밝힙니다",
            )],
        ),
    ]
}

/// 디렉토리에서 운세 파일 로드 (실패 시 내장 운세)
pub fn load_fortunes(dir: &Path) -> Vec<FortuneCategory> {
    let path = dir.join(FORTUNES_FILE);
    let Some(items) = read_json_array(&path) else {
        log::info!("기본 운세 데이터 사용");
        return fallback_fortunes();
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<FortuneCategory>(item) {
            Ok(category) => Some(category),
            Err(e) => {
                log::warn!("운세 {}번 항목 파싱 실패: {}", i, e);
                None
            }
        })
        .collect()
}

/// JSON 배열 파일 읽기
/// 파일 없음, 읽기 실패, 파싱 실패, 배열이 아닌 경우 모두 로그 후 None
fn read_json_array(path: &Path) -> Option<Vec<serde_json::Value>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("JSON 파일 없음: {}", path.display());
            return None;
        }
        Err(e) => {
            log::error!("JSON 파일 읽기 실패 {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(serde_json::Value::Array(items)) => Some(items),
        Ok(_) => {
            log::warn!("JSON 구조가 배열이 아님: {}", path.display());
            None
        }
        Err(e) => {
            log::error!("JSON 파싱 오류 {}: {}", path.display(), e);
            None
        }
    }
}
