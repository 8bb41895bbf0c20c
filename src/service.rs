//! 추천/선택/운세 요청 처리
//!
//! 바깥 계층(CLI, HTTP 등)이 호출하는 진입점입니다. 입력 검증과
//! 에러 코드 매핑만 담당하고 실제 계산은 `matching`, `fortune`에 맡깁니다.
//! 카탈로그는 생성 후 바뀌지 않으므로 `Arc`로 감싸 여러 스레드에서 공유할 수 있습니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{load_fortunes, FortuneCategory, Gender, NameCatalog, NameEntry};
use crate::config::NaeilumConfig;
use crate::error::{NaeilumError, Result};
use crate::fortune::{daily_fortune, daily_fortune_today, parse_date, FortuneResult};
use crate::matching::select_korean_names;

/// 추천 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub success: bool,
    pub names: Vec<NameEntry>,
}

impl Recommendation {
    /// 이전 `recommend` 출력(JSON)을 다시 읽음
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| NaeilumError::InvalidRecommendation(e.to_string()))
    }
}

/// 이름 선택 응답
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub success: bool,
    pub name: NameEntry,
    pub fortune: Vec<FortuneResult>,
}

/// 운세 응답
#[derive(Debug, Clone, Serialize)]
pub struct FortuneResponse {
    pub success: bool,
    pub fortune: Vec<FortuneResult>,
}

#[derive(Debug, Clone)]
pub struct NaeilumService {
    catalog: NameCatalog,
    fortunes: Vec<FortuneCategory>,
    config: NaeilumConfig,
}

impl NaeilumService {
    pub fn new(catalog: NameCatalog, fortunes: Vec<FortuneCategory>, config: NaeilumConfig) -> Self {
        Self {
            catalog,
            fortunes,
            config,
        }
    }

    /// 설정의 데이터 디렉토리에서 카탈로그를 읽어 생성
    pub fn load(config: NaeilumConfig) -> Self {
        let catalog = NameCatalog::load(&config.data_dir);
        let fortunes = load_fortunes(&config.data_dir);
        log::info!(
            "카탈로그 로드: 남성 {}개, 여성 {}개, 운세 분류 {}개",
            catalog.male.len(),
            catalog.female.len(),
            fortunes.len()
        );
        Self::new(catalog, fortunes, config)
    }

    pub fn catalog(&self) -> &NameCatalog {
        &self.catalog
    }

    pub fn fortunes(&self) -> &[FortuneCategory] {
        &self.fortunes
    }

    pub fn config(&self) -> &NaeilumConfig {
        &self.config
    }

    /// 성별 검증 (없거나 알 수 없는 값은 male)
    pub fn validate_gender(raw: Option<&str>) -> Gender {
        match raw.map(str::parse::<Gender>) {
            Some(Ok(gender)) => gender,
            _ => {
                log::warn!("잘못된 성별 값: {:?}", raw);
                Gender::Male
            }
        }
    }

    /// 입력 이름 검증 후 앞뒤 공백을 제거한 이름 반환
    pub fn validate_name(&self, raw: &str) -> Result<String> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(NaeilumError::NameRequired);
        }
        if name.chars().count() > self.config.max_name_length {
            return Err(NaeilumError::NameTooLong {
                max: self.config.max_name_length,
            });
        }
        Ok(name.to_string())
    }

    /// 영문 이름에 어울리는 한글 이름 추천
    pub fn recommend(&self, raw_name: &str, gender: Gender) -> Result<Recommendation> {
        let name = self.validate_name(raw_name)?;
        let names: Vec<NameEntry> = select_korean_names(&self.catalog, &name, gender)
            .into_iter()
            .cloned()
            .collect();

        if names.is_empty() {
            log::error!("추천 이름 없음: {} ({})", name, gender);
            return Err(NaeilumError::NameGenerationFailed);
        }

        log::debug!("{} ({}) -> {}개 추천", name, gender, names.len());
        Ok(Recommendation { success: true, names })
    }

    /// 추천 목록에서 하나를 고르고 오늘의 운세를 함께 반환
    pub fn select(&self, recommendations: &[NameEntry], index: i64) -> Result<Selection> {
        let chosen = pick(recommendations, index)?;
        Ok(Selection {
            success: true,
            name: chosen.clone(),
            fortune: daily_fortune_today(&self.fortunes, &chosen.name),
        })
    }

    /// 지정한 날짜 기준으로 선택
    pub fn select_on(&self, recommendations: &[NameEntry], index: i64, date: NaiveDate) -> Result<Selection> {
        let chosen = pick(recommendations, index)?;
        Ok(Selection {
            success: true,
            name: chosen.clone(),
            fortune: daily_fortune(&self.fortunes, &chosen.name, date),
        })
    }

    /// 이름과 날짜의 운세
    pub fn fortune(&self, korean_name: &str, date: NaiveDate) -> FortuneResponse {
        FortuneResponse {
            success: true,
            fortune: daily_fortune(&self.fortunes, korean_name, date),
        }
    }

    /// `YYYY-MM-DD` 문자열 날짜의 운세 (없으면 오늘)
    pub fn fortune_for(&self, korean_name: &str, date: Option<&str>) -> Result<FortuneResponse> {
        let fortune = match date {
            Some(raw) => {
                let date = parse_date(raw).ok_or_else(|| NaeilumError::InvalidDate(raw.to_string()))?;
                daily_fortune(&self.fortunes, korean_name, date)
            }
            None => daily_fortune_today(&self.fortunes, korean_name),
        };
        Ok(FortuneResponse { success: true, fortune })
    }
}

/// 음수이거나 범위를 벗어난 위치는 InvalidSelection
fn pick(recommendations: &[NameEntry], index: i64) -> Result<&NameEntry> {
    usize::try_from(index)
        .ok()
        .and_then(|i| recommendations.get(i))
        .ok_or(NaeilumError::InvalidSelection)
}
