//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NaeilumError, Result};

/// 설정 파일 경로를 덮어쓰는 환경 변수
pub const CONFIG_ENV: &str = "NAEILUM_CONFIG";

/// Naeilum 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NaeilumConfig {
    /// 이름/운세 JSON 파일이 있는 디렉토리
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// 입력 이름 최대 길이 (문자 수)
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_max_name_length() -> usize {
    100
}

impl Default for NaeilumConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            max_name_length: default_max_name_length(),
        }
    }
}

/// 설정 파일 경로: $NAEILUM_CONFIG 또는 ~/.config/naeilum/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("naeilum").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> NaeilumConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> NaeilumConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            NaeilumConfig::default()
        }),
        Err(_) => NaeilumConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &NaeilumConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| NaeilumError::Config(format!("설정 디렉토리 생성 실패: {}", e)))?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
