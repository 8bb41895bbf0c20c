//! 에러 타입

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NaeilumError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name is too long (max {max} characters)")]
    NameTooLong { max: usize },

    #[error("Could not generate names")]
    NameGenerationFailed,

    #[error("Invalid selection")]
    InvalidSelection,

    #[error("Invalid recommendation list: {0}")]
    InvalidRecommendation(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NaeilumError {
    /// 클라이언트에 전달하는 고정 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            NaeilumError::NameRequired => "NAME_REQUIRED",
            NaeilumError::NameTooLong { .. } => "NAME_TOO_LONG",
            NaeilumError::NameGenerationFailed => "NAME_GENERATION_FAILED",
            NaeilumError::InvalidSelection => "INVALID_SELECTION",
            NaeilumError::InvalidRecommendation(_) => "INVALID_RECOMMENDATION",
            NaeilumError::InvalidGender(_) => "INVALID_GENDER",
            NaeilumError::InvalidDate(_) => "INVALID_DATE",
            NaeilumError::Config(_) => "CONFIG",
            NaeilumError::Io(_) => "IO",
            NaeilumError::Json(_) => "JSON",
        }
    }

    /// 사용자 입력 문제인지 (서버 쪽 실패가 아닌지)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NaeilumError::NameRequired
                | NaeilumError::NameTooLong { .. }
                | NaeilumError::InvalidSelection
                | NaeilumError::InvalidRecommendation(_)
                | NaeilumError::InvalidGender(_)
                | NaeilumError::InvalidDate(_)
        )
    }

    /// 프로세스 종료 코드 (입력 문제 2, 그 외 1)
    pub fn exit_code(&self) -> i32 {
        if self.is_client_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, NaeilumError>;

/// `{"success": false, "error": {"message": ..., "code": ...}}` 형태의 응답
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
}

impl From<&NaeilumError> for ErrorPayload {
    fn from(err: &NaeilumError) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                message: err.to_string(),
                code: err.code(),
            },
        }
    }
}
