//! # Gateway Error Handling System
//!
//! HTTP 클라이언트 게이트웨이 전역에서 사용하는 통합 에러 타입입니다.
//! 서버 측 `AppError`가 HTTP 응답으로 변환되던 것과 반대로, 이 타입은
//! 원격 API 응답과 전송 계층 실패를 호출자가 다룰 수 있는 도메인 에러로 변환합니다.
//!
//! ## 에러 분류
//!
//! | GatewayError | 발생 원인 | 부수 효과 |
//! |--------------|-----------|-----------|
//! | `Transport` | 네트워크 실패, 연결 거부 | 없음 |
//! | `Timeout` | 요청 전체 제한 시간(기본 30초) 초과 | 없음 |
//! | `SessionExpired` | 401 이후 리프레시 토큰 없음/갱신 실패 | 강제 로그아웃 |
//! | `Http` (401) | 재시도 후에도 401, 또는 인증 부트스트랩 경로의 401 | 없음 |
//! | `Http` (403) | 권한 부족 | 없음 (로그만) |
//! | `Http` (429) | 요청 한도 초과 | 없음 (로그만) |
//! | `Http` (5xx) | 서버 오류 | 없음 (로그만) |
//! | `Validation` | 요청 DTO 검증 실패 (네트워크 호출 전) | 없음 |
//! | `Storage` | 토큰/캐시 저장소 오류 | 파이프라인에서는 로그 후 무시 |
//! | `InvalidRequest` | URL 누락 등 잘못된 요청 구성 | 없음 |
//! | `Decode` | 응답 본문 역직렬화 실패 | 없음 |
//! | `Internal` | 예상하지 못한 내부 오류 | 없음 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use voucher_gateway::core::errors::{GatewayError, GatewayResult};
//!
//! async fn load_balance(gateway: &HttpGateway) -> GatewayResult<f64> {
//!     let response = gateway.execute(ctx).await?;
//!     match response.body.get("balance").and_then(|v| v.as_f64()) {
//!         Some(balance) => Ok(balance),
//!         None => Err(GatewayError::Decode("balance 필드가 없습니다".to_string())),
//!     }
//! }
//! ```

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// 게이트웨이 전역 에러 타입
///
/// 진행 중인 토큰 갱신 결과를 여러 대기자가 공유할 수 있도록 `Clone`을 구현합니다.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// 네트워크 실패 (DNS, 연결 거부, TLS 오류 등)
    #[error("Transport error: {0}")]
    Transport(String),

    /// 요청 제한 시간 초과
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// 세션 만료
    ///
    /// 401 응답 이후 리프레시 토큰이 없거나 갱신에 실패한 경우입니다.
    /// 이 에러가 반환될 때 인증 상태는 이미 초기화되어 있습니다.
    #[error("Session expired. Please log in again. ({cause})")]
    SessionExpired {
        /// 세션이 만료된 구체적인 원인
        cause: String,
    },

    /// 2xx 가 아닌 HTTP 응답
    ///
    /// `message`는 응답 봉투의 `message` 필드가 있으면 그 값을,
    /// 없으면 표준 상태 코드 문구를 사용합니다.
    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        body: Value,
    },

    /// 요청 DTO 검증 실패 (400 Bad Request에 대응하며 네트워크 호출 전에 발생)
    #[error("Validation error: {0}")]
    Validation(String),

    /// 토큰 저장소 또는 캐시 저장소 오류
    #[error("Storage error: {0}")]
    Storage(String),

    /// 잘못 구성된 요청 (URL 누락, 알 수 없는 메서드 등)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 응답 본문 역직렬화 실패
    #[error("Decode error: {0}")]
    Decode(String),

    /// 내부 오류
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// 원격 서버가 반환한 HTTP 상태 코드 (HTTP 에러가 아니면 `None`)
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|status| status >= 500)
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, GatewayError::SessionExpired { .. })
    }

    /// 사용자에게 보여줄 수 있는 상세 메시지
    ///
    /// HTTP 에러는 서버가 보낸 메시지를, 나머지는 에러 문자열 전체를 반환합니다.
    pub fn detail(&self) -> String {
        match self {
            GatewayError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Decode(e.to_string())
    }
}

impl From<redis::RedisError> for GatewayError {
    fn from(e: redis::RedisError) -> Self {
        GatewayError::Storage(format!("Redis: {}", e))
    }
}

impl From<validator::ValidationErrors> for GatewayError {
    fn from(e: validator::ValidationErrors) -> Self {
        GatewayError::Validation(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type GatewayResult<T> = Result<T, GatewayError>;

/// 외부 라이브러리 에러를 GatewayError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use voucher_gateway::core::errors::ErrorContext;
///
/// let raw = std::fs::read_to_string(&path).context("토큰 파일 읽기 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> GatewayResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> GatewayResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> GatewayResult<T> {
        self.map_err(|e| GatewayError::Internal(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> GatewayResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GatewayError::Internal(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn http(status: u16) -> GatewayError {
        GatewayError::Http {
            status,
            message: "boom".to_string(),
            body: json!({ "success": false, "message": "boom" }),
        }
    }

    #[test]
    fn test_status_classification() {
        assert!(http(401).is_unauthorized());
        assert!(http(403).is_forbidden());
        assert!(http(429).is_rate_limited());
        assert!(http(502).is_server_error());
        assert!(!http(404).is_server_error());
        assert_eq!(GatewayError::Transport("down".to_string()).status(), None);
    }

    #[test]
    fn test_session_expired_message() {
        let error = GatewayError::SessionExpired {
            cause: "리프레시 토큰이 없습니다".to_string(),
        };

        assert!(error.is_session_expired());
        assert!(error.to_string().starts_with("Session expired"));
    }

    #[test]
    fn test_detail_prefers_server_message() {
        assert_eq!(http(400).detail(), "boom");
        assert_eq!(
            GatewayError::Timeout(Duration::from_secs(30)).detail(),
            "Request timed out after 30s"
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let gateway_result = result.context("Additional context");

        if let Err(GatewayError::Internal(msg)) = gateway_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected Internal");
        }
    }
}
