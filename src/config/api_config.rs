//! API 엔드포인트 및 클라이언트 동작 설정
//!
//! 기본 URL 결정, 요청 제한 시간, 캐시 기본 TTL, 저장소 위치를 관리합니다.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// 운영 API 기본 URL
pub const PRODUCTION_API_URL: &str = "https://api.escrowvouchers.com/api";

/// 운영 환경으로 간주되는 애플리케이션 호스트 이름 목록
pub const PRODUCTION_HOSTS: &[&str] = &["escrowvouchers.com", "www.escrowvouchers.com"];

/// 로컬 개발 서버 기본 URL
pub const LOCAL_API_URL: &str = "http://localhost:5000/api";

/// 요청 전체 제한 시간 기본값 (초)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 캐시 TTL 기본값 (초) - 5분
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// 캐시 키 네임스페이스 접두사 기본값
pub const DEFAULT_CACHE_PREFIX: &str = "cache_";

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Development`를 기본값으로 사용합니다. 클라이언트 도구는 로컬에서
    /// 실행되는 경우가 대부분이기 때문입니다.
    pub fn current() -> Self {
        Self::parse(&env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Development`입니다.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

/// 게이트웨이 설정
///
/// `from_env()`로 환경 변수에서 읽거나, 테스트에서는 `new(base_url)`로
/// 직접 구성합니다.
///
/// ## 환경 변수
///
/// ```bash
/// APP_HOST=escrowvouchers.com          # 운영 호스트면 운영 URL 고정
/// API_BASE_URL=http://localhost:5000/api
/// API_TIMEOUT_SECS=30
/// CACHE_DEFAULT_TTL_SECS=300
/// CACHE_KEY_PREFIX=cache_
/// TOKEN_STORE_PATH=~/.voucher/tokens.json  # 미설정 시 메모리 저장소
/// CACHE_REDIS_URL=redis://localhost:6379    # 미설정 시 메모리 캐시
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API 기본 URL (끝의 `/` 제외)
    pub base_url: String,
    /// 요청 전체 제한 시간
    pub request_timeout: Duration,
    /// 요청별 TTL이 지정되지 않은 경우의 캐시 TTL
    pub default_cache_ttl: Duration,
    /// 캐시 키 접두사
    pub cache_prefix: String,
    /// 토큰 영구 저장 파일 경로
    pub token_store_path: Option<PathBuf>,
    /// Redis 캐시 URL
    pub redis_url: Option<String>,
    /// 실행 환경
    pub environment: Environment,
}

impl ApiConfig {
    /// 기본값과 함께 주어진 기본 URL로 설정을 생성합니다.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_prefix: DEFAULT_CACHE_PREFIX.to_string(),
            token_store_path: None,
            redis_url: None,
            environment: Environment::Development,
        }
    }

    /// 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        let app_host = env::var("APP_HOST").ok();
        let env_url = env::var("API_BASE_URL").ok();
        let base_url = Self::resolve_base_url(app_host.as_deref(), env_url);

        let request_timeout = Duration::from_secs(
            env::var("API_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or_else(|e| {
                    log::error!("API_TIMEOUT_SECS 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_TIMEOUT_SECS);
                    DEFAULT_TIMEOUT_SECS
                }),
        );

        let default_cache_ttl = Duration::from_secs(
            env::var("CACHE_DEFAULT_TTL_SECS")
                .unwrap_or_else(|_| DEFAULT_CACHE_TTL_SECS.to_string())
                .parse()
                .unwrap_or_else(|e| {
                    log::error!("CACHE_DEFAULT_TTL_SECS 파싱 실패: {}. 기본값 {} 사용", e, DEFAULT_CACHE_TTL_SECS);
                    DEFAULT_CACHE_TTL_SECS
                }),
        );

        let config = Self {
            base_url,
            request_timeout,
            default_cache_ttl,
            cache_prefix: env::var("CACHE_KEY_PREFIX")
                .unwrap_or_else(|_| DEFAULT_CACHE_PREFIX.to_string()),
            token_store_path: env::var("TOKEN_STORE_PATH").ok().map(PathBuf::from),
            redis_url: env::var("CACHE_REDIS_URL").ok(),
            environment: Environment::current(),
        };

        log::info!("API 설정 로드됨: base_url={}, timeout={}s", config.base_url, config.request_timeout.as_secs());
        config
    }

    /// 기본 URL을 결정합니다.
    ///
    /// 1. 애플리케이션 호스트가 운영 호스트 목록에 있으면 운영 URL 고정
    /// 2. 아니면 `API_BASE_URL` 환경 변수 값
    /// 3. 둘 다 없으면 로컬 개발 서버
    pub fn resolve_base_url(app_host: Option<&str>, env_url: Option<String>) -> String {
        if let Some(host) = app_host {
            let host = host.trim().to_lowercase();
            if PRODUCTION_HOSTS.contains(&host.as_str()) {
                return PRODUCTION_API_URL.to_string();
            }
        }

        match env_url {
            Some(url) if !url.trim().is_empty() => trim_base_url(url),
            _ => LOCAL_API_URL.to_string(),
        }
    }

    /// 경로를 기본 URL과 결합합니다.
    ///
    /// 이미 절대 URL인 경우 그대로 사용합니다.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_default_cache_ttl(mut self, ttl: Duration) -> Self {
        self.default_cache_ttl = ttl;
        self
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_host_forces_production_url() {
        let url = ApiConfig::resolve_base_url(
            Some("escrowvouchers.com"),
            Some("http://staging.local/api".to_string()),
        );

        assert_eq!(url, PRODUCTION_API_URL);
    }

    #[test]
    fn test_env_url_used_outside_production() {
        let url = ApiConfig::resolve_base_url(
            Some("localhost"),
            Some("http://10.0.0.5:5000/api/".to_string()),
        );

        assert_eq!(url, "http://10.0.0.5:5000/api");
    }

    #[test]
    fn test_localhost_fallback() {
        assert_eq!(ApiConfig::resolve_base_url(None, None), LOCAL_API_URL);
        assert_eq!(ApiConfig::resolve_base_url(None, Some("  ".to_string())), LOCAL_API_URL);
    }

    #[test]
    fn test_url_for_joins_paths() {
        let config = ApiConfig::new("http://localhost:5000/api/");

        assert_eq!(config.url_for("/vouchers"), "http://localhost:5000/api/vouchers");
        assert_eq!(config.url_for("vouchers"), "http://localhost:5000/api/vouchers");
        assert_eq!(config.url_for("https://cdn.example.com/x"), "https://cdn.example.com/x");
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::new("http://localhost");

        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.default_cache_ttl, Duration::from_secs(300));
        assert_eq!(config.cache_prefix, "cache_");
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("PROD"), Environment::Production);
        assert_eq!(Environment::parse("stage"), Environment::Staging);
        assert_eq!(Environment::parse("whatever"), Environment::Development);
    }
}
