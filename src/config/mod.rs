//! # Configuration Module
//!
//! 게이트웨이의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값과 프로세스 전역 정적 보안 설정을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`api_config`] - 기본 URL 결정, 제한 시간, 캐시 TTL, 저장소 위치
//! - [`security_config`] - 민감 엔드포인트 집합, 인증 부트스트랩 경로, 보안 헤더
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use voucher_gateway::config::{ApiConfig, SecurityConfig};
//!
//! let config = ApiConfig::from_env();
//! println!("API: {}", config.base_url);
//!
//! if SecurityConfig::is_sensitive("/payments/wallet-balance") {
//!     // 캐시 우회
//! }
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export APP_HOST="localhost"
//! export API_BASE_URL="http://localhost:5000/api"
//! export API_TIMEOUT_SECS="30"
//! export CACHE_DEFAULT_TTL_SECS="300"
//! export TOKEN_STORE_PATH="/home/me/.voucher/tokens.json"
//! export CACHE_REDIS_URL="redis://localhost:6379"
//! ```

pub mod api_config;
pub mod security_config;

pub use api_config::*;
pub use security_config::*;
