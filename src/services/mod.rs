//! 게이트웨이와 연산 파사드를 담당하는 서비스 계층 모듈
//!
//! 모든 구성 요소는 싱글톤이 아니라 생성 시점에 주입된 저장소와 전송 계층을 사용합니다.
//!
//! # Features
//!
//! - 요청/응답 파이프라인과 캐시 단락 ([`gateway`])
//! - 401 수신 시 단일 비행(single-flight) 토큰 갱신 및 한 번의 재전송
//! - 리소스 그룹별 타입이 지정된 연산 ([`api`])
//! - 변경 연산 성공 시 전체 캐시 무효화
//!
//! # Examples
//!
//! ```rust,ignore
//! use voucher_gateway::services::api::{ApiClient, VoucherApi};
//! use voucher_gateway::services::gateway::GatewayContext;
//!
//! let api = ApiClient::from_config(ApiConfig::from_env(), GatewayContext::in_memory())?;
//! let vouchers = api.vouchers.get_all(&Default::default()).await;
//! ```

pub mod api;
pub mod gateway;
