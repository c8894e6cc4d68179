//! 바우처/에스크로 플랫폼 HTTP 클라이언트 게이트웨이
//!
//! 프론트엔드가 백엔드 API를 호출할 때 거치는 단일 통로입니다.
//! 인증 헤더와 기기 정보 부착, 민감 요청 분류, 응답 캐시,
//! 401 수신 시 토큰 갱신 후 재전송을 한곳에서 처리합니다.
//!
//! # Features
//!
//! - **요청 파이프라인**: 메서드 정규화, Bearer 토큰, `X-Device-Info`, 보안 헤더
//! - **응답 캐시**: GET 응답을 키/TTL 단위로 보관 (메모리 또는 Redis)
//! - **토큰 갱신**: 동시 401은 하나의 갱신 요청을 공유하며, 재전송은 한 번만 수행
//! - **강제 로그아웃**: 갱신이 불가능하면 토큰과 캐시를 모두 비움
//! - **연산 파사드**: `auth`, `vouchers`, `payments`, `referrals`, 카탈로그 조회
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   API Facade    │ ← 타입이 지정된 연산, 정규화된 결과
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   HttpGateway   │ ← 캐시 단락, 401 갱신/재전송
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Middlewares   │ ← 요청/응답 파이프라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Transport    │ ← reqwest (30초 제한)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use voucher_gateway::config::ApiConfig;
//! use voucher_gateway::domain::dto::LoginRequest;
//! use voucher_gateway::services::api::{ApiClient, AuthApi, VoucherApi};
//! use voucher_gateway::services::gateway::GatewayContext;
//!
//! let api = ApiClient::from_config(ApiConfig::from_env(), GatewayContext::in_memory())?;
//!
//! let login = api.auth.login(&LoginRequest { email, password }).await;
//! if login.success {
//!     let balance = api.vouchers.get_balance().await;
//! }
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod middlewares;
