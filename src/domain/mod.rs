//! # Domain Layer Module
//!
//! 게이트웨이가 다루는 데이터를 정의하는 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models   - 게이트웨이 자체 상태 (토큰, 캐시 항목, 요청 컨텍스트, 기기 정보)
//! └── DTOs     - 원격 API와의 데이터 계약 (요청/응답, 봉투, 정규화된 결과)
//!      │
//!      ▼
//! Middlewares / Services (gateway, api)
//!      │
//!      ▼
//! Caching / Repositories (cache store, token store)
//! ```
//!
//! 바우처, 사용자 같은 비즈니스 엔티티의 규칙(에스크로, 마일스톤 지급)은 서버 측에서
//! 처리되므로, 이 계층에서는 형식 검증과 직렬화만 담당합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use validator::Validate;
//! use voucher_gateway::domain::{CreateVoucherRequest, VoucherType};
//!
//! let request = CreateVoucherRequest {
//!     voucher_type: VoucherType::Gift,
//!     title: "생일 선물".to_string(),
//!     amount: 5000.0,
//!     description: None,
//!     recipient_email: Some("friend@example.com".to_string()),
//!     theme_id: None,
//!     expires_at: None,
//!     milestones: vec![],
//! };
//!
//! request.validate()?;
//! let result = api.vouchers.create(&request).await;
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
