//! # Data Transfer Objects (DTO) Module
//!
//! 원격 API와 주고받는 데이터 계약을 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── envelope.rs     # { success, data, message } 봉투, 정규화된 ApiResult
//! ├── auth.rs         # /auth/*
//! ├── vouchers.rs     # /vouchers*, /public-vouchers/:code
//! ├── payments.rs     # /payments/*
//! ├── referrals.rs    # /referrals/*
//! └── catalog.rs      # /themes, /transactions, /rates
//! ```
//!
//! ## 설계 원칙
//!
//! - **요청 DTO**는 `validator::Validate`를 구현하며, 파사드는 네트워크 호출 전에
//!   검증을 수행합니다. 검증 실패는 실패 결과로 정규화되어 반환됩니다.
//! - **응답 DTO**는 서버 필드 추가에 견딜 수 있도록 `#[serde(default)]`를 사용하고,
//!   해석하지 않는 필드는 `extra` 맵에 보존합니다.
//! - 필드명은 백엔드 규약에 맞춰 `camelCase`로 직렬화합니다.

pub mod auth;
pub mod catalog;
pub mod envelope;
pub mod payments;
pub mod referrals;
pub mod vouchers;

pub use auth::*;
pub use catalog::*;
pub use envelope::*;
pub use payments::*;
pub use referrals::*;
pub use vouchers::*;
