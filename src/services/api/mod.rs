//! # API Facade
//!
//! UI 코드가 사용하는 연산 그룹입니다. 각 연산은 게이트웨이 호출을
//! 로딩/성공/실패 메시지와 함께 감싸고, 결과를 항상 [`ApiResult`](crate::domain::dto::ApiResult)로
//! 정규화합니다.
//!
//! | 그룹 | 트레이트 | 구현체 |
//! |------|----------|--------|
//! | `auth.*` | [`AuthApi`] | [`AuthClient`] |
//! | `vouchers.*` | [`VoucherApi`] | [`VoucherClient`] |
//! | `payments.*` | [`PaymentApi`] | [`PaymentClient`] |
//! | `referrals.*` | [`ReferralApi`] | [`ReferralClient`] |
//! | 테마/거래/환율 | [`CatalogApi`] | [`CatalogClient`] |
//!
//! 변경 연산이 성공하면 응답 캐시 전체가 무효화되며, 조회 연산은 캐시를 무효화하지 않습니다.

pub mod auth;
pub mod caller;
pub mod catalog;
pub mod client;
pub mod messages;
pub mod payments;
pub mod referrals;
pub mod vouchers;

pub use auth::{AuthApi, AuthClient};
pub use caller::{ApiCaller, CallKind};
pub use catalog::{CatalogApi, CatalogClient};
pub use client::ApiClient;
pub use messages::CallMessages;
pub use payments::{PaymentApi, PaymentClient};
pub use referrals::{ReferralApi, ReferralClient};
pub use vouchers::{VoucherApi, VoucherClient};
