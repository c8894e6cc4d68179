//! 게이트웨이 자체 동작에 관련된 도메인 모델
//!
//! 바우처나 사용자 같은 비즈니스 엔티티는 이 계층에서 불투명한 페이로드이며,
//! 여기에는 게이트웨이가 직접 상태를 관리하는 값들만 정의합니다.
//!
//! - [`token::AuthToken`] - 액세스/리프레시 토큰 쌍
//! - [`cache_entry::CacheEntry`] - TTL을 가진 응답 캐시 항목
//! - [`request_context::RequestContext`] - 호출 하나의 요청 컨텍스트
//! - [`response::GatewayResponse`] - 전송 계층/캐시 응답
//! - [`device::DeviceInfo`] - `X-Device-Info` 헤더 내용

pub mod cache_entry;
pub mod device;
pub mod request_context;
pub mod response;
pub mod token;

pub use cache_entry::CacheEntry;
pub use device::DeviceInfo;
pub use request_context::{FilePart, MultipartPayload, RequestBody, RequestContext};
pub use response::GatewayResponse;
pub use token::AuthToken;
