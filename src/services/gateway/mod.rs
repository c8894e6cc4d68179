//! HTTP 클라이언트 게이트웨이
//!
//! 원격 REST API로 나가는 모든 요청을 감싸는 계층입니다.
//!
//! - [`transport`] - 실제 HTTP 전송 (`reqwest`, 30초 제한 시간)
//! - [`refresh`] - 401 발생 시 단일 비행(single-flight) 토큰 갱신
//! - [`http_gateway`] - 파이프라인, 캐시 단락, 401 갱신 후 1회 재전송

pub mod http_gateway;
pub mod refresh;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use http_gateway::{GatewayContext, HttpGateway};
pub use refresh::RefreshCoordinator;
pub use transport::{ReqwestTransport, Transport};
