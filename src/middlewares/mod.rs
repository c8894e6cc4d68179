//! 미들웨어 모듈
//!
//! 게이트웨이의 요청/응답 처리 파이프라인을 구성하는 단계들을 제공합니다.
//! 인증 헤더, 기기 정보, 보안 헤더 같은 횡단 관심사(Cross-cutting concerns)를
//! 개별 호출 코드에서 분리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 요청 파이프라인 ([`RequestPipeline`])
//! - 요청 ID, 메서드 정규화
//! - Bearer 토큰 부착 (공개 요청 제외)
//! - `X-Device-Info` 기기 정보 헤더
//! - 민감 엔드포인트 판정 및 보안 헤더
//!
//! ### 2. 응답 파이프라인 ([`ResponsePipeline`])
//! - 마스킹된 페이로드 로그
//! - GET 응답 캐시 기록 (기본 TTL 5분)
//! - 403/429/5xx 로그
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use voucher_gateway::middlewares::{RequestMiddleware, RequestPipeline};
//!
//! // 기본 구성
//! let pipeline = RequestPipeline::standard(token_store.clone(), None);
//! let ctx = pipeline.run(RequestContext::get("/vouchers")).await;
//!
//! // 사용자 정의 단계 추가
//! let pipeline = RequestPipeline::new(vec![
//!     Arc::new(NormalizeMethod),
//!     Arc::new(MyTracingStep),
//! ]);
//! ```

pub mod request_pipeline;
pub mod response_pipeline;

pub use request_pipeline::{
    AttachAuth, AttachDeviceInfo, AttachRequestId, ClassifySensitivity, NormalizeMethod,
    RequestMiddleware, RequestPipeline, SecurityHeaders,
};
pub use response_pipeline::{ResponsePipeline, cacheable_key};
