//! # Core Module
//!
//! 게이트웨이 전 계층이 공유하는 기본 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **GatewayError**: 전송/인증/권한/서버/저장소 에러를 하나로 묶은 열거형
//! - **GatewayResult**: `Result<T, GatewayError>` 별칭
//! - **ErrorContext**: 외부 에러를 컨텍스트와 함께 변환하는 확장 trait
//!
//! ### [`clock`] - 시간 소스
//! - **Clock**: 캐시 신선도 판정에 사용하는 현재 시각 제공자
//! - **SystemClock**: 실제 시스템 시계
//! - **ManualClock**: 테스트용 수동 시계
//!
//! ## 의존성 주입
//!
//! 토큰 저장소, 캐시 저장소, 시계, 전송 계층은 전역 싱글톤이 아니라
//! `HttpGateway` 생성 시점에 명시적으로 주입됩니다. 테스트마다 독립된
//! 인스턴스를 넘길 수 있어 테스트 간 상태 오염이 없습니다.
//!
//! ```rust,ignore
//! let context = GatewayContext::new(
//!     Arc::new(MemoryTokenStore::new()),
//!     Arc::new(MemoryCacheStore::new()),
//!     Arc::new(SystemClock),
//! );
//! let gateway = HttpGateway::new(config, Arc::new(transport), context);
//! ```

pub mod clock;
pub mod errors;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{ErrorContext, GatewayError, GatewayResult};
