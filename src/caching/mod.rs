//! 캐싱 계층 모듈
//!
//! GET 응답을 키 단위로 보관하는 세션 수명의 응답 캐시를 제공합니다.
//!
//! # 주요 기능
//!
//! - 저장소 백엔드와 무관한 [`CacheStore`] trait
//! - 인메모리(기본값) 및 Redis 백엔드
//! - 주입된 시계 기준 TTL 유효성 판단 ([`ResponseCache`])
//! - 접두사(`cache_`) 기반 네임스페이스와 전체 무효화
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use voucher_gateway::caching::{MemoryCacheStore, ResponseCache};
//! use voucher_gateway::core::SystemClock;
//!
//! let cache = ResponseCache::new(Arc::new(MemoryCacheStore::new()), Arc::new(SystemClock));
//! cache.put("user_balance", payload, Duration::from_secs(60)).await?;
//!
//! if let Some((payload, expires_at)) = cache.get("user_balance").await? {
//!     // 캐시 적중
//! }
//! cache.clear().await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! CACHE_KEY_PREFIX=cache_                 # 기본값
//! CACHE_REDIS_URL=redis://localhost:6379  # 설정 시 Redis 백엔드 사용
//! ```

pub mod memory;
pub mod redis;
pub mod response_cache;
pub mod store;

pub use memory::MemoryCacheStore;
pub use self::redis::RedisCacheStore;
pub use response_cache::ResponseCache;
pub use store::CacheStore;
