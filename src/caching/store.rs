//! 캐시 저장소 추상화

use async_trait::async_trait;

use crate::core::errors::GatewayResult;
use crate::domain::models::CacheEntry;

/// 응답 캐시 저장소
///
/// 저장소는 항목을 그대로 보관할 뿐, 유효성(TTL) 판단은 호출자가
/// [`CacheEntry::is_fresh_at`]으로 수행합니다. 따라서 만료된 항목이 반환될 수 있으며,
/// 이는 캐시 미스로 취급되어야 합니다.
///
/// 구현체는 여러 호출에서 동시에 접근되며 last-writer-wins로 동작합니다.
///
/// | 구현체 | 수명 | 용도 |
/// |--------|------|------|
/// | [`MemoryCacheStore`](super::memory::MemoryCacheStore) | 프로세스(세션) | 기본값, 테스트 |
/// | [`RedisCacheStore`](super::redis::RedisCacheStore) | Redis TTL | 여러 프로세스 간 공유 |
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// 키에 해당하는 항목을 조회합니다.
    async fn get(&self, key: &str) -> GatewayResult<Option<CacheEntry>>;

    /// 항목을 저장합니다. 같은 키의 기존 항목은 덮어씁니다.
    async fn put(&self, key: &str, entry: CacheEntry) -> GatewayResult<()>;

    /// 항목 하나를 삭제합니다. 키가 없어도 성공입니다.
    async fn remove(&self, key: &str) -> GatewayResult<()>;

    /// 이 저장소의 네임스페이스(`cache_` 접두사)에 속한 모든 항목을 삭제합니다.
    async fn clear(&self) -> GatewayResult<()>;
}
