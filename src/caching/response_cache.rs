//! 시계와 결합된 응답 캐시
//!
//! [`CacheStore`]는 항목을 보관만 하고, 이 타입이 주입된 [`Clock`]으로 유효성을
//! 판단합니다. 게이트웨이와 파사드는 저장소 구현과 무관하게 이 API만 사용합니다.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

use crate::caching::store::CacheStore;
use crate::core::clock::Clock;
use crate::core::errors::GatewayResult;
use crate::domain::models::CacheEntry;

#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// 유효한 항목의 페이로드와 만료 시각을 반환합니다.
    ///
    /// `now - storedAt >= ttl`인 항목은 삭제하지 않고 없는 것으로 취급합니다.
    pub async fn get(&self, key: &str) -> GatewayResult<Option<(Value, DateTime<Utc>)>> {
        let now = self.clock.now();
        match self.store.get(key).await? {
            Some(entry) if entry.is_fresh_at(now) => {
                let expires_at = entry.expires_at();
                Ok(Some((entry.payload, expires_at)))
            }
            Some(_) => {
                debug!("캐시 만료: {}", key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// 현재 시각을 저장 시각으로 항목을 기록합니다.
    pub async fn put(&self, key: &str, payload: Value, ttl: Duration) -> GatewayResult<()> {
        let entry = CacheEntry::new(payload, self.clock.now(), ttl);
        self.store.put(key, entry).await
    }

    pub async fn remove(&self, key: &str) -> GatewayResult<()> {
        self.store.remove(key).await
    }

    /// 전체 캐시를 무효화합니다 (로그아웃, 변경 연산 성공 시).
    pub async fn clear(&self) -> GatewayResult<()> {
        self.store.clear().await
    }
}
