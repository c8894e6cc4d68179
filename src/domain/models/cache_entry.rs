//! 응답 캐시 항목

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 캐시된 응답 본문과 저장 시각, TTL
///
/// 항목은 `now - stored_at < ttl`인 동안만 유효합니다. 만료된 항목은
/// 능동적으로 삭제하지 않고 조회 시 없는 것으로 취급합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub payload: Value,
    pub stored_at: DateTime<Utc>,
    pub ttl_ms: u64,
}

impl CacheEntry {
    pub fn new(payload: Value, stored_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            payload,
            stored_at,
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        let ttl = chrono::Duration::milliseconds(i64::try_from(self.ttl_ms).unwrap_or(i64::MAX));
        self.stored_at
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// 주어진 시각 기준으로 항목이 유효한지 확인합니다.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        let elapsed = (now - self.stored_at).num_milliseconds();
        elapsed < i64::try_from(self.ttl_ms).unwrap_or(i64::MAX)
    }
}
