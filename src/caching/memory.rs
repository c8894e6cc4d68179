//! 프로세스 메모리 기반 캐시 저장소

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::caching::store::CacheStore;
use crate::config::DEFAULT_CACHE_PREFIX;
use crate::core::errors::GatewayResult;
use crate::domain::models::CacheEntry;

/// 세션 수명의 인메모리 캐시
///
/// 프로세스가 종료되면 사라지며, 모든 키는 접두사(기본 `cache_`)로 네임스페이스가
/// 분리됩니다. 테스트에서는 인스턴스마다 독립된 캐시를 제공합니다.
pub struct MemoryCacheStore {
    prefix: String,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_CACHE_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// 저장된 항목 수 (만료 항목 포함)
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 접두사를 제외한 키 목록
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(|p| p.into_inner());
        entries
            .keys()
            .filter_map(|key| key.strip_prefix(&self.prefix).map(str::to_string))
            .collect()
    }
}

impl Default for MemoryCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &str) -> GatewayResult<Option<CacheEntry>> {
        let entries = self.entries.read().unwrap_or_else(|p| p.into_inner());
        Ok(entries.get(&self.namespaced(key)).cloned())
    }

    async fn put(&self, key: &str, entry: CacheEntry) -> GatewayResult<()> {
        let key = self.namespaced(key);
        let mut entries = self.entries.write().unwrap_or_else(|p| p.into_inner());
        entries.insert(key, entry);
        Ok(())
    }

    async fn remove(&self, key: &str) -> GatewayResult<()> {
        let key = self.namespaced(key);
        let mut entries = self.entries.write().unwrap_or_else(|p| p.into_inner());
        entries.remove(&key);
        Ok(())
    }

    async fn clear(&self) -> GatewayResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|p| p.into_inner());
        entries.retain(|key, _| !key.starts_with(&self.prefix));
        Ok(())
    }
}
