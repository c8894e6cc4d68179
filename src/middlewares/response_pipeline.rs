//! 응답 후처리
//!
//! 성공 응답은 마스킹된 형태로 로그를 남기고 캐시 조건을 만족하면 캐시에 기록합니다.
//! 실패 응답은 상태 코드별로 로그만 남기며, 401 갱신/재시도는 게이트웨이가 담당합니다.

use std::time::Duration;

use log::{debug, error, warn};

use crate::caching::ResponseCache;
use crate::core::errors::GatewayError;
use crate::domain::dto::ApiEnvelope;
use crate::domain::models::{GatewayResponse, RequestContext};
use crate::utils::redaction::redact_for_log;

/// 캐시 대상이면 캐시 키를 반환합니다.
///
/// URL이 있는 GET 요청이고, 민감 엔드포인트가 아니며, 캐시 키가 지정된 경우에만 해당합니다.
pub fn cacheable_key(ctx: &RequestContext) -> Option<&str> {
    if !ctx.is_get() || ctx.sensitive || ctx.path_str().is_empty() {
        return None;
    }
    ctx.cache_key.as_deref().filter(|key| !key.is_empty())
}

#[derive(Clone)]
pub struct ResponsePipeline {
    cache: ResponseCache,
    default_ttl: Duration,
}

impl ResponsePipeline {
    pub fn new(cache: ResponseCache, default_ttl: Duration) -> Self {
        Self { cache, default_ttl }
    }

    /// 성공 응답 처리. 캐시 쓰기 실패는 로그만 남기고 무시합니다.
    pub async fn on_success(&self, ctx: &RequestContext, response: &GatewayResponse) {
        debug!(
            "[{}] {} {} -> {} {}",
            ctx.request_id,
            ctx.method_str(),
            ctx.path_str(),
            response.status,
            redact_for_log(&response.body)
        );

        let Some(key) = cacheable_key(ctx) else {
            return;
        };
        if !ApiEnvelope::from_body(&response.body).is_success() {
            debug!("[{}] success=false 응답은 캐시하지 않습니다: {}", ctx.request_id, key);
            return;
        }

        let ttl = ctx.cache_ttl.unwrap_or(self.default_ttl);
        match self.cache.put(key, response.body.clone(), ttl).await {
            Ok(()) => debug!("[{}] 캐시 저장: {} (ttl {}ms)", ctx.request_id, key, ttl.as_millis()),
            Err(e) => warn!("[{}] 캐시 저장 실패 ({}): {}", ctx.request_id, key, e),
        }
    }

    /// 실패 응답 로그. 에러는 호출자에게 그대로 전달됩니다.
    pub fn on_failure(&self, ctx: &RequestContext, error: &GatewayError) {
        match error.status() {
            Some(403) => warn!("[{}] 접근 거부 (403): {}", ctx.request_id, ctx.path_str()),
            Some(429) => warn!("[{}] 요청 한도 초과 (429): {}", ctx.request_id, ctx.path_str()),
            Some(status) if status >= 500 => error!(
                "[{}] 서버 오류 ({}): {} - {}",
                ctx.request_id,
                status,
                ctx.path_str(),
                error.detail()
            ),
            _ => debug!("[{}] 요청 실패: {} - {}", ctx.request_id, ctx.path_str(), error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::{CacheStore, MemoryCacheStore};
    use crate::core::clock::SystemClock;
    use serde_json::json;
    use std::sync::Arc;

    fn pipeline() -> (ResponsePipeline, Arc<MemoryCacheStore>) {
        let store = Arc::new(MemoryCacheStore::new());
        let cache = ResponseCache::new(store.clone(), Arc::new(SystemClock));
        (ResponsePipeline::new(cache, Duration::from_secs(300)), store)
    }

    #[tokio::test]
    async fn test_get_with_key_is_cached_with_default_ttl() {
        let (pipeline, store) = pipeline();
        let ctx = RequestContext::get("/auth/profile").cached("user_profile", None);

        pipeline.on_success(&ctx, &GatewayResponse::ok(json!({ "id": 1 }))).await;

        let entry = store.get("user_profile").await.unwrap().unwrap();
        assert_eq!(entry.ttl_ms, 300_000);
        assert_eq!(entry.payload, json!({ "id": 1 }));
    }

    #[tokio::test]
    async fn test_post_and_sensitive_requests_are_not_cached() {
        let (pipeline, store) = pipeline();

        let post = RequestContext::post("/vouchers").cached("vouchers", None);
        pipeline.on_success(&post, &GatewayResponse::ok(json!({}))).await;

        let mut sensitive = RequestContext::get("/payments/wallet-balance").cached("wallet", None);
        sensitive.sensitive = true;
        pipeline.on_success(&sensitive, &GatewayResponse::ok(json!({}))).await;

        let uncached = RequestContext::get("/vouchers");
        pipeline.on_success(&uncached, &GatewayResponse::ok(json!({}))).await;

        let rejected = RequestContext::get("/vouchers").cached("vouchers", None);
        let body = json!({ "success": false, "message": "not allowed" });
        pipeline.on_success(&rejected, &GatewayResponse::ok(body)).await;

        assert!(store.is_empty());
    }
}
