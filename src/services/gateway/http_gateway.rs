//! HTTP 클라이언트 게이트웨이
//!
//! 하나의 논리적 호출이 거치는 상태 전이:
//!
//! ```text
//! PENDING -> (캐시 적중) -> RESOLVED
//! PENDING -> SENT -> SUCCESS -> RESOLVED
//! PENDING -> SENT -> FAIL(401, retried=false) -> REFRESHING -> SENT(retried=true) -> SUCCESS|FAIL -> RESOLVED
//! PENDING -> SENT -> FAIL(401, retried=true)  -> RESOLVED (에러 전달, 두 번째 갱신 없음)
//! PENDING -> SENT -> FAIL(기타)               -> RESOLVED (에러 전달)
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::caching::{CacheStore, MemoryCacheStore, ResponseCache};
use crate::config::{ApiConfig, SecurityConfig};
use crate::core::clock::{Clock, SystemClock};
use crate::core::errors::GatewayResult;
use crate::domain::models::{DeviceInfo, GatewayResponse, RequestContext};
use crate::middlewares::{RequestPipeline, ResponsePipeline, cacheable_key};
use crate::repositories::tokens::{MemoryTokenStore, TokenStore};
use crate::services::gateway::refresh::{RefreshCoordinator, http_error};
use crate::services::gateway::transport::Transport;

/// 게이트웨이에 주입되는 공유 상태
///
/// 전역 변수 대신 생성 시점에 명시적으로 전달되므로, 테스트마다 독립된
/// 토큰 저장소와 캐시를 사용할 수 있습니다.
#[derive(Clone)]
pub struct GatewayContext {
    pub token_store: Arc<dyn TokenStore>,
    pub cache_store: Arc<dyn CacheStore>,
    pub clock: Arc<dyn Clock>,
    /// 고정 기기 정보. `None`이면 요청마다 실행 환경에서 수집합니다.
    pub device: Option<DeviceInfo>,
}

impl GatewayContext {
    pub fn new(
        token_store: Arc<dyn TokenStore>,
        cache_store: Arc<dyn CacheStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            token_store,
            cache_store,
            clock,
            device: None,
        }
    }

    /// 메모리 저장소와 시스템 시계로 구성합니다.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryTokenStore::new()),
            Arc::new(MemoryCacheStore::new()),
            Arc::new(SystemClock),
        )
    }

    pub fn with_device(mut self, device: DeviceInfo) -> Self {
        self.device = Some(device);
        self
    }
}

struct GatewayInner {
    config: ApiConfig,
    transport: Arc<dyn Transport>,
    token_store: Arc<dyn TokenStore>,
    cache: ResponseCache,
    request_pipeline: RequestPipeline,
    response_pipeline: ResponsePipeline,
    refresh: RefreshCoordinator,
}

/// 인증, 캐시, 401 갱신/재시도를 담당하는 게이트웨이
///
/// 복제 비용이 낮으며(`Arc`), 모든 복제본이 같은 저장소와 갱신 조정자를 공유합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use voucher_gateway::config::ApiConfig;
/// use voucher_gateway::services::gateway::{GatewayContext, HttpGateway, ReqwestTransport};
///
/// let config = ApiConfig::from_env();
/// let transport = ReqwestTransport::new(config.clone())?;
/// let gateway = HttpGateway::new(config, Arc::new(transport), GatewayContext::in_memory());
///
/// let response = gateway
///     .execute(RequestContext::get("/vouchers/balance").cached("user_balance", None))
///     .await?;
/// ```
#[derive(Clone)]
pub struct HttpGateway {
    inner: Arc<GatewayInner>,
}

impl HttpGateway {
    pub fn new(config: ApiConfig, transport: Arc<dyn Transport>, context: GatewayContext) -> Self {
        let cache = ResponseCache::new(context.cache_store, context.clock);
        let request_pipeline = RequestPipeline::standard(context.token_store.clone(), context.device);
        let response_pipeline = ResponsePipeline::new(cache.clone(), config.default_cache_ttl);
        let refresh =
            RefreshCoordinator::new(transport.clone(), context.token_store.clone(), cache.clone());

        Self {
            inner: Arc::new(GatewayInner {
                config,
                transport,
                token_store: context.token_store,
                cache,
                request_pipeline,
                response_pipeline,
                refresh,
            }),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.token_store
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.inner.cache
    }

    /// 호출 하나를 실행합니다.
    ///
    /// 1. 요청 미들웨어 체인 적용
    /// 2. 캐시 대상이면 유효한 캐시 항목으로 단락 (상태 200, 캐시된 본문)
    /// 3. 전송 및 응답 처리, 401이면 한 번만 갱신 후 재전송
    pub async fn execute(&self, ctx: RequestContext) -> GatewayResult<GatewayResponse> {
        let ctx = self.inner.request_pipeline.run(ctx).await;

        if let Some(key) = cacheable_key(&ctx) {
            match self.inner.cache.get(key).await {
                Ok(Some((payload, expires_at))) => {
                    debug!("[{}] 캐시 적중: {} (만료 {})", ctx.request_id, key, expires_at);
                    return Ok(GatewayResponse::ok(payload));
                }
                Ok(None) => debug!("[{}] 캐시 미스: {}", ctx.request_id, key),
                Err(e) => warn!("[{}] 캐시 조회 실패 ({}): {}", ctx.request_id, key, e),
            }
        }

        self.dispatch(ctx).await
    }

    async fn dispatch(&self, mut ctx: RequestContext) -> GatewayResult<GatewayResponse> {
        loop {
            let error = match self.send_once(&ctx).await {
                Ok(response) => {
                    self.inner.response_pipeline.on_success(&ctx, &response).await;
                    return Ok(response);
                }
                Err(error) => error,
            };

            let recoverable = error.is_unauthorized()
                && !ctx.retried
                && ctx.authenticated
                && !SecurityConfig::is_auth_bootstrap(ctx.path_str());

            if !recoverable {
                self.inner.response_pipeline.on_failure(&ctx, &error);
                return Err(error);
            }

            let access_token = match self.rotated_since(&ctx).await {
                Some(stored) => {
                    info!("[{}] 401 수신, 이미 갱신된 토큰으로 재시도: {}", ctx.request_id, ctx.path_str());
                    stored
                }
                None => {
                    info!("[{}] 401 수신, 토큰 갱신 후 재시도: {}", ctx.request_id, ctx.path_str());
                    self.inner.refresh.refresh().await?
                }
            };
            ctx = ctx.replay_with_token(&access_token)?;
        }
    }

    /// 요청이 보낸 토큰과 현재 저장된 토큰이 다르면 저장된 토큰을 반환합니다.
    ///
    /// 요청이 전송된 뒤 다른 호출이 이미 갱신을 마친 경우이므로 다시 갱신하지 않습니다.
    async fn rotated_since(&self, ctx: &RequestContext) -> Option<String> {
        let stored = match self.inner.token_store.access_token().await {
            Ok(stored) => stored?,
            Err(e) => {
                warn!("[{}] 토큰 조회 실패: {}", ctx.request_id, e);
                return None;
            }
        };
        if ctx.bearer_token() == Some(stored.as_str()) {
            None
        } else {
            Some(stored)
        }
    }

    async fn send_once(&self, ctx: &RequestContext) -> GatewayResult<GatewayResponse> {
        let response = self.inner.transport.send(ctx).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(http_error(&response))
        }
    }

    /// 401을 기다리지 않고 토큰을 갱신합니다. 진행 중인 갱신이 있으면 합류합니다.
    pub async fn refresh_session(&self) -> GatewayResult<String> {
        self.inner.refresh.refresh().await
    }

    /// 인증 상태와 응답 캐시를 모두 비웁니다.
    pub async fn clear_session(&self) {
        self.inner.refresh.force_logout().await;
    }

    /// 전체 응답 캐시를 무효화합니다. 실패는 로그만 남깁니다.
    pub async fn invalidate_cache(&self) {
        if let Err(e) = self.inner.cache.clear().await {
            warn!("캐시 무효화 실패: {}", e);
        }
    }
}
