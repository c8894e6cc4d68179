//! 네트워크 없이 게이트웨이를 검증하기 위한 전송 계층

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::caching::MemoryCacheStore;
use crate::config::ApiConfig;
use crate::core::clock::ManualClock;
use crate::core::errors::GatewayResult;
use crate::domain::models::{AuthToken, DeviceInfo, GatewayResponse, RequestContext};
use crate::repositories::tokens::MemoryTokenStore;
use crate::services::gateway::http_gateway::{GatewayContext, HttpGateway};
use crate::services::gateway::transport::Transport;

type Handler = Box<dyn Fn(&RequestContext) -> GatewayResult<GatewayResponse> + Send + Sync>;

/// 요청을 기록하고 핸들러로 응답을 만드는 전송 계층
pub struct ScriptedTransport {
    handler: Handler,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<RequestContext>>,
}

pub fn reply(status: u16, body: Value) -> GatewayResult<GatewayResponse> {
    Ok(GatewayResponse::new(status, HeaderMap::new(), body))
}

impl ScriptedTransport {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&RequestContext) -> GatewayResult<GatewayResponse> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            delays: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 특정 경로의 응답을 지연시킵니다.
    pub fn with_delay(mut self, path: &str, delay: Duration) -> Self {
        self.delays.insert(path.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<RequestContext> {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls().iter().filter(|ctx| ctx.path_str() == path).count()
    }

    pub fn last_call_to(&self, path: &str) -> Option<RequestContext> {
        self.calls().into_iter().rev().find(|ctx| ctx.path_str() == path)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, ctx: &RequestContext) -> GatewayResult<GatewayResponse> {
        self.calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(ctx.clone());

        if let Some(delay) = self.delays.get(ctx.path_str()) {
            tokio::time::sleep(*delay).await;
        }

        (self.handler)(ctx)
    }
}

/// 스크립트 전송 계층과 메모리 저장소로 구성된 게이트웨이
pub struct TestBed {
    pub gateway: HttpGateway,
    pub transport: Arc<ScriptedTransport>,
    pub tokens: Arc<MemoryTokenStore>,
    pub cache: Arc<MemoryCacheStore>,
    pub clock: Arc<ManualClock>,
}

impl TestBed {
    pub fn new(tokens: MemoryTokenStore, transport: ScriptedTransport) -> Self {
        let transport = Arc::new(transport);
        let tokens = Arc::new(tokens);
        let cache = Arc::new(MemoryCacheStore::new());
        let clock = Arc::new(ManualClock::default());
        let context = GatewayContext::new(tokens.clone(), cache.clone(), clock.clone())
            .with_device(DeviceInfo::new("test", "1x1", "UTC", "en-US", "test"));
        let gateway = HttpGateway::new(ApiConfig::new("http://api.test"), transport.clone(), context);

        Self {
            gateway,
            transport,
            tokens,
            cache,
            clock,
        }
    }
}

pub fn logged_in(access: &str, refresh: Option<&str>) -> MemoryTokenStore {
    MemoryTokenStore::with_token(AuthToken::new(access, refresh.map(str::to_string)))
}
