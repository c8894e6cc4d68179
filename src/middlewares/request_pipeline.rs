//! 요청 미들웨어 체인
//!
//! 논리적 호출(경로, 메서드, 본문, 옵션)을 완전한 outbound 요청으로 변환합니다.
//! 각 단계는 `Result<RequestContext, RequestContext>`를 반환하며, `Err`는 "이 단계를
//! 건너뛰었다"는 뜻입니다. 파이프라인은 경고를 남기고 `Err`에 담긴 컨텍스트로
//! 다음 단계를 계속 진행하므로, 미들웨어 내부 오류가 요청을 중단시키지 않습니다.
//!
//! | 순서 | 단계 | 동작 |
//! |------|------|------|
//! | 1 | [`AttachRequestId`] | `X-Request-ID` 헤더 |
//! | 2 | [`NormalizeMethod`] | 메서드 대문자화, 기본값 `GET` |
//! | 3 | [`AttachAuth`] | `Authorization: Bearer`, `X-Requested-With` |
//! | 4 | [`AttachDeviceInfo`] | `X-Device-Info` (이미 있으면 유지) |
//! | 5 | [`ClassifySensitivity`] | 민감 엔드포인트 판정 |
//! | 6 | [`SecurityHeaders`] | 민감 요청에 보안 헤더 강제, 캐시 키 제거 |
//!
//! 캐시 조회(단락)는 게이트웨이가 체인 실행 후 수행합니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use crate::config::{SECURITY_HEADERS, SecurityConfig};
use crate::domain::models::{DeviceInfo, RequestContext};
use crate::repositories::tokens::TokenStore;

pub const HEADER_REQUEST_ID: &str = "x-request-id";
pub const HEADER_REQUESTED_WITH: &str = "x-requested-with";
pub const HEADER_DEVICE_INFO: &str = "x-device-info";

/// 요청 미들웨어 단계
#[async_trait]
pub trait RequestMiddleware: Send + Sync {
    /// 로그에 표시할 단계 이름
    fn name(&self) -> &'static str;

    /// 컨텍스트를 변환합니다. 실패 시 수정 전 컨텍스트를 `Err`로 돌려줍니다.
    async fn handle(&self, ctx: RequestContext) -> Result<RequestContext, RequestContext>;
}

/// 순서가 있는 요청 미들웨어 목록
#[derive(Clone)]
pub struct RequestPipeline {
    steps: Vec<Arc<dyn RequestMiddleware>>,
}

impl RequestPipeline {
    pub fn new(steps: Vec<Arc<dyn RequestMiddleware>>) -> Self {
        Self { steps }
    }

    /// 기본 단계 구성
    pub fn standard(token_store: Arc<dyn TokenStore>, device: Option<DeviceInfo>) -> Self {
        Self::new(vec![
            Arc::new(AttachRequestId),
            Arc::new(NormalizeMethod),
            Arc::new(AttachAuth::new(token_store)),
            Arc::new(AttachDeviceInfo::new(device)),
            Arc::new(ClassifySensitivity),
            Arc::new(SecurityHeaders),
        ])
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 모든 단계를 순서대로 적용합니다.
    ///
    /// URL(경로)이 없으면 경고만 남기고 컨텍스트를 수정하지 않고 반환합니다.
    pub async fn run(&self, ctx: RequestContext) -> RequestContext {
        if ctx.path.as_deref().is_none_or(|path| path.trim().is_empty()) {
            warn!("[{}] 요청 URL이 없습니다. 수정 없이 전달합니다", ctx.request_id);
            return ctx;
        }

        let mut ctx = ctx;
        for step in &self.steps {
            ctx = match step.handle(ctx).await {
                Ok(next) => next,
                Err(unchanged) => {
                    warn!(
                        "[{}] 요청 미들웨어 '{}' 실패, 건너뜁니다",
                        unchanged.request_id,
                        step.name()
                    );
                    unchanged
                }
            };
        }
        ctx
    }
}

/// `X-Request-ID` 헤더
pub struct AttachRequestId;

#[async_trait]
impl RequestMiddleware for AttachRequestId {
    fn name(&self) -> &'static str {
        "request-id"
    }

    async fn handle(&self, mut ctx: RequestContext) -> Result<RequestContext, RequestContext> {
        let request_id = ctx.request_id.to_string();
        match ctx.set_header(HEADER_REQUEST_ID, &request_id) {
            Ok(()) => Ok(ctx),
            Err(_) => Err(ctx),
        }
    }
}

/// 메서드 정규화
pub struct NormalizeMethod;

#[async_trait]
impl RequestMiddleware for NormalizeMethod {
    fn name(&self) -> &'static str {
        "normalize-method"
    }

    async fn handle(&self, mut ctx: RequestContext) -> Result<RequestContext, RequestContext> {
        ctx.method = Some(ctx.method_str());
        Ok(ctx)
    }
}

/// 토큰 저장소에 액세스 토큰이 있으면 Bearer 인증 헤더를 붙입니다.
pub struct AttachAuth {
    token_store: Arc<dyn TokenStore>,
}

impl AttachAuth {
    pub fn new(token_store: Arc<dyn TokenStore>) -> Self {
        Self { token_store }
    }
}

#[async_trait]
impl RequestMiddleware for AttachAuth {
    fn name(&self) -> &'static str {
        "attach-auth"
    }

    async fn handle(&self, mut ctx: RequestContext) -> Result<RequestContext, RequestContext> {
        if !ctx.authenticated {
            return Ok(ctx);
        }

        let token = match self.token_store.access_token().await {
            Ok(token) => token,
            Err(e) => {
                warn!("[{}] 액세스 토큰 조회 실패: {}", ctx.request_id, e);
                return Err(ctx);
            }
        };

        let Some(token) = token else {
            return Ok(ctx);
        };

        if let Err(e) = ctx.set_bearer(&token) {
            warn!("[{}] 인증 헤더 설정 실패: {}", ctx.request_id, e);
            return Err(ctx);
        }
        match ctx.set_header(HEADER_REQUESTED_WITH, "XMLHttpRequest") {
            Ok(()) => Ok(ctx),
            Err(_) => Err(ctx),
        }
    }
}

/// `X-Device-Info` 헤더
///
/// 고정된 기기 정보가 주어지지 않으면 요청마다 실행 환경에서 수집합니다.
pub struct AttachDeviceInfo {
    fixed: Option<DeviceInfo>,
}

impl AttachDeviceInfo {
    pub fn new(fixed: Option<DeviceInfo>) -> Self {
        Self { fixed }
    }
}

#[async_trait]
impl RequestMiddleware for AttachDeviceInfo {
    fn name(&self) -> &'static str {
        "device-info"
    }

    async fn handle(&self, mut ctx: RequestContext) -> Result<RequestContext, RequestContext> {
        if ctx.header(HEADER_DEVICE_INFO).is_some() {
            return Ok(ctx);
        }

        let device = self.fixed.clone().unwrap_or_else(DeviceInfo::detect);
        let value = match device.header_value() {
            Ok(value) => value,
            Err(e) => {
                warn!("[{}] 기기 정보 직렬화 실패: {}", ctx.request_id, e);
                return Err(ctx);
            }
        };

        match ctx.set_header(HEADER_DEVICE_INFO, &value) {
            Ok(()) => Ok(ctx),
            Err(_) => Err(ctx),
        }
    }
}

/// 경로가 민감 엔드포인트 목록과 일치하는지 판정합니다.
pub struct ClassifySensitivity;

#[async_trait]
impl RequestMiddleware for ClassifySensitivity {
    fn name(&self) -> &'static str {
        "classify-sensitivity"
    }

    async fn handle(&self, mut ctx: RequestContext) -> Result<RequestContext, RequestContext> {
        ctx.sensitive = SecurityConfig::is_sensitive(ctx.path_str());
        Ok(ctx)
    }
}

/// 민감 요청에 no-cache/보안 헤더를 강제하고 캐시를 비활성화합니다.
pub struct SecurityHeaders;

#[async_trait]
impl RequestMiddleware for SecurityHeaders {
    fn name(&self) -> &'static str {
        "security-headers"
    }

    async fn handle(&self, mut ctx: RequestContext) -> Result<RequestContext, RequestContext> {
        if !ctx.sensitive {
            return Ok(ctx);
        }

        for (name, value) in SECURITY_HEADERS {
            if ctx.set_header(name, value).is_err() {
                return Err(ctx);
            }
        }

        if ctx.cache_key.take().is_some() {
            debug!("[{}] 민감 엔드포인트: 캐시 키 무시 ({})", ctx.request_id, ctx.path_str());
        }
        ctx.cache_ttl = None;
        Ok(ctx)
    }
}
