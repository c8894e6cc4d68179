//! 토큰 갱신 조정자
//!
//! 동시에 여러 요청이 401을 받으면 첫 번째 요청만 `/auth/refresh`를 호출하고,
//! 나머지는 진행 중인 같은 갱신 결과를 기다립니다. 갱신이 끝나면(성공/실패 무관)
//! 슬롯을 비워 이후의 401은 새로운 갱신을 시작합니다.
//!
//! ```text
//! 401 ──► refresh() ──┬─ 진행 중인 갱신 있음 ──► 같은 결과 대기
//!                     └─ 없음 ──► 리프레시 토큰 조회
//!                                  ├─ 없음 ──► 강제 로그아웃, SessionExpired
//!                                  └─ 있음 ──► POST /auth/refresh
//!                                               ├─ 성공 ──┬─ 토큰 쌍 있음 ──► 교체, 새 액세스 토큰 반환
//!                                               │          └─ 그 사이 로그아웃 ──► SessionExpired
//!                                               └─ 실패 ──► 강제 로그아웃, SessionExpired
//! ```

use std::sync::{Arc, Mutex};

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use log::{info, warn};

use crate::caching::ResponseCache;
use crate::config::REFRESH_PATH;
use crate::core::errors::{GatewayError, GatewayResult};
use crate::domain::dto::{ApiEnvelope, AuthSession, RefreshRequest};
use crate::domain::models::{GatewayResponse, RequestContext};
use crate::repositories::tokens::TokenStore;
use crate::services::gateway::transport::Transport;

type InFlightRefresh = Shared<BoxFuture<'static, GatewayResult<String>>>;

struct RefreshDeps {
    transport: Arc<dyn Transport>,
    token_store: Arc<dyn TokenStore>,
    cache: ResponseCache,
}

pub struct RefreshCoordinator {
    deps: Arc<RefreshDeps>,
    in_flight: Mutex<Option<InFlightRefresh>>,
}

impl RefreshCoordinator {
    pub fn new(
        transport: Arc<dyn Transport>,
        token_store: Arc<dyn TokenStore>,
        cache: ResponseCache,
    ) -> Self {
        Self {
            deps: Arc::new(RefreshDeps {
                transport,
                token_store,
                cache,
            }),
            in_flight: Mutex::new(None),
        }
    }

    /// 새 액세스 토큰을 얻습니다.
    ///
    /// 실패하면 인증 상태와 캐시가 이미 비워진 상태로 [`GatewayError::SessionExpired`]를
    /// 반환합니다. 동시 호출자는 모두 같은 결과를 받습니다.
    pub async fn refresh(&self) -> GatewayResult<String> {
        let shared = {
            let mut slot = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
            match slot.as_ref() {
                Some(existing) => existing.clone(),
                None => {
                    let future = run_refresh(self.deps.clone()).boxed().shared();
                    *slot = Some(future.clone());
                    future
                }
            }
        };

        let result = shared.clone().await;

        {
            let mut slot = self.in_flight.lock().unwrap_or_else(|p| p.into_inner());
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&shared)) {
                *slot = None;
            }
        }

        result
    }

    /// 인증 상태와 응답 캐시를 모두 비웁니다.
    pub async fn force_logout(&self) {
        force_logout(&self.deps).await;
    }
}

async fn run_refresh(deps: Arc<RefreshDeps>) -> GatewayResult<String> {
    let refresh_token = match deps.token_store.refresh_token().await {
        Ok(Some(token)) if !token.trim().is_empty() => token,
        Ok(_) => return Err(expire_session(&deps, "리프레시 토큰이 없습니다".to_string()).await),
        Err(e) => return Err(expire_session(&deps, format!("토큰 저장소 오류: {}", e)).await),
    };

    info!("액세스 토큰 갱신 시도");

    match request_new_tokens(&deps, refresh_token).await {
        Ok((access_token, rotated_refresh)) => {
            match deps
                .token_store
                .update_access_token(access_token.clone(), rotated_refresh)
                .await
            {
                Ok(true) => {}
                Ok(false) => {
                    return Err(expire_session(&deps, "갱신 도중 로그아웃되었습니다".to_string()).await);
                }
                Err(e) => warn!("갱신된 토큰 저장 실패: {}", e),
            }
            info!("액세스 토큰 갱신 성공");
            Ok(access_token)
        }
        Err(e) => Err(expire_session(&deps, e.to_string()).await),
    }
}

async fn request_new_tokens(
    deps: &RefreshDeps,
    refresh_token: String,
) -> GatewayResult<(String, Option<String>)> {
    let body = serde_json::to_value(RefreshRequest { refresh_token })?;
    let ctx = RequestContext::post(REFRESH_PATH).json(body).public();

    let response = deps.transport.send(&ctx).await?;
    if !response.is_success() {
        return Err(http_error(&response));
    }

    let envelope = ApiEnvelope::from_body(&response.body);
    if !envelope.is_success() {
        return Err(http_error(&response));
    }

    let session = envelope
        .data
        .as_ref()
        .and_then(|data| serde_json::from_value::<AuthSession>(data.clone()).ok())
        .filter(AuthSession::has_tokens)
        .or_else(|| {
            serde_json::from_value::<AuthSession>(response.body.clone())
                .ok()
                .filter(AuthSession::has_tokens)
        });

    match session.and_then(|s| s.access_token.map(|access| (access, s.refresh_token))) {
        Some(tokens) => Ok(tokens),
        None => Err(GatewayError::Decode(
            "갱신 응답에 액세스 토큰이 없습니다".to_string(),
        )),
    }
}

/// 비-2xx 응답을 에러로 변환합니다.
pub(crate) fn http_error(response: &GatewayResponse) -> GatewayError {
    let message = response
        .message()
        .map(str::to_string)
        .or_else(|| {
            reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Request failed".to_string());

    GatewayError::Http {
        status: response.status,
        message,
        body: response.body.clone(),
    }
}

async fn expire_session(deps: &RefreshDeps, cause: String) -> GatewayError {
    warn!("세션 만료, 강제 로그아웃: {}", cause);
    force_logout(deps).await;
    GatewayError::SessionExpired { cause }
}

async fn force_logout(deps: &RefreshDeps) {
    if let Err(e) = deps.token_store.clear().await {
        warn!("토큰 삭제 실패: {}", e);
    }
    if let Err(e) = deps.cache.clear().await {
        warn!("캐시 삭제 실패: {}", e);
    }
}
