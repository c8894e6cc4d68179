//! 파사드 공통 호출 로직
//!
//! 모든 연산은 이 타입을 거쳐 다음 규칙을 공유합니다.
//!
//! - 로딩 메시지를 `info` 로그로 남깁니다.
//! - 요청 구성/검증 실패는 네트워크 호출 없이 실패 결과가 됩니다.
//! - 응답 봉투의 `success: false`는 실패로 취급합니다.
//! - 변경 연산이 성공하면 응답 캐시 전체를 무효화합니다.
//! - 결과는 항상 [`ApiResult`]로 정규화되며 에러를 던지지 않습니다.

use std::time::Duration;

use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::core::errors::{GatewayError, GatewayResult};
use crate::domain::dto::{ApiEnvelope, ApiResult};
use crate::domain::models::{GatewayResponse, RequestContext};
use crate::services::api::messages::CallMessages;
use crate::services::gateway::HttpGateway;

pub(crate) const MINUTE: Duration = Duration::from_secs(60);
pub(crate) const HOUR: Duration = Duration::from_secs(60 * 60);

/// 호출 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// 조회. 캐시를 무효화하지 않습니다.
    Read,
    /// 변경. 성공 시 캐시 전체를 무효화합니다.
    Mutation,
}

#[derive(Clone)]
pub struct ApiCaller {
    gateway: HttpGateway,
}

impl ApiCaller {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &HttpGateway {
        &self.gateway
    }

    pub async fn read<T: DeserializeOwned>(
        &self,
        messages: &CallMessages,
        ctx: GatewayResult<RequestContext>,
    ) -> ApiResult<T> {
        self.call(messages, CallKind::Read, ctx).await
    }

    pub async fn mutate<T: DeserializeOwned>(
        &self,
        messages: &CallMessages,
        ctx: GatewayResult<RequestContext>,
    ) -> ApiResult<T> {
        self.call(messages, CallKind::Mutation, ctx).await
    }

    pub async fn call<T: DeserializeOwned>(
        &self,
        messages: &CallMessages,
        kind: CallKind,
        ctx: GatewayResult<RequestContext>,
    ) -> ApiResult<T> {
        info!("{}", messages.loading);

        match self.fetch(ctx).await {
            Ok(data) => {
                if kind == CallKind::Mutation {
                    self.gateway.invalidate_cache().await;
                }
                ApiResult::success(data, messages.success)
            }
            Err(error) => {
                warn!("{}: {}", messages.error, error);
                ApiResult::failure(messages.error, error.detail())
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, ctx: GatewayResult<RequestContext>) -> GatewayResult<T> {
        let response = self.gateway.execute(ctx?).await?;
        decode(&response)
    }
}

/// 응답 봉투에서 데이터를 꺼냅니다.
///
/// `data`가 있으면 그 값을, 없으면 본문 전체를 대상 타입으로 변환합니다.
pub fn decode<T: DeserializeOwned>(response: &GatewayResponse) -> GatewayResult<T> {
    let envelope = ApiEnvelope::from_body(&response.body);
    if !envelope.is_success() {
        return Err(GatewayError::Http {
            status: response.status,
            message: envelope
                .message
                .unwrap_or_else(|| "Request failed".to_string()),
            body: response.body.clone(),
        });
    }

    let data = envelope.data.unwrap_or_else(|| response.body.clone());
    serde_json::from_value(data).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// 요청 DTO를 검증한 뒤 JSON 본문으로 변환합니다.
pub fn validated_body<R: Validate + Serialize>(request: &R) -> GatewayResult<Value> {
    request.validate()?;
    Ok(serde_json::to_value(request)?)
}

pub fn post_json<R: Validate + Serialize>(path: &str, request: &R) -> GatewayResult<RequestContext> {
    Ok(RequestContext::post(path).json(validated_body(request)?))
}

pub fn put_json<R: Validate + Serialize>(path: &str, request: &R) -> GatewayResult<RequestContext> {
    Ok(RequestContext::put(path).json(validated_body(request)?))
}
