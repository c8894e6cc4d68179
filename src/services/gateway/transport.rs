//! 전송 계층
//!
//! 최종 [`RequestContext`]를 실제 HTTP 요청으로 보내고 응답을 [`GatewayResponse`]로
//! 돌려줍니다. HTTP 상태 코드와 무관하게 응답을 받았다면 `Ok`이며, 상태 코드 해석은
//! 게이트웨이가 담당합니다.

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::core::errors::{GatewayError, GatewayResult};
use crate::domain::models::{GatewayResponse, MultipartPayload, RequestBody, RequestContext};

/// HTTP 전송 추상화
///
/// 테스트에서는 네트워크 없이 응답을 돌려주는 구현체로 교체합니다.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, ctx: &RequestContext) -> GatewayResult<GatewayResponse>;
}

/// `reqwest` 기반 전송 계층
///
/// 모든 요청에 고정된 전체 제한 시간(기본 30초)이 적용되며, 초과 시
/// [`GatewayError::Timeout`]으로 실패합니다.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: ApiConfig,
}

impl ReqwestTransport {
    pub fn new(config: ApiConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::Internal(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn map_send_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout(self.config.request_timeout)
        } else {
            GatewayError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, ctx: &RequestContext) -> GatewayResult<GatewayResponse> {
        let path = ctx
            .path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .ok_or_else(|| GatewayError::InvalidRequest("요청 URL이 없습니다".to_string()))?;
        let url = self.config.url_for(path);

        let method = ctx.method_str();
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| GatewayError::InvalidRequest(format!("알 수 없는 HTTP 메서드: {}", method)))?;

        let mut request = self.client.request(method.clone(), &url);
        if let Some(headers) = &ctx.headers {
            request = request.headers(headers.clone());
        }
        if !ctx.query.is_empty() {
            request = request.query(&ctx.query);
        }
        request = match &ctx.body {
            RequestBody::Empty => request,
            RequestBody::Json(body) => request.json(body),
            RequestBody::Multipart(payload) => request.multipart(build_form(payload)?),
        };

        debug!("[{}] -> {} {}", ctx.request_id, method, url);

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        debug!("[{}] <- {} ({} bytes)", ctx.request_id, status, bytes.len());

        Ok(GatewayResponse::new(status, headers, parse_body(&bytes)))
    }
}

/// 복제 가능한 multipart 데이터로부터 매 전송마다 새 폼을 만듭니다.
fn build_form(payload: &MultipartPayload) -> GatewayResult<Form> {
    let mut form = Form::new();
    for (name, value) in &payload.fields {
        form = form.text(name.clone(), value.clone());
    }
    for file in &payload.files {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| {
                GatewayError::InvalidRequest(format!(
                    "잘못된 Content-Type ({}): {}",
                    file.content_type, e
                ))
            })?;
        form = form.part(file.field_name.clone(), part);
    }
    Ok(form)
}

/// 응답 본문을 JSON으로 해석합니다. 비어 있으면 `null`, JSON이 아니면 문자열입니다.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
