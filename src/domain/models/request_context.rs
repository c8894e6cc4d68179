//! 요청 컨텍스트
//!
//! 외부로 나가는 호출 하나마다 생성되는 일회성 값입니다. 미들웨어 체인이
//! 컨텍스트를 순서대로 변환하고, 전송 계층이 최종 컨텍스트를 HTTP 요청으로 만듭니다.
//! 401 재시도 시에는 같은 컨텍스트를 복제해 토큰만 교체한 뒤 다시 보냅니다.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use uuid::Uuid;

use crate::core::errors::{GatewayError, GatewayResult};

/// 요청 본문
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(MultipartPayload),
}

/// 재전송 가능한 multipart 본문
///
/// `reqwest::multipart::Form`은 복제할 수 없으므로, 401 재시도 시 폼을
/// 다시 만들 수 있도록 원본 데이터를 보관합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartPayload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

/// multipart 파일 파트
#[derive(Clone, PartialEq)]
pub struct FilePart {
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for FilePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePart")
            .field("field_name", &self.field_name)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// 호출 하나의 요청 컨텍스트
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// 로그 상관관계용 요청 ID (`X-Request-ID`)
    pub request_id: Uuid,
    /// 대상 경로. 비어 있으면 파이프라인은 요청을 수정하지 않고 통과시킵니다.
    pub path: Option<String>,
    /// HTTP 메서드. 파이프라인 첫 단계에서 대문자로 정규화됩니다.
    pub method: Option<String>,
    /// 요청 헤더. 없으면 미들웨어가 새로 만듭니다.
    pub headers: Option<HeaderMap>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    /// `false`면 Authorization 헤더를 붙이지 않습니다 (공개 바우처 조회 등).
    pub authenticated: bool,
    /// 민감 엔드포인트 여부 (파이프라인이 경로로부터 판정)
    pub sensitive: bool,
    /// 캐시 키. `None`이면 캐시하지 않습니다.
    pub cache_key: Option<String>,
    /// 캐시 TTL. `None`이면 설정의 기본값(5분)을 사용합니다.
    pub cache_ttl: Option<Duration>,
    /// 401 갱신 후 재시도 중인지 여부. 무한 재시도를 막습니다.
    pub retried: bool,
}

impl RequestContext {
    pub fn new(method: &str, path: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            path: Some(path.into()),
            method: Some(method.to_string()),
            headers: Some(HeaderMap::new()),
            query: Vec::new(),
            body: RequestBody::Empty,
            authenticated: true,
            sensitive: false,
            cache_key: None,
            cache_ttl: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new("POST", path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new("PUT", path)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, payload: MultipartPayload) -> Self {
        self.body = RequestBody::Multipart(payload);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn queries(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// 캐시 키와 TTL을 지정합니다.
    pub fn cached(mut self, key: impl Into<String>, ttl: Option<Duration>) -> Self {
        self.cache_key = Some(key.into());
        self.cache_ttl = ttl;
        self
    }

    /// 인증 헤더 없이 보내는 공개 요청으로 표시합니다.
    pub fn public(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// 경로 문자열 (없으면 빈 문자열)
    pub fn path_str(&self) -> &str {
        self.path.as_deref().unwrap_or("")
    }

    /// 정규화된 메서드 문자열
    ///
    /// 파이프라인을 거치지 않은 컨텍스트라도 같은 규칙(대문자, 기본값 GET)을 따릅니다.
    pub fn method_str(&self) -> String {
        match self.method.as_deref().map(str::trim) {
            Some(method) if !method.is_empty() => method.to_uppercase(),
            _ => "GET".to_string(),
        }
    }

    pub fn is_get(&self) -> bool {
        self.method_str() == "GET"
    }

    /// 헤더 맵을 가져오며, 없으면 새로 만듭니다.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        self.headers.get_or_insert_with(HeaderMap::new)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(name))
            .and_then(|value| value.to_str().ok())
    }

    /// 헤더를 설정합니다.
    pub fn set_header(&mut self, name: &str, value: &str) -> GatewayResult<()> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| GatewayError::InvalidRequest(format!("잘못된 헤더 이름 {}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| GatewayError::InvalidRequest(format!("잘못된 헤더 값 ({}): {}", name, e)))?;
        self.headers_mut().insert(name, value);
        Ok(())
    }

    /// `Authorization: Bearer <token>` 헤더를 설정하거나 교체합니다.
    pub fn set_bearer(&mut self, token: &str) -> GatewayResult<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| GatewayError::InvalidRequest(format!("잘못된 토큰 형식: {}", e)))?;
        value.set_sensitive(true);
        self.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }

    /// 전송된 Bearer 토큰
    pub fn bearer_token(&self) -> Option<&str> {
        self.header(AUTHORIZATION.as_str())
            .and_then(|value| value.strip_prefix("Bearer "))
    }

    /// 재시도용 복제본을 만듭니다. 요청 ID는 유지됩니다.
    pub fn replay_with_token(&self, token: &str) -> GatewayResult<Self> {
        let mut replay = self.clone();
        replay.retried = true;
        replay.set_bearer(token)?;
        Ok(replay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_normalization_defaults_to_get() {
        let mut ctx = RequestContext::new("post", "/vouchers");
        assert_eq!(ctx.method_str(), "POST");

        ctx.method = None;
        assert_eq!(ctx.method_str(), "GET");

        ctx.method = Some("   ".to_string());
        assert!(ctx.is_get());
    }

    #[test]
    fn test_headers_created_when_missing() {
        let mut ctx = RequestContext::get("/vouchers");
        ctx.headers = None;

        ctx.set_header("x-test", "1").unwrap();
        assert_eq!(ctx.header("x-test"), Some("1"));
    }

    #[test]
    fn test_replay_replaces_bearer_and_marks_retry() {
        let mut ctx = RequestContext::get("/vouchers").json(json!({}));
        ctx.set_bearer("old").unwrap();

        let replay = ctx.replay_with_token("new").unwrap();

        assert!(replay.retried);
        assert!(!ctx.retried);
        assert_eq!(replay.header("authorization"), Some("Bearer new"));
        assert_eq!(replay.request_id, ctx.request_id);
    }

    #[test]
    fn test_builders() {
        let ctx = RequestContext::get("/vouchers/balance")
            .cached("user_balance", Some(Duration::from_secs(60)))
            .query("page", "1")
            .public();

        assert_eq!(ctx.cache_key.as_deref(), Some("user_balance"));
        assert_eq!(ctx.cache_ttl, Some(Duration::from_secs(60)));
        assert_eq!(ctx.query, vec![("page".to_string(), "1".to_string())]);
        assert!(!ctx.authenticated);
    }
}
