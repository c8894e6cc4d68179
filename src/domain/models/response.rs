//! 게이트웨이 응답

use reqwest::header::HeaderMap;
use serde_json::Value;

/// 전송 계층 또는 캐시에서 돌아온 응답
///
/// 캐시 적중 시에도 같은 타입(상태 200, 빈 헤더, 캐시된 본문)으로 만들어지므로
/// 호출자는 실제 응답과 구분하지 않고 처리합니다.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Value,
}

impl GatewayResponse {
    pub fn new(status: u16, headers: HeaderMap, body: Value) -> Self {
        Self { status, headers, body }
    }

    /// 본문만으로 200 응답을 만듭니다.
    pub fn ok(body: Value) -> Self {
        Self::new(200, HeaderMap::new(), body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 응답 봉투의 `message` 필드
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}
