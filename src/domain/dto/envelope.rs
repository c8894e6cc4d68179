//! 응답 봉투와 정규화된 호출 결과
//!
//! 백엔드의 모든 응답은 `{ success, data?, message? }` 봉투 형식을 따르며,
//! 파사드의 모든 연산은 전송 계층 결과와 무관하게 [`ApiResult`]로 정규화됩니다.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::errors::{GatewayError, GatewayResult};

/// 백엔드 응답 봉투
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// 누락된 경우 2xx 응답이면 성공으로 간주합니다.
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    /// 응답 본문에서 봉투를 읽습니다. 객체가 아니면 본문 전체를 `data`로 봅니다.
    pub fn from_body(body: &Value) -> Self {
        match body {
            Value::Object(_) => serde_json::from_value(body.clone()).unwrap_or_else(|_| Self {
                success: None,
                data: Some(body.clone()),
                message: None,
            }),
            Value::Null => Self::default(),
            other => Self {
                success: None,
                data: Some(other.clone()),
                message: None,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }

    /// `data` 필드를 타입으로 변환합니다. `data`가 없으면 `null`로 시도합니다.
    pub fn data_as<T: DeserializeOwned>(&self) -> GatewayResult<T> {
        let data = self.data.clone().unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// 파사드 연산의 정규화된 결과 `{ success, data?, message?, error? }`
///
/// 호출자는 전송 계층 예외를 분기할 필요 없이 이 값만 확인합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 미리 정의된 사용자 메시지 (성공/실패)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 실패 시 상세 원인
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResult<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        ApiResult {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
            error: self.error,
        }
    }
}

/// 페이지네이션 쿼리
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}
