//! 인증 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰은 게이트웨이 입장에서 불투명한 Bearer 문자열입니다.
//! 토큰 저장소가 독점적으로 소유하며, 로그인 시 생성되고 갱신 시 액세스 토큰이
//! 교체되며 로그아웃 또는 복구 불가능한 갱신 실패 시 삭제됩니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 액세스/리프레시 토큰 쌍
///
/// `Debug` 출력에서는 토큰 값이 마스킹됩니다.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthToken {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰, 없을 수 있음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// 마지막 저장/갱신 시각
    pub updated_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            updated_at: Utc::now(),
        }
    }

    /// 갱신 결과를 반영합니다.
    ///
    /// 새 리프레시 토큰이 함께 발급된 경우에만 리프레시 토큰을 교체합니다.
    pub fn rotate(&mut self, access_token: String, refresh_token: Option<String>) {
        self.access_token = access_token;
        if refresh_token.is_some() {
            self.refresh_token = refresh_token;
        }
        self.updated_at = Utc::now();
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("access_token", &mask(&self.access_token))
            .field("refresh_token", &self.refresh_token.as_deref().map(mask))
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

fn mask(token: &str) -> String {
    let prefix: String = token.chars().take(6).collect();
    format!("{}…({} chars)", prefix, token.chars().count())
}
