//! 추천인 프로그램 DTO

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// 추천 통계
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralStats {
    #[serde(default)]
    pub referral_code: Option<String>,

    #[serde(default)]
    pub total_referrals: u64,

    #[serde(default)]
    pub total_earnings: f64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 추천 코드 검증 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ValidateReferralRequest {
    #[validate(length(min = 3, max = 32, message = "추천 코드 형식이 올바르지 않습니다"))]
    pub referral_code: String,
}

/// 추천 코드 검증 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralValidation {
    #[serde(default)]
    pub valid: bool,

    #[serde(default)]
    pub referrer_name: Option<String>,
}

/// 추천 설정 수정 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_signup: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payout_method: Option<String>,
}

/// 추천 수익 내역
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralEarning {
    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// 추천으로 가입한 사용자
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferredUser {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub joined_at: Option<String>,
}
