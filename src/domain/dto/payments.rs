//! 결제/지갑 관련 DTO

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

/// 지갑 충전 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FundWalletRequest {
    #[validate(range(exclusive_min = 0.0, message = "충전 금액은 0보다 커야 합니다"))]
    pub amount: f64,

    /// 결제 완료 후 돌아올 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

/// 지갑 충전 응답 (결제 페이지 정보)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundWalletResponse {
    #[serde(default, alias = "authorization_url")]
    pub authorization_url: Option<String>,

    #[serde(default)]
    pub reference: Option<String>,
}

/// 지갑 잔액
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    #[serde(default)]
    pub balance: f64,

    #[serde(default)]
    pub currency: Option<String>,
}

/// 지갑 거래 내역 항목
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub amount: f64,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// 은행
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub code: String,
}

/// 계좌 확인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccountRequest {
    #[validate(custom(function = "validate_account_number"))]
    pub account_number: String,

    #[validate(length(min = 1, message = "은행 코드를 입력해주세요"))]
    pub bank_code: String,
}

/// 계좌 확인 결과
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountVerification {
    #[serde(default, alias = "account_name")]
    pub account_name: String,

    #[serde(default, alias = "account_number")]
    pub account_number: String,
}

/// 출금 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    #[validate(range(exclusive_min = 0.0, message = "출금 금액은 0보다 커야 합니다"))]
    pub amount: f64,

    #[validate(custom(function = "validate_account_number"))]
    pub account_number: String,

    #[validate(length(min = 1, message = "은행 코드를 입력해주세요"))]
    pub bank_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
}

/// 출금 내역
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// NUBAN 형식 계좌번호 (숫자 10자리)
fn validate_account_number(account_number: &str) -> Result<(), ValidationError> {
    if account_number.len() != 10 || !account_number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_account_number")
            .with_message("계좌번호는 숫자 10자리여야 합니다".into()));
    }
    Ok(())
}
