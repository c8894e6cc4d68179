//! 바우처 관련 DTO
//!
//! 에스크로/마일스톤 규칙은 서버 측 로직이므로 여기서는 형식 검증만 수행합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::domain::models::{FilePart, MultipartPayload};

/// 바우처 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoucherType {
    Gift,
    WorkOrder,
    Escrow,
    Event,
}

impl VoucherType {
    /// 경로/캐시 키에 쓰이는 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherType::Gift => "gift",
            VoucherType::WorkOrder => "work-order",
            VoucherType::Escrow => "escrow",
            VoucherType::Event => "event",
        }
    }
}

impl std::fmt::Display for VoucherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 작업 지시 바우처의 마일스톤
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[validate(length(min = 1, message = "마일스톤 제목을 입력해주세요"))]
    pub title: String,

    #[validate(range(exclusive_min = 0.0, message = "금액은 0보다 커야 합니다"))]
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// 바우처 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_milestones"))]
pub struct CreateVoucherRequest {
    #[serde(rename = "type")]
    pub voucher_type: VoucherType,

    #[validate(length(min = 1, max = 120, message = "제목은 1-120자 사이여야 합니다"))]
    pub title: String,

    #[validate(range(exclusive_min = 0.0, message = "금액은 0보다 커야 합니다"))]
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "수신자 이메일 형식이 올바르지 않습니다"))]
    pub recipient_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub milestones: Vec<Milestone>,
}

/// 마일스톤 합계는 바우처 금액을 넘을 수 없습니다.
fn validate_milestones(req: &CreateVoucherRequest) -> Result<(), ValidationError> {
    if req.milestones.is_empty() {
        return Ok(());
    }
    let total: f64 = req.milestones.iter().map(|m| m.amount).sum();
    if total > req.amount + f64::EPSILON {
        return Err(ValidationError::new("milestones_exceed_amount")
            .with_message("마일스톤 합계가 바우처 금액을 초과합니다".into()));
    }
    Ok(())
}

/// 바우처 사용 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RedeemVoucherRequest {
    #[validate(length(min = 4, max = 64, message = "바우처 코드 형식이 올바르지 않습니다"))]
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<String>,
}

/// 바우처 목록 조회 조건
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherListQuery {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub voucher_type: Option<VoucherType>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl VoucherListQuery {
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(voucher_type) = self.voucher_type {
            pairs.push(("type".to_string(), voucher_type.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    /// 조회 조건별 캐시 키 (조건이 없으면 `vouchers`)
    pub fn cache_key(&self) -> String {
        self.to_pairs()
            .into_iter()
            .fold("vouchers".to_string(), |mut key, (name, value)| {
                key.push('_');
                key.push_str(&name);
                key.push('-');
                key.push_str(&value);
                key
            })
    }
}

/// 바우처 첨부 파일 업로드
#[derive(Debug, Clone, Default)]
pub struct VoucherUpload {
    pub voucher_id: Option<String>,
    pub files: Vec<FilePart>,
}

impl VoucherUpload {
    pub fn into_payload(self) -> MultipartPayload {
        let mut fields = Vec::new();
        if let Some(id) = self.voucher_id {
            fields.push(("voucherId".to_string(), id));
        }
        MultipartPayload {
            fields,
            files: self.files,
        }
    }
}

/// 바우처
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default, rename = "type")]
    pub voucher_type: Option<VoucherType>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub amount: f64,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 바우처 목록
///
/// 서버는 배열 그대로 또는 `{ vouchers, total, page }` 형태로 응답합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "VoucherPageRepr")]
pub struct VoucherPage {
    pub vouchers: Vec<Voucher>,
    pub total: Option<u64>,
    pub page: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VoucherPageRepr {
    List(Vec<Voucher>),
    Page {
        #[serde(default)]
        vouchers: Vec<Voucher>,
        #[serde(default)]
        total: Option<u64>,
        #[serde(default)]
        page: Option<u32>,
    },
}

impl From<VoucherPageRepr> for VoucherPage {
    fn from(repr: VoucherPageRepr) -> Self {
        match repr {
            VoucherPageRepr::List(vouchers) => Self {
                total: Some(vouchers.len() as u64),
                vouchers,
                page: None,
            },
            VoucherPageRepr::Page { vouchers, total, page } => Self { vouchers, total, page },
        }
    }
}

/// 바우처 잔액 요약
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherBalance {
    #[serde(default)]
    pub balance: f64,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub pending: Option<f64>,
}
