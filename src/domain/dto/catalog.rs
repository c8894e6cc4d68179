//! 테마, 거래 내역, 환율 등 조회 전용 카탈로그 DTO

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 바우처 테마
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub preview_url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 거래 내역
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub amount: f64,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// USD → NGN 환율
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    #[serde(default)]
    pub rate: f64,

    #[serde(default)]
    pub updated_at: Option<String>,
}
