//! 테마, 거래 내역, 환율 조회

use async_trait::async_trait;

use crate::domain::dto::{ApiResult, ExchangeRate, PageQuery, Theme, Transaction, VoucherType};
use crate::domain::models::RequestContext;
use crate::services::api::caller::{ApiCaller, HOUR, MINUTE};
use crate::services::api::messages::catalog as messages;

#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn get_themes(&self, voucher_type: VoucherType) -> ApiResult<Vec<Theme>>;
    async fn get_transactions(&self, page: &PageQuery) -> ApiResult<Vec<Transaction>>;
    async fn get_usd_to_ngn_rate(&self) -> ApiResult<ExchangeRate>;
}

#[derive(Clone)]
pub struct CatalogClient {
    caller: ApiCaller,
}

impl CatalogClient {
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }
}

/// 페이지 조건별 거래 내역 캐시 키
fn transactions_key(page: &PageQuery) -> String {
    page.to_pairs()
        .into_iter()
        .fold("transactions".to_string(), |key, (name, value)| {
            format!("{}_{}-{}", key, name, value)
        })
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn get_themes(&self, voucher_type: VoucherType) -> ApiResult<Vec<Theme>> {
        let ctx = RequestContext::get(format!("/themes/{}", voucher_type))
            .cached(format!("themes_{}", voucher_type), Some(HOUR));
        self.caller.read(&messages::GET_THEMES, Ok(ctx)).await
    }

    async fn get_transactions(&self, page: &PageQuery) -> ApiResult<Vec<Transaction>> {
        let ctx = RequestContext::get("/transactions")
            .queries(page.to_pairs())
            .cached(transactions_key(page), Some(MINUTE));
        self.caller.read(&messages::GET_TRANSACTIONS, Ok(ctx)).await
    }

    async fn get_usd_to_ngn_rate(&self) -> ApiResult<ExchangeRate> {
        let ctx = RequestContext::get("/rates/usd-to-ngn").cached("usd_ngn_rate", Some(5 * MINUTE));
        self.caller.read(&messages::GET_RATE, Ok(ctx)).await
    }
}
