//! `payments.*` 연산
//!
//! 지갑 잔액, 충전, 출금, 계좌 확인은 민감 엔드포인트이므로 캐시되지 않습니다.

use async_trait::async_trait;

use crate::domain::dto::{
    AccountVerification, ApiResult, Bank, FundWalletRequest, FundWalletResponse, PageQuery,
    VerifyAccountRequest, WalletBalance, WalletTransaction, WithdrawRequest, Withdrawal,
};
use crate::domain::models::RequestContext;
use crate::services::api::caller::{ApiCaller, HOUR, post_json};
use crate::services::api::messages::payments as messages;

#[async_trait]
pub trait PaymentApi: Send + Sync {
    async fn fund_wallet(&self, request: &FundWalletRequest) -> ApiResult<FundWalletResponse>;
    async fn get_wallet_balance(&self) -> ApiResult<WalletBalance>;
    async fn get_wallet_transactions(&self, page: &PageQuery) -> ApiResult<Vec<WalletTransaction>>;
    async fn get_banks(&self) -> ApiResult<Vec<Bank>>;
    async fn verify_account(&self, request: &VerifyAccountRequest) -> ApiResult<AccountVerification>;
    async fn withdraw(&self, request: &WithdrawRequest) -> ApiResult<Withdrawal>;
    async fn get_withdrawals(&self, page: &PageQuery) -> ApiResult<Vec<Withdrawal>>;
}

#[derive(Clone)]
pub struct PaymentClient {
    caller: ApiCaller,
}

impl PaymentClient {
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }
}

#[async_trait]
impl PaymentApi for PaymentClient {
    async fn fund_wallet(&self, request: &FundWalletRequest) -> ApiResult<FundWalletResponse> {
        self.caller
            .mutate(&messages::FUND_WALLET, post_json("/payments/fund-wallet", request))
            .await
    }

    async fn get_wallet_balance(&self) -> ApiResult<WalletBalance> {
        self.caller
            .read(
                &messages::GET_WALLET_BALANCE,
                Ok(RequestContext::get("/payments/wallet-balance")),
            )
            .await
    }

    async fn get_wallet_transactions(&self, page: &PageQuery) -> ApiResult<Vec<WalletTransaction>> {
        let ctx = RequestContext::get("/payments/wallet-transactions").queries(page.to_pairs());
        self.caller
            .read(&messages::GET_WALLET_TRANSACTIONS, Ok(ctx))
            .await
    }

    async fn get_banks(&self) -> ApiResult<Vec<Bank>> {
        let ctx = RequestContext::get("/payments/banks").cached("banks", Some(24 * HOUR));
        self.caller.read(&messages::GET_BANKS, Ok(ctx)).await
    }

    async fn verify_account(&self, request: &VerifyAccountRequest) -> ApiResult<AccountVerification> {
        self.caller
            .read(
                &messages::VERIFY_ACCOUNT,
                post_json("/payments/verify-account", request),
            )
            .await
    }

    async fn withdraw(&self, request: &WithdrawRequest) -> ApiResult<Withdrawal> {
        self.caller
            .mutate(&messages::WITHDRAW, post_json("/payments/withdraw", request))
            .await
    }

    async fn get_withdrawals(&self, page: &PageQuery) -> ApiResult<Vec<Withdrawal>> {
        let ctx = RequestContext::get("/payments/withdrawals").queries(page.to_pairs());
        self.caller.read(&messages::GET_WITHDRAWALS, Ok(ctx)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::gateway::test_support::{ScriptedTransport, TestBed, logged_in, reply};
    use serde_json::json;

    fn client(bed: &TestBed) -> PaymentClient {
        PaymentClient::new(ApiCaller::new(bed.gateway.clone()))
    }

    fn withdrawal(amount: f64) -> WithdrawRequest {
        WithdrawRequest {
            amount,
            account_number: "0123456789".to_string(),
            bank_code: "058".to_string(),
            account_name: None,
        }
    }

    #[tokio::test]
    async fn test_wallet_balance_is_never_cached() {
        let bed = TestBed::new(
            logged_in("a", None),
            ScriptedTransport::new(|_| reply(200, json!({ "success": true, "data": { "balance": 900.0 } }))),
        );
        let payments = client(&bed);

        payments.get_wallet_balance().await;
        let result = payments.get_wallet_balance().await;

        assert_eq!(result.data.unwrap().balance, 900.0);
        assert_eq!(bed.transport.calls_to("/payments/wallet-balance"), 2);
        assert!(bed.cache.is_empty());

        let sent = bed.transport.last_call_to("/payments/wallet-balance").unwrap();
        assert_eq!(sent.header("pragma"), Some("no-cache"));
    }

    #[tokio::test]
    async fn test_banks_cached_for_a_day() {
        let bed = TestBed::new(
            logged_in("a", None),
            ScriptedTransport::new(|_| reply(200, json!({ "success": true, "data": [{ "name": "GTBank", "code": "058" }] }))),
        );
        let payments = client(&bed);

        payments.get_banks().await;
        bed.clock.advance(chrono::Duration::hours(23));
        let result = payments.get_banks().await;

        assert_eq!(result.data.unwrap()[0].code, "058");
        assert_eq!(bed.transport.calls_to("/payments/banks"), 1);
    }

    #[tokio::test]
    async fn test_withdraw_invalidates_cache() {
        let bed = TestBed::new(
            logged_in("a", None),
            ScriptedTransport::new(|ctx| match ctx.path_str() {
                "/payments/banks" => reply(200, json!({ "success": true, "data": [] })),
                _ => reply(200, json!({ "success": true, "data": { "_id": "w1", "amount": 10.0, "status": "pending" } })),
            }),
        );
        let payments = client(&bed);
        payments.get_banks().await;

        let result = payments.withdraw(&withdrawal(10.0)).await;

        assert!(result.success);
        assert_eq!(result.data.unwrap().status.as_deref(), Some("pending"));
        assert!(bed.cache.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_withdrawal_fails_locally() {
        let bed = TestBed::new(logged_in("a", None), ScriptedTransport::new(|_| reply(200, json!({}))));

        let result = client(&bed).withdraw(&withdrawal(-5.0)).await;

        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("Withdrawal failed"));
        assert_eq!(bed.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rate_limited_withdrawal_is_reported() {
        let bed = TestBed::new(
            logged_in("a", Some("r")),
            ScriptedTransport::new(|_| reply(429, json!({ "message": "Too many withdrawal attempts" }))),
        );

        let result = client(&bed).withdraw(&withdrawal(10.0)).await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Too many withdrawal attempts"));
        assert_eq!(bed.transport.call_count(), 1);
    }
}
