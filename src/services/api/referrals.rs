//! `referrals.*` 연산

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::dto::{
    ApiResult, PageQuery, ReferralEarning, ReferralSettings, ReferralStats, ReferralValidation,
    ReferredUser, ValidateReferralRequest,
};
use crate::domain::models::RequestContext;
use crate::services::api::caller::{ApiCaller, MINUTE, post_json};
use crate::services::api::messages::referrals as messages;

#[async_trait]
pub trait ReferralApi: Send + Sync {
    async fn get_stats(&self) -> ApiResult<ReferralStats>;
    async fn validate(&self, request: &ValidateReferralRequest) -> ApiResult<ReferralValidation>;
    async fn update_settings(&self, settings: &ReferralSettings) -> ApiResult<Value>;
    async fn get_earnings(&self, page: &PageQuery) -> ApiResult<Vec<ReferralEarning>>;
    async fn get_referred_users(&self, page: &PageQuery) -> ApiResult<Vec<ReferredUser>>;
}

#[derive(Clone)]
pub struct ReferralClient {
    caller: ApiCaller,
}

impl ReferralClient {
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }
}

#[async_trait]
impl ReferralApi for ReferralClient {
    async fn get_stats(&self) -> ApiResult<ReferralStats> {
        let ctx = RequestContext::get("/referrals/stats").cached("referral_stats", Some(5 * MINUTE));
        self.caller.read(&messages::GET_STATS, Ok(ctx)).await
    }

    async fn validate(&self, request: &ValidateReferralRequest) -> ApiResult<ReferralValidation> {
        self.caller
            .read(&messages::VALIDATE, post_json("/referrals/validate", request))
            .await
    }

    async fn update_settings(&self, settings: &ReferralSettings) -> ApiResult<Value> {
        let ctx = serde_json::to_value(settings)
            .map(|body| RequestContext::post("/referrals/settings").json(body))
            .map_err(Into::into);
        self.caller.mutate(&messages::UPDATE_SETTINGS, ctx).await
    }

    async fn get_earnings(&self, page: &PageQuery) -> ApiResult<Vec<ReferralEarning>> {
        let ctx = RequestContext::get("/referrals/earnings").queries(page.to_pairs());
        self.caller.read(&messages::GET_EARNINGS, Ok(ctx)).await
    }

    async fn get_referred_users(&self, page: &PageQuery) -> ApiResult<Vec<ReferredUser>> {
        let ctx = RequestContext::get("/referrals/referred-users").queries(page.to_pairs());
        self.caller.read(&messages::GET_REFERRED_USERS, Ok(ctx)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::gateway::test_support::{ScriptedTransport, TestBed, logged_in, reply};
    use serde_json::json;

    fn client(bed: &TestBed) -> ReferralClient {
        ReferralClient::new(ApiCaller::new(bed.gateway.clone()))
    }

    #[tokio::test]
    async fn test_stats_cached_and_settings_invalidate() {
        let bed = TestBed::new(
            logged_in("a", None),
            ScriptedTransport::new(|ctx| match ctx.path_str() {
                "/referrals/stats" => reply(
                    200,
                    json!({ "success": true, "data": { "referralCode": "ADA42", "totalReferrals": 3 } }),
                ),
                _ => reply(200, json!({ "success": true })),
            }),
        );
        let referrals = client(&bed);

        let stats = referrals.get_stats().await;
        referrals.get_stats().await;
        assert_eq!(stats.data.unwrap().total_referrals, 3);
        assert_eq!(bed.transport.calls_to("/referrals/stats"), 1);

        let settings = ReferralSettings {
            notify_on_signup: Some(false),
            payout_method: None,
        };
        assert!(referrals.update_settings(&settings).await.success);
        assert!(bed.cache.is_empty());

        let sent = bed.transport.last_call_to("/referrals/settings").unwrap();
        assert_eq!(sent.method_str(), "POST");
    }

    #[tokio::test]
    async fn test_validate_checks_code_before_sending() {
        let bed = TestBed::new(logged_in("a", None), ScriptedTransport::new(|_| reply(200, json!({}))));

        let result = client(&bed)
            .validate(&ValidateReferralRequest {
                referral_code: "x".to_string(),
            })
            .await;

        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("Invalid referral code"));
        assert_eq!(bed.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_earnings_pass_pagination() {
        let bed = TestBed::new(
            logged_in("a", None),
            ScriptedTransport::new(|_| reply(200, json!({ "success": true, "data": [{ "amount": 500.0 }] }))),
        );

        let result = client(&bed).get_earnings(&PageQuery::new(2, 20)).await;

        assert_eq!(result.data.unwrap()[0].amount, 500.0);
        let sent = bed.transport.last_call_to("/referrals/earnings").unwrap();
        assert_eq!(
            sent.query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("limit".to_string(), "20".to_string())
            ]
        );
    }
}
