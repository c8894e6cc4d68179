//! `auth.*` 연산
//!
//! 로그인/회원가입/OTP 검증이 토큰을 반환하면 토큰 저장소에 저장합니다.
//! 로그아웃은 서버 호출 결과와 무관하게 항상 로컬 인증 상태와 캐시를 비웁니다.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::core::errors::GatewayResult;
use crate::domain::dto::{
    ApiResult, AuthSession, ChangePasswordRequest, EmailRequest, LoginRequest, OtpRequest,
    OtpVerificationRequest, RegisterRequest, RegisteredDevice, ResetPasswordRequest,
    UpdateProfileRequest, UpdateSettingsRequest, UpgradeTierRequest, UserProfile,
};
use crate::domain::models::{AuthToken, RequestContext};
use crate::services::api::caller::{ApiCaller, HOUR, MINUTE, post_json, put_json};
use crate::services::api::messages::{CallMessages, auth as messages};

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthSession>;
    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthSession>;
    async fn verify_otp(&self, request: &OtpVerificationRequest) -> ApiResult<AuthSession>;
    async fn verify_login_otp(&self, request: &OtpVerificationRequest) -> ApiResult<AuthSession>;
    async fn logout(&self) -> ApiResult<()>;
    async fn refresh_session(&self) -> ApiResult<()>;

    async fn request_password_reset(&self, request: &EmailRequest) -> ApiResult<Value>;
    async fn verify_reset_otp(&self, request: &OtpVerificationRequest) -> ApiResult<Value>;
    async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<Value>;
    async fn send_password_otp(&self) -> ApiResult<Value>;
    async fn verify_password_otp(&self, request: &OtpRequest) -> ApiResult<Value>;
    async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<Value>;

    async fn get_profile(&self) -> ApiResult<UserProfile>;
    async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<UserProfile>;
    async fn update_settings(&self, request: &UpdateSettingsRequest) -> ApiResult<Value>;
    async fn get_tier(&self) -> ApiResult<Value>;
    async fn get_tier_limits(&self, level: u8) -> ApiResult<Value>;
    async fn upgrade_tier(&self, request: &UpgradeTierRequest) -> ApiResult<Value>;
    async fn get_devices(&self) -> ApiResult<Vec<RegisteredDevice>>;
}

#[derive(Clone)]
pub struct AuthClient {
    caller: ApiCaller,
}

impl AuthClient {
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }

    /// 인증을 완료하는 호출. 응답에 토큰이 있으면 저장합니다.
    async fn complete_session(
        &self,
        messages: &CallMessages,
        ctx: GatewayResult<RequestContext>,
    ) -> ApiResult<AuthSession> {
        let result = self.caller.mutate::<AuthSession>(messages, ctx).await;
        if let Some(session) = result.data.as_ref() {
            self.persist_session(session).await;
        }
        result
    }

    async fn persist_session(&self, session: &AuthSession) {
        let Some(access_token) = session.access_token.as_deref().filter(|token| !token.is_empty())
        else {
            debug!("응답에 토큰이 없습니다 (OTP 대기: {})", session.requires_otp);
            return;
        };

        let token = AuthToken::new(access_token, session.refresh_token.clone());
        match self.caller.gateway().token_store().save(token).await {
            Ok(()) => info!("인증 토큰 저장 완료"),
            Err(e) => warn!("인증 토큰 저장 실패: {}", e),
        }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<AuthSession> {
        self.complete_session(&messages::LOGIN, post_json("/auth/login", request))
            .await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthSession> {
        self.complete_session(&messages::REGISTER, post_json("/auth/register", request))
            .await
    }

    async fn verify_otp(&self, request: &OtpVerificationRequest) -> ApiResult<AuthSession> {
        self.complete_session(&messages::VERIFY_OTP, post_json("/auth/verify-otp", request))
            .await
    }

    async fn verify_login_otp(&self, request: &OtpVerificationRequest) -> ApiResult<AuthSession> {
        self.complete_session(
            &messages::VERIFY_LOGIN_OTP,
            post_json("/auth/verify-login-otp", request),
        )
        .await
    }

    async fn logout(&self) -> ApiResult<()> {
        info!("{}", messages::LOGOUT.loading);

        let gateway = self.caller.gateway();
        if let Err(e) = gateway.execute(RequestContext::post("/auth/logout")).await {
            warn!("서버 로그아웃 실패, 로컬 세션만 정리합니다: {}", e);
        }
        gateway.clear_session().await;

        ApiResult::success((), messages::LOGOUT.success)
    }

    async fn refresh_session(&self) -> ApiResult<()> {
        info!("{}", messages::REFRESH.loading);

        match self.caller.gateway().refresh_session().await {
            Ok(_) => ApiResult::success((), messages::REFRESH.success),
            Err(e) => ApiResult::failure(messages::REFRESH.error, e.detail()),
        }
    }

    async fn request_password_reset(&self, request: &EmailRequest) -> ApiResult<Value> {
        self.caller
            .read(
                &messages::REQUEST_PASSWORD_RESET,
                post_json("/auth/request-password-reset", request),
            )
            .await
    }

    async fn verify_reset_otp(&self, request: &OtpVerificationRequest) -> ApiResult<Value> {
        self.caller
            .read(&messages::VERIFY_RESET_OTP, post_json("/auth/verify-reset-otp", request))
            .await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResult<Value> {
        self.caller
            .mutate(&messages::RESET_PASSWORD, post_json("/auth/reset-password", request))
            .await
    }

    async fn send_password_otp(&self) -> ApiResult<Value> {
        self.caller
            .read(
                &messages::SEND_PASSWORD_OTP,
                Ok(RequestContext::post("/auth/send-password-otp")),
            )
            .await
    }

    async fn verify_password_otp(&self, request: &OtpRequest) -> ApiResult<Value> {
        self.caller
            .read(
                &messages::VERIFY_PASSWORD_OTP,
                post_json("/auth/verify-password-otp", request),
            )
            .await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<Value> {
        self.caller
            .mutate(&messages::CHANGE_PASSWORD, put_json("/auth/change-password", request))
            .await
    }

    async fn get_profile(&self) -> ApiResult<UserProfile> {
        let ctx = RequestContext::get("/auth/profile").cached("user_profile", Some(5 * MINUTE));
        self.caller.read(&messages::GET_PROFILE, Ok(ctx)).await
    }

    async fn update_profile(&self, request: &UpdateProfileRequest) -> ApiResult<UserProfile> {
        self.caller
            .mutate(&messages::UPDATE_PROFILE, put_json("/auth/profile", request))
            .await
    }

    async fn update_settings(&self, request: &UpdateSettingsRequest) -> ApiResult<Value> {
        let ctx = serde_json::to_value(request)
            .map(|body| RequestContext::put("/auth/settings").json(body))
            .map_err(Into::into);
        self.caller.mutate(&messages::UPDATE_SETTINGS, ctx).await
    }

    async fn get_tier(&self) -> ApiResult<Value> {
        let ctx = RequestContext::get("/auth/tier").cached("user_tier", Some(5 * MINUTE));
        self.caller.read(&messages::GET_TIER, Ok(ctx)).await
    }

    async fn get_tier_limits(&self, level: u8) -> ApiResult<Value> {
        let ctx = RequestContext::get(format!("/auth/tier-limits/{}", level))
            .cached(format!("tier_limits_{}", level), Some(HOUR));
        self.caller.read(&messages::GET_TIER_LIMITS, Ok(ctx)).await
    }

    async fn upgrade_tier(&self, request: &UpgradeTierRequest) -> ApiResult<Value> {
        self.caller
            .mutate(&messages::UPGRADE_TIER, post_json("/auth/upgrade-tier", request))
            .await
    }

    async fn get_devices(&self) -> ApiResult<Vec<RegisteredDevice>> {
        self.caller
            .read(&messages::GET_DEVICES, Ok(RequestContext::get("/auth/devices")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tokens::{MemoryTokenStore, TokenStore};
    use crate::services::gateway::test_support::{ScriptedTransport, TestBed, logged_in, reply};
    use serde_json::json;
    use std::time::Duration;

    fn client(bed: &TestBed) -> AuthClient {
        AuthClient::new(ApiCaller::new(bed.gateway.clone()))
    }

    fn credentials() -> LoginRequest {
        LoginRequest {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_persists_tokens() {
        let bed = TestBed::new(
            MemoryTokenStore::new(),
            ScriptedTransport::new(|_| {
                reply(
                    200,
                    json!({
                        "success": true,
                        "data": {
                            "accessToken": "a1",
                            "refreshToken": "r1",
                            "user": { "_id": "u1", "email": "ada@example.com" }
                        }
                    }),
                )
            }),
        );

        let result = client(&bed).login(&credentials()).await;

        assert!(result.success);
        assert_eq!(result.message.as_deref(), Some("Login successful"));
        assert_eq!(result.data.unwrap().user.unwrap().id, "u1");
        assert_eq!(bed.tokens.access_token().await.unwrap().as_deref(), Some("a1"));
        assert_eq!(bed.tokens.refresh_token().await.unwrap().as_deref(), Some("r1"));

        let sent = bed.transport.last_call_to("/auth/login").unwrap();
        assert!(sent.header("authorization").is_none());
    }

    #[tokio::test]
    async fn test_login_requiring_otp_keeps_store_empty() {
        let bed = TestBed::new(
            MemoryTokenStore::new(),
            ScriptedTransport::new(|_| reply(200, json!({ "success": true, "data": { "requiresOtp": true } }))),
        );

        let result = client(&bed).login(&credentials()).await;

        assert!(result.success);
        assert!(result.data.unwrap().requires_otp);
        assert!(bed.tokens.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_login_fails_without_network() {
        let bed = TestBed::new(MemoryTokenStore::new(), ScriptedTransport::new(|_| reply(200, json!({}))));
        let request = LoginRequest {
            email: "nope".to_string(),
            password: String::new(),
        };

        let result = client(&bed).login(&request).await;

        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("Login failed"));
        assert!(result.error.is_some());
        assert_eq!(bed.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rejected_login_reports_server_message() {
        let bed = TestBed::new(
            MemoryTokenStore::new(),
            ScriptedTransport::new(|_| reply(401, json!({ "success": false, "message": "Invalid credentials" }))),
        );

        let result = client(&bed).login(&credentials()).await;

        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(bed.transport.calls_to("/auth/refresh"), 0);
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_when_server_fails() {
        let bed = TestBed::new(
            logged_in("a", Some("r")),
            ScriptedTransport::new(|_| reply(500, json!({ "message": "down" }))),
        );
        bed.gateway
            .cache()
            .put("user_profile", json!({}), Duration::from_secs(60))
            .await
            .unwrap();

        let result = client(&bed).logout().await;

        assert!(result.success);
        assert_eq!(bed.transport.calls_to("/auth/logout"), 1);
        assert!(bed.tokens.load().await.unwrap().is_none());
        assert!(bed.cache.is_empty());
    }

    #[tokio::test]
    async fn test_profile_is_cached_and_update_invalidates() {
        let bed = TestBed::new(
            logged_in("a", None),
            ScriptedTransport::new(|_| {
                reply(200, json!({ "success": true, "data": { "id": "u1", "email": "ada@example.com" } }))
            }),
        );
        let auth = client(&bed);

        auth.get_profile().await;
        auth.get_profile().await;
        assert_eq!(bed.transport.calls_to("/auth/profile"), 1);

        let update = UpdateProfileRequest {
            full_name: Some("Ada".to_string()),
            ..Default::default()
        };
        assert!(auth.update_profile(&update).await.success);
        assert!(bed.cache.is_empty());

        auth.get_profile().await;
        assert_eq!(bed.transport.calls_to("/auth/profile"), 3);
    }

    #[tokio::test]
    async fn test_tier_limits_cached_per_level() {
        let bed = TestBed::new(
            logged_in("a", None),
            ScriptedTransport::new(|_| reply(200, json!({ "success": true, "data": { "daily": 1000 } }))),
        );

        client(&bed).get_tier_limits(2).await;

        assert!(bed.cache.keys().contains(&"tier_limits_2".to_string()));
    }

    #[tokio::test]
    async fn test_refresh_without_refresh_token_fails_and_logs_out() {
        let bed = TestBed::new(logged_in("a", None), ScriptedTransport::new(|_| reply(200, json!({}))));

        let result = client(&bed).refresh_session().await;

        assert!(!result.success);
        assert!(result.error.unwrap().starts_with("Session expired"));
        assert!(bed.tokens.load().await.unwrap().is_none());
    }
}
