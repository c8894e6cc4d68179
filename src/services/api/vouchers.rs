//! `vouchers.*` 연산

use async_trait::async_trait;
use serde_json::Value;

use crate::core::errors::{GatewayError, GatewayResult};
use crate::domain::dto::{
    ApiResult, CreateVoucherRequest, RedeemVoucherRequest, Voucher, VoucherBalance, VoucherListQuery,
    VoucherPage, VoucherUpload,
};
use crate::domain::models::RequestContext;
use crate::services::api::caller::{ApiCaller, MINUTE, post_json, validated_body};
use crate::services::api::messages::vouchers as messages;
use crate::utils::string_utils::{path_segment, validate_required_string};

#[async_trait]
pub trait VoucherApi: Send + Sync {
    async fn get_all(&self, query: &VoucherListQuery) -> ApiResult<VoucherPage>;
    async fn get_by_id(&self, id: &str) -> ApiResult<Voucher>;
    /// 코드로 공개 바우처를 조회합니다. 인증 헤더 없이 호출됩니다.
    async fn get_public(&self, code: &str) -> ApiResult<Voucher>;
    async fn create(&self, request: &CreateVoucherRequest) -> ApiResult<Voucher>;
    async fn redeem(&self, request: &RedeemVoucherRequest) -> ApiResult<Value>;
    async fn cancel(&self, id: &str) -> ApiResult<Voucher>;
    async fn activate(&self, id: &str) -> ApiResult<Voucher>;
    async fn get_balance(&self) -> ApiResult<VoucherBalance>;
    async fn search(&self, term: &str) -> ApiResult<VoucherPage>;
    async fn upload(&self, upload: VoucherUpload) -> ApiResult<Value>;
}

#[derive(Clone)]
pub struct VoucherClient {
    caller: ApiCaller,
}

impl VoucherClient {
    pub fn new(caller: ApiCaller) -> Self {
        Self { caller }
    }
}

fn voucher_action(id: &str, action: &str) -> GatewayResult<RequestContext> {
    let id = path_segment(id, "voucher id")?;
    Ok(RequestContext::post(format!("/vouchers/{}/{}", id, action)))
}

#[async_trait]
impl VoucherApi for VoucherClient {
    async fn get_all(&self, query: &VoucherListQuery) -> ApiResult<VoucherPage> {
        let ctx = RequestContext::get("/vouchers")
            .queries(query.to_pairs())
            .cached(query.cache_key(), Some(2 * MINUTE));
        self.caller.read(&messages::GET_ALL, Ok(ctx)).await
    }

    async fn get_by_id(&self, id: &str) -> ApiResult<Voucher> {
        let ctx = path_segment(id, "voucher id").map(|id| {
            RequestContext::get(format!("/vouchers/{}", id))
                .cached(format!("voucher_{}", id), Some(2 * MINUTE))
        });
        self.caller.read(&messages::GET_BY_ID, ctx).await
    }

    async fn get_public(&self, code: &str) -> ApiResult<Voucher> {
        let ctx = path_segment(code, "voucher code").map(|code| {
            RequestContext::get(format!("/public-vouchers/{}", code))
                .cached(format!("public_voucher_{}", code), Some(MINUTE))
                .public()
        });
        self.caller.read(&messages::GET_PUBLIC, ctx).await
    }

    async fn create(&self, request: &CreateVoucherRequest) -> ApiResult<Voucher> {
        let ctx = validated_body(request).map(|body| {
            RequestContext::post(format!("/vouchers/{}", request.voucher_type.as_str())).json(body)
        });
        self.caller.mutate(&messages::CREATE, ctx).await
    }

    async fn redeem(&self, request: &RedeemVoucherRequest) -> ApiResult<Value> {
        self.caller
            .mutate(&messages::REDEEM, post_json("/vouchers/redeem", request))
            .await
    }

    async fn cancel(&self, id: &str) -> ApiResult<Voucher> {
        self.caller
            .mutate(&messages::CANCEL, voucher_action(id, "cancel"))
            .await
    }

    async fn activate(&self, id: &str) -> ApiResult<Voucher> {
        self.caller
            .mutate(&messages::ACTIVATE, voucher_action(id, "activate"))
            .await
    }

    async fn get_balance(&self) -> ApiResult<VoucherBalance> {
        let ctx = RequestContext::get("/vouchers/balance").cached("user_balance", Some(MINUTE));
        self.caller.read(&messages::GET_BALANCE, Ok(ctx)).await
    }

    async fn search(&self, term: &str) -> ApiResult<VoucherPage> {
        let ctx = validate_required_string(term, "search term")
            .map(|term| RequestContext::get("/vouchers/search").query("q", term));
        self.caller.read(&messages::SEARCH, ctx).await
    }

    async fn upload(&self, upload: VoucherUpload) -> ApiResult<Value> {
        let ctx = if upload.files.is_empty() {
            Err(GatewayError::Validation("업로드할 파일이 없습니다".to_string()))
        } else {
            Ok(RequestContext::post("/vouchers/upload").multipart(upload.into_payload()))
        };
        self.caller.mutate(&messages::UPLOAD, ctx).await
    }
}
