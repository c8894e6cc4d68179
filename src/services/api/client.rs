//! 연산 그룹을 묶은 최상위 클라이언트

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::core::errors::GatewayResult;
use crate::services::api::auth::AuthClient;
use crate::services::api::caller::ApiCaller;
use crate::services::api::catalog::CatalogClient;
use crate::services::api::payments::PaymentClient;
use crate::services::api::referrals::ReferralClient;
use crate::services::api::vouchers::VoucherClient;
use crate::services::gateway::{GatewayContext, HttpGateway, ReqwestTransport};

/// `auth.*`, `vouchers.*`, `payments.*`, `referrals.*`, 카탈로그 조회를 제공하는 클라이언트
///
/// 모든 그룹이 하나의 게이트웨이(토큰 저장소, 캐시, 갱신 조정자)를 공유합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use voucher_gateway::config::ApiConfig;
/// use voucher_gateway::services::api::{ApiClient, VoucherApi};
/// use voucher_gateway::services::gateway::GatewayContext;
///
/// let api = ApiClient::from_config(ApiConfig::from_env(), GatewayContext::in_memory())?;
/// let balance = api.vouchers.get_balance().await;
/// if balance.success {
///     println!("{:?}", balance.data);
/// }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    pub auth: AuthClient,
    pub vouchers: VoucherClient,
    pub payments: PaymentClient,
    pub referrals: ReferralClient,
    pub catalog: CatalogClient,
    gateway: HttpGateway,
}

impl ApiClient {
    pub fn new(gateway: HttpGateway) -> Self {
        let caller = ApiCaller::new(gateway.clone());
        Self {
            auth: AuthClient::new(caller.clone()),
            vouchers: VoucherClient::new(caller.clone()),
            payments: PaymentClient::new(caller.clone()),
            referrals: ReferralClient::new(caller.clone()),
            catalog: CatalogClient::new(caller),
            gateway,
        }
    }

    /// reqwest 전송 계층으로 게이트웨이를 구성합니다.
    pub fn from_config(config: ApiConfig, context: GatewayContext) -> GatewayResult<Self> {
        let transport = ReqwestTransport::new(config.clone())?;
        Ok(Self::new(HttpGateway::new(config, Arc::new(transport), context)))
    }

    pub fn gateway(&self) -> &HttpGateway {
        &self.gateway
    }
}
