//! 바우처 게이트웨이 점검용 실행 파일
//!
//! 환경 설정을 읽어 게이트웨이를 구성하고, 명령줄 인자에 따라 API를 한 번 호출한 뒤
//! 정규화된 결과를 JSON으로 출력합니다.

use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use voucher_gateway::caching::{CacheStore, MemoryCacheStore, RedisCacheStore};
use voucher_gateway::config::ApiConfig;
use voucher_gateway::core::SystemClock;
use voucher_gateway::domain::models::DeviceInfo;
use voucher_gateway::repositories::tokens::{FileTokenStore, MemoryTokenStore, TokenStore};
use voucher_gateway::services::api::{ApiClient, CatalogApi, VoucherApi};
use voucher_gateway::services::gateway::GatewayContext;

#[tokio::main]
async fn main() {
    load_env_file();
    init_logging();

    info!("🚀 바우처 게이트웨이 점검 시작...");

    let config = ApiConfig::from_env();
    let context = build_context(&config).await;

    let api = match ApiClient::from_config(config, context) {
        Ok(api) => api,
        Err(e) => {
            error!("게이트웨이 구성 실패: {}", e);
            std::process::exit(1);
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.first().map(String::as_str) {
        Some("voucher") => match args.get(1) {
            Some(code) => serde_json::to_string_pretty(&api.vouchers.get_public(code).await),
            None => {
                error!("사용법: voucher_gateway voucher <code>");
                std::process::exit(2);
            }
        },
        Some("balance") => serde_json::to_string_pretty(&api.vouchers.get_balance().await),
        Some("rate") | None => serde_json::to_string_pretty(&api.catalog.get_usd_to_ngn_rate().await),
        Some(other) => {
            error!("알 수 없는 명령: {} (rate | balance | voucher <code>)", other);
            std::process::exit(2);
        }
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => error!("결과 직렬화 실패: {}", e),
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 기본값은 `info,voucher_gateway=debug`이며 `RUST_LOG`로 덮어쓸 수 있습니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,voucher_gateway=debug"));
}

/// 설정에 따라 토큰 저장소와 캐시 저장소를 선택합니다
///
/// * `TOKEN_STORE_PATH` 설정 시 파일 저장소, 아니면 메모리 저장소
/// * `CACHE_REDIS_URL` 설정 시 Redis 캐시, 연결 실패 또는 미설정 시 메모리 캐시
async fn build_context(config: &ApiConfig) -> GatewayContext {
    let token_store: Arc<dyn TokenStore> = match &config.token_store_path {
        Some(path) => {
            info!("📁 토큰 파일 저장소 사용: {}", path.display());
            Arc::new(FileTokenStore::new(path.clone()))
        }
        None => Arc::new(MemoryTokenStore::new()),
    };

    let cache_store: Arc<dyn CacheStore> = match &config.redis_url {
        Some(url) => match RedisCacheStore::connect(url, config.cache_prefix.clone()).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                warn!("Redis 캐시 연결 실패, 메모리 캐시로 대체합니다: {}", e);
                Arc::new(MemoryCacheStore::with_prefix(config.cache_prefix.clone()))
            }
        },
        None => Arc::new(MemoryCacheStore::with_prefix(config.cache_prefix.clone())),
    };

    GatewayContext::new(token_store, cache_store, Arc::new(SystemClock)).with_device(DeviceInfo::detect())
}
