use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::errors::GatewayResult;
use crate::domain::models::AuthToken;

/// 인증 토큰 저장소
///
/// 게이트웨이에 생성 시점에 주입되며, 여러 진행 중인 호출이 동시에 접근합니다.
/// 쓰기는 로그인/갱신/로그아웃 시에만 발생하며 last-writer-wins로 동작합니다.
///
/// | 구현체 | 수명 |
/// |--------|------|
/// | [`MemoryTokenStore`] | 프로세스 |
/// | [`FileTokenStore`](super::file_token_store::FileTokenStore) | 영구 (JSON 파일) |
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// 저장된 토큰 쌍을 읽습니다.
    async fn load(&self) -> GatewayResult<Option<AuthToken>>;

    /// 토큰 쌍 전체를 저장합니다 (로그인/회원가입 완료 시).
    async fn save(&self, token: AuthToken) -> GatewayResult<()>;

    /// 모든 인증 상태를 삭제합니다.
    async fn clear(&self) -> GatewayResult<()>;

    async fn access_token(&self) -> GatewayResult<Option<String>> {
        Ok(self.load().await?.map(|token| token.access_token))
    }

    async fn refresh_token(&self) -> GatewayResult<Option<String>> {
        Ok(self.load().await?.and_then(|token| token.refresh_token))
    }

    /// 갱신 결과를 기존 토큰 쌍에 반영합니다.
    ///
    /// 새 리프레시 토큰이 없으면 기존 리프레시 토큰을 유지합니다.
    /// 저장된 토큰 쌍이 없으면(갱신 도중 로그아웃) 아무것도 쓰지 않고 `false`를 반환합니다.
    async fn update_access_token(
        &self,
        access_token: String,
        refresh_token: Option<String>,
    ) -> GatewayResult<bool> {
        match self.load().await? {
            Some(mut existing) => {
                existing.rotate(access_token, refresh_token);
                self.save(existing).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// 프로세스 메모리 토큰 저장소
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<AuthToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 로그인된 상태로 시작합니다.
    pub fn with_token(token: AuthToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> GatewayResult<Option<AuthToken>> {
        Ok(self.token.read().unwrap_or_else(|p| p.into_inner()).clone())
    }

    async fn save(&self, token: AuthToken) -> GatewayResult<()> {
        *self.token.write().unwrap_or_else(|p| p.into_inner()) = Some(token);
        Ok(())
    }

    async fn clear(&self) -> GatewayResult<()> {
        *self.token.write().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}
