use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::Mutex;

use crate::core::errors::{ErrorContext, GatewayError, GatewayResult};
use crate::domain::models::AuthToken;
use crate::repositories::tokens::token_store::TokenStore;

/// JSON 파일 기반 영구 토큰 저장소
///
/// 프로세스가 재시작되어도 로그인 상태가 유지됩니다. 쓰기는 임시 파일에 기록한 뒤
/// rename 하므로 중간에 중단되어도 기존 파일이 손상되지 않습니다.
///
/// # Example
/// ```rust,ignore
/// let store = FileTokenStore::new("/home/me/.voucher/tokens.json");
/// store.save(AuthToken::new("access", Some("refresh".to_string()))).await?;
/// ```
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    /// 같은 프로세스 안의 동시 쓰기 직렬화
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> GatewayResult<Option<AuthToken>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(GatewayError::Storage(format!(
                    "토큰 파일 읽기 실패 ({}): {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            warn!("토큰 파일 형식이 올바르지 않습니다: {}", self.path.display());
            GatewayError::Storage(format!("토큰 파일 파싱 실패: {}", e))
        })
    }

    async fn save(&self, token: AuthToken) -> GatewayResult<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("토큰 디렉토리 생성 실패 ({})", parent.display()))?;
        }

        let json = serde_json::to_vec_pretty(&token)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .context("임시 토큰 파일 쓰기 실패")?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .context("토큰 파일 교체 실패")?;

        debug!("토큰 저장 완료: {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> GatewayResult<()> {
        let _guard = self.write_lock.lock().await;

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(GatewayError::Storage(format!("토큰 파일 삭제 실패: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tokens_survive_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tokens.json");

        let store = FileTokenStore::new(&path);
        assert!(store.load().await.unwrap().is_none());
        store
            .save(AuthToken::new("access", Some("refresh".to_string())))
            .await
            .unwrap();

        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.access_token().await.unwrap().as_deref(), Some("access"));
        assert_eq!(reopened.refresh_token().await.unwrap().as_deref(), Some("refresh"));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("tokens.json"));

        store.save(AuthToken::new("access", None)).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        std::fs::write(&path, "{not json").unwrap();

        let error = FileTokenStore::new(&path).load().await.unwrap_err();
        assert!(matches!(error, GatewayError::Storage(_)));
    }
}
