//! 인증 토큰 저장소 모듈
//!
//! 액세스/리프레시 토큰 쌍의 저장, 갱신, 삭제를 담당합니다.
//!
//! # Features
//!
//! - **토큰 쌍 저장**: 로그인/회원가입 완료 시 저장
//! - **액세스 토큰 교체**: 갱신 성공 시 교체 (새 리프레시 토큰이 오면 함께 교체)
//! - **전체 삭제**: 로그아웃 및 복구 불가능한 갱신 실패 시
//! - **영구 저장**: JSON 파일 기반 저장소로 재시작 후에도 로그인 유지
//!
//! # Usage
//!
//! ```rust,ignore
//! use voucher_gateway::repositories::tokens::{FileTokenStore, TokenStore};
//!
//! let store = FileTokenStore::new("/home/me/.voucher/tokens.json");
//!
//! if let Some(refresh) = store.refresh_token().await? {
//!     // 토큰 갱신
//! }
//! if !store.update_access_token(new_access, None).await? {
//!     // 그 사이 로그아웃됨
//! }
//! ```

pub mod file_token_store;
pub mod token_store;

pub use file_token_store::FileTokenStore;
pub use token_store::{MemoryTokenStore, TokenStore};
