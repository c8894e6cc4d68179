//! 클라이언트 상태 저장 계층
//!
//! 게이트웨이가 영구적으로 보관해야 하는 클라이언트 상태(인증 토큰)를 다룹니다.
//! 저장소는 전역 싱글톤이 아니라 [`GatewayContext`](crate::services::gateway::GatewayContext)를
//! 통해 주입되므로, 테스트마다 독립된 인스턴스를 사용할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use voucher_gateway::repositories::tokens::MemoryTokenStore;
//!
//! let token_store = Arc::new(MemoryTokenStore::new());
//! let context = GatewayContext::new(token_store, cache_store, clock);
//! ```

pub mod tokens;
