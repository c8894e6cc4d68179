//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 경로 파라미터 인코딩
//! - [`redaction`] - 로그 출력용 민감 필드 마스킹
//!
//! # Examples
//!
//! ```rust,ignore
//! use voucher_gateway::utils::redaction::redact_for_log;
//! use voucher_gateway::utils::string_utils::path_segment;
//!
//! let id = path_segment(voucher_id, "voucher id")?;
//! log::debug!("응답: {}", redact_for_log(&response.body));
//! ```

pub mod redaction;
pub mod string_utils;
