//! 인증 관련 요청/응답 DTO
//!
//! `/auth/*` 엔드포인트와 주고받는 데이터 구조입니다. 요청 DTO는 네트워크 호출 전에
//! `validator`로 검증됩니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub full_name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

/// 이메일 + OTP 검증 요청 (회원가입/로그인/비밀번호 재설정 공용)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OtpVerificationRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(custom(function = "validate_otp"))]
    pub otp: String,
}

/// OTP만 담는 요청 (로그인 상태의 비밀번호 변경 OTP 확인)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OtpRequest {
    #[validate(custom(function = "validate_otp"))]
    pub otp: String,
}

/// 이메일만 담는 요청 (비밀번호 재설정 요청 등)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmailRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 재설정 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_reset_passwords_match"))]
pub struct ResetPasswordRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(custom(function = "validate_otp"))]
    pub otp: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: String,

    pub confirm_password: String,
}

/// 비밀번호 변경 요청 (로그인 상태)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "현재 비밀번호를 입력해주세요"))]
    pub current_password: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub new_password: String,

    /// 비밀번호 변경 OTP (`/auth/send-password-otp`로 발급)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// 프로필 수정 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub full_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// 계정 설정 수정 요청
///
/// 설정 항목은 서버가 정의하므로 임의의 키-값을 그대로 전달합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

/// 등급 업그레이드 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeTierRequest {
    #[validate(range(min = 1, max = 10, message = "등급은 1-10 사이여야 합니다"))]
    pub target_tier: u8,
}

/// 토큰 갱신 요청 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// 로그인/OTP 검증 응답
///
/// 2단계 인증이 필요한 계정은 토큰 없이 `requiresOtp`만 반환합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[serde(default, alias = "token", alias = "access_token")]
    pub access_token: Option<String>,

    #[serde(default, alias = "refresh_token")]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub user: Option<UserProfile>,

    #[serde(default, alias = "requireOtp")]
    pub requires_otp: bool,
}

impl AuthSession {
    pub fn has_tokens(&self) -> bool {
        self.access_token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// 사용자 프로필
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub tier: Option<u8>,

    #[serde(default)]
    pub is_verified: bool,

    /// 이 계층이 해석하지 않는 나머지 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 등록된 기기
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredDevice {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(default)]
    pub fingerprint: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub last_seen: Option<String>,
}

/// OTP 형식 검증 (4-8자리 숫자)
fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    let valid_length = (4..=8).contains(&otp.len());
    if !valid_length || !otp.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_otp")
            .with_message("OTP는 4-8자리 숫자여야 합니다".into()));
    }
    Ok(())
}

fn validate_reset_passwords_match(req: &ResetPasswordRequest) -> Result<(), ValidationError> {
    if req.new_password != req.confirm_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("비밀번호가 일치하지 않습니다".into()));
    }
    Ok(())
}
