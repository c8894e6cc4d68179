//! # Security Configuration
//!
//! 민감 엔드포인트 집합, 인증 부트스트랩 경로, 민감 요청에 강제로 붙는
//! 보안 헤더를 정의합니다. 모두 프로세스 전역 정적 설정입니다.
//!
//! ## 민감 엔드포인트
//!
//! 경로에 아래 문자열 중 하나라도 포함되면 민감 요청으로 분류됩니다.
//! 민감 요청은 캐시를 읽지도 쓰지도 않으며 no-cache 계열 헤더가 강제됩니다.
//!
//! | 분류 | 경로 |
//! |------|------|
//! | 자격 증명 | `/auth/login`, `/auth/register`, `/auth/refresh` |
//! | OTP | `/auth/verify-otp`, `/auth/verify-login-otp`, `/auth/send-password-otp`, `/auth/verify-password-otp` |
//! | 비밀번호 | `/auth/request-password-reset`, `/auth/verify-reset-otp`, `/auth/reset-password`, `/auth/change-password` |
//! | 지갑/출금 | `/payments/wallet-balance`, `/payments/fund-wallet`, `/payments/withdraw`, `/payments/verify-account` |

/// 민감 엔드포인트 경로 조각 목록
pub const SENSITIVE_ENDPOINTS: &[&str] = &[
    "/auth/login",
    "/auth/register",
    "/auth/refresh",
    "/auth/verify-otp",
    "/auth/verify-login-otp",
    "/auth/request-password-reset",
    "/auth/verify-reset-otp",
    "/auth/reset-password",
    "/auth/change-password",
    "/auth/send-password-otp",
    "/auth/verify-password-otp",
    "/payments/wallet-balance",
    "/payments/fund-wallet",
    "/payments/withdraw",
    "/payments/verify-account",
];

/// 인증 흐름 자체에 속하는 경로
///
/// 이 경로들의 401은 잘못된 자격 증명을 뜻하므로 토큰 갱신이나
/// 강제 로그아웃 없이 그대로 호출자에게 전달됩니다.
pub const AUTH_BOOTSTRAP_PATHS: &[&str] = &[
    "/auth/login",
    "/auth/register",
    "/auth/verify-otp",
    "/auth/verify-login-otp",
];

/// 민감 요청에 강제로 설정되는 헤더
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("cache-control", "no-cache, no-store, must-revalidate, private"),
    ("pragma", "no-cache"),
    ("expires", "0"),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
];

/// 토큰 갱신 엔드포인트
pub const REFRESH_PATH: &str = "/auth/refresh";

/// 보안 관련 판정 함수 모음
pub struct SecurityConfig;

impl SecurityConfig {
    /// 경로가 민감 엔드포인트에 해당하는지 확인합니다.
    pub fn is_sensitive(path: &str) -> bool {
        SENSITIVE_ENDPOINTS.iter().any(|fragment| path.contains(fragment))
    }

    /// 경로가 인증 부트스트랩 경로인지 확인합니다.
    ///
    /// `/auth/login`이 `/auth/logout`과 혼동되지 않도록 쿼리 문자열을 제외한
    /// 경로의 끝 부분을 비교합니다.
    pub fn is_auth_bootstrap(path: &str) -> bool {
        let path = path.split('?').next().unwrap_or(path).trim_end_matches('/');
        AUTH_BOOTSTRAP_PATHS.iter().any(|bootstrap| path.ends_with(bootstrap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_paths() {
        assert!(SecurityConfig::is_sensitive("/auth/login"));
        assert!(SecurityConfig::is_sensitive("http://localhost:5000/api/payments/wallet-balance"));
        assert!(SecurityConfig::is_sensitive("/payments/withdrawals"));
        assert!(!SecurityConfig::is_sensitive("/vouchers/balance"));
        assert!(!SecurityConfig::is_sensitive("/auth/profile"));
    }

    #[test]
    fn test_auth_bootstrap_paths() {
        assert!(SecurityConfig::is_auth_bootstrap("/auth/login"));
        assert!(SecurityConfig::is_auth_bootstrap("/auth/verify-login-otp"));
        assert!(SecurityConfig::is_auth_bootstrap("/auth/register/"));
        assert!(!SecurityConfig::is_auth_bootstrap("/auth/logout"));
        assert!(!SecurityConfig::is_auth_bootstrap("/vouchers"));
    }
}
