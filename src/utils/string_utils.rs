//! # 문자열 유틸리티
//!
//! 경로 파라미터 검증과 인코딩 등 문자열 처리 공통 함수들입니다.

use crate::core::errors::GatewayError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 `Validation` 에러를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 예제
/// ```rust
/// use voucher_gateway::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  V-123  ", "id").unwrap(), "V-123");
/// assert!(validate_required_string("   ", "id").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, GatewayError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::Validation(format!(
            "{}은(는) 필수입니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// 경로 파라미터를 검증하고 URL 경로 세그먼트로 인코딩합니다.
///
/// `/`, `?`, `#` 등이 포함된 값이 경로 구조를 바꾸지 못하도록 퍼센트 인코딩합니다.
///
/// # 예제
/// ```rust
/// use voucher_gateway::utils::string_utils::path_segment;
///
/// assert_eq!(path_segment("ab/c d", "code").unwrap(), "ab%2Fc%20d");
/// ```
pub fn path_segment(value: &str, field_name: &str) -> Result<String, GatewayError> {
    let value = validate_required_string(value, field_name)?;
    Ok(urlencoding::encode(&value).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("  Hello  ", "name").unwrap(), "Hello");
        assert!(matches!(
            validate_required_string("", "name"),
            Err(GatewayError::Validation(_))
        ));
    }

    #[test]
    fn test_path_segment_encodes_reserved_characters() {
        assert_eq!(path_segment("V-42", "id").unwrap(), "V-42");
        assert_eq!(path_segment("a?b#c", "id").unwrap(), "a%3Fb%23c");
        assert!(path_segment(" ", "id").is_err());
    }
}
