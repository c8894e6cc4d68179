//! # 로그용 페이로드 마스킹
//!
//! 응답/요청 페이로드를 로그에 남기기 전에 민감한 필드를 가립니다.
//! 필드 이름(대소문자 무시)에 아래 단어가 포함되면 값 전체가 [`REDACTED`]로 바뀌며,
//! 중첩된 객체와 배열도 재귀적으로 처리합니다.
//!
//! | 단어 | 매칭 예 |
//! |------|---------|
//! | `token` | `token`, `accessToken`, `refresh_token` |
//! | `password` | `password`, `newPassword` |
//! | `otp` | `otp`, `loginOtp` |
//! | `balance` | `balance`, `walletBalance` |
//! | `amount` | `amount`, `totalAmount` |
//! | `email` | `email`, `recipientEmail` |

use serde_json::{Map, Value};

/// 마스킹된 값을 대신하는 고정 문자열
pub const REDACTED: &str = "[REDACTED]";

const SENSITIVE_FIELDS: &[&str] = &["token", "password", "otp", "balance", "amount", "email"];

/// 필드 이름이 민감 정보를 담는지 확인합니다.
pub fn is_sensitive_field(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    SENSITIVE_FIELDS.iter().any(|field| lowered.contains(field))
}

/// 민감한 필드를 마스킹한 복사본을 반환합니다.
pub fn redact(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let redacted: Map<String, Value> = map
                .iter()
                .map(|(key, value)| {
                    if is_sensitive_field(key) {
                        (key.clone(), Value::String(REDACTED.to_string()))
                    } else {
                        (key.clone(), redact(value))
                    }
                })
                .collect();
            Value::Object(redacted)
        }
        Value::Array(items) => Value::Array(items.iter().map(redact).collect()),
        other => other.clone(),
    }
}

/// 마스킹 후 한 줄 JSON 문자열로 만듭니다.
pub fn redact_for_log(value: &Value) -> String {
    redact(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redacts_nested_sensitive_fields() {
        let payload = json!({
            "success": true,
            "data": {
                "accessToken": "eyJhbGciOi",
                "user": { "email": "ada@example.com", "name": "Ada" },
                "wallets": [{ "balance": 1200.5, "currency": "NGN" }],
                "loginOtp": "123456"
            },
            "password": "hunter2"
        });

        let logged = redact_for_log(&payload);

        for secret in ["eyJhbGciOi", "ada@example.com", "1200.5", "123456", "hunter2"] {
            assert!(!logged.contains(secret), "{} leaked: {}", secret, logged);
        }
        assert!(logged.contains("Ada"));
        assert!(logged.contains("NGN"));
    }

    #[test]
    fn test_sensitive_object_replaced_entirely() {
        let redacted = redact(&json!({ "amount": { "value": 10, "currency": "USD" } }));
        assert_eq!(redacted, json!({ "amount": REDACTED }));
    }

    #[test]
    fn test_scalars_untouched() {
        assert_eq!(redact(&json!("plain")), json!("plain"));
        assert_eq!(redact(&json!(null)), json!(null));
    }
}
