//! 기기 정보 헤더
//!
//! `X-Device-Info` 헤더로 전송되는 기기 메타데이터입니다.
//! JSON으로 직렬화한 뒤 헤더 값으로 안전하도록 base64로 인코딩합니다.

use std::env;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// 기기 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub user_agent: String,
    pub screen_resolution: String,
    pub timezone: String,
    pub locale: String,
    pub platform: String,
    /// 위 필드들의 SHA-256 지문
    pub fingerprint: String,
}

impl DeviceInfo {
    pub fn new(
        user_agent: impl Into<String>,
        screen_resolution: impl Into<String>,
        timezone: impl Into<String>,
        locale: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        let mut info = Self {
            user_agent: user_agent.into(),
            screen_resolution: screen_resolution.into(),
            timezone: timezone.into(),
            locale: locale.into(),
            platform: platform.into(),
            fingerprint: String::new(),
        };
        info.fingerprint = info.compute_fingerprint();
        info
    }

    /// 실행 환경에서 기기 정보를 수집합니다.
    ///
    /// | 필드 | 출처 |
    /// |------|------|
    /// | `user_agent` | 크레이트 이름/버전 + OS/아키텍처 |
    /// | `screen_resolution` | `DEVICE_SCREEN_RESOLUTION` (기본값 `unknown`) |
    /// | `timezone` | `TZ`, 없으면 로컬 UTC 오프셋 |
    /// | `locale` | `DEVICE_LOCALE`, `LANG` 순 (기본값 `en-US`) |
    /// | `platform` | `std::env::consts::OS`-`ARCH` |
    pub fn detect() -> Self {
        let os = env::consts::OS;
        let arch = env::consts::ARCH;

        let user_agent = format!(
            "{}/{} ({}; {})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            os,
            arch
        );

        let screen_resolution = env::var("DEVICE_SCREEN_RESOLUTION")
            .unwrap_or_else(|_| "unknown".to_string());

        let timezone = env::var("TZ")
            .ok()
            .filter(|tz| !tz.trim().is_empty())
            .unwrap_or_else(|| chrono::Local::now().offset().to_string());

        let locale = env::var("DEVICE_LOCALE")
            .or_else(|_| env::var("LANG"))
            .ok()
            .and_then(|raw| normalize_locale(&raw))
            .unwrap_or_else(|| "en-US".to_string());

        Self::new(user_agent, screen_resolution, timezone, locale, format!("{}-{}", os, arch))
    }

    fn compute_fingerprint(&self) -> String {
        let material = format!(
            "{}|{}|{}|{}|{}",
            self.user_agent, self.screen_resolution, self.timezone, self.locale, self.platform
        );
        format!("{:x}", Sha256::digest(material.as_bytes()))
    }

    /// 헤더 값으로 사용할 base64(JSON) 문자열
    pub fn header_value(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// 헤더 값에서 기기 정보를 복원합니다.
    pub fn from_header_value(value: &str) -> Option<Self> {
        let bytes = STANDARD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// `en_US.UTF-8` 형태를 `en-US`로 바꿉니다. `C`/`POSIX`는 무시합니다.
fn normalize_locale(raw: &str) -> Option<String> {
    let base = raw.split('.').next().unwrap_or(raw).trim();
    if base.is_empty() || base == "C" || base == "POSIX" {
        return None;
    }
    Some(base.replace('_', "-"))
}
