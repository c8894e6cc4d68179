//! 연산별 사용자 메시지 (로딩/성공/실패)
//!
//! UI는 호출마다 문구를 만들지 않고 결과의 `message`를 그대로 토스트로 표시합니다.

/// 로딩/성공/실패 메시지 묶음
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallMessages {
    pub loading: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

const fn messages(loading: &'static str, success: &'static str, error: &'static str) -> CallMessages {
    CallMessages {
        loading,
        success,
        error,
    }
}

pub mod auth {
    use super::{CallMessages, messages};

    pub const LOGIN: CallMessages = messages("Signing in...", "Login successful", "Login failed");
    pub const REGISTER: CallMessages =
        messages("Creating account...", "Account created successfully", "Registration failed");
    pub const VERIFY_OTP: CallMessages =
        messages("Verifying code...", "Account verified successfully", "Verification failed");
    pub const VERIFY_LOGIN_OTP: CallMessages =
        messages("Verifying code...", "Login successful", "Invalid or expired code");
    pub const LOGOUT: CallMessages = messages("Signing out...", "Logged out successfully", "Logout failed");
    pub const REFRESH: CallMessages =
        messages("Refreshing session...", "Session refreshed", "Session expired. Please log in again.");
    pub const REQUEST_PASSWORD_RESET: CallMessages = messages(
        "Sending reset code...",
        "Password reset code sent to your email",
        "Failed to send reset code",
    );
    pub const VERIFY_RESET_OTP: CallMessages =
        messages("Verifying code...", "Code verified", "Invalid or expired code");
    pub const RESET_PASSWORD: CallMessages =
        messages("Resetting password...", "Password reset successfully", "Failed to reset password");
    pub const SEND_PASSWORD_OTP: CallMessages =
        messages("Sending code...", "Verification code sent", "Failed to send verification code");
    pub const VERIFY_PASSWORD_OTP: CallMessages =
        messages("Verifying code...", "Code verified", "Invalid or expired code");
    pub const CHANGE_PASSWORD: CallMessages =
        messages("Updating password...", "Password changed successfully", "Failed to change password");
    pub const GET_PROFILE: CallMessages =
        messages("Loading profile...", "Profile loaded", "Failed to load profile");
    pub const UPDATE_PROFILE: CallMessages =
        messages("Saving profile...", "Profile updated successfully", "Failed to update profile");
    pub const UPDATE_SETTINGS: CallMessages =
        messages("Saving settings...", "Settings updated successfully", "Failed to update settings");
    pub const GET_TIER: CallMessages =
        messages("Loading tier...", "Tier loaded", "Failed to load account tier");
    pub const GET_TIER_LIMITS: CallMessages =
        messages("Loading limits...", "Tier limits loaded", "Failed to load tier limits");
    pub const UPGRADE_TIER: CallMessages =
        messages("Upgrading account...", "Account upgraded successfully", "Failed to upgrade account");
    pub const GET_DEVICES: CallMessages =
        messages("Loading devices...", "Devices loaded", "Failed to load devices");
}

pub mod vouchers {
    use super::{CallMessages, messages};

    pub const GET_ALL: CallMessages =
        messages("Loading vouchers...", "Vouchers loaded", "Failed to load vouchers");
    pub const GET_BY_ID: CallMessages =
        messages("Loading voucher...", "Voucher loaded", "Failed to load voucher");
    pub const GET_PUBLIC: CallMessages =
        messages("Looking up voucher...", "Voucher found", "Voucher not found");
    pub const CREATE: CallMessages =
        messages("Creating voucher...", "Voucher created successfully", "Failed to create voucher");
    pub const REDEEM: CallMessages =
        messages("Redeeming voucher...", "Voucher redeemed successfully", "Failed to redeem voucher");
    pub const CANCEL: CallMessages =
        messages("Cancelling voucher...", "Voucher cancelled", "Failed to cancel voucher");
    pub const ACTIVATE: CallMessages =
        messages("Activating voucher...", "Voucher activated", "Failed to activate voucher");
    pub const GET_BALANCE: CallMessages =
        messages("Loading balance...", "Balance loaded", "Failed to load balance");
    pub const SEARCH: CallMessages =
        messages("Searching vouchers...", "Search complete", "Search failed");
    pub const UPLOAD: CallMessages =
        messages("Uploading files...", "Files uploaded successfully", "Upload failed");
}

pub mod payments {
    use super::{CallMessages, messages};

    pub const FUND_WALLET: CallMessages =
        messages("Initializing payment...", "Payment initialized", "Failed to initialize payment");
    pub const GET_WALLET_BALANCE: CallMessages =
        messages("Loading wallet...", "Wallet balance loaded", "Failed to load wallet balance");
    pub const GET_WALLET_TRANSACTIONS: CallMessages = messages(
        "Loading transactions...",
        "Transactions loaded",
        "Failed to load wallet transactions",
    );
    pub const GET_BANKS: CallMessages = messages("Loading banks...", "Banks loaded", "Failed to load banks");
    pub const VERIFY_ACCOUNT: CallMessages =
        messages("Verifying account...", "Account verified", "Could not verify account");
    pub const WITHDRAW: CallMessages =
        messages("Processing withdrawal...", "Withdrawal initiated successfully", "Withdrawal failed");
    pub const GET_WITHDRAWALS: CallMessages =
        messages("Loading withdrawals...", "Withdrawals loaded", "Failed to load withdrawals");
}

pub mod referrals {
    use super::{CallMessages, messages};

    pub const GET_STATS: CallMessages =
        messages("Loading referrals...", "Referral stats loaded", "Failed to load referral stats");
    pub const VALIDATE: CallMessages =
        messages("Checking code...", "Referral code is valid", "Invalid referral code");
    pub const UPDATE_SETTINGS: CallMessages = messages(
        "Saving referral settings...",
        "Referral settings updated",
        "Failed to update referral settings",
    );
    pub const GET_EARNINGS: CallMessages =
        messages("Loading earnings...", "Earnings loaded", "Failed to load earnings");
    pub const GET_REFERRED_USERS: CallMessages =
        messages("Loading referred users...", "Referred users loaded", "Failed to load referred users");
}

pub mod catalog {
    use super::{CallMessages, messages};

    pub const GET_THEMES: CallMessages = messages("Loading themes...", "Themes loaded", "Failed to load themes");
    pub const GET_TRANSACTIONS: CallMessages =
        messages("Loading transactions...", "Transactions loaded", "Failed to load transactions");
    pub const GET_RATE: CallMessages =
        messages("Loading exchange rate...", "Exchange rate loaded", "Failed to load exchange rate");
}
