//! Application constants
//!
//! Centralized location for user-facing strings and timing defaults.

/// Application name
pub const APP_NAME: &str = "skillarc";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory under $HOME holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = ".skillarc";

/// Log file name, created in the configured log directory
pub const LOG_FILE_NAME: &str = "skillarc.log";

/// Number of slots in the one-time code
pub const OTP_LENGTH: usize = 4;

// Mock call delays (milliseconds)
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;
pub const DEFAULT_SIGN_UP_DELAY_MS: u64 = 1500;
pub const DEFAULT_SOCIAL_DELAY_MS: u64 = 1500;
pub const DEFAULT_PASSWORD_RESET_DELAY_MS: u64 = 2000;
pub const DEFAULT_RESEND_CODE_DELAY_MS: u64 = 1500;

/// How long the reset modal stays open after a successful request
pub const DEFAULT_RESET_AUTO_CLOSE_MS: u64 = 3000;

/// Pause between a success message and the follow-up navigation
pub const DEFAULT_POST_SUCCESS_NAVIGATION_MS: u64 = 1000;

// Validation messages
pub const MSG_LOGIN_REQUIRED: &str = "Email and password are required.";
pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields are required.";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const MSG_TERMS_REQUIRED: &str = "You must agree to the Terms & Conditions.";
pub const MSG_RESET_EMAIL_REQUIRED: &str = "Please enter your email address.";
pub const MSG_OTP_INCOMPLETE: &str = "Please enter the complete 4-digit code.";

// Gateway failure messages
pub const MSG_NETWORK_ERROR: &str = "Network Error: Could not connect to the backend server.";
pub const MSG_SOCIAL_SIGN_IN_ERROR: &str = "Error during social sign-in.";
pub const MSG_SOCIAL_SIGN_UP_ERROR: &str = "Error during social sign-up.";
pub const MSG_RESET_ERROR: &str = "Error: Failed to send reset link. Please try again.";
pub const MSG_RESEND_ERROR: &str = "Error: Could not resend the code. Please try again.";

pub const MSG_CODE_RESENT: &str = "A new code has been sent to your email.";
