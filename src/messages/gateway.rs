//! Gateway messages - communication between App and Gateway layers

use crate::models::{AuthReply, Credentials, NewAccount, SocialProvider};

/// One authentication call, as issued by a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Login(Credentials),
    SignUp(NewAccount),
    PasswordReset { email: String },
    SocialLogin(SocialProvider),
    ResendCode,
}

impl GatewayCall {
    pub fn name(&self) -> &'static str {
        match self {
            GatewayCall::Login(_) => "login",
            GatewayCall::SignUp(_) => "sign_up",
            GatewayCall::PasswordReset { .. } => "password_reset",
            GatewayCall::SocialLogin(_) => "social_login",
            GatewayCall::ResendCode => "resend_code",
        }
    }
}

/// Commands sent from App layer to Gateway layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCommand {
    /// Run a call; its outcome comes back tagged with `id`
    Execute { id: u64, call: GatewayCall },
    /// Abandon a pending call (its screen was unmounted)
    Cancel(u64),
    /// Cancel everything and stop the gateway actor
    Shutdown,
}

/// Responses sent from Gateway layer to App layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayResponse {
    Completed { id: u64, reply: AuthReply },
    Failed { id: u64, error: String },
    Cancelled { id: u64 },
}

impl GatewayResponse {
    /// Get the call ID from the response
    pub fn id(&self) -> u64 {
        match self {
            GatewayResponse::Completed { id, .. } => *id,
            GatewayResponse::Failed { id, .. } => *id,
            GatewayResponse::Cancelled { id } => *id,
        }
    }
}
