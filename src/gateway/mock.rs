//! Timer-backed gateway that always succeeds

use std::time::Duration;

use crate::config::Delays;
use crate::gateway::{AuthGateway, GatewayFuture};
use crate::models::{AuthReply, Credentials, NewAccount, SocialProvider};

/// Simulates a backend by sleeping for a fixed delay per operation
#[derive(Debug, Clone, Default)]
pub struct MockGateway {
    delays: Delays,
}

impl MockGateway {
    pub fn new(delays: Delays) -> Self {
        MockGateway { delays }
    }

    fn reply_after(delay_ms: u64, reply: AuthReply) -> GatewayFuture {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            Ok(reply)
        })
    }
}

impl AuthGateway for MockGateway {
    fn login(&self, credentials: Credentials) -> GatewayFuture {
        Self::reply_after(
            self.delays.login_ms,
            AuthReply::LoggedIn {
                email: credentials.email,
            },
        )
    }

    fn sign_up(&self, account: NewAccount) -> GatewayFuture {
        Self::reply_after(
            self.delays.sign_up_ms,
            AuthReply::AccountCreated {
                full_name: account.full_name,
            },
        )
    }

    fn request_password_reset(&self, email: String) -> GatewayFuture {
        Self::reply_after(
            self.delays.password_reset_ms,
            AuthReply::ResetLinkSent { email },
        )
    }

    fn social_login(&self, provider: SocialProvider) -> GatewayFuture {
        Self::reply_after(self.delays.social_ms, AuthReply::SocialSignedIn { provider })
    }

    fn resend_code(&self) -> GatewayFuture {
        Self::reply_after(self.delays.resend_code_ms, AuthReply::CodeResent)
    }
}
