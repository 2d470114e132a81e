//! Gateway layer - the asynchronous boundary for authentication calls
//!
//! Screens never wait on timers or sockets themselves. They describe a
//! [`GatewayCall`]; the gateway actor runs it against an [`AuthGateway`]
//! implementation and reports back.

pub mod actor;
pub mod mock;

use std::future::Future;
use std::pin::Pin;

use crate::messages::gateway::GatewayCall;
use crate::models::{AuthReply, Credentials, NewAccount, SocialProvider};

pub use actor::GatewayActor;
pub use mock::MockGateway;

/// Boxed future returned by every gateway operation
pub type GatewayFuture = Pin<Box<dyn Future<Output = anyhow::Result<AuthReply>> + Send>>;

/// Authentication backend used by the screens.
///
/// The shipped implementation is [`MockGateway`]; a network client can
/// replace it without touching validation or screen logic.
pub trait AuthGateway: Send + Sync + 'static {
    fn login(&self, credentials: Credentials) -> GatewayFuture;

    fn sign_up(&self, account: NewAccount) -> GatewayFuture;

    fn request_password_reset(&self, email: String) -> GatewayFuture;

    fn social_login(&self, provider: SocialProvider) -> GatewayFuture;

    fn resend_code(&self) -> GatewayFuture;
}

/// Route a call to the matching gateway operation
pub fn dispatch(gateway: &dyn AuthGateway, call: GatewayCall) -> GatewayFuture {
    match call {
        GatewayCall::Login(credentials) => gateway.login(credentials),
        GatewayCall::SignUp(account) => gateway.sign_up(account),
        GatewayCall::PasswordReset { email } => gateway.request_password_reset(email),
        GatewayCall::SocialLogin(provider) => gateway.social_login(provider),
        GatewayCall::ResendCode => gateway.resend_code(),
    }
}
