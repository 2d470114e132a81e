//! Per-screen state machines mounted on the navigation stack

pub mod forgot_password;
pub mod login;
pub mod otp;
pub mod sign_up;

pub use forgot_password::{ForgotPassword, ResetControl, ResetPhase};
pub use login::{LoginControl, LoginScreen};
pub use otp::{OtpControl, OtpScreen};
pub use sign_up::{SignUpControl, SignUpScreen};

use crate::app::outbox::Outbox;
use crate::app::timers::Timer;
use crate::messages::{GatewayResponse, UiEvent};
use crate::models::{Route, Theme};
use crate::navigation::Routed;

/// A mounted screen and its local state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Login(LoginScreen),
    SignUp(SignUpScreen),
    Otp(OtpScreen),
}

impl Routed for Screen {
    fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::SignUp(_) => Route::SignUp,
            Screen::Otp(_) => Route::Otp,
        }
    }
}

impl Screen {
    /// Fresh state for a newly mounted route
    pub fn mount(route: Route, theme: Theme) -> Screen {
        tracing::debug!(route = route.as_str(), theme = theme.as_str(), "Mounting screen");
        match route {
            Route::Login => Screen::Login(LoginScreen::new(theme)),
            Route::SignUp => Screen::SignUp(SignUpScreen::new(theme)),
            Route::Otp => Screen::Otp(OtpScreen::new()),
        }
    }

    /// OTP is always drawn with its own fixed palette
    pub fn theme(&self) -> Option<Theme> {
        match self {
            Screen::Login(s) => Some(s.theme),
            Screen::SignUp(s) => Some(s.theme),
            Screen::Otp(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Screen::Login(s) => s.is_loading || s.reset.is_loading,
            Screen::SignUp(s) => s.is_loading,
            Screen::Otp(s) => s.is_loading,
        }
    }

    pub fn owns(&self, id: u64) -> bool {
        match self {
            Screen::Login(s) => s.owns(id),
            Screen::SignUp(s) => s.owns(id),
            Screen::Otp(s) => s.owns(id),
        }
    }

    pub fn handle_event(&mut self, event: &UiEvent, out: &mut Outbox) {
        match self {
            Screen::Login(s) => s.handle_event(event, out),
            Screen::SignUp(s) => s.handle_event(event, out),
            Screen::Otp(s) => s.handle_event(event, out),
        }
    }

    pub fn handle_response(&mut self, response: GatewayResponse, out: &mut Outbox) {
        match self {
            Screen::Login(s) => s.handle_response(response, out),
            Screen::SignUp(s) => s.handle_response(response, out),
            Screen::Otp(s) => s.handle_response(response),
        }
    }

    pub fn handle_timer(&mut self, id: u64, timer: Timer, out: &mut Outbox) {
        match self {
            Screen::Login(s) => s.handle_timer(id, timer, out),
            Screen::SignUp(s) => s.handle_timer(id, timer, out),
            Screen::Otp(_) => {}
        }
    }

    /// Called when another screen is pushed on top of this one
    pub fn suspend(&mut self, out: &mut Outbox) {
        match self {
            Screen::Login(s) => s.suspend(out),
            Screen::SignUp(s) => s.suspend(out),
            Screen::Otp(_) => {}
        }
    }

    /// Called when the screen is unmounted
    pub fn teardown(&mut self, out: &mut Outbox) {
        tracing::debug!(route = self.route().as_str(), "Unmounting screen");
        match self {
            Screen::Login(s) => s.teardown(out),
            Screen::SignUp(s) => s.teardown(out),
            Screen::Otp(s) => s.teardown(out),
        }
    }
}
