//! Login screen state: credentials form, social sign-in and the reset modal

use crate::app::focus::cycle;
use crate::app::outbox::Outbox;
use crate::app::screens::forgot_password::ForgotPassword;
use crate::app::text_field::TextField;
use crate::app::timers::Timer;
use crate::constants::{MSG_NETWORK_ERROR, MSG_SOCIAL_SIGN_IN_ERROR};
use crate::messages::{GatewayCall, GatewayResponse, UiEvent};
use crate::models::{ApiMessage, Credentials, Route, SocialProvider, Theme};
use crate::navigation::NavAction;
use crate::validation::validate_login;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginControl {
    ThemeToggle,
    Email,
    Password,
    ShowPassword,
    RememberMe,
    ForgotPassword,
    SignIn,
    Social(SocialProvider),
    SignUpLink,
}

const ORDER: [LoginControl; 11] = [
    LoginControl::ThemeToggle,
    LoginControl::Email,
    LoginControl::Password,
    LoginControl::ShowPassword,
    LoginControl::RememberMe,
    LoginControl::ForgotPassword,
    LoginControl::SignIn,
    LoginControl::Social(SocialProvider::GitHub),
    LoginControl::Social(SocialProvider::Google),
    LoginControl::Social(SocialProvider::Facebook),
    LoginControl::SignUpLink,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoginCall {
    Password,
    Social(SocialProvider),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginScreen {
    pub theme: Theme,
    pub email: TextField,
    pub password: TextField,
    pub password_visible: bool,
    pub remember_me: bool,
    pub is_loading: bool,
    pub message: Option<ApiMessage>,
    pub focus: LoginControl,
    pub reset: ForgotPassword,
    pending: Option<(u64, LoginCall)>,
    nav_timer: Option<u64>,
}

impl LoginScreen {
    pub fn new(theme: Theme) -> Self {
        LoginScreen {
            theme,
            email: TextField::default(),
            password: TextField::default(),
            password_visible: false,
            remember_me: false,
            is_loading: false,
            message: None,
            focus: LoginControl::Email,
            reset: ForgotPassword::default(),
            pending: None,
            nav_timer: None,
        }
    }

    pub fn owns(&self, id: u64) -> bool {
        self.pending.map(|(p, _)| p) == Some(id)
            || self.nav_timer == Some(id)
            || self.reset.owns(id)
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            LoginControl::Email => Some(&mut self.email),
            LoginControl::Password => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn handle_event(&mut self, event: &UiEvent, out: &mut Outbox) {
        if self.reset.visible {
            self.reset.handle_event(event, out);
            return;
        }

        match event {
            UiEvent::FocusNext => self.focus = cycle(&ORDER, self.focus, true),
            UiEvent::FocusPrev => self.focus = cycle(&ORDER, self.focus, false),
            // Every control is disabled while a call is pending
            _ if self.is_loading => {}
            UiEvent::ToggleTheme => self.toggle_theme(),
            UiEvent::CharInput(' ') if self.focused_field().is_none() => self.activate(out),
            UiEvent::CharInput(c) => {
                if let Some(field) = self.focused_field() {
                    field.insert_char(*c);
                }
            }
            UiEvent::Paste(text) => {
                if let Some(field) = self.focused_field() {
                    field.insert_str(text);
                }
            }
            UiEvent::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.backspace();
                }
            }
            UiEvent::CursorLeft => {
                if let Some(field) = self.focused_field() {
                    field.move_left();
                }
            }
            UiEvent::CursorRight => {
                if let Some(field) = self.focused_field() {
                    field.move_right();
                }
            }
            UiEvent::Activate => self.activate(out),
            _ => {}
        }
    }

    fn activate(&mut self, out: &mut Outbox) {
        match self.focus {
            LoginControl::ThemeToggle => self.toggle_theme(),
            LoginControl::Email | LoginControl::Password | LoginControl::SignIn => self.submit(out),
            LoginControl::ShowPassword => self.password_visible = !self.password_visible,
            LoginControl::RememberMe => self.remember_me = !self.remember_me,
            LoginControl::ForgotPassword => self.reset.open(),
            LoginControl::Social(provider) => self.social_login(provider, out),
            LoginControl::SignUpLink => out.navigate(NavAction::Navigate(Route::SignUp)),
        }
    }

    pub fn toggle_theme(&mut self) {
        if !self.is_loading {
            self.theme = self.theme.toggled();
        }
    }

    pub fn submit(&mut self, out: &mut Outbox) {
        if self.is_loading {
            return;
        }
        self.message = None;

        if let Err(e) = validate_login(self.email.value(), self.password.value()) {
            self.message = Some(e.to_message());
            return;
        }

        self.is_loading = true;
        let id = out.call(GatewayCall::Login(Credentials {
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
        }));
        self.pending = Some((id, LoginCall::Password));
    }

    pub fn social_login(&mut self, provider: SocialProvider, out: &mut Outbox) {
        if self.is_loading {
            return;
        }
        tracing::info!(%provider, "Attempting social login");
        self.message = None;
        self.is_loading = true;
        let id = out.call(GatewayCall::SocialLogin(provider));
        self.pending = Some((id, LoginCall::Social(provider)));
    }

    pub fn handle_response(&mut self, response: GatewayResponse, out: &mut Outbox) {
        if self.reset.owns(response.id()) {
            self.reset.handle_response(response, out);
            return;
        }

        let Some((id, kind)) = self.pending else {
            return;
        };
        if id != response.id() {
            return;
        }
        self.pending = None;
        self.is_loading = false;

        match response {
            GatewayResponse::Completed { .. } => {
                self.message = Some(ApiMessage::success(match kind {
                    LoginCall::Password => "SUCCESS: Welcome back!".to_string(),
                    LoginCall::Social(provider) => format!("SUCCESS: Signed in with {}!", provider),
                }));
                if let Some(old) = self.nav_timer.take() {
                    out.cancel_timer(old);
                }
                let after = out.delays().post_success_navigation();
                self.nav_timer = Some(out.schedule(after, Timer::Navigate(NavAction::Navigate(Route::Otp))));
            }
            GatewayResponse::Failed { error, .. } => {
                tracing::warn!(%error, "Login failed");
                self.message = Some(ApiMessage::error(match kind {
                    LoginCall::Password => MSG_NETWORK_ERROR,
                    LoginCall::Social(_) => MSG_SOCIAL_SIGN_IN_ERROR,
                }));
            }
            GatewayResponse::Cancelled { .. } => {}
        }
    }

    pub fn handle_timer(&mut self, id: u64, timer: Timer, out: &mut Outbox) {
        if self.reset.owns(id) {
            self.reset.handle_timer(id, timer);
            return;
        }
        if self.nav_timer == Some(id) {
            self.nav_timer = None;
            if let Timer::Navigate(action) = timer {
                tracing::info!("Login succeeded, continuing to verification");
                out.navigate(action);
            }
        }
    }

    /// Stop following up on a success once another screen covers this one
    pub fn suspend(&mut self, out: &mut Outbox) {
        if let Some(id) = self.nav_timer.take() {
            out.cancel_timer(id);
        }
    }

    pub fn teardown(&mut self, out: &mut Outbox) {
        if let Some((id, _)) = self.pending.take() {
            out.cancel_call(id);
        }
        self.suspend(out);
        self.reset.teardown(out);
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::outbox::Effect;
    use crate::config::Delays;
    use crate::models::AuthReply;

    fn type_into(screen: &mut LoginScreen, control: LoginControl, text: &str, out: &mut Outbox) {
        screen.focus = control;
        for c in text.chars() {
            screen.handle_event(&UiEvent::CharInput(c), out);
        }
    }

    fn single_call(out: &mut Outbox) -> (u64, GatewayCall) {
        match out.drain().as_slice() {
            [Effect::Call { id, call }] => (*id, call.clone()),
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn test_blank_fields_rejected_without_loading() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = LoginScreen::new(Theme::Light);
        type_into(&mut screen, LoginControl::Email, "   ", &mut out);
        type_into(&mut screen, LoginControl::Password, "pw", &mut out);
        screen.handle_event(&UiEvent::Activate, &mut out);

        assert!(!screen.is_loading);
        assert_eq!(
            screen.message,
            Some(ApiMessage::error("Email and password are required."))
        );
        assert!(out.drain().is_empty());
    }

    #[test]
    fn test_login_success_then_navigates_to_otp() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = LoginScreen::new(Theme::Light);
        type_into(&mut screen, LoginControl::Email, "ada@example.com", &mut out);
        type_into(&mut screen, LoginControl::Password, "secret", &mut out);
        screen.focus = LoginControl::SignIn;
        screen.handle_event(&UiEvent::Activate, &mut out);
        assert!(screen.is_loading);

        let (id, call) = single_call(&mut out);
        assert_eq!(
            call,
            GatewayCall::Login(Credentials {
                email: "ada@example.com".into(),
                password: "secret".into()
            })
        );

        // Disabled while pending
        screen.handle_event(&UiEvent::ToggleTheme, &mut out);
        assert_eq!(screen.theme, Theme::Light);

        screen.handle_response(
            GatewayResponse::Completed { id, reply: AuthReply::LoggedIn { email: "ada@example.com".into() } },
            &mut out,
        );
        assert!(!screen.is_loading);
        assert_eq!(screen.message, Some(ApiMessage::success("SUCCESS: Welcome back!")));

        let timer_id = match out.drain().as_slice() {
            [Effect::Schedule { id, timer, .. }] => {
                assert_eq!(*timer, Timer::Navigate(NavAction::Navigate(Route::Otp)));
                *id
            }
            other => panic!("unexpected effects: {:?}", other),
        };
        screen.handle_timer(timer_id, Timer::Navigate(NavAction::Navigate(Route::Otp)), &mut out);
        assert_eq!(out.take_navigation(), Some(NavAction::Navigate(Route::Otp)));
    }

    #[test]
    fn test_social_login_message_names_provider() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = LoginScreen::new(Theme::Dark);
        screen.focus = LoginControl::Social(SocialProvider::GitHub);
        screen.handle_event(&UiEvent::Activate, &mut out);
        let (id, call) = single_call(&mut out);
        assert_eq!(call, GatewayCall::SocialLogin(SocialProvider::GitHub));

        screen.handle_response(
            GatewayResponse::Completed { id, reply: AuthReply::SocialSignedIn { provider: SocialProvider::GitHub } },
            &mut out,
        );
        assert_eq!(screen.message, Some(ApiMessage::success("SUCCESS: Signed in with GitHub!")));
    }

    #[test]
    fn test_failed_login_shows_network_error() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = LoginScreen::new(Theme::Light);
        screen.email = TextField::new("ada@example.com");
        screen.password = TextField::new("pw");
        screen.submit(&mut out);
        let (id, _) = single_call(&mut out);

        screen.handle_response(GatewayResponse::Failed { id, error: "refused".into() }, &mut out);
        assert_eq!(screen.message, Some(ApiMessage::error(MSG_NETWORK_ERROR)));
        assert!(out.drain().is_empty());
    }

    #[test]
    fn test_toggles_are_involutions() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = LoginScreen::new(Theme::Light);
        screen.focus = LoginControl::ShowPassword;
        screen.handle_event(&UiEvent::Activate, &mut out);
        assert!(screen.password_visible);
        screen.handle_event(&UiEvent::CharInput(' '), &mut out);
        assert!(!screen.password_visible);

        screen.handle_event(&UiEvent::ToggleTheme, &mut out);
        screen.handle_event(&UiEvent::ToggleTheme, &mut out);
        assert_eq!(screen.theme, Theme::Light);
    }

    #[test]
    fn test_sign_up_link_requests_navigation() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = LoginScreen::new(Theme::Light);
        screen.focus = LoginControl::SignUpLink;
        screen.handle_event(&UiEvent::Activate, &mut out);
        assert_eq!(out.take_navigation(), Some(NavAction::Navigate(Route::SignUp)));
    }

    #[test]
    fn test_modal_captures_events() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = LoginScreen::new(Theme::Light);
        screen.focus = LoginControl::ForgotPassword;
        screen.handle_event(&UiEvent::Activate, &mut out);
        assert!(screen.reset.visible);

        screen.handle_event(&UiEvent::CharInput('a'), &mut out);
        assert_eq!(screen.reset.email.value(), "a");
        assert!(screen.email.is_empty());

        screen.handle_event(&UiEvent::Back, &mut out);
        assert!(!screen.reset.visible);
    }

    #[test]
    fn test_teardown_cancels_pending_call() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = LoginScreen::new(Theme::Light);
        screen.social_login(SocialProvider::Facebook, &mut out);
        let (id, _) = single_call(&mut out);

        screen.teardown(&mut out);
        assert_eq!(out.drain(), vec![Effect::CancelCall(id)]);
        assert!(!screen.owns(id));
    }
}
