//! Sign-up screen state

use crate::app::focus::cycle;
use crate::app::outbox::Outbox;
use crate::app::text_field::TextField;
use crate::app::timers::Timer;
use crate::constants::{MSG_NETWORK_ERROR, MSG_SOCIAL_SIGN_UP_ERROR};
use crate::messages::{GatewayCall, GatewayResponse, UiEvent};
use crate::models::{ApiMessage, NewAccount, SocialProvider, Theme};
use crate::navigation::NavAction;
use crate::validation::validate_sign_up;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpControl {
    ThemeToggle,
    FullName,
    Email,
    Password,
    ShowPassword,
    ConfirmPassword,
    ShowConfirmPassword,
    AgreeToTerms,
    CreateAccount,
    Social(SocialProvider),
    SignInLink,
}

const ORDER: [SignUpControl; 13] = [
    SignUpControl::ThemeToggle,
    SignUpControl::FullName,
    SignUpControl::Email,
    SignUpControl::Password,
    SignUpControl::ShowPassword,
    SignUpControl::ConfirmPassword,
    SignUpControl::ShowConfirmPassword,
    SignUpControl::AgreeToTerms,
    SignUpControl::CreateAccount,
    SignUpControl::Social(SocialProvider::GitHub),
    SignUpControl::Social(SocialProvider::Google),
    SignUpControl::Social(SocialProvider::Facebook),
    SignUpControl::SignInLink,
];

#[derive(Clone, Debug, PartialEq, Eq)]
enum SignUpCall {
    Form { full_name: String },
    Social(SocialProvider),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpScreen {
    pub theme: Theme,
    pub full_name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub password_visible: bool,
    pub confirm_password_visible: bool,
    pub agreed_to_terms: bool,
    pub is_loading: bool,
    pub message: Option<ApiMessage>,
    pub focus: SignUpControl,
    pending: Option<(u64, SignUpCall)>,
    nav_timer: Option<u64>,
}

impl SignUpScreen {
    pub fn new(theme: Theme) -> Self {
        SignUpScreen {
            theme,
            full_name: TextField::default(),
            email: TextField::default(),
            password: TextField::default(),
            confirm_password: TextField::default(),
            password_visible: false,
            confirm_password_visible: false,
            agreed_to_terms: false,
            is_loading: false,
            message: None,
            focus: SignUpControl::FullName,
            pending: None,
            nav_timer: None,
        }
    }

    pub fn owns(&self, id: u64) -> bool {
        self.pending.as_ref().map(|(p, _)| *p) == Some(id) || self.nav_timer == Some(id)
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            SignUpControl::FullName => Some(&mut self.full_name),
            SignUpControl::Email => Some(&mut self.email),
            SignUpControl::Password => Some(&mut self.password),
            SignUpControl::ConfirmPassword => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    pub fn handle_event(&mut self, event: &UiEvent, out: &mut Outbox) {
        match event {
            UiEvent::FocusNext => self.focus = cycle(&ORDER, self.focus, true),
            UiEvent::FocusPrev => self.focus = cycle(&ORDER, self.focus, false),
            // Leaving is always allowed; teardown cancels whatever is in flight
            UiEvent::Back => out.navigate(NavAction::GoBack),
            _ if self.is_loading => {}
            UiEvent::ToggleTheme => self.theme = self.theme.toggled(),
            UiEvent::Activate => self.activate(out),
            UiEvent::CharInput(c) => match self.focused_field() {
                Some(field) => field.insert_char(*c),
                None if *c == ' ' => self.activate(out),
                None => {}
            },
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
            _ => {}
        }
    }

    fn activate(&mut self, out: &mut Outbox) {
        match self.focus {
            SignUpControl::ThemeToggle => self.theme = self.theme.toggled(),
            SignUpControl::ShowPassword => self.password_visible = !self.password_visible,
            SignUpControl::ShowConfirmPassword => {
                self.confirm_password_visible = !self.confirm_password_visible
            }
            SignUpControl::AgreeToTerms => self.agreed_to_terms = !self.agreed_to_terms,
            SignUpControl::Social(provider) => self.social_sign_up(provider, out),
            SignUpControl::SignInLink => out.navigate(NavAction::GoBack),
            SignUpControl::FullName
            | SignUpControl::Email
            | SignUpControl::Password
            | SignUpControl::ConfirmPassword
            | SignUpControl::CreateAccount => self.submit(out),
        }
    }

    pub fn submit(&mut self, out: &mut Outbox) {
        if self.is_loading {
            return;
        }
        self.message = None;

        if let Err(e) = validate_sign_up(
            self.full_name.value(),
            self.email.value(),
            self.password.value(),
            self.confirm_password.value(),
            self.agreed_to_terms,
        ) {
            self.message = Some(e.to_message());
            return;
        }

        self.is_loading = true;
        let account = NewAccount {
            full_name: self.full_name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
        };
        let full_name = account.full_name.clone();
        let id = out.call(GatewayCall::SignUp(account));
        self.pending = Some((id, SignUpCall::Form { full_name }));
    }

    pub fn social_sign_up(&mut self, provider: SocialProvider, out: &mut Outbox) {
        if self.is_loading {
            return;
        }
        tracing::info!(%provider, "Attempting social sign-up");
        self.message = None;
        self.is_loading = true;
        let id = out.call(GatewayCall::SocialLogin(provider));
        self.pending = Some((id, SignUpCall::Social(provider)));
    }

    pub fn handle_response(&mut self, response: GatewayResponse, out: &mut Outbox) {
        let kind = match &self.pending {
            Some((id, kind)) if *id == response.id() => kind.clone(),
            _ => return,
        };
        self.pending = None;
        self.is_loading = false;

        match response {
            GatewayResponse::Completed { .. } => {
                self.message = Some(ApiMessage::success(match &kind {
                    SignUpCall::Form { full_name } => format!("SUCCESS: Account created for {}!", full_name),
                    SignUpCall::Social(provider) => format!("SUCCESS: Account created with {}!", provider),
                }));
                if let Some(old) = self.nav_timer.take() {
                    out.cancel_timer(old);
                }
                let after = out.delays().post_success_navigation();
                self.nav_timer = Some(out.schedule(after, Timer::Navigate(NavAction::GoBack)));
            }
            GatewayResponse::Failed { error, .. } => {
                tracing::warn!(%error, "Sign-up failed");
                self.message = Some(ApiMessage::error(match kind {
                    SignUpCall::Form { .. } => MSG_NETWORK_ERROR,
                    SignUpCall::Social(_) => MSG_SOCIAL_SIGN_UP_ERROR,
                }));
            }
            GatewayResponse::Cancelled { .. } => {}
        }
    }

    pub fn handle_timer(&mut self, id: u64, timer: Timer, out: &mut Outbox) {
        if self.nav_timer != Some(id) {
            return;
        }
        self.nav_timer = None;
        if let Timer::Navigate(action) = timer {
            out.navigate(action);
        }
    }

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
        self.is_loading = false;
    }
}
