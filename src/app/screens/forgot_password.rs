//! Forgot-password modal opened from the Login screen
//!
//! idle -> pending -> resolved (auto-closes) | idle-with-error

use crate::app::focus::cycle;
use crate::app::outbox::Outbox;
use crate::app::text_field::TextField;
use crate::app::timers::Timer;
use crate::constants::MSG_RESET_ERROR;
use crate::messages::{GatewayCall, GatewayResponse, UiEvent};
use crate::models::{ApiMessage, AuthReply};
use crate::validation::validate_reset_email;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetControl {
    Email,
    SendLink,
    Close,
}

const ORDER: [ResetControl; 3] = [ResetControl::Email, ResetControl::SendLink, ResetControl::Close];

/// Observable state of the reset flow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetPhase {
    Idle,
    Pending,
    Resolved,
    IdleWithError,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForgotPassword {
    pub visible: bool,
    pub email: TextField,
    pub message: Option<ApiMessage>,
    pub is_loading: bool,
    pub focus: ResetControl,
    pending_call: Option<u64>,
    close_timer: Option<u64>,
}

impl Default for ForgotPassword {
    fn default() -> Self {
        ForgotPassword {
            visible: false,
            email: TextField::default(),
            message: None,
            is_loading: false,
            focus: ResetControl::Email,
            pending_call: None,
            close_timer: None,
        }
    }
}

impl ForgotPassword {
    pub fn phase(&self) -> ResetPhase {
        if self.is_loading {
            return ResetPhase::Pending;
        }
        match &self.message {
            Some(message) if message.is_success() => ResetPhase::Resolved,
            Some(_) => ResetPhase::IdleWithError,
            None => ResetPhase::Idle,
        }
    }

    /// Show the modal in a fresh idle state
    pub fn open(&mut self) {
        *self = ForgotPassword {
            visible: true,
            ..ForgotPassword::default()
        };
    }

    /// Close unless a request is in flight
    pub fn close(&mut self, out: &mut Outbox) {
        if self.is_loading {
            return;
        }
        if let Some(id) = self.close_timer.take() {
            out.cancel_timer(id);
        }
        self.visible = false;
    }

    pub fn owns(&self, id: u64) -> bool {
        self.pending_call == Some(id) || self.close_timer == Some(id)
    }

    pub fn handle_event(&mut self, event: &UiEvent, out: &mut Outbox) {
        match event {
            UiEvent::FocusNext => self.focus = cycle(&ORDER, self.focus, true),
            UiEvent::FocusPrev => self.focus = cycle(&ORDER, self.focus, false),
            UiEvent::Back => self.close(out),
            _ if self.is_loading => {}
            UiEvent::CharInput(c) if self.focus == ResetControl::Email => self.email.insert_char(*c),
            UiEvent::Paste(text) if self.focus == ResetControl::Email => self.email.insert_str(text),
            UiEvent::Backspace if self.focus == ResetControl::Email => self.email.backspace(),
            UiEvent::CursorLeft if self.focus == ResetControl::Email => self.email.move_left(),
            UiEvent::CursorRight if self.focus == ResetControl::Email => self.email.move_right(),
            UiEvent::Activate => match self.focus {
                ResetControl::Email | ResetControl::SendLink => self.submit(out),
                ResetControl::Close => self.close(out),
            },
            _ => {}
        }
    }

    pub fn submit(&mut self, out: &mut Outbox) {
        if self.is_loading {
            return;
        }
        if let Some(id) = self.close_timer.take() {
            out.cancel_timer(id);
        }

        if let Err(e) = validate_reset_email(self.email.value()) {
            self.message = Some(e.to_message());
            return;
        }

        self.message = None;
        self.is_loading = true;
        let email = self.email.value().to_string();
        self.pending_call = Some(out.call(GatewayCall::PasswordReset { email }));
    }

    pub fn handle_response(&mut self, response: GatewayResponse, out: &mut Outbox) {
        if self.pending_call != Some(response.id()) {
            return;
        }
        self.pending_call = None;
        self.is_loading = false;

        match response {
            GatewayResponse::Completed { reply: AuthReply::ResetLinkSent { email }, .. } => {
                self.message = Some(ApiMessage::success(format!(
                    "Success! Reset link sent to {}. Check your inbox.",
                    email
                )));
                self.email.clear();
                let after = out.delays().reset_auto_close();
                self.close_timer = Some(out.schedule(after, Timer::CloseResetModal));
            }
            GatewayResponse::Completed { reply, .. } => {
                tracing::warn!(?reply, "Unexpected reply for password reset");
                self.message = Some(ApiMessage::error(MSG_RESET_ERROR));
            }
            GatewayResponse::Failed { .. } => {
                self.message = Some(ApiMessage::error(MSG_RESET_ERROR));
            }
            GatewayResponse::Cancelled { .. } => {}
        }
    }

    pub fn handle_timer(&mut self, id: u64, timer: Timer) {
        if self.close_timer == Some(id) && timer == Timer::CloseResetModal {
            self.close_timer = None;
            self.visible = false;
        }
    }

    /// Cancel outstanding work when the owning screen unmounts
    pub fn teardown(&mut self, out: &mut Outbox) {
        if let Some(id) = self.pending_call.take() {
            out.cancel_call(id);
        }
        if let Some(id) = self.close_timer.take() {
            out.cancel_timer(id);
        }
        self.is_loading = false;
    }
}
