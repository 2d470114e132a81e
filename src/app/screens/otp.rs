//! OTP verification screen

use crate::app::focus::cycle;
use crate::app::outbox::Outbox;
use crate::constants::{MSG_CODE_RESENT, MSG_OTP_INCOMPLETE, MSG_RESEND_ERROR, OTP_LENGTH};
use crate::messages::{GatewayCall, GatewayResponse, UiEvent};
use crate::models::{ApiMessage, Route};
use crate::navigation::NavAction;
use crate::otp::OtpInput;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OtpControl {
    #[default]
    Code,
    Verify,
    Resend,
}

const ORDER: [OtpControl; 3] = [OtpControl::Code, OtpControl::Verify, OtpControl::Resend];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpScreen {
    pub input: OtpInput,
    pub focus: OtpControl,
    pub is_loading: bool,
    pub message: Option<ApiMessage>,
    pending_resend: Option<u64>,
}

impl OtpScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owns(&self, id: u64) -> bool {
        self.pending_resend == Some(id)
    }

    pub fn handle_event(&mut self, event: &UiEvent, out: &mut Outbox) {
        match event {
            UiEvent::FocusNext => self.focus = cycle(&ORDER, self.focus, true),
            UiEvent::FocusPrev => self.focus = cycle(&ORDER, self.focus, false),
            UiEvent::Back => out.navigate(NavAction::GoBack),
            _ if self.is_loading => {}
            UiEvent::Activate => match self.focus {
                OtpControl::Code | OtpControl::Verify => self.verify(out),
                OtpControl::Resend => self.resend(out),
            },
            _ if self.focus != OtpControl::Code => {}
            // Digits only, like a numeric keypad
            UiEvent::CharInput(c) if c.is_ascii_digit() => self.input.enter_char(*c),
            UiEvent::Paste(text) => self.input.change_text(text),
            UiEvent::Backspace => self.input.backspace(),
            UiEvent::CursorLeft => {
                let index = self.input.focus();
                self.input.set_focus(index.saturating_sub(1));
            }
            UiEvent::CursorRight => {
                let index = self.input.focus();
                self.input.set_focus((index + 1).min(OTP_LENGTH - 1));
            }
            _ => {}
        }
    }

    pub fn verify(&mut self, out: &mut Outbox) {
        match self.input.complete_code() {
            Some(code) => {
                tracing::info!(%code, "Verifying OTP");
                self.message = None;
                out.navigate(NavAction::Navigate(Route::Login));
            }
            None => {
                tracing::info!("Please enter the complete 4-digit OTP");
                self.message = Some(ApiMessage::error(MSG_OTP_INCOMPLETE));
            }
        }
    }

    pub fn resend(&mut self, out: &mut Outbox) {
        if self.is_loading {
            return;
        }
        self.message = None;
        self.is_loading = true;
        self.pending_resend = Some(out.call(GatewayCall::ResendCode));
    }

    pub fn handle_response(&mut self, response: GatewayResponse) {
        if self.pending_resend != Some(response.id()) {
            return;
        }
        self.pending_resend = None;
        self.is_loading = false;

        match response {
            GatewayResponse::Completed { .. } => self.message = Some(ApiMessage::success(MSG_CODE_RESENT)),
            GatewayResponse::Failed { error, .. } => {
                tracing::warn!(%error, "Resend failed");
                self.message = Some(ApiMessage::error(MSG_RESEND_ERROR));
            }
            GatewayResponse::Cancelled { .. } => {}
        }
    }

    pub fn teardown(&mut self, out: &mut Outbox) {
        if let Some(id) = self.pending_resend.take() {
            out.cancel_call(id);
        }
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::outbox::Effect;
    use crate::config::Delays;
    use crate::models::AuthReply;

    fn keys(screen: &mut OtpScreen, text: &str, out: &mut Outbox) {
        for c in text.chars() {
            screen.handle_event(&UiEvent::CharInput(c), out);
        }
    }

    #[test]
    fn test_incomplete_code_does_not_navigate() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = OtpScreen::new();
        keys(&mut screen, "123", &mut out);
        screen.handle_event(&UiEvent::Activate, &mut out);

        assert_eq!(out.take_navigation(), None);
        assert_eq!(screen.message, Some(ApiMessage::error(MSG_OTP_INCOMPLETE)));
    }

    #[test]
    fn test_complete_code_navigates_to_login() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = OtpScreen::new();
        keys(&mut screen, "1234", &mut out);
        assert_eq!(screen.input.code(), "1234");
        assert_eq!(screen.input.focus(), 3);

        screen.focus = OtpControl::Verify;
        screen.handle_event(&UiEvent::Activate, &mut out);
        assert_eq!(out.take_navigation(), Some(NavAction::Navigate(Route::Login)));
    }

    #[test]
    fn test_non_digit_keys_dropped() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = OtpScreen::new();
        keys(&mut screen, "a1b", &mut out);
        assert_eq!(screen.input.code(), "1");
        assert_eq!(screen.input.focus(), 1);
    }

    #[test]
    fn test_paste_keeps_last_character() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = OtpScreen::new();
        screen.handle_event(&UiEvent::Paste("5678".into()), &mut out);
        assert_eq!(screen.input.slot(0), Some('8'));
        assert_eq!(screen.input.focus(), 1);
    }

    #[test]
    fn test_backspace_walks_back() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = OtpScreen::new();
        keys(&mut screen, "12", &mut out);
        screen.handle_event(&UiEvent::Backspace, &mut out);
        assert_eq!(screen.input.focus(), 1);
        screen.handle_event(&UiEvent::Backspace, &mut out);
        assert_eq!(screen.input.slot(1), None);
        assert_eq!(screen.input.focus(), 1);
    }

    #[test]
    fn test_resend_round_trip() {
        let mut out = Outbox::new(Delays::default());
        let mut screen = OtpScreen::new();
        screen.focus = OtpControl::Resend;
        screen.handle_event(&UiEvent::Activate, &mut out);
        screen.handle_event(&UiEvent::Activate, &mut out);
        assert!(screen.is_loading);

        let id = match out.drain().as_slice() {
            [Effect::Call { id, call: GatewayCall::ResendCode }] => *id,
            other => panic!("unexpected effects: {:?}", other),
        };
        screen.handle_response(GatewayResponse::Completed { id, reply: AuthReply::CodeResent });
        assert!(!screen.is_loading);
        assert_eq!(screen.message, Some(ApiMessage::success(MSG_CODE_RESENT)));
    }
}
