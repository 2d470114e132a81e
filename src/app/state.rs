//! App state - pure data structure with no I/O logic

use crate::app::outbox::{Effect, Outbox};
use crate::app::screens::Screen;
use crate::app::timers::TimerFired;
use crate::config::Delays;
use crate::messages::{GatewayResponse, RenderState, UiEvent};
use crate::models::{Route, Theme};
use crate::navigation::{NavAction, Navigator, Routed};

/// Main application state - pure data, no I/O
pub struct AppState {
    pub navigator: Navigator<Screen>,
    /// Theme each freshly mounted screen starts with
    pub default_theme: Theme,
    pub show_help: bool,
    outbox: Outbox,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), Delays::default())
    }
}

impl AppState {
    pub fn new(default_theme: Theme, delays: Delays) -> Self {
        AppState {
            navigator: Navigator::new(Screen::mount(Route::Login, default_theme)),
            default_theme,
            show_help: false,
            outbox: Outbox::new(delays),
        }
    }

    pub fn current(&self) -> &Screen {
        self.navigator.current()
    }

    /// Handle a UI event, returns true if quit was requested
    pub fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Quit => return true,
            UiEvent::ToggleHelp => self.show_help = !self.show_help,
            UiEvent::CloseHelp => self.show_help = false,
            event => {
                self.navigator.current_mut().handle_event(&event, &mut self.outbox);
                self.apply_navigation();
            }
        }
        false
    }

    /// Route a gateway response to the screen that issued the call
    pub fn handle_response(&mut self, response: GatewayResponse) {
        let id = response.id();
        let Some(screen) = self.navigator.iter_mut().find(|s| s.owns(id)) else {
            match response {
                GatewayResponse::Cancelled { .. } => tracing::debug!(id, "Call cancelled"),
                _ => tracing::warn!(id, "Dropping response for unknown call"),
            }
            return;
        };
        screen.handle_response(response, &mut self.outbox);
        self.apply_navigation();
    }

    /// Route a fired timer to its screen; only the top screen may navigate
    pub fn handle_timer(&mut self, fired: TimerFired) {
        let TimerFired { id, timer } = fired;
        let top = self.navigator.depth() - 1;
        let Some(pos) = self.navigator.iter().position(|s| s.owns(id)) else {
            tracing::debug!(id, "Ignoring timer with no owner");
            return;
        };

        if let Some(screen) = self.navigator.iter_mut().nth(pos) {
            screen.handle_timer(id, timer, &mut self.outbox);
        }
        if pos == top {
            self.apply_navigation();
        } else if let Some(action) = self.outbox.take_navigation() {
            tracing::debug!(?action, "Dropping navigation from a covered screen");
        }
    }

    fn apply_navigation(&mut self) {
        let Some(action) = self.outbox.take_navigation() else {
            return;
        };

        let from = self.navigator.current().route();
        let changes_stack = match action {
            NavAction::Navigate(route) => route != from,
            NavAction::GoBack => self.navigator.depth() > 1,
        };
        if !changes_stack {
            return;
        }

        // Whatever happens, the current screen stops being on top
        self.navigator.current_mut().suspend(&mut self.outbox);

        let theme = self.default_theme;
        let unmounted = self.navigator.apply(action, |route| Screen::mount(route, theme));
        for mut screen in unmounted {
            screen.teardown(&mut self.outbox);
        }

        tracing::info!(
            from = from.as_str(),
            to = self.navigator.current().route().as_str(),
            depth = self.navigator.depth(),
            "Navigated"
        );
    }

    /// Effects queued since the last call
    pub fn take_effects(&mut self) -> Vec<Effect> {
        self.outbox.drain()
    }

    /// Tear down every mounted screen, e.g. on quit
    pub fn teardown_all(&mut self) {
        for screen in self.navigator.iter_mut() {
            screen.teardown(&mut self.outbox);
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            screen: self.navigator.current().clone(),
            routes: self.navigator.routes(),
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::{LoginControl, SignUpControl};
    use crate::app::timers::Timer;
    use crate::messages::GatewayCall;
    use crate::models::AuthReply;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state.handle_ui_event(UiEvent::CharInput(c));
        }
    }

    fn login_mut(state: &mut AppState) -> &mut crate::app::screens::LoginScreen {
        match state.navigator.current_mut() {
            Screen::Login(s) => s,
            other => panic!("expected login, got {:?}", other.route()),
        }
    }

    /// Drive the login form to a successful call and return the follow-up timer id
    fn log_in(state: &mut AppState) -> u64 {
        login_mut(state).focus = LoginControl::Email;
        type_text(state, "ada@example.com");
        login_mut(state).focus = LoginControl::Password;
        type_text(state, "secret");
        state.handle_ui_event(UiEvent::Activate);

        let id = match state.take_effects().as_slice() {
            [Effect::Call { id, call: GatewayCall::Login(_) }] => *id,
            other => panic!("unexpected effects: {:?}", other),
        };
        state.handle_response(GatewayResponse::Completed {
            id,
            reply: AuthReply::LoggedIn { email: "ada@example.com".into() },
        });
        match state.take_effects().as_slice() {
            [Effect::Schedule { id, .. }] => *id,
            other => panic!("unexpected effects: {:?}", other),
        }
    }

    #[test]
    fn test_starts_on_login() {
        let state = AppState::new(Theme::Dark, Delays::default());
        assert_eq!(state.navigator.routes(), vec![Route::Login]);
        assert_eq!(state.current().theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_login_to_otp_and_back() {
        let mut state = AppState::default();
        let timer_id = log_in(&mut state);

        state.handle_timer(TimerFired { id: timer_id, timer: Timer::Navigate(NavAction::Navigate(Route::Otp)) });
        assert_eq!(state.navigator.routes(), vec![Route::Login, Route::Otp]);

        type_text(&mut state, "4821");
        state.handle_ui_event(UiEvent::Activate);
        assert_eq!(state.navigator.routes(), vec![Route::Login]);
    }

    #[test]
    fn test_sign_up_screen_keeps_own_theme() {
        let mut state = AppState::default();
        state.handle_ui_event(UiEvent::ToggleTheme);
        assert_eq!(state.current().theme(), Some(Theme::Dark));

        login_mut(&mut state).focus = LoginControl::SignUpLink;
        state.handle_ui_event(UiEvent::Activate);
        assert_eq!(state.current().route(), Route::SignUp);
        assert_eq!(state.current().theme(), Some(Theme::Light));

        state.handle_ui_event(UiEvent::Back);
        assert_eq!(state.current().theme(), Some(Theme::Dark));
    }

    #[test]
    fn test_unmount_cancels_in_flight_call() {
        let mut state = AppState::default();
        login_mut(&mut state).focus = LoginControl::SignUpLink;
        state.handle_ui_event(UiEvent::Activate);

        if let Screen::SignUp(s) = state.navigator.current_mut() {
            s.focus = SignUpControl::Social(crate::models::SocialProvider::Google);
        }
        state.handle_ui_event(UiEvent::Activate);
        let id = match state.take_effects().as_slice() {
            [Effect::Call { id, .. }] => *id,
            other => panic!("unexpected effects: {:?}", other),
        };

        state.handle_ui_event(UiEvent::Back);
        assert_eq!(state.take_effects(), vec![Effect::CancelCall(id)]);

        // A late completion is dropped
        state.handle_response(GatewayResponse::Completed {
            id,
            reply: AuthReply::SocialSignedIn { provider: crate::models::SocialProvider::Google },
        });
        assert_eq!(state.current().route(), Route::Login);
        assert!(state.take_effects().is_empty());
    }

    #[test]
    fn test_leaving_login_cancels_follow_up_navigation() {
        let mut state = AppState::default();
        let timer_id = log_in(&mut state);

        login_mut(&mut state).focus = LoginControl::SignUpLink;
        state.handle_ui_event(UiEvent::Activate);
        assert_eq!(state.take_effects(), vec![Effect::CancelTimer(timer_id)]);

        // Even if it had already fired, nothing navigates
        state.handle_timer(TimerFired { id: timer_id, timer: Timer::Navigate(NavAction::Navigate(Route::Otp)) });
        assert_eq!(state.navigator.routes(), vec![Route::Login, Route::SignUp]);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut state = AppState::default();
        state.handle_ui_event(UiEvent::Back);
        assert_eq!(state.navigator.depth(), 1);
        assert!(state.take_effects().is_empty());
    }

    #[test]
    fn test_help_and_quit() {
        let mut state = AppState::default();
        assert!(!state.handle_ui_event(UiEvent::ToggleHelp));
        assert!(state.to_render_state().show_help);
        state.handle_ui_event(UiEvent::CloseHelp);
        assert!(!state.show_help);
        assert!(state.handle_ui_event(UiEvent::Quit));
    }
}
