//! App actor - message loop processing UI events, gateway responses and timers

use tokio::sync::mpsc;

use crate::app::outbox::Effect;
use crate::app::state::AppState;
use crate::app::timers::{Scheduler, TimerFired};
use crate::config::Delays;
use crate::messages::{GatewayCommand, GatewayResponse, RenderState, UiEvent};
use crate::models::Theme;

/// App actor that owns the state and executes the effects it queues
pub struct AppActor {
    state: AppState,
    scheduler: Scheduler,
    timer_rx: mpsc::UnboundedReceiver<TimerFired>,
    gateway_tx: mpsc::UnboundedSender<GatewayCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        theme: Theme,
        delays: Delays,
        gateway_tx: mpsc::UnboundedSender<GatewayCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        AppActor {
            state: AppState::new(theme, delays),
            scheduler: Scheduler::new(timer_tx),
            timer_rx,
            gateway_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut gateway_rx: mpsc::UnboundedReceiver<GatewayResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.state.handle_ui_event(event) {
                        break;
                    }
                }
                Some(response) = gateway_rx.recv() => {
                    self.state.handle_response(response);
                }
                Some(fired) = self.timer_rx.recv() => {
                    // A cancel can race the timer task; only deliver live timers
                    if self.scheduler.complete(fired.id) {
                        self.state.handle_timer(fired);
                    }
                }
                else => break,
            }

            self.execute_effects();
            let _ = self.render_tx.send(self.state.to_render_state());
        }

        tracing::info!("App actor shutting down");
        self.state.teardown_all();
        self.execute_effects();
        self.scheduler.cancel_all();
        let _ = self.gateway_tx.send(GatewayCommand::Shutdown);
    }

    fn execute_effects(&mut self) {
        for effect in self.state.take_effects() {
            match effect {
                Effect::Call { id, call } => {
                    let _ = self.gateway_tx.send(GatewayCommand::Execute { id, call });
                }
                Effect::CancelCall(id) => {
                    let _ = self.gateway_tx.send(GatewayCommand::Cancel(id));
                }
                Effect::Schedule { id, after, timer } => self.scheduler.schedule(id, after, timer),
                Effect::CancelTimer(id) => {
                    self.scheduler.cancel(id);
                }
            }
        }
    }
}
