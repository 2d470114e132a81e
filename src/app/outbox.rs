//! Side effects requested while handling an event.
//!
//! Screen handlers are synchronous and never touch channels. They queue
//! effects here; the app actor drains the queue after every message.

use std::time::Duration;

use crate::app::timers::Timer;
use crate::config::Delays;
use crate::messages::GatewayCall;
use crate::navigation::NavAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Call { id: u64, call: GatewayCall },
    CancelCall(u64),
    Schedule { id: u64, after: Duration, timer: Timer },
    CancelTimer(u64),
}

/// Effect queue plus the id counter shared by calls and timers
#[derive(Debug)]
pub struct Outbox {
    next_id: u64,
    effects: Vec<Effect>,
    navigation: Option<NavAction>,
    delays: Delays,
}

impl Outbox {
    pub fn new(delays: Delays) -> Self {
        Outbox {
            next_id: 1,
            effects: Vec::new(),
            navigation: None,
            delays,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn delays(&self) -> &Delays {
        &self.delays
    }

    /// Queue a gateway call and return its id
    pub fn call(&mut self, call: GatewayCall) -> u64 {
        let id = self.next_id();
        self.effects.push(Effect::Call { id, call });
        id
    }

    pub fn cancel_call(&mut self, id: u64) {
        self.effects.push(Effect::CancelCall(id));
    }

    /// Queue a timer and return its id
    pub fn schedule(&mut self, after: Duration, timer: Timer) -> u64 {
        let id = self.next_id();
        self.effects.push(Effect::Schedule { id, after, timer });
        id
    }

    pub fn cancel_timer(&mut self, id: u64) {
        self.effects.push(Effect::CancelTimer(id));
    }

    /// Request navigation; the last request in one handler wins
    pub fn navigate(&mut self, action: NavAction) {
        self.navigation = Some(action);
    }

    pub fn take_navigation(&mut self) -> Option<NavAction> {
        self.navigation.take()
    }

    pub fn drain(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}
