//! App layer - central state management and effect dispatch
//!
//! The App actor receives UI events, gateway responses and fired timers,
//! updates the screen stack, and emits gateway commands and render state.

pub mod actor;
pub mod focus;
pub mod outbox;
pub mod screens;
pub mod state;
pub mod text_field;
pub mod timers;

pub use actor::AppActor;
pub use state::AppState;
