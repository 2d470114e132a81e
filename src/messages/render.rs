//! Render state - data structure sent from App layer to UI for rendering

use crate::app::screens::Screen;
use crate::models::{Route, Theme};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Snapshot of the screen on top of the stack
    pub screen: Screen,
    /// Mounted routes, bottom first
    pub routes: Vec<Route>,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            screen: Screen::mount(Route::Login, Theme::default()),
            routes: vec![Route::Login],
            show_help: false,
        }
    }
}
