//! SkillArc TUI - Actor-based authentication screens
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - screen stack and state machines processing events
//! - Gateway Layer (Tokio) - async mock authentication calls

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use skillarc::app::AppActor;
use skillarc::assets::Assets;
use skillarc::config::Config;
use skillarc::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use skillarc::gateway::{GatewayActor, MockGateway};
use skillarc::icons::Icons;
use skillarc::messages::ui_events::key_to_ui_event;
use skillarc::messages::{GatewayCommand, GatewayResponse, RenderState, UiEvent};
use skillarc::ui::{self, Resources};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = Config::default_path();
    let config = Config::load(&config_path)?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(config.log_dir(), LOG_FILE_NAME);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!(app = APP_NAME, version = APP_VERSION, config = ?config_path, "Starting");

    let resources = Resources {
        icons: Icons::with_icon_set(config.icons),
        assets: Assets::load(config.illustrations_dir.as_deref()),
    };

    // Terminal setup
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (gw_cmd_tx, gw_cmd_rx) = mpsc::unbounded_channel::<GatewayCommand>();
    let (gw_resp_tx, gw_resp_rx) = mpsc::unbounded_channel::<GatewayResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn gateway actor
    let gateway = Arc::new(MockGateway::new(config.delays.clone()));
    let gateway_actor = GatewayActor::new(gateway, gw_resp_tx);
    tokio::spawn(gateway_actor.run(gw_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(config.theme, config.delays.clone(), gw_cmd_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx, gw_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx, &resources).await?;

    // Let the app actor cancel outstanding calls before the runtime stops
    let _ = app_handle.await;
    tracing::info!("Exiting");

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
    resources: &Resources,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| ui::draw(f, &current_state, resources))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let event = match event::read()? {
                Event::Key(key) => key_to_ui_event(key, current_state.show_help),
                Event::Paste(text) => Some(UiEvent::Paste(text)),
                _ => None,
            };
            if let Some(event) = event {
                if matches!(event, UiEvent::Quit) {
                    let _ = ui_tx.send(event);
                    break;
                }
                let _ = ui_tx.send(event);
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }

        // Yield so the actors make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
