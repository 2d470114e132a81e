//! # SkillArc TUI
//!
//! Login, sign-up and one-time-code screens for the terminal, backed by a
//! mock authentication gateway.
//!
//! ## Features
//! - Login with email / password, remember-me and a forgot-password dialog
//! - Sign up with full name, password confirmation and terms acceptance
//! - GitHub / Google / Facebook social sign-in stubs
//! - 4-digit OTP entry with auto-advancing slots and code resend
//! - Per-screen light / dark themes
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (screen stack and state machines)
//! - Gateway Layer (Tokio runtime)

pub mod app;
pub mod assets;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod icons;
pub mod messages;
pub mod models;
pub mod navigation;
pub mod otp;
pub mod theme;
pub mod ui;
pub mod validation;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::{Config, Delays};
pub use gateway::{AuthGateway, GatewayActor, MockGateway};
pub use messages::{GatewayCall, GatewayCommand, GatewayResponse, RenderState, UiEvent};
pub use models::{ApiMessage, AuthReply, Route, SocialProvider, Theme};
