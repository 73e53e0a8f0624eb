//! hoaxcheck server
//!
//! Presentation layer for the hoax detector: the detection request handler,
//! the axum HTTP server with its embedded UI, and the `hoaxcheck` CLI.

pub mod cli;
pub mod config;
pub mod content;
pub mod detection;
pub mod server;
pub mod state;

pub use config::{ConfigOverrides, HoaxcheckConfig, ServerConfig};
pub use detection::{detect, DetectionOutcome, DetectionReport, EmptyInputWarning};
pub use server::{build_app, run_server};
pub use state::AppState;
