//! Process bootstrap: configuration, logging, signals, and the server loop.

pub mod config;
pub mod logging;
pub mod server;
pub mod signals;

pub use config::{AppConfig, CliArgs};
pub use server::run_server;
