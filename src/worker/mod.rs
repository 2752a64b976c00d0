//! Worker module for the polling loop
//!
//! This module provides:
//! - Poller: Main loop that polls the status API and notifies the chat
//! - LoopState: Dedup state carried across iterations
//! - WorkerConfig: Configuration for the worker

pub mod config;
pub mod poller;

pub use config::WorkerConfig;
pub use poller::{setup_signal_handler, LoopState, Poller};
