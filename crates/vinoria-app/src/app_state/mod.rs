//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the host
//! surface: window and renderer lifecycle, input, and the frame loop.

mod core;
mod dispatch;
mod event_handler;
mod frame;
mod init;
mod shutdown;
mod title;

pub use self::core::VinoriaApp;
