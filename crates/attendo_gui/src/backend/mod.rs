//! Backend worker wiring for the desktop app.
//!
//! This module exposes the command/event protocol plus the worker spawn helpers
//! used by the egui UI thread.

mod protocol;
mod worker;

pub use protocol::{CoreCmd, CoreEvent, ScreenToken};
pub use worker::{spawn_backend, spawn_backend_with_services, BackendHandle};
