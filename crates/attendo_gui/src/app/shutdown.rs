//! Shutdown path for `AttendoApp`.

use super::{AttendoApp, ScreenView};
use std::time::Duration;
use tracing::{info, warn};

const BACKEND_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

impl AttendoApp {
    /// Release the live screen, then stop the backend worker.
    ///
    /// Dropping the screen first queues its `Unsubscribe` ahead of `Shutdown`.
    pub(super) fn shutdown(&mut self) {
        self.screen.view = ScreenView::Loading;
        match self.backend.shutdown_and_join(BACKEND_SHUTDOWN_TIMEOUT) {
            Ok(()) => info!("backend stopped cleanly"),
            Err(err) => warn!("backend shutdown incomplete: {}", err),
        }
    }
}
