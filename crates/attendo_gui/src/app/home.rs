//! Home screen actions.

use super::{AttendoApp, Route};
use crate::backend::CoreCmd;
use tracing::info;

impl AttendoApp {
    pub(super) fn open_profile(&mut self) {
        self.navigate(Route::Profile);
    }

    /// Drop the session locally and on the worker, then show Login.
    pub(super) fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            info!("signing out {}", session.uid());
        }
        self.dispatch(CoreCmd::SignOut);
        self.navigate(Route::Login);
    }

    pub(super) fn company_name(&self) -> &str {
        &self.company_name
    }
}
