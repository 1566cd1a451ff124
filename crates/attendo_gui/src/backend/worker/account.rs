//! Credential command handlers for the GUI backend worker.

use super::WorkerState;
use crate::backend::{CoreEvent, ScreenToken};
use attendo_core::models::user::UserRecord;
use tracing::{error, info, warn};

pub(super) fn handle_load_session(state: &mut WorkerState) {
    let session = state.auth.current_session();
    state.emit(CoreEvent::SessionLoaded { session });
}

pub(super) fn handle_register(
    state: &mut WorkerState,
    screen: ScreenToken,
    username: String,
    email: String,
    password: String,
) {
    let session = match state.auth.create_account(&email, &password) {
        Ok(session) => session,
        Err(err) => {
            warn!("account creation failed: {}", err);
            state.emit(CoreEvent::RegistrationFailed {
                screen,
                message: err.to_string(),
            });
            return;
        }
    };

    let record = UserRecord::just_created(username, email);
    match state.store.create(session.uid(), &record) {
        Ok(()) => {
            info!("registered {}", session.uid());
            state.emit(CoreEvent::Registered { screen, session });
        }
        Err(err) => {
            error!("initial record write for {} failed: {}", session.uid(), err);
            state.emit(CoreEvent::RegistrationRecordFailed {
                screen,
                session,
                message: err.to_string(),
            });
        }
    }
}

pub(super) fn handle_sign_in(
    state: &mut WorkerState,
    screen: ScreenToken,
    email: String,
    password: String,
) {
    match state.auth.sign_in(&email, &password) {
        Ok(session) => state.emit(CoreEvent::SignedIn { screen, session }),
        Err(err) => {
            warn!("sign in failed: {}", err);
            state.emit(CoreEvent::SignInFailed {
                screen,
                message: err.to_string(),
            });
        }
    }
}

pub(super) fn handle_sign_out(state: &mut WorkerState) {
    state.auth.sign_out();
}

pub(super) fn handle_change_password(
    state: &mut WorkerState,
    screen: ScreenToken,
    new_password: String,
) {
    if state.auth.current_session().is_none() {
        state.emit(CoreEvent::SessionMissing { screen });
        return;
    }
    match state.auth.change_password(&new_password) {
        Ok(()) => state.emit(CoreEvent::PasswordChanged { screen }),
        Err(err) => {
            warn!("password change failed: {}", err);
            state.emit(CoreEvent::PasswordChangeFailed {
                screen,
                message: err.to_string(),
            });
        }
    }
}
