//! User record subscription and profile save handlers.

use super::WorkerState;
use crate::backend::{CoreEvent, ScreenToken};
use attendo_core::models::user::UserFieldUpdate;
use attendo_core::services::RecordEvent;
use tracing::{debug, error};

const PERMISSION_DENIED: &str = "Permission denied";

/// Outcome of checking that `uid` belongs to the signed-in user.
enum Access {
    Granted,
    NoSession,
    Denied,
}

fn check_access(state: &WorkerState, uid: &str) -> Access {
    match state.auth.current_session() {
        None => Access::NoSession,
        Some(session) if session.uid() == uid => Access::Granted,
        Some(_) => Access::Denied,
    }
}

pub(super) fn handle_subscribe(state: &mut WorkerState, screen: ScreenToken, uid: String) {
    match check_access(state, &uid) {
        Access::Granted => {}
        Access::NoSession => {
            state.emit(CoreEvent::SessionMissing { screen });
            return;
        }
        Access::Denied => {
            state.emit(CoreEvent::UserRecordFailed {
                screen,
                message: PERMISSION_DENIED.to_string(),
            });
            return;
        }
    }

    // One live subscription per screen.
    if state.subscriptions.remove(&screen).is_some() {
        debug!(?screen, "replaced existing subscription");
    }

    let evt_tx = state.evt_tx.clone();
    let sink = Box::new(move |event: RecordEvent| {
        let event = match event {
            RecordEvent::Value(record) => CoreEvent::UserRecordChanged { screen, record },
            RecordEvent::Failed(message) => CoreEvent::UserRecordFailed { screen, message },
        };
        let _ = evt_tx.send(event);
    });
    match state.store.subscribe(&uid, sink) {
        Ok(subscription) => {
            debug!(?screen, uid = %uid, "user record subscription opened");
            state.subscriptions.insert(screen, subscription);
        }
        Err(err) => {
            error!("subscribe to {} failed: {}", uid, err);
            state.emit(CoreEvent::UserRecordFailed {
                screen,
                message: err.to_string(),
            });
        }
    }
}

pub(super) fn handle_unsubscribe(state: &mut WorkerState, screen: ScreenToken) {
    match state.subscriptions.remove(&screen) {
        Some(subscription) => {
            subscription.cancel();
            debug!(?screen, "user record subscription closed");
        }
        None => debug!(?screen, "unsubscribe for screen without subscription"),
    }
}

pub(super) fn handle_save_profile(
    state: &mut WorkerState,
    screen: ScreenToken,
    uid: String,
    update: UserFieldUpdate,
) {
    match check_access(state, &uid) {
        Access::Granted => {}
        Access::NoSession => {
            state.emit(CoreEvent::SessionMissing { screen });
            return;
        }
        Access::Denied => {
            state.emit(CoreEvent::ProfileSaveFailed {
                screen,
                message: PERMISSION_DENIED.to_string(),
            });
            return;
        }
    }

    match state.store.update_fields(&uid, &update) {
        Ok(record) => state.emit(CoreEvent::ProfileSaved { screen, record }),
        Err(err) => {
            error!("profile save for {} failed: {}", uid, err);
            state.emit(CoreEvent::ProfileSaveFailed {
                screen,
                message: err.to_string(),
            });
        }
    }
}
