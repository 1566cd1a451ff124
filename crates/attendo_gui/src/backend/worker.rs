//! Background worker thread owning every collaborator call.

mod account;
mod profile;

use crate::backend::{CoreCmd, CoreEvent, ScreenToken};
use attendo_core::{config::env_flag_enabled, CredentialService, Database, Subscription, UserStore};
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
    worker: Option<JoinHandle<()>>,
}

impl BackendHandle {
    /// Wrap caller-owned channels without a worker thread.
    ///
    /// Used by UI tests to observe emitted commands and inject events.
    pub fn from_test_channels(cmd_tx: Sender<CoreCmd>, evt_rx: Receiver<CoreEvent>) -> Self {
        Self {
            cmd_tx,
            evt_rx,
            worker: None,
        }
    }

    /// Ask the worker to stop and wait up to `timeout` for the thread to exit.
    ///
    /// # Errors
    /// Returns a message when the worker does not exit in time or panicked.
    pub fn shutdown_and_join(&mut self, timeout: Duration) -> Result<(), String> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        // A closed channel means the worker is already gone.
        let _ = self.cmd_tx.send(CoreCmd::Shutdown);

        let deadline = Instant::now() + timeout;
        while !worker.is_finished() {
            if Instant::now() >= deadline {
                return Err(format!(
                    "backend worker still running after {} ms",
                    timeout.as_millis()
                ));
            }
            thread::sleep(Duration::from_millis(5));
        }
        worker
            .join()
            .map_err(|_| "backend worker panicked".to_string())
    }
}

impl Drop for BackendHandle {
    fn drop(&mut self) {
        if self.worker.is_some() {
            let _ = self.cmd_tx.send(CoreCmd::Shutdown);
        }
    }
}

pub(super) struct WorkerState {
    pub(super) store: Arc<dyn UserStore>,
    pub(super) auth: Arc<dyn CredentialService>,
    pub(super) evt_tx: Sender<CoreEvent>,
    pub(super) subscriptions: HashMap<ScreenToken, Subscription>,
}

impl WorkerState {
    pub(super) fn emit(&self, event: CoreEvent) {
        // The UI dropping its receiver is the shutdown path; nothing to report.
        let _ = self.evt_tx.send(event);
    }
}

/// Spawn the backend worker over the embedded database.
///
/// # Errors
/// Returns an error if the worker thread cannot be spawned.
pub fn spawn_backend(db: Database) -> std::io::Result<BackendHandle> {
    spawn_backend_with_services(db.users, db.auth)
}

/// Spawn the backend worker over arbitrary collaborator implementations.
///
/// All collaborator calls stay off the UI thread; the worker replies with
/// [`CoreEvent`] values that are polled each frame.
///
/// # Errors
/// Returns an error if the worker thread cannot be spawned.
pub fn spawn_backend_with_services(
    store: Arc<dyn UserStore>,
    auth: Arc<dyn CredentialService>,
) -> std::io::Result<BackendHandle> {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    let worker = thread::Builder::new()
        .name("attendo-gui-backend".to_string())
        .spawn(move || {
            let trace_enabled = env_flag_enabled("ATTENDO_BACKEND_TRACE");
            let mut state = WorkerState {
                store,
                auth,
                evt_tx,
                subscriptions: HashMap::new(),
            };
            run_worker(&mut state, cmd_rx, trace_enabled);
        })?;

    Ok(BackendHandle {
        cmd_tx,
        evt_rx,
        worker: Some(worker),
    })
}

fn run_worker(state: &mut WorkerState, cmd_rx: Receiver<CoreCmd>, trace_enabled: bool) {
    for cmd in cmd_rx.iter() {
        let label = cmd.label();
        let started = Instant::now();
        let keep_running = dispatch(state, cmd);
        if trace_enabled {
            info!(
                target: "attendo_gui::backend_trace",
                op = label,
                elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
                subscriptions = state.subscriptions.len(),
                "backend command"
            );
        }
        if !keep_running {
            break;
        }
    }

    if !state.subscriptions.is_empty() {
        warn!(
            "releasing {} subscription(s) left open at shutdown",
            state.subscriptions.len()
        );
    }
    state.subscriptions.clear();
    info!("backend worker stopped");
}

fn dispatch(state: &mut WorkerState, cmd: CoreCmd) -> bool {
    match cmd {
        CoreCmd::LoadSession => account::handle_load_session(state),
        CoreCmd::Register {
            screen,
            username,
            email,
            password,
        } => account::handle_register(state, screen, username, email, password),
        CoreCmd::SignIn {
            screen,
            email,
            password,
        } => account::handle_sign_in(state, screen, email, password),
        CoreCmd::SignOut => account::handle_sign_out(state),
        CoreCmd::ChangePassword {
            screen,
            new_password,
        } => account::handle_change_password(state, screen, new_password),
        CoreCmd::SubscribeUser { screen, uid } => profile::handle_subscribe(state, screen, uid),
        CoreCmd::Unsubscribe { screen } => profile::handle_unsubscribe(state, screen),
        CoreCmd::SaveProfile {
            screen,
            uid,
            update,
        } => profile::handle_save_profile(state, screen, uid, update),
        CoreCmd::Shutdown => return false,
    }
    true
}
