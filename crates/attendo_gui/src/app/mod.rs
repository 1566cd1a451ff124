//! egui application shell: screen routing, event application and feedback.

mod auth_forms;
mod home;
mod profile;
mod shutdown;
mod state_feedback;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle, CoreCmd, CoreEvent, ScreenToken};
use attendo_core::models::account::SessionIdentity;
use attendo_core::{Config, Database};
use auth_forms::{LoginForm, RegisterForm};
use eframe::egui;
use profile::ProfileScreen;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
/// Initial window size; sized for a single form column.
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [480.0, 640.0];
/// Smallest window that still fits the profile editor.
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [360.0, 480.0];

const MSG_LOAD_FAILED_PREFIX: &str = "Failed to load user data";
const MSG_SIGN_IN_REQUIRED: &str = "Please log in to continue";

/// Transient notice shown in the bottom-centre overlay.
#[derive(Debug, Clone)]
struct ToastMessage {
    text: String,
    expires_at: Instant,
}

/// Destinations reachable from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Register,
    Login,
    Home,
    Profile,
}

/// Per-screen state. Dropping a variant releases whatever it holds.
pub(crate) enum ScreenView {
    Loading,
    Register(RegisterForm),
    Login(LoginForm),
    Home,
    Profile(ProfileScreen),
}

impl ScreenView {
    fn route(&self) -> Option<Route> {
        match self {
            ScreenView::Loading => None,
            ScreenView::Register(_) => Some(Route::Register),
            ScreenView::Login(_) => Some(Route::Login),
            ScreenView::Home => Some(Route::Home),
            ScreenView::Profile(_) => Some(Route::Profile),
        }
    }
}

/// The live screen and the token its backend events must carry.
pub(crate) struct ActiveScreen {
    token: ScreenToken,
    view: ScreenView,
}

/// Native egui application.
///
/// Owns UI state only; every collaborator call goes through the backend worker
/// so `update` never blocks.
pub(crate) struct AttendoApp {
    backend: BackendHandle,
    company_name: String,
    session: Option<SessionIdentity>,
    screen: ActiveScreen,
    next_token: u64,
    toasts: VecDeque<ToastMessage>,
    style_applied: bool,
}

impl AttendoApp {
    /// Open the database from the environment and start the backend worker.
    ///
    /// # Errors
    /// Returns an error when the database cannot be opened or the worker
    /// thread cannot be spawned.
    pub(crate) fn new() -> Result<Self, attendo_core::AppError> {
        let config = Config::from_env();
        let db = Database::from_config(&config)?;
        info!("opened database at {}", config.db_path);
        let backend = spawn_backend(db).map_err(|err| {
            attendo_core::AppError::StorageMessage(format!(
                "Failed to start backend worker: {}",
                err
            ))
        })?;
        Ok(Self::with_backend(backend, config.company_name))
    }

    /// Build the app around an existing backend and request the session.
    pub(crate) fn with_backend(backend: BackendHandle, company_name: String) -> Self {
        let mut app = Self {
            backend,
            company_name,
            session: None,
            screen: ActiveScreen {
                token: ScreenToken(0),
                view: ScreenView::Loading,
            },
            next_token: 1,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            style_applied: false,
        };
        app.dispatch(CoreCmd::LoadSession);
        app
    }

    pub(crate) fn route(&self) -> Option<Route> {
        self.screen.view.route()
    }

    fn issue_token(&mut self) -> ScreenToken {
        let token = ScreenToken(self.next_token);
        self.next_token += 1;
        token
    }

    /// Send a command to the worker, reporting a dead backend as a notice.
    ///
    /// # Returns
    /// `true` when the command was queued.
    fn dispatch(&mut self, cmd: CoreCmd) -> bool {
        let label = cmd.label();
        if self.backend.cmd_tx.send(cmd).is_err() {
            warn!(op = label, "backend channel closed; command dropped");
            self.push_toast("Service unavailable; please restart the app");
            return false;
        }
        true
    }

    /// Replace the live screen.
    ///
    /// The previous screen is dropped first, so its subscription lease sends
    /// `Unsubscribe` before the next screen subscribes.
    pub(crate) fn navigate(&mut self, route: Route) {
        self.screen.view = ScreenView::Loading;
        let token = self.issue_token();
        let view = match route {
            Route::Register => ScreenView::Register(RegisterForm::default()),
            Route::Login => ScreenView::Login(LoginForm::default()),
            Route::Home => ScreenView::Home,
            Route::Profile => match self.session.as_ref() {
                Some(session) => {
                    ScreenView::Profile(ProfileScreen::open(token, session.uid(), &self.backend.cmd_tx))
                }
                None => {
                    self.redirect_to_login();
                    return;
                }
            },
        };
        debug!(?route, screen = ?token, "navigate");
        self.screen = ActiveScreen { token, view };
    }

    /// Treat a missing session as fatal to the current screen.
    fn redirect_to_login(&mut self) {
        self.session = None;
        self.push_toast(MSG_SIGN_IN_REQUIRED);
        self.navigate(Route::Login);
    }

    /// Apply one backend event on the UI thread.
    ///
    /// Screen-scoped events whose token does not match the live screen are
    /// dropped: their screen no longer exists.
    pub(crate) fn apply_event(&mut self, event: CoreEvent) {
        if let Some(token) = event.screen() {
            if token != self.screen.token {
                debug!(screen = ?token, live = ?self.screen.token, "dropping event for closed screen");
                return;
            }
        }

        match event {
            CoreEvent::SessionLoaded { session } => {
                let signed_in = session.is_some();
                self.session = session;
                if self.route().is_none() {
                    self.navigate(if signed_in { Route::Home } else { Route::Register });
                }
            }
            CoreEvent::Registered { session, .. } => {
                self.session = Some(session);
                self.push_toast(auth_forms::MSG_REGISTERED);
                self.navigate(Route::Home);
            }
            CoreEvent::RegistrationFailed { message, .. } => {
                self.finish_register_attempt();
                self.push_toast(format!("{}: {}", auth_forms::MSG_REGISTER_FAILED_PREFIX, message));
            }
            CoreEvent::RegistrationRecordFailed {
                session, message, ..
            } => {
                warn!("account {} created without a user record: {}", session.uid(), message);
                self.session = Some(session);
                self.finish_register_attempt();
                self.push_toast(auth_forms::MSG_REGISTER_SAVE_FAILED);
            }
            CoreEvent::SignedIn { session, .. } => {
                self.session = Some(session);
                self.navigate(Route::Home);
            }
            CoreEvent::SignInFailed { message, .. } => {
                self.finish_login_attempt();
                self.push_toast(format!("{}: {}", auth_forms::MSG_LOGIN_FAILED_PREFIX, message));
            }
            CoreEvent::UserRecordChanged { record, .. } => {
                if let ScreenView::Profile(profile) = &mut self.screen.view {
                    if profile.controller.apply_record(record) {
                        debug!(uid = profile.controller.uid(), "profile display refreshed");
                    }
                }
            }
            CoreEvent::UserRecordFailed { message, .. } => {
                self.push_toast(format!("{}: {}", MSG_LOAD_FAILED_PREFIX, message));
            }
            CoreEvent::ProfileSaved { .. } => {
                self.push_toast(profile::MSG_PROFILE_SAVED);
            }
            CoreEvent::ProfileSaveFailed { message, .. } => {
                warn!("profile save failed: {}", message);
                self.push_toast(profile::MSG_PROFILE_SAVE_FAILED);
            }
            CoreEvent::PasswordChanged { .. } => {
                if let ScreenView::Profile(profile) = &mut self.screen.view {
                    profile.controller.password_changed();
                }
                self.push_toast(profile::MSG_PASSWORD_CHANGED);
            }
            CoreEvent::PasswordChangeFailed { message, .. } => {
                self.push_toast(format!("{}: {}", profile::MSG_PASSWORD_FAILED_PREFIX, message));
            }
            CoreEvent::SessionMissing { .. } => self.redirect_to_login(),
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
    }
}

impl eframe::App for AttendoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        self.expire_toasts(Instant::now());
        self.drain_events();

        match self.route() {
            None => self.render_loading(ctx),
            Some(Route::Register) => self.render_register_panel(ctx),
            Some(Route::Login) => self.render_login_panel(ctx),
            Some(Route::Home) => self.render_home_panel(ctx),
            Some(Route::Profile) => self.render_profile_panel(ctx),
        }
        self.render_toasts(ctx);

        // Backend events arrive without input; keep polling while idle.
        ctx.request_repaint_after(Duration::from_millis(100));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests;
