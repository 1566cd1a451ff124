//! Protocol types for the GUI backend worker.

use attendo_core::models::{account::SessionIdentity, user::UserFieldUpdate, user::UserRecord};

/// Identity of one screen instance.
///
/// Every navigation mints a new token; events carrying a token that no longer
/// matches the live screen are dropped by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenToken(pub u64);

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum CoreCmd {
    /// Report the persisted session, if any.
    LoadSession,
    /// Create an account, then its initial user record.
    Register {
        screen: ScreenToken,
        username: String,
        email: String,
        password: String,
    },
    /// Sign in with existing credentials.
    SignIn {
        screen: ScreenToken,
        email: String,
        password: String,
    },
    /// Drop the current session. No reply.
    SignOut,
    /// Start pushing `uid`'s record to `screen` until [`CoreCmd::Unsubscribe`].
    SubscribeUser { screen: ScreenToken, uid: String },
    /// Release the subscription held for `screen`.
    Unsubscribe { screen: ScreenToken },
    /// Partial update of `uid`'s record.
    SaveProfile {
        screen: ScreenToken,
        uid: String,
        update: UserFieldUpdate,
    },
    /// Change the current session's password.
    ChangePassword {
        screen: ScreenToken,
        new_password: String,
    },
    /// Release every subscription and exit the worker loop.
    Shutdown,
}

impl CoreCmd {
    /// Short operation label used in trace logs.
    pub fn label(&self) -> &'static str {
        match self {
            CoreCmd::LoadSession => "load_session",
            CoreCmd::Register { .. } => "register",
            CoreCmd::SignIn { .. } => "sign_in",
            CoreCmd::SignOut => "sign_out",
            CoreCmd::SubscribeUser { .. } => "subscribe_user",
            CoreCmd::Unsubscribe { .. } => "unsubscribe",
            CoreCmd::SaveProfile { .. } => "save_profile",
            CoreCmd::ChangePassword { .. } => "change_password",
            CoreCmd::Shutdown => "shutdown",
        }
    }
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    /// Reply to [`CoreCmd::LoadSession`].
    SessionLoaded { session: Option<SessionIdentity> },
    /// Account and initial record were both created.
    Registered {
        screen: ScreenToken,
        session: SessionIdentity,
    },
    /// Account creation failed; nothing was written.
    RegistrationFailed { screen: ScreenToken, message: String },
    /// The account exists and is signed in, but its record could not be written.
    RegistrationRecordFailed {
        screen: ScreenToken,
        session: SessionIdentity,
        message: String,
    },
    SignedIn {
        screen: ScreenToken,
        session: SessionIdentity,
    },
    SignInFailed { screen: ScreenToken, message: String },
    /// Pushed record value; `None` when the uid has no record.
    UserRecordChanged {
        screen: ScreenToken,
        record: Option<UserRecord>,
    },
    /// The subscription delivered a read error instead of a value.
    UserRecordFailed { screen: ScreenToken, message: String },
    ProfileSaved {
        screen: ScreenToken,
        record: UserRecord,
    },
    ProfileSaveFailed { screen: ScreenToken, message: String },
    PasswordChanged { screen: ScreenToken },
    PasswordChangeFailed { screen: ScreenToken, message: String },
    /// A session-scoped command found no signed-in user.
    SessionMissing { screen: ScreenToken },
}

impl CoreEvent {
    /// Screen the event is addressed to, or `None` for app-level events.
    pub fn screen(&self) -> Option<ScreenToken> {
        match self {
            CoreEvent::SessionLoaded { .. } => None,
            CoreEvent::Registered { screen, .. }
            | CoreEvent::RegistrationFailed { screen, .. }
            | CoreEvent::RegistrationRecordFailed { screen, .. }
            | CoreEvent::SignedIn { screen, .. }
            | CoreEvent::SignInFailed { screen, .. }
            | CoreEvent::UserRecordChanged { screen, .. }
            | CoreEvent::UserRecordFailed { screen, .. }
            | CoreEvent::ProfileSaved { screen, .. }
            | CoreEvent::ProfileSaveFailed { screen, .. }
            | CoreEvent::PasswordChanged { screen }
            | CoreEvent::PasswordChangeFailed { screen, .. }
            | CoreEvent::SessionMissing { screen } => Some(*screen),
        }
    }
}
