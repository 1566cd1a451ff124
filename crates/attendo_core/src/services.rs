//! Contracts for the two collaborators the app talks to: the user record store
//! and the credential service.
//!
//! The UI worker only ever holds `Arc<dyn UserStore>` / `Arc<dyn CredentialService>`,
//! so the embedded [`crate::Database`] can be swapped for fakes in tests.

use crate::error::AppError;
use crate::models::account::SessionIdentity;
use crate::models::user::{UserFieldUpdate, UserRecord};

/// Notification pushed to a user-record subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordEvent {
    /// Current value of the record; `None` when no record exists for the uid.
    Value(Option<UserRecord>),
    /// The read failed; carries the store's message.
    Failed(String),
}

/// Callback receiving [`RecordEvent`]s for one subscription.
pub type RecordSink = Box<dyn Fn(RecordEvent) + Send + Sync>;

/// Registration handle for a user-record subscription.
///
/// Dropping the handle (or calling [`Subscription::cancel`]) releases the
/// registration. Release runs at most once.
#[must_use = "dropping a subscription cancels it"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap a release action run when the subscription ends.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Cancel explicitly; equivalent to dropping the handle.
    pub fn cancel(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Keyed store of [`UserRecord`]s with push-based change notification.
pub trait UserStore: Send + Sync {
    /// Register `sink` for changes to `uid`.
    ///
    /// The current value is delivered before this returns, then again after
    /// every committed write to `uid`.
    ///
    /// # Errors
    /// Returns an error only when the registration itself cannot be made; read
    /// failures are delivered to `sink` as [`RecordEvent::Failed`].
    fn subscribe(&self, uid: &str, sink: RecordSink) -> Result<Subscription, AppError>;

    /// Point read of a record.
    ///
    /// # Errors
    /// Returns an error when storage access or decoding fails.
    fn get(&self, uid: &str) -> Result<Option<UserRecord>, AppError>;

    /// Write a full record, replacing any existing one.
    ///
    /// # Errors
    /// Returns an error when storage access or encoding fails.
    fn create(&self, uid: &str, record: &UserRecord) -> Result<(), AppError>;

    /// Apply a partial update and return the stored result.
    ///
    /// # Errors
    /// Returns [`AppError::NotFound`] when `uid` has no record.
    fn update_fields(&self, uid: &str, update: &UserFieldUpdate) -> Result<UserRecord, AppError>;
}

/// Identity provider for account creation, sign-in/out and password changes.
pub trait CredentialService: Send + Sync {
    /// Create an account and make it the current session.
    ///
    /// # Errors
    /// Returns [`AppError::BadRequest`] for malformed input and
    /// [`AppError::Conflict`] when the email is taken.
    fn create_account(&self, email: &str, password: &str) -> Result<SessionIdentity, AppError>;

    /// Sign in with existing credentials.
    ///
    /// # Errors
    /// Returns [`AppError::Unauthorized`] for unknown email or wrong password.
    fn sign_in(&self, email: &str, password: &str) -> Result<SessionIdentity, AppError>;

    /// Drop the current session. Never fails from the caller's point of view.
    fn sign_out(&self);

    /// Replace the current session's password.
    ///
    /// # Errors
    /// Returns [`AppError::Unauthorized`] when no session is active and
    /// [`AppError::BadRequest`] when the password is too weak.
    fn change_password(&self, new_password: &str) -> Result<(), AppError>;

    /// The signed-in principal, if any.
    fn current_session(&self) -> Option<SessionIdentity>;
}
