//! Profile view/edit controller and its wiring into the app.
//!
//! The controller itself is channel-free: it owns the displayed record, the
//! edit draft and the password inputs, and turns user actions into values the
//! app then dispatches to the backend.

use super::{AttendoApp, ScreenView};
use crate::backend::{CoreCmd, ScreenToken};
use attendo_core::models::user::{UserFieldUpdate, UserRecord};
use chrono::{DateTime, Local, TimeZone};
use crossbeam_channel::Sender;
use std::fmt::Display;
use tracing::{debug, warn};

pub(super) const MSG_PROFILE_SAVED: &str = "Profile updated successfully";
pub(super) const MSG_PROFILE_SAVE_FAILED: &str = "Failed to update profile";
pub(super) const MSG_PASSWORD_EMPTY: &str = "Please enter the new password in both fields";
pub(super) const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub(super) const MSG_PASSWORD_CHANGED: &str = "Password updated";
pub(super) const MSG_PASSWORD_FAILED_PREFIX: &str = "Failed to update password";

/// Profile screen mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ProfileMode {
    #[default]
    Viewing,
    Editing,
}

/// Widgets whose visibility depends on [`ProfileMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProfileField {
    NameLabel,
    EmailLabel,
    SkillLabel,
    LastEditedLabel,
    EditButton,
    NameInput,
    EmailInput,
    SkillInput,
    SaveButton,
    PasswordInput,
    ConfirmPasswordInput,
    ChangePasswordButton,
}

const VIEWING_FIELDS: &[ProfileField] = &[
    ProfileField::NameLabel,
    ProfileField::EmailLabel,
    ProfileField::SkillLabel,
    ProfileField::LastEditedLabel,
    ProfileField::EditButton,
];

const EDITING_FIELDS: &[ProfileField] = &[
    ProfileField::NameInput,
    ProfileField::EmailInput,
    ProfileField::SkillInput,
    ProfileField::SaveButton,
    ProfileField::PasswordInput,
    ProfileField::ConfirmPasswordInput,
    ProfileField::ChangePasswordButton,
];

impl ProfileMode {
    /// Widgets shown in this mode; everything else is hidden.
    pub(crate) fn visible_fields(self) -> &'static [ProfileField] {
        match self {
            ProfileMode::Viewing => VIEWING_FIELDS,
            ProfileMode::Editing => EDITING_FIELDS,
        }
    }
}

/// Candidate values for the editable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EditDraft {
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) skill: String,
}

impl EditDraft {
    fn prefill(record: Option<&UserRecord>) -> Self {
        match record {
            Some(record) => Self {
                username: record.username.clone(),
                email: record.email.clone(),
                skill: record.skill.clone(),
            },
            None => Self::default(),
        }
    }
}

/// Password-change inputs; independent of the record draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PasswordDraft {
    pub(crate) new_password: String,
    pub(crate) confirm_password: String,
}

/// Local input rejected before any backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationError {
    PasswordEmpty,
    PasswordMismatch,
}

impl ValidationError {
    pub(crate) fn message(self) -> &'static str {
        match self {
            ValidationError::PasswordEmpty => MSG_PASSWORD_EMPTY,
            ValidationError::PasswordMismatch => MSG_PASSWORD_MISMATCH,
        }
    }
}

/// Viewing/Editing state machine for one user's profile.
#[derive(Debug, Clone)]
pub(crate) struct ProfileController {
    uid: String,
    mode: ProfileMode,
    /// What the read-only labels show; includes optimistic local saves.
    shown: Option<UserRecord>,
    /// Last value pushed by the store; edit prefill source.
    latest: Option<UserRecord>,
    pub(crate) draft: EditDraft,
    pub(crate) password: PasswordDraft,
}

impl ProfileController {
    pub(crate) fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            mode: ProfileMode::Viewing,
            shown: None,
            latest: None,
            draft: EditDraft::default(),
            password: PasswordDraft::default(),
        }
    }

    pub(crate) fn uid(&self) -> &str {
        &self.uid
    }

    pub(crate) fn mode(&self) -> ProfileMode {
        self.mode
    }

    pub(crate) fn shown(&self) -> Option<&UserRecord> {
        self.shown.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn latest(&self) -> Option<&UserRecord> {
        self.latest.as_ref()
    }

    /// Apply a value pushed by the store.
    ///
    /// `None` (no record stored) leaves everything unchanged. The draft follows
    /// the store only while viewing; an in-progress edit is never overwritten.
    ///
    /// # Returns
    /// `true` when the displayed record changed.
    pub(crate) fn apply_record(&mut self, record: Option<UserRecord>) -> bool {
        let Some(record) = record else {
            return false;
        };
        if self.mode == ProfileMode::Viewing {
            self.draft = EditDraft::prefill(Some(&record));
        }
        let changed = self.shown.as_ref() != Some(&record);
        self.shown = Some(record.clone());
        self.latest = Some(record);
        changed
    }

    /// Switch to editing, prefilled from the latest stored record.
    ///
    /// Calling it again while already editing keeps the current draft.
    pub(crate) fn enter_edit(&mut self) {
        if self.mode == ProfileMode::Editing {
            return;
        }
        self.draft = EditDraft::prefill(self.latest.as_ref());
        self.mode = ProfileMode::Editing;
    }

    /// Leave editing and build the update to persist.
    ///
    /// The switch back to viewing happens here, before the write is even sent,
    /// and the labels show the submitted values straight away. Empty fields
    /// are accepted.
    ///
    /// # Returns
    /// `None` when not editing.
    pub(crate) fn submit<Tz>(&mut self, now: &DateTime<Tz>) -> Option<UserFieldUpdate>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.mode != ProfileMode::Editing {
            return None;
        }
        let update = UserFieldUpdate::profile_save(
            &self.draft.username,
            &self.draft.email,
            &self.draft.skill,
            now,
        );
        let mut optimistic = self.shown.clone().unwrap_or_default();
        update.apply_to(&mut optimistic);
        self.shown = Some(optimistic);
        self.mode = ProfileMode::Viewing;
        Some(update)
    }

    /// Validate the password inputs.
    ///
    /// # Returns
    /// The trimmed new password to send.
    ///
    /// # Errors
    /// [`ValidationError`] when either input is empty or they differ.
    pub(crate) fn password_change(&self) -> Result<String, ValidationError> {
        let new_password = self.password.new_password.trim();
        let confirm = self.password.confirm_password.trim();
        if new_password.is_empty() || confirm.is_empty() {
            return Err(ValidationError::PasswordEmpty);
        }
        if new_password != confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(new_password.to_string())
    }

    pub(crate) fn password_changed(&mut self) {
        self.password = PasswordDraft::default();
    }
}

/// Keeps the worker-side record subscription alive for one profile screen.
///
/// Dropping the lease sends exactly one `Unsubscribe`.
pub(crate) struct SubscriptionLease {
    screen: ScreenToken,
    cmd_tx: Sender<CoreCmd>,
}

impl SubscriptionLease {
    /// Ask the worker to start pushing `uid` to `screen`.
    ///
    /// # Returns
    /// `None` when the backend is gone.
    pub(crate) fn open(screen: ScreenToken, uid: &str, cmd_tx: &Sender<CoreCmd>) -> Option<Self> {
        let subscribe = CoreCmd::SubscribeUser {
            screen,
            uid: uid.to_string(),
        };
        if cmd_tx.send(subscribe).is_err() {
            warn!("backend unavailable; profile subscription not opened");
            return None;
        }
        Some(Self {
            screen,
            cmd_tx: cmd_tx.clone(),
        })
    }
}

impl Drop for SubscriptionLease {
    fn drop(&mut self) {
        if self.cmd_tx.send(CoreCmd::Unsubscribe { screen: self.screen }).is_err() {
            debug!(screen = ?self.screen, "backend gone before unsubscribe");
        }
    }
}

/// Profile screen: controller plus its subscription lease.
pub(crate) struct ProfileScreen {
    pub(crate) controller: ProfileController,
    _lease: Option<SubscriptionLease>,
}

impl ProfileScreen {
    pub(crate) fn open(screen: ScreenToken, uid: &str, cmd_tx: &Sender<CoreCmd>) -> Self {
        Self {
            controller: ProfileController::new(uid),
            _lease: SubscriptionLease::open(screen, uid, cmd_tx),
        }
    }
}

impl AttendoApp {
    fn profile_mut(&mut self) -> Option<&mut ProfileController> {
        match &mut self.screen.view {
            ScreenView::Profile(profile) => Some(&mut profile.controller),
            _ => None,
        }
    }

    pub(super) fn profile_enter_edit(&mut self) {
        if let Some(profile) = self.profile_mut() {
            profile.enter_edit();
        }
    }

    /// Submit the edit draft; the screen is back in viewing mode on return.
    pub(super) fn profile_submit(&mut self) {
        self.profile_submit_at(&Local::now());
    }

    pub(super) fn profile_submit_at<Tz>(&mut self, now: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let screen = self.screen.token;
        let Some(profile) = self.profile_mut() else {
            return;
        };
        let Some(update) = profile.submit(now) else {
            debug!("profile submit ignored outside edit mode");
            return;
        };
        let uid = profile.uid().to_string();
        self.dispatch(CoreCmd::SaveProfile {
            screen,
            uid,
            update,
        });
    }

    pub(super) fn profile_change_password(&mut self) {
        let screen = self.screen.token;
        let Some(profile) = self.profile_mut() else {
            return;
        };
        match profile.password_change() {
            Ok(new_password) => {
                self.dispatch(CoreCmd::ChangePassword {
                    screen,
                    new_password,
                });
            }
            Err(err) => self.push_toast(err.message()),
        }
    }
}
