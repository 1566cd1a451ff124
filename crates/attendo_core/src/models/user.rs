//! Profile record stored per user id, plus the partial-update payload.

use crate::constants::{JUST_CREATED, LAST_EDITED_FORMAT};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One account's profile as stored in the user table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub skill: String,
    /// Human-readable timestamp of the last profile save, or [`JUST_CREATED`].
    pub last_edited: String,
}

impl UserRecord {
    /// Build the record written once at registration.
    ///
    /// # Returns
    /// A record with an empty skill and the [`JUST_CREATED`] sentinel.
    pub fn just_created(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            skill: String::new(),
            last_edited: JUST_CREATED.to_string(),
        }
    }
}

/// Partial update for a [`UserRecord`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFieldUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub skill: Option<String>,
    pub last_edited: Option<String>,
}

impl UserFieldUpdate {
    /// Build the four-field update issued by a profile save.
    ///
    /// Text fields are trimmed; empty values are kept as empty strings.
    /// `last_edited` is stamped from `edited_at`.
    pub fn profile_save<Tz>(username: &str, email: &str, skill: &str, edited_at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            username: Some(username.trim().to_string()),
            email: Some(email.trim().to_string()),
            skill: Some(skill.trim().to_string()),
            last_edited: Some(format_last_edited(edited_at)),
        }
    }

    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.skill.is_none()
            && self.last_edited.is_none()
    }

    /// Apply the present fields onto `record`.
    pub fn apply_to(&self, record: &mut UserRecord) {
        if let Some(username) = &self.username {
            record.username.clone_from(username);
        }
        if let Some(email) = &self.email {
            record.email.clone_from(email);
        }
        if let Some(skill) = &self.skill {
            record.skill.clone_from(skill);
        }
        if let Some(last_edited) = &self.last_edited {
            record.last_edited.clone_from(last_edited);
        }
    }
}

/// Format a wall-clock instant as `yyyy-MM-dd HH:mm:ss` in its own timezone.
pub fn format_last_edited<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(LAST_EDITED_FORMAT).to_string()
}
