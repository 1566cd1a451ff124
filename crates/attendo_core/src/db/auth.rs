//! Account storage and session tracking backed by redb.

use crate::db::tables::{ACCOUNTS, ACCOUNTS_BY_EMAIL, CURRENT_SESSION_KEY, SESSION};
use crate::error::AppError;
use crate::models::account::{normalize_email, validate_email, Account, SessionIdentity};
use crate::services::CredentialService;
use chrono::Utc;
use redb::{ReadableDatabase, ReadableTable};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

const DIGEST_CONTEXT: &str = "attendo account password digest v1";
const BAD_CREDENTIALS: &str = "The email or password is incorrect.";
const NO_SESSION: &str = "No user is currently signed in.";

fn password_digest(salt: &[u8; 16], password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new_derive_key(DIGEST_CONTEXT);
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize()
}

fn digest_matches(account: &Account, password: &str) -> Result<bool, AppError> {
    let stored = blake3::Hash::from_hex(account.password_digest.as_str()).map_err(|err| {
        AppError::StorageMessage(format!(
            "Corrupt password digest for account {}: {}",
            account.uid, err
        ))
    })?;
    // `blake3::Hash` equality is constant-time.
    Ok(stored == password_digest(&account.salt, password))
}

fn decode_account(bytes: &[u8]) -> Result<Account, AppError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Accessor for account tables plus the current session.
pub struct AuthDb {
    db: Arc<redb::Database>,
    min_password_len: usize,
    current: Mutex<Option<SessionIdentity>>,
}

impl AuthDb {
    /// Initialize account tables and restore the persisted session, if any.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>, min_password_len: usize) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(ACCOUNTS)?;
        write_txn.open_table(ACCOUNTS_BY_EMAIL)?;
        write_txn.open_table(SESSION)?;
        write_txn.commit()?;

        let restored = {
            let read_txn = db.begin_read()?;
            let session = read_txn.open_table(SESSION)?;
            let uid = session
                .get(CURRENT_SESSION_KEY)?
                .map(|value| value.value().to_string());
            uid
        };
        if let Some(uid) = restored.as_deref() {
            tracing::info!("restored signed-in session for {}", uid);
        }

        Ok(Self {
            db,
            min_password_len,
            current: Mutex::new(restored.map(SessionIdentity::new)),
        })
    }

    fn current_guard(&self) -> MutexGuard<'_, Option<SessionIdentity>> {
        // Poisoning cannot leave the Option partially written.
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_password_len {
            return Err(AppError::BadRequest(format!(
                "Password should be at least {} characters",
                self.min_password_len
            )));
        }
        Ok(())
    }

    fn start_session(&self, uid: &str) -> SessionIdentity {
        let session = SessionIdentity::new(uid);
        *self.current_guard() = Some(session.clone());
        session
    }

    fn persist_session(&self, uid: &str) -> Result<(), AppError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut session = write_txn.open_table(SESSION)?;
            session.insert(CURRENT_SESSION_KEY, uid)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn clear_persisted_session(&self) -> Result<(), AppError> {
        let write_txn = self.db.begin_write()?;
        {
            let mut session = write_txn.open_table(SESSION)?;
            session.remove(CURRENT_SESSION_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let read_txn = self.db.begin_read()?;
        let by_email = read_txn.open_table(ACCOUNTS_BY_EMAIL)?;
        let uid = match by_email.get(normalize_email(email).as_str())? {
            Some(value) => value.value().to_string(),
            None => return Ok(None),
        };
        let accounts = read_txn.open_table(ACCOUNTS)?;
        let account = match accounts.get(uid.as_str())? {
            Some(value) => Some(decode_account(value.value())?),
            None => {
                tracing::warn!("email index points at missing account {}", uid);
                None
            }
        };
        Ok(account)
    }
}

impl CredentialService for AuthDb {
    fn create_account(&self, email: &str, password: &str) -> Result<SessionIdentity, AppError> {
        validate_email(email)?;
        self.validate_password(password)?;

        let normalized = normalize_email(email);
        let salt: [u8; 16] = rand::random();
        let account = Account {
            uid: Uuid::new_v4().simple().to_string(),
            email: email.trim().to_string(),
            password_digest: password_digest(&salt, password).to_hex().to_string(),
            salt,
            created_at: Utc::now(),
        };
        let encoded = bincode::serialize(&account)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut by_email = write_txn.open_table(ACCOUNTS_BY_EMAIL)?;
            if by_email.get(normalized.as_str())?.is_some() {
                return Err(AppError::Conflict(
                    "The email address is already in use by another account.".to_string(),
                ));
            }
            by_email.insert(normalized.as_str(), account.uid.as_str())?;
            let mut accounts = write_txn.open_table(ACCOUNTS)?;
            accounts.insert(account.uid.as_str(), encoded.as_slice())?;
            let mut session = write_txn.open_table(SESSION)?;
            session.insert(CURRENT_SESSION_KEY, account.uid.as_str())?;
        }
        write_txn.commit()?;

        tracing::info!("created account {}", account.uid);
        Ok(self.start_session(&account.uid))
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<SessionIdentity, AppError> {
        let Some(account) = self.find_by_email(email)? else {
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
        };
        if !digest_matches(&account, password)? {
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }
        self.persist_session(&account.uid)?;
        Ok(self.start_session(&account.uid))
    }

    fn sign_out(&self) {
        let previous = self.current_guard().take();
        if let Err(err) = self.clear_persisted_session() {
            tracing::error!("failed to clear persisted session: {}", err);
        }
        if let Some(session) = previous {
            tracing::info!("signed out {}", session.uid());
        }
    }

    fn change_password(&self, new_password: &str) -> Result<(), AppError> {
        let Some(session) = self.current_session() else {
            return Err(AppError::Unauthorized(NO_SESSION.to_string()));
        };
        self.validate_password(new_password)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut accounts = write_txn.open_table(ACCOUNTS)?;
            let mut account = match accounts.get(session.uid())? {
                Some(value) => decode_account(value.value())?,
                None => return Err(AppError::Unauthorized(NO_SESSION.to_string())),
            };
            account.salt = rand::random();
            account.password_digest = password_digest(&account.salt, new_password)
                .to_hex()
                .to_string();
            let encoded = bincode::serialize(&account)?;
            accounts.insert(session.uid(), encoded.as_slice())?;
        }
        write_txn.commit()?;
        tracing::info!("password changed for {}", session.uid());
        Ok(())
    }

    fn current_session(&self) -> Option<SessionIdentity> {
        self.current_guard().clone()
    }
}
