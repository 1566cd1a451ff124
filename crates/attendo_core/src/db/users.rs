//! User record storage backed by redb, with change fan-out.

use super::watch::WatchHub;
use crate::db::tables::USERS;
use crate::error::AppError;
use crate::models::user::{UserFieldUpdate, UserRecord};
use crate::services::{RecordEvent, RecordSink, Subscription, UserStore};
use redb::{ReadableDatabase, ReadableTable};
use std::sync::Arc;

/// Accessor for the `users` table.
pub struct UserDb {
    db: Arc<redb::Database>,
    hub: Arc<WatchHub>,
}

fn decode_record(bytes: &[u8]) -> Result<UserRecord, AppError> {
    Ok(bincode::deserialize(bytes)?)
}

impl UserDb {
    /// Initialize the `users` table if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(USERS)?;
        write_txn.commit()?;
        Ok(Self {
            db,
            hub: Arc::new(WatchHub::default()),
        })
    }

    /// Number of live record subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.hub.len()
    }

    fn read(&self, uid: &str) -> Result<Option<UserRecord>, AppError> {
        let read_txn = self.db.begin_read()?;
        let users = read_txn.open_table(USERS)?;
        match users.get(uid)? {
            Some(value) => Ok(Some(decode_record(value.value())?)),
            None => Ok(None),
        }
    }
}

impl UserStore for UserDb {
    fn subscribe(&self, uid: &str, sink: RecordSink) -> Result<Subscription, AppError> {
        WatchHub::subscribe(&self.hub, uid, sink, || match self.read(uid) {
            Ok(record) => RecordEvent::Value(record),
            Err(err) => {
                tracing::warn!("initial read for {} failed: {}", uid, err);
                RecordEvent::Failed(err.to_string())
            }
        })
    }

    fn get(&self, uid: &str) -> Result<Option<UserRecord>, AppError> {
        self.read(uid)
    }

    fn create(&self, uid: &str, record: &UserRecord) -> Result<(), AppError> {
        let encoded = bincode::serialize(record)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut users = write_txn.open_table(USERS)?;
            users.insert(uid, encoded.as_slice())?;
        }
        self.hub
            .commit_and_publish(write_txn, uid, RecordEvent::Value(Some(record.clone())))
    }

    fn update_fields(&self, uid: &str, update: &UserFieldUpdate) -> Result<UserRecord, AppError> {
        if update.is_empty() {
            // Nothing to write; still report a missing record.
            return self.read(uid)?.ok_or(AppError::NotFound);
        }
        let write_txn = self.db.begin_write()?;
        let record = {
            let mut users = write_txn.open_table(USERS)?;
            let mut record = match users.get(uid)? {
                Some(value) => decode_record(value.value())?,
                None => return Err(AppError::NotFound),
            };
            update.apply_to(&mut record);
            let encoded = bincode::serialize(&record)?;
            users.insert(uid, encoded.as_slice())?;
            record
        };
        self.hub
            .commit_and_publish(write_txn, uid, RecordEvent::Value(Some(record.clone())))?;
        Ok(record)
    }
}
