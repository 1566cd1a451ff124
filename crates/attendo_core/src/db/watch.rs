//! In-process fan-out of user-record changes to subscribers.

use crate::error::AppError;
use crate::services::{RecordEvent, RecordSink, Subscription};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

struct Watcher {
    uid: String,
    sink: RecordSink,
}

#[derive(Default)]
struct WatchState {
    next_id: u64,
    watchers: HashMap<u64, Watcher>,
}

/// Registry of record subscribers keyed by subscription id.
///
/// Initial delivery runs under the registry lock, and writers commit and
/// publish under it through [`WatchHub::commit_and_publish`]. Subscribers
/// therefore see values in commit order, even with concurrent writers. Sinks
/// must not call back into the hub.
#[derive(Default)]
pub(crate) struct WatchHub {
    state: Mutex<WatchState>,
}

impl WatchHub {
    fn state(&self) -> Result<MutexGuard<'_, WatchState>, AppError> {
        self.state
            .lock()
            .map_err(|_| AppError::StorageMessage("Watch registry lock poisoned".to_string()))
    }

    /// Register `sink` for `uid`, delivering `read_current()` as the first event.
    pub(crate) fn subscribe(
        hub: &Arc<Self>,
        uid: &str,
        sink: RecordSink,
        read_current: impl FnOnce() -> RecordEvent,
    ) -> Result<Subscription, AppError> {
        let mut state = hub.state()?;
        sink(read_current());
        let id = state.next_id;
        state.next_id = state.next_id.wrapping_add(1);
        state.watchers.insert(
            id,
            Watcher {
                uid: uid.to_string(),
                sink,
            },
        );
        drop(state);

        let weak: Weak<Self> = Arc::downgrade(hub);
        let uid = uid.to_string();
        Ok(Subscription::new(move || {
            let Some(hub) = weak.upgrade() else {
                return;
            };
            let released = hub.state();
            match released {
                Ok(mut state) => {
                    state.watchers.remove(&id);
                    tracing::debug!(uid = %uid, id, "user record subscription released");
                }
                Err(err) => {
                    tracing::error!("failed to release subscription {} for {}: {}", id, uid, err);
                }
            };
        }))
    }

    /// Commit `write_txn`, then deliver `event` to every subscriber of `uid`.
    ///
    /// The registry lock is taken before the commit and held through delivery,
    /// so two writers publish in the order they committed.
    ///
    /// # Errors
    /// Returns an error when the registry lock is poisoned or the commit fails;
    /// nothing is delivered in either case.
    pub(crate) fn commit_and_publish(
        &self,
        write_txn: redb::WriteTransaction,
        uid: &str,
        event: RecordEvent,
    ) -> Result<(), AppError> {
        let state = self.state()?;
        write_txn.commit()?;
        for watcher in state.watchers.values().filter(|w| w.uid == uid) {
            (watcher.sink)(event.clone());
        }
        Ok(())
    }

    /// Number of live subscriptions across all uids.
    pub(crate) fn len(&self) -> usize {
        self.state().map(|state| state.watchers.len()).unwrap_or(0)
    }
}
