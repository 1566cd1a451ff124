//! Storage tests for the embedded user store and credential service.

use super::*;
use crate::models::user::{UserFieldUpdate, UserRecord};
use crate::services::{CredentialService, RecordEvent, UserStore};
use crate::test_support::{db_dir, setup_temp_db};
use std::sync::{Arc, Mutex};


/// Collects every event delivered to a subscription sink.
#[derive(Default)]
struct EventLog {
    events: Arc<Mutex<Vec<RecordEvent>>>,
}

impl EventLog {
    fn sink(&self) -> crate::services::RecordSink {
        let events = self.events.clone();
        Box::new(move |event| events.lock().expect("event log").push(event))
    }

    fn snapshot(&self) -> Vec<RecordEvent> {
        self.events.lock().expect("event log").clone()
    }
}
