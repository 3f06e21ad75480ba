use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::ApiError;
use crate::models::reminder::{NewReminder, Reminder, ReminderPatch};
use crate::repository::store::ReminderStore;

/// Process-wide handle on the reminder store. Every method holds the lock for
/// its whole lookup-then-write sequence, so requests on different workers
/// never interleave inside one operation.
#[derive(Clone)]
pub struct Database {
    reminders: Arc<Mutex<ReminderStore>>,
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

impl Database {
    pub fn new() -> Self {
        Database {
            reminders: Arc::new(Mutex::new(ReminderStore::new())),
        }
    }

    // The store only holds plain values, so a panic elsewhere cannot leave it
    // half-written.
    fn store(&self) -> MutexGuard<'_, ReminderStore> {
        self.reminders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_reminders(&self) -> Vec<Reminder> {
        self.store().all()
    }

    pub fn get_reminder_by_id(&self, id: &str) -> Option<Reminder> {
        self.store().find_by_id(id).cloned()
    }

    pub fn create_reminder(&self, new_reminder: NewReminder) -> Result<Reminder, ApiError> {
        let id = uuid::Uuid::new_v4().to_string();
        let reminder = new_reminder
            .into_reminder(id)
            .ok_or(ApiError::MissingFields)?;
        self.store().append(reminder.clone());
        log::debug!("created reminder {}", reminder.id);
        Ok(reminder)
    }

    pub fn update_reminder_by_id(&self, id: &str, patch: ReminderPatch) -> Option<Reminder> {
        let mut store = self.store();
        let index = store.find_index_by_id(id)?;
        let updated = patch.apply_to(store.get(index)?);
        store.replace_at(index, updated.clone());
        log::debug!("updated reminder {id}");
        Some(updated)
    }

    pub fn set_completed_by_id(&self, id: &str, completed: bool) -> Option<Reminder> {
        let patch = ReminderPatch {
            is_completed: Some(completed),
            ..Default::default()
        };
        self.update_reminder_by_id(id, patch)
    }

    pub fn delete_reminder_by_id(&self, id: &str) -> Option<Reminder> {
        let mut store = self.store();
        let index = store.find_index_by_id(id)?;
        let removed = store.remove_at(index);
        log::debug!("deleted reminder {id}");
        Some(removed)
    }

    pub fn get_reminders_by_completion(&self, completed: bool) -> Vec<Reminder> {
        self.store().filter(|reminder| reminder.is_completed == completed)
    }

    pub fn get_reminders_due_on(&self, day: NaiveDate) -> Vec<Reminder> {
        self.store().filter(|reminder| reminder.is_due_on(day))
    }
}
