use crate::models::reminder::Reminder;

/// Ordered in-memory collection of reminders. Insertion order is listing
/// order; ids are not checked for uniqueness.
#[derive(Debug, Default)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, reminder: Reminder) {
        self.reminders.push(reminder);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Reminder> {
        self.reminders.iter().find(|reminder| reminder.id == id)
    }

    pub fn find_index_by_id(&self, id: &str) -> Option<usize> {
        self.reminders.iter().position(|reminder| reminder.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Reminder> {
        self.reminders.get(index)
    }

    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn replace_at(&mut self, index: usize, reminder: Reminder) {
        self.reminders[index] = reminder;
    }

    /// Panics if `index` is out of bounds, like `Vec::remove`.
    pub fn remove_at(&mut self, index: usize) -> Reminder {
        self.reminders.remove(index)
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<Reminder>
    where
        P: Fn(&Reminder) -> bool,
    {
        self.reminders
            .iter()
            .filter(|reminder| predicate(reminder))
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<Reminder> {
        self.reminders.clone()
    }
}
