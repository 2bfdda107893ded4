use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::catalog;
use crate::model::NotificationId;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Delay,
    Arrival,
    Service,
    Info,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Visual accent the shell picks a palette from.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Urgent,
    Positive,
    Warning,
    Neutral,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative time label, e.g. "5 minutes ago".
    pub time: String,
    pub route: Option<String>,
    pub stop: Option<String>,
    pub read: bool,
    pub priority: Priority,
}

impl Notification {
    /// High priority wins over the kind.
    pub fn tone(&self) -> Tone {
        match (self.priority, self.kind) {
            (Priority::High, _) => Tone::Urgent,
            (_, NotificationKind::Arrival) => Tone::Positive,
            (_, NotificationKind::Delay) => Tone::Warning,
            _ => Tone::Neutral,
        }
    }
}

/// Ordered notification list. No mutation reorders records; missing ids are
/// silently ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationStore {
    records: Vec<Notification>,
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(catalog::notifications())
    }
}

impl NotificationStore {
    pub fn new(seed: Vec<Notification>) -> Self {
        Self { records: seed }
    }

    pub fn records(&self) -> &[Notification] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recomputed on every call.
    pub fn unread_count(&self) -> usize {
        self.records.iter().filter(|n| !n.read).count()
    }

    #[instrument(level = "debug", skip(self, id), fields(id = %id))]
    pub fn mark_read(&mut self, id: &NotificationId) {
        match self.records.iter_mut().find(|n| &n.id == id) {
            Some(record) => record.read = true,
            None => debug!("no such notification"),
        }
    }

    pub fn mark_all_read(&mut self) {
        for record in &mut self.records {
            record.read = true;
        }
    }

    #[instrument(level = "debug", skip(self, id), fields(id = %id))]
    pub fn delete(&mut self, id: &NotificationId) {
        let before = self.records.len();
        self.records.retain(|n| &n.id != id);
        if self.records.len() == before {
            debug!("no such notification");
        }
    }

    pub fn clear_all(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &NotificationStore) -> Vec<&str> {
        store.records().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn seed_has_two_unread() {
        let store = NotificationStore::default();
        assert_eq!(store.len(), 5);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn mark_read_keeps_order() {
        let mut store = NotificationStore::default();
        store.mark_read(&NotificationId::new("2"));
        assert_eq!(ids(&store), ["1", "2", "3", "4", "5"]);
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn mark_read_on_missing_id_is_noop() {
        let mut store = NotificationStore::default();
        let before = store.clone();
        store.mark_read(&NotificationId::new("404"));
        assert_eq!(store, before);
    }

    #[test]
    fn mark_all_read_zeroes_unread() {
        let mut store = NotificationStore::default();
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);

        let mut empty = NotificationStore::new(Vec::new());
        empty.mark_all_read();
        assert_eq!(empty.unread_count(), 0);
    }

    #[test]
    fn deleting_unread_record_drops_unread_count() {
        let mut store = NotificationStore::default();
        store.delete(&NotificationId::new("1"));
        assert_eq!(store.len(), 4);
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn deleting_read_record_keeps_unread_count() {
        let mut store = NotificationStore::default();
        store.delete(&NotificationId::new("4"));
        assert_eq!(store.len(), 4);
        assert_eq!(store.unread_count(), 2);
        assert_eq!(ids(&store), ["1", "2", "3", "5"]);
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut store = NotificationStore::default();
        store.delete(&NotificationId::new("nope"));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn seeded_scenario_read_then_clear() {
        let mut store = NotificationStore::default();
        assert_eq!(store.unread_count(), 2);
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);
        store.clear_all();
        assert_eq!(store.len(), 0);
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn tone_prefers_priority() {
        let store = NotificationStore::default();
        let tones: Vec<_> = store.records().iter().map(Notification::tone).collect();
        assert_eq!(
            tones,
            [Tone::Urgent, Tone::Positive, Tone::Neutral, Tone::Neutral, Tone::Urgent]
        );
    }
}
