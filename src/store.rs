//! In-memory storage for log entries, keyed by user.
//!
//! The app is single-process; entries live for the lifetime of the server.
//! Each collection is guarded by its own `RwLock` so readers of one resource
//! never contend with writers of another.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::models::{ExerciseEntry, MealEntry, WeightEntry};

#[derive(Default)]
pub struct Store {
    weights: RwLock<HashMap<String, Vec<WeightEntry>>>,
    exercises: RwLock<HashMap<String, Vec<ExerciseEntry>>>,
    meals: RwLock<HashMap<String, Vec<MealEntry>>>,
    next_id: AtomicI32,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub async fn list_weights(&self, user_id: &str) -> Vec<WeightEntry> {
        self.weights
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn insert_weight(&self, entry: WeightEntry) {
        self.weights
            .write()
            .await
            .entry(entry.user_id.clone())
            .or_default()
            .push(entry);
    }

    /// Returns false when no entry with that id belongs to the user.
    pub async fn delete_weight(&self, user_id: &str, id: i32) -> bool {
        let mut weights = self.weights.write().await;
        match weights.get_mut(user_id) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| e.id != id);
                entries.len() < before
            }
            None => false,
        }
    }

    pub async fn list_exercises(&self, user_id: &str) -> Vec<ExerciseEntry> {
        self.exercises
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn insert_exercise(&self, entry: ExerciseEntry) {
        self.exercises
            .write()
            .await
            .entry(entry.user_id.clone())
            .or_default()
            .push(entry);
    }

    pub async fn delete_exercise(&self, user_id: &str, id: i32) -> bool {
        let mut exercises = self.exercises.write().await;
        match exercises.get_mut(user_id) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| e.id != id);
                entries.len() < before
            }
            None => false,
        }
    }

    pub async fn list_meals(&self, user_id: &str) -> Vec<MealEntry> {
        self.meals
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn insert_meal(&self, entry: MealEntry) {
        self.meals
            .write()
            .await
            .entry(entry.user_id.clone())
            .or_default()
            .push(entry);
    }

    pub async fn delete_meal(&self, user_id: &str, id: i32) -> bool {
        let mut meals = self.meals.write().await;
        match meals.get_mut(user_id) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| e.id != id);
                entries.len() < before
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn weight(id: i32, user_id: &str) -> WeightEntry {
        WeightEntry {
            id,
            user_id: user_id.to_string(),
            weight_kg: 80.5,
            recorded_on: NaiveDate::from_ymd_opt(2026, 8, 25).unwrap(),
            note: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn ids_are_unique_and_increasing() {
        let store = Store::new();
        let a = store.next_id();
        let b = store.next_id();
        assert!(b > a);
    }

    #[tokio::test]
    async fn entries_are_scoped_per_user() {
        let store = Store::new();
        store.insert_weight(weight(1, "alice")).await;
        store.insert_weight(weight(2, "bob")).await;

        assert_eq!(store.list_weights("alice").await.len(), 1);
        assert_eq!(store.list_weights("bob").await.len(), 1);
        assert!(store.list_weights("carol").await.is_empty());
    }

    #[tokio::test]
    async fn delete_only_removes_own_entries() {
        let store = Store::new();
        store.insert_weight(weight(1, "alice")).await;

        assert!(!store.delete_weight("bob", 1).await);
        assert!(store.delete_weight("alice", 1).await);
        assert!(!store.delete_weight("alice", 1).await);
    }
}
