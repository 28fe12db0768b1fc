use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::portfolio::{KeyValueStore, StoreError};

/// In-memory KeyValueStore for testing and ephemeral fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PortfolioData, Project, Skill, ThemeColors, WorkExperience};
    use crate::portfolio::{PortfolioStore, STORAGE_KEY};

    /// Backend whose writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Option<String> {
            None
        }

        async fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Backend("storage unavailable".into()))
        }
    }

    #[tokio::test]
    async fn starts_with_defaults_when_nothing_is_persisted() {
        let store = PortfolioStore::load(MemoryStore::new()).await;
        assert_eq!(store.data().personal_info.name, "John Doe");
        assert_eq!(store.data().skills.len(), 4);
        assert_eq!(store.data().projects.len(), 2);
        assert_eq!(store.data().work_experience.len(), 2);
    }

    #[tokio::test]
    async fn falls_back_to_defaults_on_corrupt_payload() {
        let backend = MemoryStore::new();
        backend.set(STORAGE_KEY, "{not json".to_string()).await.unwrap();

        let store = PortfolioStore::load(backend).await;
        assert_eq!(store.data().personal_info.name, "John Doe");
    }

    #[tokio::test]
    async fn add_skill_assigns_distinct_ids_within_the_same_instant() {
        let mut store = PortfolioStore::new(MemoryStore::new());
        let a = store.add_skill("Go".into(), 80).await;
        let b = store.add_skill("Rust".into(), 90).await;
        let c = store.add_skill("Zig".into(), 50).await;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn add_skill_clamps_proficiency() {
        let mut store = PortfolioStore::new(MemoryStore::new());
        let id = store.add_skill("Go".into(), 150).await;
        let skill = store.data().skills.iter().find(|s| s.id == id).unwrap();
        assert_eq!(skill.proficiency, 100);
    }

    #[tokio::test]
    async fn update_skill_replaces_matching_entry_and_clamps() {
        let mut store = PortfolioStore::new(MemoryStore::new());
        let id = store.add_skill("Go".into(), 60).await;
        store
            .update_skill(Skill { id: id.clone(), name: "Golang".into(), proficiency: 255 })
            .await;

        let skill = store.data().skills.iter().find(|s| s.id == id).unwrap();
        assert_eq!(skill.name, "Golang");
        assert_eq!(skill.proficiency, 100);
    }

    #[tokio::test]
    async fn update_with_unknown_id_is_a_noop() {
        let mut store = PortfolioStore::new(MemoryStore::new());
        let before = store.data().clone();
        store
            .update_skill(Skill { id: "nope".into(), name: "X".into(), proficiency: 1 })
            .await;
        store.update_project(Project { id: "nope".into(), ..Default::default() }).await;
        store
            .update_work_experience(WorkExperience { id: "nope".into(), ..Default::default() })
            .await;
        assert_eq!(store.data(), &before);
    }

    #[tokio::test]
    async fn remove_with_unknown_id_leaves_collections_unchanged() {
        let mut store = PortfolioStore::new(MemoryStore::new());
        let before = store.data().clone();
        store.remove_skill("nope").await;
        store.remove_project("nope").await;
        store.remove_work_experience("nope").await;
        assert_eq!(store.data(), &before);
    }

    #[tokio::test]
    async fn crud_sequence_keeps_one_entry_per_surviving_id() {
        let mut store = PortfolioStore::new(MemoryStore::new());
        let a = store.add_skill("Go".into(), 70).await;
        let b = store.add_skill("Rust".into(), 80).await;
        store
            .update_skill(Skill { id: a.clone(), name: "Go".into(), proficiency: 95 })
            .await;
        store.remove_skill(&b).await;

        let ids: Vec<_> = store.data().skills.iter().map(|s| s.id.clone()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());

        let survivor = store.data().skills.iter().find(|s| s.id == a).unwrap();
        assert_eq!(survivor.proficiency, 95);
        assert!(!store.data().skills.iter().any(|s| s.id == b));
    }

    #[tokio::test]
    async fn projects_preserve_insertion_order() {
        let mut store = PortfolioStore::new(MemoryStore::new());
        let first = store
            .add_project(Project { title: "One".into(), ..Default::default() })
            .await;
        let second = store
            .add_project(Project { title: "Two".into(), ..Default::default() })
            .await;

        let projects = &store.data().projects;
        let pos_first = projects.iter().position(|p| p.id == first).unwrap();
        let pos_second = projects.iter().position(|p| p.id == second).unwrap();
        assert!(pos_first < pos_second);
    }

    #[tokio::test]
    async fn mutations_write_through_to_the_backend() {
        let backend = MemoryStore::new();
        let mut store = PortfolioStore::new(backend.clone());
        store.add_skill("Go".into(), 70).await;

        let raw = backend.get(STORAGE_KEY).await.expect("persisted payload");
        let persisted: PortfolioData = serde_json::from_str(&raw).unwrap();
        assert!(persisted.skills.iter().any(|s| s.name == "Go"));

        store.update_theme(ThemeColors { primary: "#10b981".into(), ..Default::default() }).await;
        let raw = backend.get(STORAGE_KEY).await.unwrap();
        let persisted: PortfolioData = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.theme.primary, "#10b981");
    }

    #[tokio::test]
    async fn failed_write_through_keeps_the_in_memory_state_authoritative() {
        let mut store = PortfolioStore::new(BrokenStore);
        let id = store.add_skill("Go".into(), 70).await;
        store
            .update_skill(Skill { id: id.clone(), name: "Golang".into(), proficiency: 80 })
            .await;

        // Mutations land despite every persist failing.
        let skill = store.data().skills.iter().find(|s| s.id == id).unwrap();
        assert_eq!(skill.name, "Golang");
        assert_eq!(skill.proficiency, 80);

        // Resuming from the session state carries the unpersisted edits.
        let resumed = PortfolioStore::with_data(BrokenStore, store.into_data());
        assert!(resumed.data().skills.iter().any(|s| s.id == id));
    }

    #[tokio::test]
    async fn persisted_state_survives_a_reload() {
        let backend = MemoryStore::new();
        let mut store = PortfolioStore::new(backend.clone());
        store.add_skill("Go".into(), 70).await;
        let snapshot = store.data().clone();

        let reloaded = PortfolioStore::load(backend).await;
        assert_eq!(reloaded.data(), &snapshot);
    }

    #[tokio::test]
    async fn ids_stay_unique_after_reload() {
        let backend = MemoryStore::new();
        let mut store = PortfolioStore::new(backend.clone());
        let first = store.add_skill("Go".into(), 70).await;

        let mut reloaded = PortfolioStore::load(backend).await;
        let second = reloaded.add_skill("Rust".into(), 80).await;
        assert_ne!(first, second);
    }
}
