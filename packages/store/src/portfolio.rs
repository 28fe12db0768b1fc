//! # PortfolioStore — the single source of truth for portfolio data
//!
//! [`PortfolioStore`] owns the [`PortfolioData`] aggregate and is the only
//! place it gets mutated. Every read and write of persistent state goes
//! through the [`KeyValueStore`] trait, so the same logic works against an
//! in-memory map (tests), the filesystem (desktop and mobile) or browser
//! localStorage (web).
//!
//! ## Persistence model
//!
//! The whole aggregate is serialized as one JSON document under
//! [`STORAGE_KEY`]. [`load`](PortfolioStore::load) reads it once at startup;
//! absent or unparsable state falls back to [`PortfolioData::default`] with a
//! warning, never an error. Every mutating operation awaits a write-through
//! persist before returning; a failed write is logged and swallowed, and the
//! in-memory aggregate stays authoritative for the rest of the session.
//!
//! ## Id assignment
//!
//! New entries get a millisecond-epoch decimal string id (legacy entries use
//! the same scheme), made strictly monotonic per store instance: the
//! counter is seeded from the largest numeric id already present and bumped
//! past the clock when two entries are added within the same instant.

use crate::models::{
    PersonalInfo, PortfolioData, Project, Skill, ThemeColors, WorkExperience, MAX_PROFICIENCY,
};

/// Key under which the serialized aggregate is stored.
pub const STORAGE_KEY: &str = "portfolioData";

/// Errors surfaced by persistence backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Async trait for string-keyed persistent storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = Result<(), StoreError>>;
}

/// The portfolio aggregate plus its persistence backend.
pub struct PortfolioStore<S: KeyValueStore> {
    backend: S,
    data: PortfolioData,
    last_id: u64,
}

impl<S: KeyValueStore> PortfolioStore<S> {
    /// Create a store holding the default sample portfolio.
    pub fn new(backend: S) -> Self {
        Self::with_data(backend, PortfolioData::default())
    }

    /// Resume from in-memory state. Used by the UI so that the session's
    /// aggregate stays authoritative even after a failed write-through.
    pub fn with_data(backend: S, data: PortfolioData) -> Self {
        let last_id = max_numeric_id(&data);
        Self { backend, data, last_id }
    }

    /// Read persisted state, falling back to defaults when the key is absent
    /// or the payload does not parse.
    pub async fn load(backend: S) -> Self {
        let data = match backend.get(STORAGE_KEY).await {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("saved portfolio data did not parse, using defaults: {e}");
                    PortfolioData::default()
                }
            },
            None => PortfolioData::default(),
        };
        Self::with_data(backend, data)
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    pub fn into_data(self) -> PortfolioData {
        self.data
    }

    /// Replace the personal info wholesale.
    pub async fn update_personal_info(&mut self, info: PersonalInfo) {
        self.data.personal_info = info;
        self.persist().await;
    }

    /// Append a skill with a fresh id, clamping proficiency to 100.
    /// Returns the assigned id.
    pub async fn add_skill(&mut self, name: String, proficiency: u8) -> String {
        let id = self.next_id();
        self.data.skills.push(Skill {
            id: id.clone(),
            name,
            proficiency: proficiency.min(MAX_PROFICIENCY),
        });
        self.persist().await;
        id
    }

    /// Replace the skill with a matching id. No-op when absent.
    pub async fn update_skill(&mut self, mut skill: Skill) {
        skill.proficiency = skill.proficiency.min(MAX_PROFICIENCY);
        if let Some(existing) = self.data.skills.iter_mut().find(|s| s.id == skill.id) {
            *existing = skill;
            self.persist().await;
        }
    }

    /// Delete the skill with the given id. No-op when absent.
    pub async fn remove_skill(&mut self, id: &str) {
        let before = self.data.skills.len();
        self.data.skills.retain(|s| s.id != id);
        if self.data.skills.len() != before {
            self.persist().await;
        }
    }

    /// Append a project with a fresh id (any id on the draft is discarded).
    /// Returns the assigned id.
    pub async fn add_project(&mut self, mut draft: Project) -> String {
        let id = self.next_id();
        draft.id = id.clone();
        self.data.projects.push(draft);
        self.persist().await;
        id
    }

    /// Replace the project with a matching id. No-op when absent.
    pub async fn update_project(&mut self, project: Project) {
        if let Some(existing) = self.data.projects.iter_mut().find(|p| p.id == project.id) {
            *existing = project;
            self.persist().await;
        }
    }

    /// Delete the project with the given id. No-op when absent.
    pub async fn remove_project(&mut self, id: &str) {
        let before = self.data.projects.len();
        self.data.projects.retain(|p| p.id != id);
        if self.data.projects.len() != before {
            self.persist().await;
        }
    }

    /// Append a work experience entry with a fresh id (any id on the draft is
    /// discarded). Returns the assigned id.
    pub async fn add_work_experience(&mut self, mut draft: WorkExperience) -> String {
        let id = self.next_id();
        draft.id = id.clone();
        self.data.work_experience.push(draft);
        self.persist().await;
        id
    }

    /// Replace the work experience entry with a matching id. No-op when absent.
    pub async fn update_work_experience(&mut self, experience: WorkExperience) {
        if let Some(existing) = self
            .data
            .work_experience
            .iter_mut()
            .find(|e| e.id == experience.id)
        {
            *existing = experience;
            self.persist().await;
        }
    }

    /// Delete the work experience entry with the given id. No-op when absent.
    pub async fn remove_work_experience(&mut self, id: &str) {
        let before = self.data.work_experience.len();
        self.data.work_experience.retain(|e| e.id != id);
        if self.data.work_experience.len() != before {
            self.persist().await;
        }
    }

    /// Replace the theme wholesale.
    pub async fn update_theme(&mut self, theme: ThemeColors) {
        self.data.theme = theme;
        self.persist().await;
    }

    /// Write-through. Failures are logged and swallowed; the in-memory
    /// aggregate remains valid for the session.
    async fn persist(&self) {
        match serde_json::to_string(&self.data) {
            Ok(json) => {
                if let Err(e) = self.backend.set(STORAGE_KEY, json).await {
                    tracing::warn!("failed to persist portfolio data: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize portfolio data: {e}"),
        }
    }

    fn next_id(&mut self) -> String {
        let id = current_millis().max(self.last_id + 1);
        self.last_id = id;
        id.to_string()
    }
}

fn max_numeric_id(data: &PortfolioData) -> u64 {
    let skills = data.skills.iter().map(|s| s.id.as_str());
    let projects = data.projects.iter().map(|p| p.id.as_str());
    let experience = data.work_experience.iter().map(|e| e.id.as_str());
    skills
        .chain(projects)
        .chain(experience)
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn current_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn current_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
