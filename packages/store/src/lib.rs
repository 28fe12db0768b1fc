pub mod export;
pub mod models;
pub mod portfolio;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use models::{
    PersonalInfo, PortfolioData, Project, Skill, SocialLinks, ThemeColors, WorkExperience,
};
pub use portfolio::{KeyValueStore, PortfolioStore, StoreError, STORAGE_KEY};
