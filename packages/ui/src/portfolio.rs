//! Shared store constructors and the portfolio context.
//!
//! Returns a [`store::PortfolioStore`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser localStorage via
//!   [`store::LocalStorageStore`]
//! - **Desktop / Mobile** (native): filesystem via [`store::FileStore`]

use dioxus::prelude::*;
use store::{PortfolioData, PortfolioStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_backend() -> PlatformStore {
    store::LocalStorageStore::new()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn platform_backend() -> PlatformStore {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("portfolio-builder");
    store::FileStore::new(base)
}

/// Create a platform-appropriate store holding default data.
pub fn make_store() -> PortfolioStore<PlatformStore> {
    PortfolioStore::new(platform_backend())
}

/// Create a store resuming from the given in-memory aggregate.
///
/// Mutation handlers use this with the current context data so the session
/// state stays authoritative even when an earlier write-through failed.
pub fn make_store_with(data: PortfolioData) -> PortfolioStore<PlatformStore> {
    PortfolioStore::with_data(platform_backend(), data)
}

/// Consume the `Signal<PortfolioData>` provided by [`PortfolioProvider`].
pub fn use_portfolio() -> Signal<PortfolioData> {
    use_context::<Signal<PortfolioData>>()
}

/// Provides the portfolio aggregate to the component tree.
///
/// Views see default data until the single startup read completes, then one
/// wholesale replacement. All later updates come from mutation handlers
/// writing back through this signal.
#[component]
pub fn PortfolioProvider(children: Element) -> Element {
    let mut data = use_context_provider(|| Signal::new(PortfolioData::default()));

    let _loader = use_resource(move || async move {
        let loaded = PortfolioStore::load(platform_backend()).await;
        data.set(loaded.into_data());
    });

    rsx! {
        {children}
    }
}
