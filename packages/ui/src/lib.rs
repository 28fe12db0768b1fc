//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin, FaTwitter};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod portfolio;
pub use portfolio::{make_store, make_store_with, use_portfolio, PlatformStore, PortfolioProvider};

pub mod views;

mod tab_bar;
pub use tab_bar::{Tab, TabBar};

mod export;
pub use export::download_portfolio;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
