use dioxus::prelude::*;

use crate::icons::{FaBriefcase, FaEye, FaFolder, FaPalette, FaStar, FaUser};
use crate::Icon;

/// The six screens of the app, in display order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tab {
    Profile,
    Skills,
    Projects,
    Experience,
    Theme,
    Preview,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Profile,
        Tab::Skills,
        Tab::Projects,
        Tab::Experience,
        Tab::Theme,
        Tab::Preview,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Skills => "Skills",
            Tab::Projects => "Projects",
            Tab::Experience => "Experience",
            Tab::Theme => "Theme",
            Tab::Preview => "Preview",
        }
    }
}

/// Bottom tab bar. Navigation stays with the platform shells, which map the
/// selected [`Tab`] onto their own `Route` enums.
#[component]
pub fn TabBar(active: Tab, on_select: EventHandler<Tab>) -> Element {
    rsx! {
        nav {
            class: "tab-bar",
            for tab in Tab::ALL {
                button {
                    key: "{tab.label()}",
                    class: if tab == active { "tab-item active" } else { "tab-item" },
                    onclick: move |_| on_select.call(tab),
                    TabIcon { tab }
                    span { class: "tab-label", "{tab.label()}" }
                }
            }
        }
    }
}

#[component]
fn TabIcon(tab: Tab) -> Element {
    match tab {
        Tab::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
        Tab::Skills => rsx! { Icon { icon: FaStar, width: 16, height: 16 } },
        Tab::Projects => rsx! { Icon { icon: FaFolder, width: 16, height: 16 } },
        Tab::Experience => rsx! { Icon { icon: FaBriefcase, width: 16, height: 16 } },
        Tab::Theme => rsx! { Icon { icon: FaPalette, width: 16, height: 16 } },
        Tab::Preview => rsx! { Icon { icon: FaEye, width: 16, height: 16 } },
    }
}
