use dioxus::prelude::*;

use ui::{Tab, TabBar};

use crate::Route;

#[component]
pub fn TabLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let active = match route {
        Route::Skills {} => Tab::Skills,
        Route::Projects {} => Tab::Projects,
        Route::Experience {} => Tab::Experience,
        Route::Theme {} => Tab::Theme,
        Route::Preview {} => Tab::Preview,
        _ => Tab::Profile,
    };

    let on_select = move |tab: Tab| {
        let target = match tab {
            Tab::Profile => Route::Profile {},
            Tab::Skills => Route::Skills {},
            Tab::Projects => Route::Projects {},
            Tab::Experience => Route::Experience {},
            Tab::Theme => Route::Theme {},
            Tab::Preview => Route::Preview {},
        };
        nav.push(target);
    };

    rsx! {
        Outlet::<Route> {}
        TabBar { active, on_select }
    }
}
