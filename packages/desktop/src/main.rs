use dioxus::prelude::*;

use views::{Experience, Preview, Profile, Projects, Skills, TabLayout, Theme};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(TabLayout)]
        #[route("/profile")]
        Profile {},
        #[route("/skills")]
        Skills {},
        #[route("/projects")]
        Projects {},
        #[route("/experience")]
        Experience {},
        #[route("/theme")]
        Theme {},
        #[route("/preview")]
        Preview {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::PortfolioProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/profile`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Profile {});
    rsx! {}
}
