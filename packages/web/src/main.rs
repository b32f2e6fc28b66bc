use dioxus::prelude::*;

use ui::AuthProvider;
use views::{CreateProject, EditProject, Home, Login, NavBar, Pledge, ProjectDetail, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/project/:id")]
        ProjectDetail { id: i64 },
        #[route("/project/:id/pledge")]
        Pledge { id: i64 },
        #[route("/project/:id/edit")]
        EditProject { id: i64 },
        #[route("/create-project")]
        CreateProject {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
