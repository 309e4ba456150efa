use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AccessRequest, AssignComputer, CreatePerson, Dashboard, EditAccessRequest, EditAssignment,
    EditPerson, Login,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/team-management")]
    Dashboard {},
    #[route("/create-user")]
    CreatePerson {},
    #[route("/edit-user/:id")]
    EditPerson { id: String },
    #[route("/access-request")]
    AccessRequest {},
    #[route("/edit-access-request/:id")]
    EditAccessRequest { id: String },
    #[route("/computer-assignment")]
    AssignComputer {},
    #[route("/edit-computer-assignment/:id")]
    EditAssignment { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
