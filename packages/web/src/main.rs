use api::Role;
use dioxus::prelude::*;

use ui::SessionProvider;
use views::{AllJobs, AppLayout, Employer, Login, NotFound, PostJob, Profile, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/alljobs")]
        AllJobs {},
        #[route("/employer")]
        Employer {},
        #[route("/postjob")]
        PostJob {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Where a user with `role` lands after signing in.
    fn landing(role: &Role) -> Self {
        if role.is_employer() {
            Route::Employer {}
        } else {
            Route::AllJobs {}
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
