use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use studio_core::model::ModuleId;

use crate::views::{HomeView, ModuleView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/module/:module_id", ModuleView)] Module { module_id: ModuleId },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "app-header",
            h1 { "Grade 8 ICT Learning Studio" }
            p { class: "app-tagline", "Learn. Practice. Assess." }
        }
    }
}
