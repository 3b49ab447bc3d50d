use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ChatView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/chat", ChatView)] Chat {},
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
        header { class: "topbar",
            h1 { class: "topbar__brand", "🌱 EcoBot" }
            nav { class: "topbar__nav",
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Chat {}, "Calculator" }
            }
        }
    }
}
