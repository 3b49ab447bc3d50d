use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page home-page",
            div { class: "hero",
                h2 { class: "hero__title", "EcoBot Carbon Calculator" }
                p { class: "hero__tagline",
                    "Discover your environmental impact with our carbon footprint calculator."
                }
                p { class: "hero__detail",
                    "Answer a few questions about your electricity, travel, and habits, "
                    "and EcoBot estimates your annual CO2 emissions with tips to reduce them."
                }
                Link { class: "hero__cta", to: Route::Chat {}, "Start Calculating" }
            }
        }
    }
}
