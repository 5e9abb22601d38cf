use crate::components::Icon;
use chrono::Local;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    let current_date = Local::now().format("%a, %-d %B").to_string();

    rsx! {
        header { class: "header",
            div { class: "header-brand",
                Icon {
                    name: "headphones".to_string(),
                    class: "header-logo".to_string(),
                }
                strong { "RustCast" }
            }
            p { class: "header-tagline", "The best for you to hear, always" }
            span { class: "header-date", "{current_date}" }
        }
    }
}
