//! Loading components

use dioxus::prelude::*;

/// Full-page loading indicator
#[component]
pub fn LoadingSpinner(#[props(into, default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loading-page",
            LoadingDots {}
            p { class: "loading-label", "{label}" }
        }
    }
}

/// Inline loading indicator used inside buttons
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        span {
            class: "loading-dots",
            "aria-hidden": "true",
            span { class: "dot" }
            span { class: "dot", style: "animation-delay: 0.1s" }
            span { class: "dot", style: "animation-delay: 0.2s" }
        }
    }
}
