//! Signed-in landing page

use dioxus::prelude::*;
use tracing::warn;

use crate::auth::{logout, use_auth};
use crate::components::LoadingSpinner;
use crate::routes::Route;

/// Page shown after a successful sign-in
#[component]
pub fn Account() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    // No session: back to the sign-in form
    use_effect(move || {
        if let Some(route) = Route::redirect_from_account(auth.is_loading(), auth.is_signed_in()) {
            navigator.replace(route);
        }
    });

    if auth.is_loading() || !auth.is_signed_in() {
        return rsx! {
            div {
                class: "application-cash",
                LoadingSpinner { label: "Checking your session..." }
            }
        };
    }

    let handle_sign_out = move |_| {
        spawn(async move {
            if let Err(e) = logout().await {
                warn!("Failed to clear session: {}", e);
            }
            auth.clear();
            navigator.push(Route::Login {});
        });
    };

    rsx! {
        div {
            class: "application-cash",
            section {
                class: "layout-login",
                div {
                    class: "login-container",
                    h1 { class: "step-title", "You're signed in" }
                    button {
                        r#type: "button",
                        class: "submit-button",
                        onclick: handle_sign_out,
                        "Sign Out"
                    }
                }
            }
        }
    }
}
