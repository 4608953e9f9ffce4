//! Sign-in page
//!
//! Step one collects an email or mobile number and requests a code; step two
//! collects the code. All view state lives in one [`LoginState`].

use dioxus::prelude::*;
use login_flow::{LoginState, Step};
use tracing::warn;

use crate::auth::{use_auth, ServerAuthApi};
use crate::components::LoadingDots;
use crate::routes::Route;

/// Two-step sign-in page
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut state = use_signal(LoginState::new);

    // Single navigation point: fires for an existing session and once the
    // code is verified
    use_effect(move || {
        if let Some(route) = Route::redirect_from_login(auth.is_signed_in()) {
            navigator.replace(route);
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let submission = match state.write().begin_submit() {
            Ok(submission) => submission,
            Err(e) => {
                warn!("Sign-in submission refused: {}", e);
                return;
            }
        };

        spawn(async move {
            let result = submission.execute(&ServerAuthApi).await;
            let outcome = state.write().finish_submit(result);

            if outcome.is_signed_in() {
                auth.mark_signed_in();
            }
        });
    };

    let view = state();
    let step = view.step();
    let heading = view.heading();
    let field_class = if view.is_invalid() {
        "field fk-field-container is-invalid"
    } else {
        "field fk-field-container"
    };
    let submit_class = if view.shows_submit() {
        "alias-submit fade-in show"
    } else {
        "alias-submit fade-in"
    };

    rsx! {
        div {
            class: "application-cash",

            section {
                class: "layout-login",

                div {
                    class: "login-container",

                    h1 { class: "step-title", "{heading}" }

                    form {
                        class: "login-form",
                        onsubmit: handle_submit,

                        match step {
                            Step::IdentifierEntry => rsx! {
                                div {
                                    class: "{field_class}",
                                    input {
                                        r#type: "text",
                                        id: "phoneOrEmail",
                                        name: "phoneOrEmail",
                                        "aria-label": step.placeholder(),
                                        autocomplete: "off",
                                        spellcheck: "false",
                                        "autocapitalize": "none",
                                        autofocus: true,
                                        placeholder: step.placeholder(),
                                        value: "{view.identifier()}",
                                        oninput: move |e| {
                                            state.write().edit_identifier(&e.value());
                                        },
                                    }
                                }
                            },
                            Step::CodeEntry => rsx! {
                                div {
                                    class: "{field_class}",
                                    input {
                                        r#type: "tel",
                                        id: "code",
                                        name: "code",
                                        "aria-label": step.placeholder(),
                                        autocomplete: "off",
                                        spellcheck: "false",
                                        "autocapitalize": "off",
                                        autofocus: true,
                                        pattern: "\\d*",
                                        placeholder: step.placeholder(),
                                        value: "{view.code()}",
                                        oninput: move |e| state.write().edit_code(&e.value()),
                                    }
                                }
                            },
                        }

                        div {
                            class: "{submit_class}",
                            button {
                                r#type: "submit",
                                class: "submit-button",
                                "aria-label": step.button_text(),
                                disabled: view.is_submitting(),
                                if view.is_submitting() {
                                    LoadingDots {}
                                } else {
                                    "{step.button_text()}"
                                }
                            }
                        }
                    }

                    if step == Step::CodeEntry {
                        a { href: "#", class: "login-help-link", "Help" }
                    }
                }
            }
        }
    }
}
