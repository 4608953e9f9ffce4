//! Authentication context provider

use dioxus::prelude::*;
use tracing::warn;

use super::server_fns::is_signed_in;

/// Authentication context that provides session state to the entire app
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Whether the session holds a sign-in token
    pub signed_in: Signal<bool>,
    /// Whether auth state is still loading
    pub loading: Signal<bool>,
}

impl AuthContext {
    pub fn is_signed_in(&self) -> bool {
        *self.signed_in.read()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.read()
    }

    /// Refresh the auth state from the server
    pub async fn refresh(&self) {
        let mut signed_in = self.signed_in;
        let mut loading = self.loading;

        match is_signed_in().await {
            Ok(value) => signed_in.set(value),
            Err(e) => {
                warn!("Failed to load session state: {}", e);
                signed_in.set(false);
            }
        }
        loading.set(false);
    }

    /// Record a verified sign-in without another round trip
    pub fn mark_signed_in(&self) {
        let mut signed_in = self.signed_in;
        let mut loading = self.loading;
        signed_in.set(true);
        loading.set(false);
    }

    /// Clear the auth state (sign out)
    pub fn clear(&self) {
        let mut signed_in = self.signed_in;
        signed_in.set(false);
    }
}

/// Auth provider component that wraps the app
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let signed_in = use_signal(|| false);
    let loading = use_signal(|| true);

    let auth = use_context_provider(|| AuthContext { signed_in, loading });

    // Load initial auth state
    use_effect(move || {
        spawn(async move {
            auth.refresh().await;
        });
    });

    children
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
