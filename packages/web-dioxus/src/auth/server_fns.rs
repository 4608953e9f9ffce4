//! Server functions for authentication
//!
//! These run on the server and handle session management.

use dioxus::prelude::*;

#[cfg(feature = "server")]
use crate::graphql::{server_client, LOGIN_PHONE_OR_EMAIL, REQUEST_LOGIN_CODE};
#[cfg(feature = "server")]
use serde::{Deserialize, Serialize};

/// Session key holding the API session token
#[cfg(feature = "server")]
const SESSION_TOKEN_KEY: &str = "token";

/// Ask the API to send a sign-in code to a phone number or email
#[server]
pub async fn request_login_code(phone_or_email: String) -> Result<bool, ServerFnError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        phone_or_email: String,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Response {
        request_login_code: bool,
    }

    let result: Response = server_client()
        .mutate(REQUEST_LOGIN_CODE, Some(Variables { phone_or_email }))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(result.request_login_code)
}

/// Verify a sign-in code and establish a session
///
/// Returns whether the code was accepted. The token itself never leaves the
/// server.
#[server]
pub async fn login_phone_or_email(phone_or_email: String, code: String) -> Result<bool, ServerFnError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Variables {
        phone_or_email: String,
        code: String,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Response {
        login_phone_or_email: Option<String>,
    }

    let result: Response = server_client()
        .mutate(
            LOGIN_PHONE_OR_EMAIL,
            Some(Variables {
                phone_or_email,
                code,
            }),
        )
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    match result.login_phone_or_email {
        Some(token) => {
            set_session_token(token).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Whether the current session holds a sign-in token
#[server]
pub async fn is_signed_in() -> Result<bool, ServerFnError> {
    Ok(get_session_token().await?.is_some())
}

/// Sign out - clear the session
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
async fn session() -> Result<tower_sessions::Session, ServerFnError> {
    dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {:?}", e)))
}

#[cfg(feature = "server")]
async fn set_session_token(token: String) -> Result<(), ServerFnError> {
    session()
        .await?
        .insert(SESSION_TOKEN_KEY, token)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))
}

#[cfg(feature = "server")]
async fn get_session_token() -> Result<Option<String>, ServerFnError> {
    session()
        .await?
        .get(SESSION_TOKEN_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get token from session: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    session()
        .await?
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))
}
