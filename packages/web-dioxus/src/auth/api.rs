//! [`AuthApi`] backed by the sign-in server functions

use anyhow::{anyhow, bail};
use async_trait::async_trait;
use dioxus::prelude::ServerFnError;
use login_flow::AuthApi;

use super::server_fns::{login_phone_or_email, request_login_code};

/// Calls the server functions, which forward to the GraphQL API
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAuthApi;

#[async_trait(?Send)]
impl AuthApi for ServerAuthApi {
    async fn request_code(&self, identifier: &str) -> anyhow::Result<()> {
        let sent = request_login_code(identifier.to_string()).await;
        require_accepted("request_login_code", sent, "sign-in code was not sent")
    }

    async fn verify_code(&self, identifier: &str, code: &str) -> anyhow::Result<()> {
        let accepted = login_phone_or_email(identifier.to_string(), code.to_string()).await;
        require_accepted("login_phone_or_email", accepted, "sign-in code was rejected")
    }
}

/// Treat both a server function error and an `Ok(false)` answer as failure.
fn require_accepted(
    call: &str,
    result: Result<bool, ServerFnError>,
    rejected: &str,
) -> anyhow::Result<()> {
    let accepted = result.map_err(|e| anyhow!("{}: {}", call, e))?;
    if !accepted {
        bail!("{}", rejected);
    }
    Ok(())
}
