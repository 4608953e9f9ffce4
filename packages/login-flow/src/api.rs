//! Remote sign-in operations

use async_trait::async_trait;

/// The two remote calls the sign-in flow depends on.
///
/// Implementations own the transport. Futures are not required to be `Send`
/// so browser clients can implement this directly.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Ask the backend to send a one-time code to the identifier.
    async fn request_code(&self, identifier: &str) -> anyhow::Result<()>;

    /// Exchange identifier and code for a session.
    async fn verify_code(&self, identifier: &str, code: &str) -> anyhow::Result<()>;
}

#[async_trait(?Send)]
impl<T: AuthApi + ?Sized> AuthApi for &T {
    async fn request_code(&self, identifier: &str) -> anyhow::Result<()> {
        (**self).request_code(identifier).await
    }

    async fn verify_code(&self, identifier: &str, code: &str) -> anyhow::Result<()> {
        (**self).verify_code(identifier, code).await
    }
}
