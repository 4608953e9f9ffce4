//! Shared test doubles for sign-in flow tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use login_flow::AuthApi;

/// A remote call seen by [`MockAuthApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    RequestCode(String),
    VerifyCode(String, String),
}

/// In-memory [`AuthApi`] that records calls and answers from a script
#[derive(Default)]
pub struct MockAuthApi {
    calls: RefCell<Vec<Call>>,
    failing_requests: Cell<usize>,
    valid_code: RefCell<Option<String>>,
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only this code verifies successfully
    pub fn with_code(self, code: &str) -> Self {
        *self.valid_code.borrow_mut() = Some(code.to_string());
        self
    }

    /// Fail the next `n` code requests
    pub fn failing_requests(self, n: usize) -> Self {
        self.failing_requests.set(n);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn verify_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::VerifyCode(..)))
            .count()
    }
}

#[async_trait(?Send)]
impl AuthApi for MockAuthApi {
    async fn request_code(&self, identifier: &str) -> anyhow::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::RequestCode(identifier.to_string()));

        let remaining = self.failing_requests.get();
        if remaining > 0 {
            self.failing_requests.set(remaining - 1);
            anyhow::bail!("identifier not registered");
        }
        Ok(())
    }

    async fn verify_code(&self, identifier: &str, code: &str) -> anyhow::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::VerifyCode(identifier.to_string(), code.to_string()));

        match self.valid_code.borrow().as_deref() {
            Some(valid) if valid == code => Ok(()),
            _ => anyhow::bail!("invalid verification code"),
        }
    }
}
