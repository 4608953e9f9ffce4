//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Account, Login};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},

    // Navigated to after the code is verified
    #[route("/account")]
    Account {},
}

impl Route {
    /// Where the sign-in page sends the visitor, if anywhere
    pub fn redirect_from_login(signed_in: bool) -> Option<Route> {
        signed_in.then_some(Route::Account {})
    }

    /// Where the account page sends the visitor once the session is known
    pub fn redirect_from_account(loading: bool, signed_in: bool) -> Option<Route> {
        (!loading && !signed_in).then_some(Route::Login {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_redirects_only_when_signed_in() {
        assert_eq!(Route::redirect_from_login(true), Some(Route::Account {}));
        assert_eq!(Route::redirect_from_login(false), None);
    }

    #[test]
    fn test_account_waits_for_session_state() {
        assert_eq!(Route::redirect_from_account(true, false), None);
        assert_eq!(Route::redirect_from_account(true, true), None);
    }

    #[test]
    fn test_account_stays_after_verified_sign_in() {
        // mark_signed_in sets signed_in and clears loading together
        assert_eq!(Route::redirect_from_account(false, true), None);
    }

    #[test]
    fn test_account_bounces_without_session() {
        assert_eq!(Route::redirect_from_account(false, false), Some(Route::Login {}));
    }
}
