//! # Login flow
//!
//! Two-step email/SMS sign-in: the user enters an email address or mobile
//! number, receives a one-time code, and submits the code to sign in.
//!
//! - [`identifier`] cleans and classifies what the user types and formats
//!   phone numbers for display.
//! - [`code`] groups confirmation codes into dashed triples.
//! - [`flow`] is the submission state machine; [`AuthApi`] is the seam to
//!   whatever actually sends and checks the codes.
//!
//! ```ignore
//! let mut flow = LoginFlow::new(api).on_signed_in(|| navigate("/account"));
//! flow.edit_identifier("+1 (555) 123-4567");
//! flow.submit().await;       // request_code("15551234567")
//! flow.edit_code("123456");
//! flow.submit().await;       // verify_code("15551234567", "123456")
//! ```

pub mod api;
pub mod code;
pub mod error;
pub mod flow;
pub mod identifier;
pub mod step;

pub use api::AuthApi;
pub use code::{format_code, strip_code, MAX_CODE_LEN};
pub use error::{LoginError, Result};
pub use flow::{LoginFlow, LoginState, SubmitOutcome, Submission};
pub use identifier::{
    clean_identifier, format_phone_number, is_email, is_phone_number, mask_identifier,
    normalize_identifier, IdentifierKind, NormalizedIdentifier,
};
pub use step::Step;
