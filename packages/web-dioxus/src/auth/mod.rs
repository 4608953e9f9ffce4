//! Session state and the sign-in server functions

mod api;
mod context;
mod server_fns;

pub use api::*;
pub use context::*;
pub use server_fns::*;
