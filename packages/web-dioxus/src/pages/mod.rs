//! Page components

mod account;
mod login;

pub use account::*;
pub use login::*;
