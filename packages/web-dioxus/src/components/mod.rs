//! Reusable UI components

mod loading;

pub use loading::*;
