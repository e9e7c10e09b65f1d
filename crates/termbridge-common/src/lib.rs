#![deny(clippy::all)]

pub mod error_codes;

pub use error_codes::ErrorCategory;
