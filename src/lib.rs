//! Build-time generator for the mobile app's icon, adaptive icon, favicon
//! and splash screen.

pub mod assets;
pub mod cli;
pub mod compose;
pub mod error;
pub mod types;

pub use assets::{generate, Asset, Written};
pub use error::Error;
