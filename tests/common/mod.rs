//! Common test utilities and helpers
//!
//! - Store fixtures
//! - Authentication helpers
//! - In-process HTTP helpers
//! - Custom assertion macros
#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod http;

pub use auth_helpers::*;
pub use database::*;
pub use http::*;
