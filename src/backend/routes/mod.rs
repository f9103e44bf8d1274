//! Route Configuration Module
//!
//! - **`router`** - main router creation
//! - **`api_routes`** - `/users` endpoints

/// Main router creation
pub mod router;

/// Account API routes
pub mod api_routes;

pub use router::create_router;
