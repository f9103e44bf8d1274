//! Authentication Module
//!
//! Account storage, password hashing, bearer tokens and the account service
//! that ties them together, plus the HTTP handlers in front of it.
//!
//! # Architecture
//!
//! - **`password`** - `PasswordHasher` capability, bcrypt implementation
//! - **`sessions`** - `TokenIssuer` capability, JWT implementation
//! - **`users`** - `Account` model, `UserRepository` capability, SQLite implementation
//! - **`memory`** - in-memory `UserRepository`
//! - **`service`** - `AccountService`, the business rules
//! - **`handlers`** - HTTP handlers
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT issuing and verification
//! ├── users.rs        - Account model and SQLite storage
//! ├── schema.sql      - users table
//! ├── memory.rs       - In-memory storage
//! ├── service.rs      - Account service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs
//!     ├── users.rs    - CRUD handlers
//!     └── login.rs    - Login handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: `POST /users` → validated → email checked → password hashed → account stored
//! 2. **Login**: `POST /users/login` → credentials verified → JWT returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → token verified → account loaded

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Account model and SQLite storage
pub mod users;

/// In-memory storage
pub mod memory;

/// Account business rules
pub mod service;

/// HTTP handlers for account endpoints
pub mod handlers;

pub use memory::InMemoryUserRepository;
pub use password::{BcryptHasher, PasswordHasher};
pub use service::AccountService;
pub use sessions::{IdentityClaim, JwtIssuer, TokenIssuer};
pub use users::{Account, NewAccount, SqliteUserRepository, UserRepository};
