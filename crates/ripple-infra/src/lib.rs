//! # Ripple Infrastructure
//!
//! Concrete implementations of the ports defined in `ripple-core`:
//! SeaORM/Postgres repositories, JWT and Argon2 auth services, and the
//! log-backed notifier.

pub mod auth;
pub mod database;
pub mod notify;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, connect};
pub use notify::LogNotifier;
