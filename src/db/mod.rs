//! Database module: connection resolution and startup initialization.
//!
//! Layout:
//! - `connection.rs`: `DATABASE_URL` / fallback resolution into a descriptor
//! - `bootstrap.rs`: embedded migrations and seed data

pub mod bootstrap;
pub mod connection;

pub use bootstrap::{initialize_database, migrate_and_seed, run_migrations, seed};
pub use connection::{ConnectionDescriptor, DEFAULT_PORT, TransportSecurity, resolve};
