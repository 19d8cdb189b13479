//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL via Diesel, used when a database URL is
//!   configured.
//! - **memory**: process-local maps, used otherwise and by tests.
//! - **password_hasher**: Argon2id hashing for the account flows.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business rules.

pub mod memory;
pub mod password_hasher;
pub mod persistence;
