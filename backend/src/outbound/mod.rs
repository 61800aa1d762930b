//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: in-process document stores for users and blogs
//! - **password**: Argon2id credential hashing
//! - **token**: HS256 identity assertions and their signing secret
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod password;
pub mod token;
