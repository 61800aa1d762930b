//! In-process document stores implementing the repository ports.
//!
//! Records live behind a `std::sync::RwLock`; no lock is held across an
//! await point, so every port call is individually atomic.

mod blogs;
mod users;

pub use blogs::InMemoryBlogRepository;
pub use users::InMemoryUserRepository;

const POISONED: &str = "store lock poisoned";
