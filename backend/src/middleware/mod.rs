//! Request middleware.
//!
//! Purpose: define middleware components for request lifecycle concerns such
//! as tracing and caller identity.

pub mod identity;
pub mod trace;

pub use identity::ResolveIdentity;
pub use trace::{TRACE_ID_HEADER, Trace, TraceId};
