//! Domain models for FieldLine.
//!
//! - [`Topic`] / [`ContentEntry`]: what the service can say.
//! - [`SessionRequest`] / [`SessionResponse`]: short-code menu envelopes. The
//!   client resends the full selector history on every request, so nothing
//!   here outlives a single call.
//! - [`MessageRequest`] / [`MessageResponse`]: freeform message envelopes.

mod channel;
mod content;

pub use channel::*;
pub use content::*;
