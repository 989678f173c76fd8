//! Presentation layer: a console front-end for one registration form session.
//!
//! All business decisions live in `campuspass-registration`; this crate only
//! collects raw input, relays it to the domain, and renders the outcome.

pub mod session;

pub use session::{FormSession, PassStatus};
